use clap::Parser;
use pro_key_checker::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Serve(Default::default())) {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Api(args) => cli::api::run(args).await,
    }
}
