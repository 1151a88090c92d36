use anyhow::Result;
use clap::Parser;
use stormfolio::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    stormfolio::run(cli).await
}
