use anyhow::Result;
use clap::Parser;

use consensus_invoke::cli::args::Cli;
use consensus_invoke::cli::context::{init_tracing, load_configuration};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_configuration(cli.config.clone())?;
    init_tracing(&config.logging)?;
    consensus_invoke::cli::run(cli, config).await
}
