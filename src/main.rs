use anyhow::Result;
use clap::Parser;
use gg::cli::{self, Cli};
use gg::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    cli::run(cli).await
}
