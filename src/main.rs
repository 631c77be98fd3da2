use anyhow::Context;
use bikeshare_explorer::cli::{run, Cli};
use bikeshare_explorer::utils::init_logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(cli).context("bikeshare session aborted")
}
