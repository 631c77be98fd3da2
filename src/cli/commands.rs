use std::io;

use tracing::info;

use crate::cli::args::Cli;
use crate::cli::console::Console;
use crate::cli::session::Session;
use crate::config::DataConfig;
use crate::error::Result;
use crate::readers::TripReader;

/// Resolve the data configuration from the config file, environment and flags.
pub fn resolve_config(cli: &Cli) -> Result<DataConfig> {
    let mut config = DataConfig::load(cli.config.as_deref())?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    info!("Reading trip data from {}", config.data_dir.display());

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(console, TripReader::new(config)).with_quiet(cli.quiet);

    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_data_dir_flag_overrides_config() -> Result<()> {
        let cli = Cli::try_parse_from(["bikeshare-explorer", "--data-dir", "/data/bikeshare"])
            .unwrap();
        let config = resolve_config(&cli)?;

        assert_eq!(config.data_dir, PathBuf::from("/data/bikeshare"));
        Ok(())
    }
}
