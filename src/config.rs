//! City → data file mapping.
//!
//! Layered with the `config` crate: built-in defaults, an optional TOML
//! file, then `BIKESHARE_*` environment variables. The resulting
//! [`DataConfig`] is handed to the loader explicitly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::models::City;
use crate::utils::constants::{DEFAULT_DATA_DIR, ENV_PREFIX};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataConfig {
    pub data_dir: PathBuf,

    /// Per-city file names keyed by `City::config_key`. Relative paths are
    /// joined onto `data_dir`.
    #[serde(default)]
    pub files: HashMap<String, PathBuf>,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, city: City, path: impl Into<PathBuf>) -> Self {
        self.files.insert(city.config_key().to_string(), path.into());
        self
    }

    /// Load from defaults, an optional TOML file and the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(config_file, ENV_PREFIX)
    }

    /// `<PREFIX>_DATA_DIR` sets `data_dir`; `<PREFIX>_FILES__CHICAGO` sets `files.chicago`.
    fn load_with_prefix(config_file: Option<&Path>, prefix: &str) -> Result<Self> {
        let mut builder = Config::builder().set_default("data_dir", DEFAULT_DATA_DIR)?;

        if let Some(path) = config_file {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Resolve the CSV path for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        match self.files.get(city.config_key()) {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.data_dir.join(path),
            None => self.data_dir.join(city.default_file_name()),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const UNSET_PREFIX: &str = "BIKESHARE_TEST_UNSET_PREFIX";

    #[test]
    fn test_default_paths() {
        let config = DataConfig::new("data");

        assert_eq!(config.path_for(City::Chicago), PathBuf::from("data/chicago.csv"));
        assert_eq!(
            config.path_for(City::NewYorkCity),
            PathBuf::from("data/new_york_city.csv")
        );
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("data/washington.csv")
        );
    }

    #[test]
    fn test_file_override() {
        let config = DataConfig::new("data").with_file(City::Chicago, "chi_2017.csv");
        assert_eq!(config.path_for(City::Chicago), PathBuf::from("data/chi_2017.csv"));
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("data/washington.csv")
        );
    }

    #[test]
    fn test_load_defaults_without_file() -> Result<()> {
        let config = DataConfig::load_with_prefix(None, UNSET_PREFIX)?;
        assert_eq!(config, DataConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_toml_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/srv/bikeshare\"")?;
        writeln!(file, "[files]")?;
        writeln!(file, "new_york_city = \"nyc.csv\"")?;

        let config = DataConfig::load_with_prefix(Some(file.path()), UNSET_PREFIX)?;

        assert_eq!(config.data_dir, PathBuf::from("/srv/bikeshare"));
        assert_eq!(
            config.path_for(City::NewYorkCity),
            PathBuf::from("/srv/bikeshare/nyc.csv")
        );
        assert_eq!(
            config.path_for(City::Chicago),
            PathBuf::from("/srv/bikeshare/chicago.csv")
        );
        Ok(())
    }

    #[test]
    fn test_env_overrides_default_and_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/srv/bikeshare\"")?;

        // Unique prefix so parallel tests never see these variables
        std::env::set_var("BIKESHARECFGENV_DATA_DIR", "/from/env");
        std::env::set_var("BIKESHARECFGENV_FILES__WASHINGTON", "dc.csv");
        let config = DataConfig::load_with_prefix(Some(file.path()), "BIKESHARECFGENV");
        std::env::remove_var("BIKESHARECFGENV_DATA_DIR");
        std::env::remove_var("BIKESHARECFGENV_FILES__WASHINGTON");
        let config = config?;

        assert_eq!(config.data_dir, PathBuf::from("/from/env"));
        assert_eq!(
            config.path_for(City::Washington),
            PathBuf::from("/from/env/dc.csv")
        );
        Ok(())
    }

    #[test]
    fn test_double_separator_after_prefix_is_ignored() -> Result<()> {
        std::env::set_var("BIKESHARECFGDOUBLE__DATA_DIR", "/from/double");
        let config = DataConfig::load_with_prefix(None, "BIKESHARECFGDOUBLE");
        std::env::remove_var("BIKESHARECFGDOUBLE__DATA_DIR");

        assert_eq!(config?.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        Ok(())
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = DataConfig::load_with_prefix(
            Some(Path::new("/nonexistent/bikeshare.toml")),
            UNSET_PREFIX,
        );
        assert!(result.is_err());
    }
}
