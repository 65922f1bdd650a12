use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use serde::Deserialize;

const DEFAULT_HIGHLIGHT: [u8; 3] = [173, 255, 168];
const HISTORY_FILE: &str = ".expense_tracker_history";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Background colour of rows matching the active filter, as [r, g, b]
    pub(crate) highlight: [u8; 3],

    pub(crate) history_file: Option<PathBuf>,

    /// When present, only these categories (ignoring case) may be added
    pub(crate) categories: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            highlight: DEFAULT_HIGHLIGHT,
            history_file: None,
            categories: None,
        }
    }
}

impl Config {
    /// Load config from the given file. A missing file gives the defaults.
    pub(crate) fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        if !path.is_file() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        Config::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub(crate) fn parse(content: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str::<Config>(content)?)
    }

    /// `<config dir>/expense-tracker/config.toml`
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("expense-tracker").join("config.toml"))
    }

    pub(crate) fn history_path(&self) -> PathBuf {
        match &self.history_file {
            Some(path) => path.clone(),
            None => match dirs::home_dir() {
                Some(home) => home.join(HISTORY_FILE),
                None => PathBuf::from(HISTORY_FILE)
            }
        }
    }
}
