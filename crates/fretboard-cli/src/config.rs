//! Configuration discovery for the CLI.
//!
//! A configuration file is looked up in this order, first match wins:
//!
//! 1. the path given with `--config` (it must exist)
//! 2. `fretboard/config.toml` in the working directory
//! 3. `config.toml` in the platform configuration directory
//!
//! Without any file the built-in defaults are used.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use fretboard::{FretboardError, Style, config::AppConfig};

const LOCAL_CONFIG: &str = "fretboard/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("configuration file {} does not exist", .0.display())]
    MissingFile(PathBuf),
}

impl From<ConfigError> for FretboardError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Parse { .. } => Self::InvalidStyleOverride(err.to_string()),
            ConfigError::MissingFile(_) => {
                Self::Io(io::Error::new(io::ErrorKind::NotFound, err.to_string()))
            }
        }
    }
}

/// Loads the configuration, discovering the file when no path is given.
///
/// # Errors
///
/// Returns [`FretboardError::Io`] when an explicit path does not exist or a
/// file cannot be read, and [`FretboardError::InvalidStyleOverride`] when a
/// file is not valid configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, FretboardError> {
    let path = match explicit_path {
        Some(path) => {
            let path = path.as_ref();
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()).into());
            }
            path.to_path_buf()
        }
        None => match discover() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    parse_config(&path, &fs::read_to_string(&path)?)
}

fn discover() -> Option<PathBuf> {
    let system = ProjectDirs::from("com", "fretboard", "fretboard")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if system.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    [Some(PathBuf::from(LOCAL_CONFIG)), system]
        .into_iter()
        .flatten()
        .find(|candidate| {
            let found = candidate.is_file();
            debug!(path = candidate.display().to_string(), found = found; "Configuration candidate");
            found
        })
}

/// Parses and validates configuration text read from `path`.
///
/// The style section is merged once against the defaults, so bad colors or
/// sizes are reported here instead of at the first render.
fn parse_config(path: &Path, content: &str) -> Result<AppConfig, FretboardError> {
    let config: AppConfig = toml::from_str(content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    Style::default().merged(config.style())?;

    debug!(instrument = config.instrument().name(); "Configuration loaded");
    Ok(config)
}
