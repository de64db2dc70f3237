use crate::constants::{DEFAULT_CONFIG, DEFAULT_DELIMITER};
use crate::error::{CleanerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional settings file. Every key may be omitted; CLI flags win over
/// anything set here.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub csv: CsvConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub delimiter: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily JSON log file; no file log when unset
    pub directory: Option<PathBuf>,
    /// `EnvFilter` directives used when `RUST_LOG` is not set
    pub filter: Option<String>,
}

impl Config {
    /// Load `explicit` if given (it must exist), otherwise the default file
    /// in the working directory if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let config_content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Delimiter from the file, or `,`
    pub fn delimiter(&self) -> Result<u8> {
        match &self.csv.delimiter {
            Some(raw) => parse_delimiter(raw),
            None => Ok(DEFAULT_DELIMITER),
        }
    }
}

/// Accepts a single ASCII character, or `\t` / `tab` for tab-separated files.
/// Quotes and line terminators are rejected since the CSV parser reserves them.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }
    match raw.as_bytes() {
        [b'"' | b'\n' | b'\r'] => Err(CleanerError::Config(format!(
            "Delimiter {:?} is reserved by the CSV format",
            raw
        ))),
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(CleanerError::Config(format!(
            "Delimiter must be a single ASCII character, got {:?}",
            raw
        ))),
    }
}
