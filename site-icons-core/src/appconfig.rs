use crate::{converter::ImageMagick, favicon};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "site-icons.toml";

#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub converter: PathBuf,
    pub favicon: Favicon,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output_dir: PathBuf::from("src/assets/images"),
            converter: PathBuf::from(ImageMagick::DEFAULT_PROGRAM),
            favicon: Default::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Favicon {
    /// SVG to rasterize; `favicon.svg` in the output directory if not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub sizes: Vec<u32>,
    /// always hand-build the favicon instead of running the converter
    pub builtin: bool,
}

impl Default for Favicon {
    fn default() -> Self {
        Favicon {
            source: None,
            sizes: favicon::DEFAULT_SIZES.to_vec(),
            builtin: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] toml::de::Error),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
}

impl AppConfig {
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| ConfigLoadError::IoError(path.to_owned(), e))?;
        AppConfig::parse(&data).map_err(|e| ConfigLoadError::InvalidConfigFile(path.to_owned(), e))
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        match AppConfig::load(path) {
            Err(ConfigLoadError::IoError(_, e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(AppConfig::default())
            }
            result => result,
        }
    }

    pub fn favicon_source(&self) -> PathBuf {
        self.favicon
            .source
            .clone()
            .unwrap_or_else(|| self.output_dir.join(favicon::SOURCE_FILE_NAME))
    }
}
