use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu, ensure};

pub const CONFIG_DIRECTORY_NAME: &str = "folio";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const ENV_PREFIX: &str = "FOLIO_";
pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Language hint handed to the OCR stage.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// When set, per-page block dumps and asset images are written here.
    #[serde(default)]
    pub debug_dir: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            debug_dir: None,
        }
    }
}

impl ExtractorConfig {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(CONFIG_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".folio"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Load defaults, then the JSON file, then `FOLIO_*` environment variables.
    ///
    /// An explicit `path` must exist. The default location is optional.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        let mut figment = Figment::from(Serialized::defaults(ExtractorConfig::default()));
        if path.exists() {
            figment = figment.merge(Json::file(&path));
        } else {
            ensure!(
                !explicit,
                MissingFileSnafu {
                    stage: "locate-config-file",
                    path,
                }
            );
            tracing::info!("config file not found at {:?}, using defaults", path);
        }

        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    pub fn from_figment(figment: Figment) -> ConfigResult<Self> {
        let config = figment
            .extract::<ExtractorConfig>()
            .map_err(Box::new)
            .context(ExtractSnafu {
                stage: "extract-config",
            })?;
        Ok(config.normalized())
    }

    pub fn normalized(mut self) -> Self {
        self.lang = if self.lang.trim().is_empty() {
            default_lang()
        } else {
            self.lang.trim().to_string()
        };
        self.debug_dir = self
            .debug_dir
            .filter(|path| !path.as_os_str().is_empty());
        self
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("config file {path:?} does not exist on `{stage}`"))]
    MissingFile { stage: &'static str, path: PathBuf },
    #[snafu(display("failed to read config on `{stage}`: {source}"))]
    Extract {
        stage: &'static str,
        source: Box<figment::Error>,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_overrides_defaults() {
        let figment = Figment::from(Serialized::defaults(ExtractorConfig::default()))
            .merge(Json::string(r#"{ "lang": " ch ", "debug_dir": "/tmp/folio" }"#));

        let config = ExtractorConfig::from_figment(figment).unwrap();
        assert_eq!(
            config,
            ExtractorConfig {
                lang: "ch".to_string(),
                debug_dir: Some(PathBuf::from("/tmp/folio")),
            }
        );
    }

    #[test]
    fn blank_values_fall_back() {
        let config = ExtractorConfig {
            lang: "  ".to_string(),
            debug_dir: Some(PathBuf::new()),
        }
        .normalized();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let figment = Figment::from(Serialized::defaults(ExtractorConfig::default()))
            .merge(Json::string(r#"{ "lang": 7 "#));
        assert!(matches!(
            ExtractorConfig::from_figment(figment),
            Err(ConfigError::Extract { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            ExtractorConfig::load(Some(&missing)),
            Err(ConfigError::MissingFile { .. })
        ));
    }

    #[test]
    fn loads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "lang": "fr" }"#).unwrap();

        let config = ExtractorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.lang, "fr");
    }
}
