use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Invalid inference base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    pub token_var: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            PathBuf::from(format!("{}/../frontend/dist", manifest_dir))
        } else {
            PathBuf::from("/usr/src/app/frontend/dist")
        };

        Self {
            port: 8081,
            frontend_dir,
            max_upload_bytes: 10 * 1024 * 1024,
            inference: InferenceConfig::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://miyukicodes-banana-ml.hf.space".to_string(),
            token_var: "HF_API_TOKEN".to_string(),
            timeout_secs: 60,
        }
    }
}

impl AppConfig {
    /// Defaults, then the YAML file (`BANANA_CONFIG` or `config/app.yaml`), then
    /// environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("BANANA_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = parse_value("PORT", port)?;
        }
        if let Some(dir) = lookup("FRONTEND_DIR") {
            self.frontend_dir = PathBuf::from(dir);
        }
        if let Some(max) = lookup("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = parse_value("MAX_UPLOAD_BYTES", max)?;
        }
        if let Some(url) = lookup("INFERENCE_BASE_URL") {
            self.inference.base_url = url;
        }
        if let Some(var) = lookup("INFERENCE_TOKEN_VAR") {
            self.inference.token_var = var;
        }
        if let Some(secs) = lookup("INFERENCE_TIMEOUT_SECS") {
            self.inference.timeout_secs = parse_value("INFERENCE_TIMEOUT_SECS", secs)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inference.parsed_base_url()?;

        if self.inference.token_var.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "INFERENCE_TOKEN_VAR",
                value: self.inference.token_var.clone(),
            });
        }
        if self.inference.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "INFERENCE_TIMEOUT_SECS",
                value: "0".into(),
            });
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_UPLOAD_BYTES",
                value: "0".into(),
            });
        }
        Ok(())
    }
}

impl InferenceConfig {
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::InvalidValue {
                key: "INFERENCE_BASE_URL",
                value: self.base_url.clone(),
            }),
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
