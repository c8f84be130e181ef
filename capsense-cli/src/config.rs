use capsense_client::{CapsenseClient, CapsenseError, DEFAULT_BASE_URL};
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means requests may wait indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            http: HttpConfig::default(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[server]
# Where the CapSense API (Flask backend) is listening
base_url = "http://127.0.0.1:5000"

[http]
# timeout_secs = 30
"#;

impl ClientConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// The default file is created on first use; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        match path {
            Some(path) => Ok((Self::load_from(path, false)?, path.to_path_buf())),
            None => {
                let path = get_config_path();
                Ok((Self::load_from(&path, true)?, path))
            }
        }
    }

    pub fn load_from(path: &Path, create_if_missing: bool) -> Result<Self, ConfigError> {
        if !path.exists() {
            if !create_if_missing {
                return Err(ConfigError::Message(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            write_default_config(path)?;
        }

        let builder = Config::builder()
            .set_default("server.base_url", DEFAULT_BASE_URL)?
            .add_source(File::from(path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    /// Apply a `--base-url` override
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.server.base_url = url.to_string();
        }
        self
    }

    pub fn build_client(&self) -> Result<CapsenseClient, CapsenseError> {
        let client = CapsenseClient::new(&self.server.base_url)?;
        match self.http.timeout_secs {
            Some(secs) => client.with_timeout(Duration::from_secs(secs)),
            None => Ok(client),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("capsense/client.toml")
    } else {
        PathBuf::from("capsense.toml")
    }
}
