/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_store")]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Start with the three demo records instead of an empty collection
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl ServerConfig {
    /// Load configuration from an explicit file (or `config.toml` if present),
    /// then `USERBASE_*` variables, then the bare `PORT` variable
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with USERBASE_)
        settings = settings.add_source(
            config::Environment::with_prefix("USERBASE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // PORT is the conventional knob for hosted deployments and wins over the rest
        settings = settings
            .set_override_option("server.port", std::env::var("PORT").ok())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set PORT or USERBASE_SERVER__PORT)".to_string(),
            ));
        }

        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Host {:?} is not an IP address",
                self.server.host
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_store() -> StoreSettings {
    StoreSettings {
        seed: default_seed(),
    }
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            store: default_store(),
        }
    }
}
