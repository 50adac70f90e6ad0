/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `TUNEDEX_SERVER_PORT=9000`
pub const ENV_PREFIX: &str = "TUNEDEX";

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Attach a permissive CORS layer to the router
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl ServerConfig {
    /// Load configuration from a file and the environment
    ///
    /// An explicit path must exist; without one, `config.toml` in the working
    /// directory is read if present.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::build(
            path,
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .try_parsing(true),
        )
    }

    fn build(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Environment overrides file values
        settings = settings.add_source(environment);

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::Config(
                "server host must not be empty (set TUNEDEX_SERVER_HOST)".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config(
                "server port must not be 0 (set TUNEDEX_SERVER_PORT)".to_string(),
            ));
        }

        Ok(())
    }

    /// Address string accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        let host = &self.server.host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        }
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        cors: default_cors(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        default_server()
    }
}
