//! Shared configuration for the gateway and the verify pre-flight.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Port used when neither the config file nor `PORT` provide one.
pub const DEFAULT_PORT: u16 = 8000;
/// Knowledge base location, relative to the working directory.
pub const DEFAULT_KNOWLEDGE_PATH: &str = "legal_knowledge.json";
/// Env var naming the config file to read.
pub const ENV_CONFIG_PATH: &str = "VIDHI_CONFIG";
/// Env var carrying the listen port; wins over every other source.
pub const ENV_PORT: &str = "PORT";

const DEFAULT_CONFIG_PATH: &str = "config/gateway.toml";

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status` and in startup logs.
    pub app_name: String,
    /// Interface the gateway binds to.
    pub host: IpAddr,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path to the JSON knowledge base (`{"legal_cases": [...]}`).
    pub knowledge_path: String,
    /// Directory holding the landing page (`index.html`).
    pub frontend_dir: String,
}

impl CoreConfig {
    /// Load config from file and environment.
    /// Precedence: `PORT` > `VIDHI__*` env > file (`VIDHI_CONFIG` or `config/gateway.toml`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let port = std::env::var(ENV_PORT).ok();
        Self::load_from(Path::new(&config_path), port.as_deref())
    }

    /// Same as [`CoreConfig::load`] with the file path and `PORT` value supplied by the caller.
    /// A missing file is not an error; an unparsable port is.
    pub fn load_from(path: &Path, port: Option<&str>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", "Vidhi Legal Assistant")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("knowledge_path", DEFAULT_KNOWLEDGE_PATH)?
            .set_default("frontend_dir", "vidhi-frontend")?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let port_override = port.map(parse_port).transpose()?;

        let built = builder
            .add_source(config::Environment::with_prefix("VIDHI").separator("__"))
            .set_override_option("port", port_override.map(i64::from))?
            .build()?;

        built.try_deserialize()
    }

    /// Address the gateway listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, config::ConfigError> {
    raw.trim().parse::<u16>().map_err(|e| {
        config::ConfigError::Message(format!("invalid {} value {:?}: {}", ENV_PORT, raw, e))
    })
}
