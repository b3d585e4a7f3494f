use std::net::SocketAddr;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub token_secret: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: "not a socket address".to_string(),
            });
        }

        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            token_secret: require_var("TOKEN_SECRET")?,
            bind_addr,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
