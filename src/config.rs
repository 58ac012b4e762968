use std::net::SocketAddr;

use anyhow::Context;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataServiceConfig {
    pub db_path: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base address of the places data service.
    pub places_api_url: String,
    pub server: ServerConfig,
    pub data_service: DataServiceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let places_api_url = std::env::var("PLACES_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());
        Url::parse(&places_api_url)
            .with_context(|| format!("PLACES_API_URL is not a valid url: {places_api_url}"))?;

        let server = ServerConfig {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_port("APP_PORT", 8080)?,
        };
        let data_service = DataServiceConfig {
            db_path: std::env::var("DATA_DB_PATH").unwrap_or_else(|_| "db/db.json".into()),
            port: parse_port("DATA_PORT", 3000)?,
        };

        Ok(Self {
            places_api_url,
            server,
            data_service,
        })
    }
}

fn parse_port(var: &str, default: u16) -> anyhow::Result<u16> {
    match std::env::var(var) {
        Ok(v) => v
            .parse::<u16>()
            .with_context(|| format!("{var} must be a port number, got {v}")),
        Err(_) => Ok(default),
    }
}
