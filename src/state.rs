use crate::config::AppConfig;
use crate::places::{HttpPlacesRepository, PlacesRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub places: Arc<dyn PlacesRepository>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Self::from_config(config)
    }

    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let places =
            Arc::new(HttpPlacesRepository::new(&config.places_api_url)?) as Arc<dyn PlacesRepository>;
        Ok(Self { config, places })
    }

    pub fn from_parts(config: Arc<AppConfig>, places: Arc<dyn PlacesRepository>) -> Self {
        Self { config, places }
    }

    /// State with local defaults around the given repository.
    pub fn fake(places: Arc<dyn PlacesRepository>) -> Self {
        use crate::config::{DataServiceConfig, ServerConfig};

        let config = Arc::new(AppConfig {
            places_api_url: "http://localhost:3000".into(),
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
            data_service: DataServiceConfig {
                db_path: "db/db.json".into(),
                port: 0,
            },
        });
        Self::from_parts(config, places)
    }
}
