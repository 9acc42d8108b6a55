use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub db: Db,
    pub stock: Stock,
    pub log: Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Db {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u32,
    /// Run `CREATE TABLE IF NOT EXISTS beers` on start-up.
    pub ensure_schema: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Stock {
    /// Compare-and-set attempts before a contended adjustment gives up.
    pub max_adjust_attempts: u32,
}

impl Default for Stock {
    fn default() -> Self {
        Self {
            max_adjust_attempts: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    pub filter: String,
    pub json: bool,
}

/// Load settings from `config/default.toml`, `config/<env>.toml`, and env overrides.
pub fn load() -> Result<Settings, config::ConfigError> {
    let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{env_name}")).required(false))
        .add_source(config::Environment::with_prefix("BEERSTOCK").separator("__"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::{Settings, StoreBackend};

    const DEFAULTS: &str = include_str!("../config/default.toml");

    fn from_toml(raw: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn given_default_file_when_loaded_should_deserialize_every_section() {
        let settings = from_toml(DEFAULTS);

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.db.backend, StoreBackend::Postgres);
        assert!(settings.db.ensure_schema);
        assert_eq!(settings.stock.max_adjust_attempts, 5);
        assert!(!settings.log.json);
    }

    #[test]
    fn given_memory_backend_when_loaded_should_select_memory_store() {
        let raw = DEFAULTS.replace("backend = \"postgres\"", "backend = \"memory\"");

        let settings = from_toml(&raw);

        assert_eq!(settings.db.backend, StoreBackend::Memory);
    }
}
