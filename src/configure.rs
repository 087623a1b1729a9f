use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_file: String,
    pub log_to_file: bool,
    pub log_level: String,
    pub ledger_url: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub max_in_flight: usize,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("log_file", "log/bulk_send.log")?
        .set_default("log_to_file", false)?
        .set_default("log_level", "info")?
        .set_default("ledger_url", "http://localhost:3000")?
        .set_default("max_attempts", 5_i64)?
        .set_default("retry_delay_ms", 1000_i64)?
        .set_default("max_in_flight", 64_i64)?
        // Add configuration from a file
        .add_source(File::with_name("config/config.yaml").required(false))
        // Add configuration from environment variables
        .add_source(config::Environment::with_prefix("APP"))
        .build()?;

    s.try_deserialize()
}
