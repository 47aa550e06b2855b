use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealdeck_mealplan::PlannerOptions;
use mealdeck_shared::DEFAULT_MAX_ITEMS;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Maximum number of values per catalog category
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// IANA timezone deciding which week is "this week"; host offset when unset
    #[serde(default)]
    pub timezone: Option<String>,
    /// Keep generated recipe titles on the card
    #[serde(default)]
    pub cache_titles: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            timezone: None,
            cache_titles: false,
        }
    }
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

impl PlannerConfig {
    pub fn options(&self) -> PlannerOptions {
        PlannerOptions {
            max_items: self.max_items,
            timezone: self.timezone.to_owned(),
            cache_titles: self.cache_titles,
            today: None,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALDECK__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:mealdeck.db")?
            .set_default("database.max_connections", 1)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALDECK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.planner.max_items < 1 {
            return Err("Planner max_items must be at least 1".to_string());
        }
        if let Some(tz) = self
            .planner
            .timezone
            .as_deref()
            .filter(|tz| time_tz::timezones::get_by_name(tz).is_none())
        {
            return Err(format!("Unknown planner timezone: {tz}"));
        }
        Ok(())
    }
}
