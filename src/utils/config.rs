use std::{collections::HashMap, env, path::Path};

use anyhow::Context;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub owner: Option<String>,
    pub date_label: Option<String>,
    pub seed_sample_items: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: None,
            date_label: None,
            seed_sample_items: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads an env-style file. Variables already set in the process
    /// environment take precedence over the file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let vars = dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?
            .collect::<Result<HashMap<String, String>, _>>()
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Self::from_lookup(|key| env::var(key).ok().or_else(|| vars.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed_sample_items = match non_blank("CART_SEED_SAMPLES") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("CART_SEED_SAMPLES must be true or false, got '{}'", value))?,
            None => false,
        };

        let config = Config {
            owner: non_blank("CART_OWNER"),
            date_label: non_blank("CART_DATE"),
            seed_sample_items,
            log_level: non_blank("LOG_LEVEL")
                .map(|level| level.trim().to_lowercase())
                .unwrap_or_else(|| "warn".to_string()),
        };

        config.validate()?;
        tracing::debug!("Config: loaded {:?}", config);
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
