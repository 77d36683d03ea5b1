// src/config.rs
use std::env;
use thiserror::Error;

use crate::application::services::{ConcurrencyStrategy, SlugSettings};
use crate::domain::slug::services::DEFAULT_MAX_PROBES;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_max_probes: u32,
    slug_concurrency: ConcurrencyStrategy,
    backfill_batch_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://catalog.db".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_PERSIST_ATTEMPTS: u32 = 5;
const DEFAULT_BACKFILL_BATCH: u32 = 100;

impl AppConfig {
    /// Build configuration from the process environment. Callers load `.env`
    /// first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_database_url);

        let database_max_connections =
            parse_positive(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let slug_max_probes = parse_positive(&lookup, "SLUG_MAX_PROBES", DEFAULT_MAX_PROBES)?;
        let persist_attempts =
            parse_positive(&lookup, "SLUG_PERSIST_ATTEMPTS", DEFAULT_PERSIST_ATTEMPTS)?;
        let backfill_batch_size =
            parse_positive(&lookup, "SLUG_BACKFILL_BATCH", DEFAULT_BACKFILL_BATCH)?;

        let slug_concurrency = match lookup("SLUG_CONCURRENCY")
            .map(|v| v.trim().to_lowercase())
            .as_deref()
        {
            None | Some("retry") => ConcurrencyStrategy::ConstraintRetry {
                max_attempts: persist_attempts,
            },
            Some("lock") => ConcurrencyStrategy::NamespaceLock,
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "SLUG_CONCURRENCY must be 'lock' or 'retry', got '{other}'"
                )));
            }
        };

        Ok(Self {
            database_url,
            database_max_connections,
            slug_max_probes,
            slug_concurrency,
            backfill_batch_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn backfill_batch_size(&self) -> u32 {
        self.backfill_batch_size
    }

    pub fn slug_settings(&self) -> SlugSettings {
        SlugSettings {
            max_probes: self.slug_max_probes,
            strategy: self.slug_concurrency,
        }
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ConfigError::Invalid(format!(
                "{key} must be a positive integer, got '{raw}'"
            ))),
        },
    }
}
