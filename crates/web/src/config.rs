use anyhow::{Context, Result};
use std::time::Duration;

use crate::scheduler::{CompetitionTarget, PollSettings};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
const DEFAULT_MAX_BACKOFF_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub document_source_url: String,
    pub poll_interval_secs: u64,
    pub max_backoff_secs: u64,
    pub competition_id: Option<String>,
    pub federation: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            document_source_url: std::env::var("DOCUMENT_SOURCE_URL")
                .context("Cannot load DOCUMENT_SOURCE_URL env variable")?,
            poll_interval_secs: seconds_var("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?,
            max_backoff_secs: seconds_var("MAX_BACKOFF_SECS", DEFAULT_MAX_BACKOFF_SECS)?,
            competition_id: non_empty_var("COMPETITION_ID"),
            federation: non_empty_var("FEDERATION"),
        })
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            interval: Duration::from_secs(self.poll_interval_secs.max(1)),
            max_backoff: Duration::from_secs(self.max_backoff_secs),
        }
    }

    /// Target to follow at startup, if one is configured.
    pub fn initial_target(&self) -> Option<CompetitionTarget> {
        self.competition_id.as_ref().map(|id| {
            CompetitionTarget::new(id.clone(), self.federation.clone().unwrap_or_default())
        })
    }
}

fn seconds_var(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number of seconds", name)),
        Err(_) => Ok(default),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
