//! Environment-driven server configuration.
//!
//! Every knob has an `MD_` prefixed variable; only the provider token is
//! required. A `.env` file is honored in development.

use anyhow::{bail, Context};
use matchday_football_data::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub api_base_url: String,
    pub api_token: String,
    pub competition: String,
    pub season: Option<i32>,
    /// Seconds between league/teams reconciliation cycles.
    pub league_sync_interval_secs: u64,
    /// Seconds between standings reconciliation cycles.
    pub standings_sync_interval_secs: u64,
    /// Seconds between match reconciliation cycles.
    pub match_sync_interval_secs: u64,
    /// Days ahead covered by the match fetch window.
    pub match_window_days: i64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .ok()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_token = match std::env::var("MD_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => token,
            _ => bail!("MD_API_TOKEN must be set to a football-data.org API token"),
        };

        let season = std::env::var("MD_SEASON")
            .ok()
            .map(|raw| {
                raw.parse()
                    .with_context(|| format!("MD_SEASON has an invalid value: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            listen_addr: env_or("MD_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("MD_DB_PATH", "matchday.db"),
            api_base_url: env_or("MD_API_BASE_URL", DEFAULT_BASE_URL),
            api_token,
            competition: env_or("MD_COMPETITION", "BSA"),
            season,
            league_sync_interval_secs: env_parse("MD_LEAGUE_SYNC_INTERVAL_SECS", 24 * 60 * 60)?,
            standings_sync_interval_secs: env_parse("MD_STANDINGS_SYNC_INTERVAL_SECS", 600)?,
            match_sync_interval_secs: env_parse("MD_MATCH_SYNC_INTERVAL_SECS", 60)?,
            match_window_days: env_parse("MD_MATCH_WINDOW_DAYS", 7)?,
        })
    }
}
