//! Background schedulers driving the three reconciliation cycles.
//!
//! Each cycle runs on its own fixed interval: league and teams daily,
//! standings every ten minutes, matches every minute by default. A failed
//! cycle is logged and retried on the next tick.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::{interval, timeout, Duration};
use tracing::{info, warn};

use matchday_football_data::MatchFilter;

use crate::config::Config;
use crate::main_lib::AppState;

/// Initial delay before the first cycle, so the server finishes starting up.
const INITIAL_DELAY_SECS: u64 = 5;

/// Upper bound on a single cycle. A hung provider call must not stall the loop.
const CYCLE_TIMEOUT_SECS: u64 = 120;

/// Starts the league, standings, and match reconciliation schedulers.
pub fn start_sync_schedulers(state: Arc<AppState>, config: &Config) {
    let league_interval = config.league_sync_interval_secs;
    let standings_interval = config.standings_sync_interval_secs;
    let match_interval = config.match_sync_interval_secs;
    let window_days = config.match_window_days;

    {
        let state = state.clone();
        tokio::spawn(async move {
            info!("League sync scheduler started ({league_interval}s interval)");
            tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;
            let mut ticker = interval(Duration::from_secs(league_interval));
            loop {
                ticker.tick().await;
                run_league_cycle(&state).await;
            }
        });
    }

    {
        let state = state.clone();
        tokio::spawn(async move {
            info!("Standings sync scheduler started ({standings_interval}s interval)");
            tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;
            let mut ticker = interval(Duration::from_secs(standings_interval));
            loop {
                ticker.tick().await;
                run_standings_cycle(&state).await;
            }
        });
    }

    tokio::spawn(async move {
        info!("Match sync scheduler started ({match_interval}s interval)");
        tokio::time::sleep(Duration::from_secs(INITIAL_DELAY_SECS)).await;
        let mut ticker = interval(Duration::from_secs(match_interval));
        loop {
            ticker.tick().await;
            run_match_cycle(&state, window_days).await;
        }
    });
}

async fn run_league_cycle(state: &Arc<AppState>) {
    let cycle = timeout(Duration::from_secs(CYCLE_TIMEOUT_SECS), state.league_sync.run());
    match cycle.await {
        Ok(Ok(report)) => {
            info!(
                "League sync completed: {} created, {} updated, {} unchanged, {} skipped",
                report.created, report.updated, report.unchanged, report.skipped
            );
        }
        Ok(Err(e)) => warn!("League sync failed: {e}"),
        Err(_) => warn!("League sync timed out after {CYCLE_TIMEOUT_SECS}s"),
    }
}

async fn run_standings_cycle(state: &Arc<AppState>) {
    let cycle = timeout(
        Duration::from_secs(CYCLE_TIMEOUT_SECS),
        state.standing_sync.run(),
    );
    match cycle.await {
        Ok(Ok(report)) => {
            info!(
                "Standings sync completed: {} updated, {} unchanged, {} skipped",
                report.updated, report.unchanged, report.skipped
            );
        }
        Ok(Err(e)) => warn!("Standings sync failed: {e}"),
        Err(_) => warn!("Standings sync timed out after {CYCLE_TIMEOUT_SECS}s"),
    }
}

async fn run_match_cycle(state: &Arc<AppState>, window_days: i64) {
    let filter = match_window(window_days);
    let cycle = timeout(
        Duration::from_secs(CYCLE_TIMEOUT_SECS),
        state.match_sync.run(&filter),
    );
    match cycle.await {
        Ok(Ok(report)) => {
            info!(
                "Match sync completed: {} created, {} updated, {} unchanged, {} skipped",
                report.created, report.updated, report.unchanged, report.skipped
            );
        }
        Ok(Err(e)) => warn!("Match sync failed: {e}"),
        Err(_) => warn!("Match sync timed out after {CYCLE_TIMEOUT_SECS}s"),
    }
}

/// Builds the rolling fetch window: yesterday through `window_days` ahead.
///
/// The one-day lookback picks up results of matches that finished overnight.
fn match_window(window_days: i64) -> MatchFilter {
    let today = Utc::now().date_naive();
    MatchFilter {
        date_from: Some(today - ChronoDuration::days(1)),
        date_to: Some(today + ChronoDuration::days(window_days)),
        status: None,
        matchday: None,
    }
}
