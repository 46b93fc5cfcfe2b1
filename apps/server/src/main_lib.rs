//! Application state wiring.

use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use matchday_core::events::{EventBus, EventKind};
use matchday_core::leagues::{LeagueService, LeagueServiceTrait};
use matchday_core::matches::{MatchService, MatchServiceTrait};
use matchday_core::notifications::{
    NotificationDispatcher, NotificationService, NotificationServiceTrait,
};
use matchday_core::sync::{LeagueSync, MatchSync, StandingSync};
use matchday_core::teams::{TeamService, TeamServiceTrait};
use matchday_core::users::{UserService, UserServiceTrait};
use matchday_football_data::{FootballDataClient, SourceClient};
use matchday_storage_sqlite::leagues::LeagueRepository;
use matchday_storage_sqlite::matches::MatchRepository;
use matchday_storage_sqlite::notifications::NotificationRepository;
use matchday_storage_sqlite::teams::TeamRepository;
use matchday_storage_sqlite::users::UserRepository;
use matchday_storage_sqlite::{db, spawn_writer};

use crate::config::Config;
use crate::realtime::ChannelManager;

pub struct AppState {
    pub league_service: Arc<dyn LeagueServiceTrait>,
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub match_service: Arc<dyn MatchServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub notification_service: Arc<dyn NotificationServiceTrait>,
    pub channels: Arc<ChannelManager>,
    pub league_sync: Arc<LeagueSync>,
    pub match_sync: Arc<MatchSync>,
    pub standing_sync: Arc<StandingSync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = spawn_writer(pool.clone());

    let league_repository = Arc::new(LeagueRepository::new(pool.clone(), writer.clone()));
    let team_repository = Arc::new(TeamRepository::new(pool.clone(), writer.clone()));
    let match_repository = Arc::new(MatchRepository::new(pool.clone(), writer.clone()));
    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let notification_repository = Arc::new(NotificationRepository::new(pool, writer));

    let source: Arc<dyn SourceClient> = Arc::new(FootballDataClient::new(
        &config.api_base_url,
        config.api_token.clone(),
        config.competition.clone(),
        config.season,
    ));

    let channels = Arc::new(ChannelManager::new());

    let bus = EventBus::start();
    let dispatcher = Arc::new(NotificationDispatcher::new(
        team_repository.clone(),
        user_repository.clone(),
        notification_repository.clone(),
        channels.clone(),
    ));
    bus.subscribe(&EventKind::ALL, dispatcher).await;

    let league_sync = Arc::new(LeagueSync::new(
        source.clone(),
        league_repository.clone(),
        team_repository.clone(),
        bus.clone(),
    ));
    let match_sync = Arc::new(MatchSync::new(
        source.clone(),
        league_repository.clone(),
        match_repository.clone(),
        bus.clone(),
    ));
    let standing_sync = Arc::new(StandingSync::new(source, team_repository.clone(), bus));

    Ok(Arc::new(AppState {
        league_service: Arc::new(LeagueService::new(league_repository)),
        team_service: Arc::new(TeamService::new(team_repository)),
        match_service: Arc::new(MatchService::new(match_repository)),
        user_service: Arc::new(UserService::new(user_repository)),
        notification_service: Arc::new(NotificationService::new(notification_repository)),
        channels,
        league_sync,
        match_sync,
        standing_sync,
    }))
}
