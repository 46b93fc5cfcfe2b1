//! Read-side HTTP handlers and the websocket endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State, WebSocketUpgrade},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use matchday_core::errors::{DatabaseError, Error};
use matchday_core::leagues::League;
use matchday_core::matches::Match;
use matchday_core::notifications::Notification;
use matchday_core::teams::Team;
use matchday_core::users::{NewUser, User};

use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::realtime;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn found_or_404<T>(record: Option<T>, what: &str, id: &str) -> ApiResult<Json<T>> {
    record
        .map(Json)
        .ok_or_else(|| Error::Database(DatabaseError::NotFound(format!("{what} {id}"))).into())
}

async fn list_leagues(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<League>>> {
    Ok(Json(state.league_service.list_leagues()?))
}

async fn get_league(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<League>> {
    found_or_404(state.league_service.get_league(&id)?, "league", &id)
}

async fn list_league_matches(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Match>>> {
    Ok(Json(state.match_service.list_league_matches(&id)?))
}

async fn list_matches(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Match>>> {
    Ok(Json(state.match_service.list_matches()?))
}

async fn get_match(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Match>> {
    found_or_404(state.match_service.get_match(&id)?, "match", &id)
}

async fn list_match_notifications(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Notification>>> {
    Ok(Json(state.notification_service.list_match_notifications(&id)?))
}

async fn list_teams(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(state.team_service.list_teams()?))
}

async fn get_team(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Team>> {
    found_or_404(state.team_service.get_team(&id)?, "team", &id)
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_users()?))
}

async fn get_user(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    found_or_404(state.user_service.get_user(&id)?, "user", &id)
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn follow_team(
    Path((id, team_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.follow_team(&id, &team_id).await?))
}

async fn unfollow_team(
    Path((id, team_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.user_service.unfollow_team(&id, &team_id).await?))
}

async fn list_user_notifications(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Notification>>> {
    Ok(Json(state.notification_service.list_user_notifications(&id)?))
}

async fn ws_upgrade(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> Response {
    let channels = state.channels.clone();
    ws.on_upgrade(move |socket| realtime::handle_socket(socket, user_id, channels))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/leagues", get(list_leagues))
        .route("/api/leagues/{id}", get(get_league))
        .route("/api/leagues/{id}/matches", get(list_league_matches))
        .route("/api/matches", get(list_matches))
        .route("/api/matches/{id}", get(get_match))
        .route("/api/matches/{id}/notifications", get(list_match_notifications))
        .route("/api/teams", get(list_teams))
        .route("/api/teams/{id}", get(get_team))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/notifications", get(list_user_notifications))
        .route(
            "/api/users/{id}/follow/{team_id}",
            post(follow_team).delete(unfollow_team),
        )
        .route("/ws/{user_id}", get(ws_upgrade))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
