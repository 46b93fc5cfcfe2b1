//! The read/seed surface the server consumes, driven through the service
//! traits over in-memory repositories.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;

use common::{
    InMemoryLeagueRepository, InMemoryMatchRepository, InMemoryNotificationRepository,
    InMemoryTeamRepository, InMemoryUserRepository,
};
use matchday_core::errors::Error;
use matchday_core::leagues::{LeagueRepositoryTrait, LeagueService, LeagueServiceTrait, NewLeague};
use matchday_core::matches::{
    MatchRepositoryTrait, MatchService, MatchServiceTrait, MatchStatus, NewMatch,
};
use matchday_core::notifications::{
    NewNotification, NotificationRepositoryTrait, NotificationService, NotificationServiceTrait,
};
use matchday_core::teams::{NewTeam, TeamRepositoryTrait, TeamService, TeamServiceTrait};
use matchday_core::users::{NewUser, UserService, UserServiceTrait};

fn new_league() -> NewLeague {
    NewLeague {
        external_id: 2013,
        name: "Campeonato Brasileiro Série A".to_string(),
        country: "Brazil".to_string(),
        season: "2026".to_string(),
    }
}

fn new_team(external_id: i64, short_name: &str) -> NewTeam {
    NewTeam {
        external_id,
        name: format!("Clube {short_name}"),
        short_name: short_name.to_string(),
        tla: None,
        crest: None,
        venue: None,
        league_id: None,
    }
}

fn new_match(league_id: Option<String>) -> NewMatch {
    NewMatch {
        external_id: 555,
        league_id,
        home_team_external_id: 1,
        away_team_external_id: 2,
        home_team: "Flamengo".to_string(),
        away_team: "Vasco".to_string(),
        display_name: "Flamengo x Vasco".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 9, 6)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap(),
        status: MatchStatus::Scheduled,
        score_home: None,
        score_away: None,
        venue: None,
        referee: None,
        matchday: Some(23),
    }
}

#[tokio::test]
async fn league_and_match_reads_reflect_seeded_records() {
    let leagues = Arc::new(InMemoryLeagueRepository::default());
    let matches = Arc::new(InMemoryMatchRepository::default());
    let (league, _) = leagues.upsert(new_league()).await.unwrap();
    let (record, _) = matches
        .upsert(new_match(Some(league.id.clone())))
        .await
        .unwrap();

    let league_service = LeagueService::new(leagues);
    let match_service = MatchService::new(matches);

    let listed = league_service.list_leagues().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        league_service.get_league(&league.id).unwrap().unwrap().name,
        "Campeonato Brasileiro Série A"
    );
    assert!(league_service.get_league("missing").unwrap().is_none());

    assert_eq!(match_service.list_matches().unwrap().len(), 1);
    assert_eq!(
        match_service.get_match(&record.id).unwrap().unwrap().external_id,
        555
    );
    let in_league = match_service.list_league_matches(&league.id).unwrap();
    assert_eq!(in_league.len(), 1);
    assert!(match_service.list_league_matches("other").unwrap().is_empty());
}

#[tokio::test]
async fn team_reads_reflect_seeded_records() {
    let teams = Arc::new(InMemoryTeamRepository::default());
    let (flamengo, _) = teams.upsert_profile(new_team(1, "Flamengo")).await.unwrap();
    teams.upsert_profile(new_team(2, "Vasco")).await.unwrap();

    let service = TeamService::new(teams);

    assert_eq!(service.list_teams().unwrap().len(), 2);
    assert_eq!(
        service.get_team(&flamengo.id).unwrap().unwrap().short_name,
        "Flamengo"
    );
    assert!(service.get_team("missing").unwrap().is_none());
}

#[tokio::test]
async fn user_service_validates_seeds_and_manages_follows() {
    let users = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(users);

    let invalid = service
        .create_user(NewUser {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            followed_team_ids: vec![],
        })
        .await;
    assert!(matches!(invalid, Err(Error::Validation(_))));

    let ana = service
        .create_user(NewUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            followed_team_ids: vec!["team-1".to_string()],
        })
        .await
        .unwrap();

    let ana = service.follow_team(&ana.id, "team-2").await.unwrap();
    assert_eq!(ana.followed_team_ids.len(), 2);

    let ana = service.unfollow_team(&ana.id, "team-1").await.unwrap();
    assert_eq!(ana.followed_team_ids, vec!["team-2".to_string()]);

    assert_eq!(service.list_users().unwrap().len(), 1);
    assert!(service.get_user(&ana.id).unwrap().is_some());
}

#[tokio::test]
async fn notification_reads_filter_by_user_and_match() {
    let notifications = Arc::new(InMemoryNotificationRepository::default());
    for (user, match_id) in [("u-1", Some("m-1")), ("u-1", None), ("u-2", Some("m-1"))] {
        notifications
            .create(NewNotification {
                user_id: user.to_string(),
                kind: "new-match".to_string(),
                message: "New match: Flamengo x Vasco".to_string(),
                team_ids: vec!["team-1".to_string()],
                match_id: match_id.map(str::to_string),
            })
            .await
            .unwrap();
    }

    let service = NotificationService::new(notifications);

    assert_eq!(service.list_user_notifications("u-1").unwrap().len(), 2);
    assert_eq!(service.list_match_notifications("m-1").unwrap().len(), 2);
    assert!(service.list_user_notifications("u-3").unwrap().is_empty());
}
