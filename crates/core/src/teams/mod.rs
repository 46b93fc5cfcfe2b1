pub mod teams_model;
pub mod teams_service;
pub mod teams_traits;

pub use teams_model::{
    standing_changed_fields, NewTeam, StandingUpdate, Team, WATCHED_STANDING_FIELDS,
};
pub use teams_service::TeamService;
pub use teams_traits::{TeamRepositoryTrait, TeamServiceTrait};
