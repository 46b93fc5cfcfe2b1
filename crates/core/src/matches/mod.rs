pub mod matches_model;
pub mod matches_service;
pub mod matches_traits;

pub use matches_model::{
    is_status_regression, match_changed_fields, Match, MatchStatus, NewMatch,
};
pub use matches_service::MatchService;
pub use matches_traits::{MatchRepositoryTrait, MatchServiceTrait};
