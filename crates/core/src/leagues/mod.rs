pub mod leagues_model;
pub mod leagues_service;
pub mod leagues_traits;

pub use leagues_model::{League, NewLeague};
pub use leagues_service::LeagueService;
pub use leagues_traits::{LeagueRepositoryTrait, LeagueServiceTrait};
