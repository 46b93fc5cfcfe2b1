//! SQLite storage implementation for leagues.

mod model;
mod repository;

pub use model::LeagueDB;
pub use repository::LeagueRepository;
