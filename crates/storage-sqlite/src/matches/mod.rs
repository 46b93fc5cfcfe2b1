//! SQLite storage implementation for matches.

mod model;
mod repository;

pub use model::MatchDB;
pub use repository::MatchRepository;
