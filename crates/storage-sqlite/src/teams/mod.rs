//! SQLite storage implementation for teams.

mod model;
mod repository;

pub use model::TeamDB;
pub use repository::TeamRepository;
