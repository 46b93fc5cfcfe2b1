//! SQLite storage implementation for users.

mod model;
mod repository;

pub use model::{FollowedTeamDB, UserDB};
pub use repository::UserRepository;
