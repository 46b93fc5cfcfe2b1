//! SQLite storage implementation for Matchday.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `matchday-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits. Every
//! mutation goes through the single-writer actor, which is what makes the
//! read-diff-write of an upsert atomic per provider row.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod leagues;
pub mod matches;
pub mod notifications;
pub mod teams;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from matchday-core for convenience
pub use matchday_core::errors::{DatabaseError, Error, Result};
