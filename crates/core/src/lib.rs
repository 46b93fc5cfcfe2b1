//! Matchday Core - Domain entities, services, and traits.
//!
//! This crate contains the reconciliation and fan-out engine for Matchday.
//! It is database-agnostic and defines the repository traits that are
//! implemented by the `storage-sqlite` crate; the external provider is
//! reached only through the `SourceClient` trait from
//! `matchday-football-data`.

pub mod errors;
pub mod events;
pub mod leagues;
pub mod matches;
pub mod notifications;
pub mod sync;
pub mod teams;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
