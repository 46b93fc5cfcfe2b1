//! Football-data.org source client.
//!
//! Typed read-only wrapper over the football-data.org v4 competition
//! endpoint family. Raw provider payloads are normalized into the
//! `Remote*` shapes consumed by the reconcilers in `matchday-core`;
//! rows that fail to parse are skipped so one malformed record never
//! aborts a sync cycle.

pub mod client;
pub mod errors;
pub mod models;

pub use client::{FootballDataClient, MatchFilter, SourceClient, DEFAULT_BASE_URL};
pub use errors::SourceError;
pub use models::{
    MatchStatus, RemoteCompetition, RemoteMatch, RemoteMatchSide, RemoteStandingRow, RemoteTeam,
};
