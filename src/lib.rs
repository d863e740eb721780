//! Aula · curriculum topic backend
//!
//! Resolves the list of study topics for a Chilean school course and subject:
//! curated curriculum entries first, then topics-only entries, then generic
//! lists by subject area and grade band. Results are cached with a TTL.

pub mod books;
pub mod cache;
pub mod classify;
pub mod config;
pub mod curriculum;
pub mod domain;
pub mod error;
pub mod heuristic;
pub mod prompting;
pub mod protocol;
pub mod resolver;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod util;
