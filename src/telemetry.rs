//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,topics=debug,curriculum=info,aula_backend=debug,tower_http=info").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! Event targets used across the crate:
//! - `topics`: classification and resolution decisions
//! - `curriculum`: asset loading and lookups
//! - `topics_cache`: cache expiry and eviction
//! - `aula_backend`: startup, config and state wiring

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,topics=debug,curriculum=info,aula_backend=debug,tower_http=info,axum=info";

pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_file(true)
    .with_line_number(true);

  // json and pretty builders are different types; init in each arm.
  match std::env::var("LOG_FORMAT").as_deref() {
    Ok("json") => builder.json().init(),
    _ => builder.init(),
  }
}
