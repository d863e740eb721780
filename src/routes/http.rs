//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::prompting::{content_context, format_topic_description, prompt_instructions};
use crate::protocol::*;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, curriculum_version: state.resolver.catalog().version() })
}

#[instrument(level = "info", skip(state, q), fields(course = %trunc_for_log(&q.course, 80), subject = %trunc_for_log(&q.subject, 80), language = %q.language))]
pub async fn http_get_topics(State(state): State<Arc<AppState>>, Query(q): Query<TopicsQuery>) -> impl IntoResponse {
  let out = state.resolver.resolve_topics(&q.course, &q.subject, q.language).await;
  info!(target: "topics", source = out.source.as_str(), cached = out.cached, count = out.topics.len(), "HTTP topics served");
  Json(out)
}

#[instrument(level = "info", skip(state, q), fields(course = %trunc_for_log(&q.course, 80), subject = %trunc_for_log(&q.subject, 80), topic = %trunc_for_log(&q.topic, 80)))]
pub async fn http_get_topic_description(
  State(state): State<Arc<AppState>>,
  Query(q): Query<DescriptionQuery>,
) -> Response {
  match state.resolver.catalog().topic_description(&q.course, &q.subject, &q.topic) {
    Some(description) => {
      let formatted = format_topic_description(&description);
      Json(DescriptionOut { description, formatted }).into_response()
    }
    None => (
      StatusCode::NOT_FOUND,
      Json(ErrorOut { error: format!("No description for topic {:?}", q.topic) }),
    )
      .into_response(),
  }
}

#[instrument(level = "info", skip(state, q), fields(course = %trunc_for_log(&q.course, 80), language = %q.language))]
pub async fn http_get_content_context(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ContextQuery>,
) -> impl IntoResponse {
  let context = content_context(&q.course);
  let instructions = prompt_instructions(&context, q.language, &state.prompts);
  Json(ContextOut { context, instructions })
}
