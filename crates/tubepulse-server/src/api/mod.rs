mod channel;
mod comments;
mod search;

use std::sync::Arc;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tubepulse_sentiment::TextClassifier;
use tubepulse_youtube::YoutubeClient;

/// Shared per-request context: the `YouTube` client and the classifier, both
/// constructed once at startup and reused read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    pub youtube: Arc<YoutubeClient>,
    pub classifier: Arc<dyn TextClassifier + Send + Sync>,
    pub max_comment_pages: usize,
}

/// Error payload: a JSON body with a single `error` field and a non-200
/// status. No structured error codes beyond the status line.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(super) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/youtube/{channel_id}", post(channel::fetch_channel_data))
        .route("/youtube/search/{term}", post(search::search_top_videos))
        .route(
            "/youtube/comments/{video_id}",
            post(comments::analyze_video_comments),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}
