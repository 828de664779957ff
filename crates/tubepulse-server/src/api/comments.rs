//! Comment sentiment: aggregate every top-level comment, classify, tally.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tubepulse_sentiment::summarize;

use super::AppState;

/// Runs the full pipeline for one video: paginated comment aggregation
/// (fail-open, so an upstream failure mid-way degrades to a partial tally),
/// then per-comment classification and category counting.
pub(super) async fn analyze_video_comments(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Response {
    let comments = state
        .youtube
        .fetch_all_comments(&video_id, state.max_comment_pages)
        .await;

    let summary = summarize(state.classifier.as_ref(), &comments);
    (StatusCode::OK, Json(summary)).into_response()
}
