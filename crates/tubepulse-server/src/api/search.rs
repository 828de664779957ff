//! Free-text video search, first page only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use tubepulse_youtube::SearchResult;

use super::{error_response, AppState};

#[derive(Debug, Serialize)]
pub struct TopVideo {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Published_date")]
    pub published_date: String,
    #[serde(rename = "Thumbnail")]
    pub thumbnail: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub top_videos: Vec<TopVideo>,
}

pub(super) async fn search_top_videos(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Response {
    match state.youtube.search_videos(&term).await {
        Ok(results) => {
            let top_videos: Vec<TopVideo> =
                results.into_iter().filter_map(top_video_from).collect();
            (StatusCode::OK, Json(SearchReport { top_videos })).into_response()
        }
        Err(e) => {
            tracing::error!(%term, error = %e, "video search failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error fetching video data")
        }
    }
}

/// Projects a search result into the response shape. Results without a video
/// id (non-video kinds) are skipped.
fn top_video_from(result: SearchResult) -> Option<TopVideo> {
    let video_id = result.id.video_id?;
    Some(TopVideo {
        title: result.snippet.title,
        published_date: result.snippet.published_at,
        thumbnail: result
            .snippet
            .thumbnails
            .high
            .map(|t| t.url)
            .unwrap_or_default(),
        video_id,
    })
}
