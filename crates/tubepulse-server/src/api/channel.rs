//! Channel lookup: channel statistics plus per-video details.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use tubepulse_youtube::{Channel, Video, YoutubeError, MAX_IDS_PER_CALL};

use super::{error_response, AppState};

/// Ceiling on upload-search pages per channel lookup (50 videos per page).
const MAX_UPLOAD_PAGES: usize = 20;

#[derive(Debug, Serialize)]
pub struct ChannelStats {
    #[serde(rename = "Channel_name")]
    pub channel_name: String,
    #[serde(rename = "Subscribers")]
    pub subscribers: u64,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Total_videos")]
    pub total_videos: u64,
}

#[derive(Debug, Serialize)]
pub struct VideoDetails {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Published_date")]
    pub published_date: String,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
}

#[derive(Debug, Serialize)]
pub struct ChannelReport {
    pub channel_stats: Vec<ChannelStats>,
    pub video_details: Vec<VideoDetails>,
}

/// Failure modes of a channel lookup. The handler maps each variant to its
/// HTTP status; the messages are part of the response contract.
#[derive(Debug, Error)]
enum ChannelLookupError {
    #[error("No channel found with the provided ID.")]
    ChannelNotFound,

    #[error("No videos found for this channel.")]
    NoVideos,

    #[error(transparent)]
    Upstream(#[from] YoutubeError),
}

pub(super) async fn fetch_channel_data(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Response {
    match build_channel_report(&state, &channel_id).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e @ (ChannelLookupError::ChannelNotFound | ChannelLookupError::NoVideos)) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(ChannelLookupError::Upstream(e)) => {
            tracing::error!(%channel_id, error = %e, "channel lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn build_channel_report(
    state: &AppState,
    channel_id: &str,
) -> Result<ChannelReport, ChannelLookupError> {
    let channel = state
        .youtube
        .get_channel(channel_id)
        .await?
        .ok_or(ChannelLookupError::ChannelNotFound)?;

    let video_ids = state
        .youtube
        .fetch_all_upload_ids(channel_id, MAX_UPLOAD_PAGES)
        .await?;
    if video_ids.is_empty() {
        return Err(ChannelLookupError::NoVideos);
    }

    let mut video_details = Vec::with_capacity(video_ids.len());
    for chunk in video_ids.chunks(MAX_IDS_PER_CALL) {
        let videos = state.youtube.list_videos(chunk).await?;
        video_details.extend(videos.into_iter().map(video_details_from));
    }

    Ok(ChannelReport {
        channel_stats: vec![channel_stats_from(&channel)],
        video_details,
    })
}

fn channel_stats_from(channel: &Channel) -> ChannelStats {
    ChannelStats {
        channel_name: channel.snippet.title.clone(),
        subscribers: channel.statistics.subscribers(),
        views: channel.statistics.views(),
        total_videos: channel.statistics.videos(),
    }
}

fn video_details_from(video: Video) -> VideoDetails {
    VideoDetails {
        title: video.snippet.title,
        published_date: video.snippet.published_at,
        views: video.statistics.views(),
        likes: video.statistics.likes(),
        comments: video.statistics.comments(),
    }
}
