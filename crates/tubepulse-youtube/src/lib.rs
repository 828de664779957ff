//! Typed HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the multi-page collection loops used by the server: full comment
//! aggregation for a video and full upload-id collection for a channel.

mod client;
mod error;
mod fetch_all;
mod types;

pub use client::{YoutubeClient, MAX_IDS_PER_CALL};
pub use error::YoutubeError;
pub use types::{
    Channel, ChannelSnippet, ChannelStatistics, CommentThread, CommentThreadListResponse,
    SearchListResponse, SearchResult, SearchResultId, SearchSnippet, Thumbnail, Thumbnails, Video,
    VideoSnippet, VideoStatistics,
};
