//! `YouTube` Data API v3 response types.
//!
//! All types model the JSON structures returned by the `list` endpoints this
//! service calls (`channels`, `search`, `videos`, `commentThreads`). The API
//! reports every count as a JSON *string* (`"subscriberCount": "123"`);
//! statistics types keep the wire strings and expose parsed accessors that
//! default to 0 for missing or malformed values.

use serde::Deserialize;

/// Parses a wire count string, defaulting to 0 when absent or malformed.
fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// channels.list
// ---------------------------------------------------------------------------

/// Response envelope for `channels.list`.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<Channel>,
}

/// A single channel with its snippet and statistics.
#[derive(Debug, Deserialize)]
pub struct Channel {
    pub id: String,
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    subscriber_count: Option<String>,
    #[serde(default)]
    view_count: Option<String>,
    #[serde(default)]
    video_count: Option<String>,
}

impl ChannelStatistics {
    #[must_use]
    pub fn subscribers(&self) -> u64 {
        parse_count(self.subscriber_count.as_deref())
    }

    #[must_use]
    pub fn views(&self) -> u64 {
        parse_count(self.view_count.as_deref())
    }

    #[must_use]
    pub fn videos(&self) -> u64 {
        parse_count(self.video_count.as_deref())
    }
}

// ---------------------------------------------------------------------------
// search.list
// ---------------------------------------------------------------------------

/// Response envelope for `search.list`, one page plus an optional
/// continuation token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single search result. With `type=video` requested the id carries a
/// `videoId`, but the field stays optional to tolerate mixed result kinds.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub title: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

// ---------------------------------------------------------------------------
// videos.list
// ---------------------------------------------------------------------------

/// Response envelope for `videos.list`.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

/// A single video with its snippet and statistics.
#[derive(Debug, Deserialize)]
pub struct Video {
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    view_count: Option<String>,
    #[serde(default)]
    like_count: Option<String>,
    #[serde(default)]
    comment_count: Option<String>,
}

impl VideoStatistics {
    #[must_use]
    pub fn views(&self) -> u64 {
        parse_count(self.view_count.as_deref())
    }

    #[must_use]
    pub fn likes(&self) -> u64 {
        parse_count(self.like_count.as_deref())
    }

    #[must_use]
    pub fn comments(&self) -> u64 {
        parse_count(self.comment_count.as_deref())
    }
}

// ---------------------------------------------------------------------------
// commentThreads.list
// ---------------------------------------------------------------------------

/// Response envelope for `commentThreads.list`, one page plus an optional
/// continuation token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A top-level comment thread. Replies are not requested (`part=snippet`).
#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

impl CommentThread {
    /// Consumes the thread and returns the top-level comment's display text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.snippet.top_level_comment.snippet.text_display
    }
}
