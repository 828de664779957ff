//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. Every endpoint checks for the `{"error": {...}}`
//! envelope the API uses for failures and surfaces it as
//! [`YoutubeError::ApiError`] before deserializing the success shape.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::types::{
    Channel, ChannelListResponse, CommentThreadListResponse, SearchListResponse, SearchResult,
    Video, VideoListResponse,
};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Maximum number of video ids accepted by a single `videos.list` call.
/// Callers with more ids must chunk.
pub const MAX_IDS_PER_CALL: usize = 50;

/// Client for the `YouTube` Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production `YouTube` API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tubepulse/0.1 (channel-analytics)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining a resource name appends a path segment rather than replacing
        // the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches a channel's snippet and statistics by channel id.
    ///
    /// Calls `channels.list` and returns the first item, or `None` when the
    /// id resolves to no channel.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn get_channel(&self, channel_id: &str) -> Result<Option<Channel>, YoutubeError> {
        let url = self.build_url(
            "channels",
            &[("part", "snippet,statistics"), ("id", channel_id)],
        )?;
        let body = self
            .request_json(&url, &format!("channels.list(id={channel_id})"))
            .await?;

        let envelope: ChannelListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("channels.list(id={channel_id})"),
                source: e,
            })?;

        Ok(envelope.items.into_iter().next())
    }

    /// Searches for videos matching a free-text query.
    ///
    /// Calls `search.list` with `type=video` and a fixed page size of 10,
    /// in the API's default relevance order. First page only.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<SearchResult>, YoutubeError> {
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "10"),
            ],
        )?;
        let body = self
            .request_json(&url, &format!("search.list(q={query})"))
            .await?;

        let envelope: SearchListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search.list(q={query})"),
                source: e,
            })?;

        Ok(envelope.items)
    }

    /// Fetches one page of a channel's uploads, newest first.
    ///
    /// Calls `search.list` with `channelId`, `order=date`, `type=video`, and
    /// the API's maximum page size of 50. Pass the previous page's
    /// continuation token to advance.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_channel_uploads(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> Result<SearchListResponse, YoutubeError> {
        let mut params = vec![
            ("part", "snippet"),
            ("channelId", channel_id),
            ("order", "date"),
            ("type", "video"),
            ("maxResults", "50"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("search", &params)?;
        let body = self
            .request_json(&url, &format!("search.list(channelId={channel_id})"))
            .await?;

        serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
            context: format!("search.list(channelId={channel_id})"),
            source: e,
        })
    }

    /// Fetches snippet and statistics for up to [`MAX_IDS_PER_CALL`] videos.
    ///
    /// Calls `videos.list` with the ids joined by commas.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if more than [`MAX_IDS_PER_CALL`] ids are
    ///   passed, or if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_videos(&self, ids: &[String]) -> Result<Vec<Video>, YoutubeError> {
        if ids.len() > MAX_IDS_PER_CALL {
            return Err(YoutubeError::ApiError(format!(
                "videos.list accepts at most {MAX_IDS_PER_CALL} ids per call, got {}",
                ids.len()
            )));
        }

        let joined = ids.join(",");
        let url = self.build_url(
            "videos",
            &[("part", "snippet,statistics"), ("id", &joined)],
        )?;
        let body = self
            .request_json(&url, &format!("videos.list({} ids)", ids.len()))
            .await?;

        let envelope: VideoListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("videos.list({} ids)", ids.len()),
                source: e,
            })?;

        Ok(envelope.items)
    }

    /// Fetches one page of top-level comment threads for a video.
    ///
    /// Calls `commentThreads.list` with `textFormat=plainText` and the API's
    /// maximum page size of 100. Pass the previous page's continuation token
    /// to advance.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::ApiError`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn list_comment_threads(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse, YoutubeError> {
        let mut params = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("textFormat", "plainText"),
            ("maxResults", "100"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("commentThreads", &params)?;
        let body = self
            .request_json(&url, &format!("commentThreads.list(videoId={video_id})"))
            .await?;

        serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
            context: format!("commentThreads.list(videoId={video_id})"),
            source: e,
        })
    }

    /// Builds the full request URL for a resource with properly
    /// percent-encoded query parameters. The API key is appended to every
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::ApiError`] if `resource` cannot be joined onto
    /// the base URL.
    fn build_url(&self, resource: &str, extra: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(resource)
            .map_err(|e| YoutubeError::ApiError(format!("invalid resource '{resource}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and parses the response body as JSON, surfacing
    /// the API's error envelope regardless of HTTP status.
    ///
    /// `context` names the logical operation for error messages; the URL is
    /// deliberately not used because it carries the API key.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] on network failure,
    /// [`YoutubeError::ApiError`] for an error envelope or an unparseable
    /// non-2xx response, and [`YoutubeError::Deserialize`] if a 2xx body is
    /// not valid JSON.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let value: serde_json::Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                if status.is_success() {
                    return Err(YoutubeError::Deserialize {
                        context: context.to_owned(),
                        source: e,
                    });
                }
                return Err(YoutubeError::ApiError(format!("{context}: HTTP {status}")));
            }
        };

        Self::check_api_error(&value)?;

        if !status.is_success() {
            return Err(YoutubeError::ApiError(format!("{context}: HTTP {status}")));
        }

        Ok(value)
    }

    /// Checks for the `{"error": {"message": ...}}` envelope and returns an
    /// error if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), YoutubeError> {
        if let Some(error) = body.get("error") {
            let msg = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(YoutubeError::ApiError(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> YoutubeClient {
        YoutubeClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client
            .build_url("channels", &[("part", "snippet,statistics"), ("id", "UC42")])
            .expect("build_url");
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/channels?key=test-key&part=snippet%2Cstatistics&id=UC42"
        );
    }

    #[test]
    fn build_url_strips_trailing_slash() {
        let client = test_client("https://www.googleapis.com/youtube/v3/");
        let url = client
            .build_url("videos", &[("id", "a,b")])
            .expect("build_url");
        assert!(url.as_str().starts_with("https://www.googleapis.com/youtube/v3/videos?"));
    }

    #[test]
    fn build_url_encodes_special_characters() {
        let client = test_client("https://www.googleapis.com/youtube/v3");
        let url = client
            .build_url("search", &[("q", "cats & dogs")])
            .expect("build_url");
        assert!(
            url.as_str().contains("cats+%26+dogs") || url.as_str().contains("cats%20%26%20dogs"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn check_api_error_passes_success_body() {
        let body = serde_json::json!({ "items": [] });
        assert!(YoutubeClient::check_api_error(&body).is_ok());
    }

    #[test]
    fn check_api_error_surfaces_envelope_message() {
        let body = serde_json::json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        });
        let err = YoutubeClient::check_api_error(&body).unwrap_err();
        assert!(
            err.to_string().contains("quotaExceeded"),
            "expected envelope message in error, got: {err}"
        );
    }
}
