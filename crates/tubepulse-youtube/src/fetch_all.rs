//! Multi-page collection loops for `YoutubeClient`.

use crate::client::YoutubeClient;
use crate::error::YoutubeError;

impl YoutubeClient {
    /// Collects every top-level comment text for a video by following
    /// continuation tokens until none is returned.
    ///
    /// Comments are appended in page order, in the platform's default
    /// ordering; duplicates introduced by the remote source changing between
    /// page fetches are not removed.
    ///
    /// **Fail-open semantics**: a page failure mid-pagination logs a warning,
    /// stops the loop, and returns whatever was already collected. A video
    /// whose first page fails is therefore indistinguishable from a video
    /// with no comments.
    ///
    /// `max_pages` bounds the loop against pathological comment counts; when
    /// the ceiling is reached the collected prefix is returned with a
    /// warning.
    pub async fn fetch_all_comments(&self, video_id: &str, max_pages: usize) -> Vec<String> {
        let mut comments: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > max_pages {
                tracing::warn!(
                    video_id,
                    max_pages,
                    collected = comments.len(),
                    "comment pagination ceiling reached; returning partial set"
                );
                break;
            }

            let page = match self
                .list_comment_threads(video_id, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        video_id,
                        error = %e,
                        collected = comments.len(),
                        "comment page fetch failed; returning comments collected so far"
                    );
                    break;
                }
            };

            comments.extend(page.items.into_iter().map(crate::types::CommentThread::into_text));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        tracing::debug!(video_id, total = comments.len(), "collected comments");
        comments
    }

    /// Collects the video ids of a channel's uploads across all search pages,
    /// newest first.
    ///
    /// Unlike [`Self::fetch_all_comments`] this is strict: any page failure
    /// aborts the collection and propagates the error, since a truncated
    /// video list would silently misreport the channel. The `max_pages`
    /// ceiling still applies; reaching it returns the ids collected so far
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Propagates any [`YoutubeError`] from [`Self::list_channel_uploads`].
    pub async fn fetch_all_upload_ids(
        &self,
        channel_id: &str,
        max_pages: usize,
    ) -> Result<Vec<String>, YoutubeError> {
        let mut ids: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > max_pages {
                tracing::warn!(
                    channel_id,
                    max_pages,
                    collected = ids.len(),
                    "upload pagination ceiling reached; truncating video list"
                );
                break;
            }

            let page = self
                .list_channel_uploads(channel_id, page_token.as_deref())
                .await?;

            ids.extend(page.items.into_iter().filter_map(|item| item.id.video_id));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(ids)
    }
}
