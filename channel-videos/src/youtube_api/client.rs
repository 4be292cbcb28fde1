//! HTTP client for the YouTube Data API, authenticated with a static API key.

use crate::config::{ApiKey, Config};
use crate::youtube_api::{
    DataApi,
    channels::ChannelListResponse,
    search::SearchListResponse,
    types::MAX_RESULTS_PER_PAGE,
    videos::VideoListResponse,
};
use eyre::Context;
use http::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

/// Client for the read-only parts of the YouTube Data API v3.
///
/// Every request carries the API key as the `key` query parameter, so no OAuth flow is
/// needed. Only public data is reachable this way.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: ApiKey,
    /// Base URL of the API, without a trailing slash.
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client for the API at `base_url` whose requests time out after `timeout`.
    pub fn new(api_key: ApiKey, base_url: &str, timeout: Duration) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        Self::new(
            config.api_key.clone(),
            &config.api_base_url,
            config.timeout,
        )
    }

    /// Issues a request to `<base_url>/<resource>` and parses the JSON response body.
    ///
    /// Handles what every call has in common:
    /// - the `key` query parameter
    /// - status code validation, with the response body included in the error
    /// - JSON decoding into `T`
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        resource: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .request(method.clone(), &url)
            .query(query_params)
            .query(&[("key", self.api_key.expose())])
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, resource))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} {} request failed with status {}: {}",
                method,
                resource,
                status_code,
                error_text
            ));
        }

        response
            .json()
            .await
            .with_context(|| format!("parse YouTube {resource} API response as JSON"))
    }

    /// Looks up a channel through `channels.list`, filtered by one of `forHandle` or
    /// `forUsername`.
    async fn lookup_channel(&self, filter: &str, value: &str) -> eyre::Result<ChannelListResponse> {
        let query_params = [("part", "id"), (filter, value)];
        let channels: ChannelListResponse = self
            .make_request(Method::GET, "channels", &query_params)
            .await?;

        tracing::debug!(
            filter,
            value,
            returned_items = channels.items.len(),
            "looked up channel"
        );

        Ok(channels)
    }
}

impl DataApi for YouTubeClient {
    /// Calls `channels.list` with `forHandle`.
    ///
    /// The handle is sent with its leading `@`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn channels_for_handle(&self, handle: &str) -> eyre::Result<ChannelListResponse> {
        let handle = format!("@{}", handle.trim_start_matches('@'));
        self.lookup_channel("forHandle", &handle).await
    }

    /// Calls `channels.list` with `forUsername`, for legacy `/user/` and `/c/` URLs.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn channels_for_username(&self, username: &str) -> eyre::Result<ChannelListResponse> {
        self.lookup_channel("forUsername", username).await
    }

    /// Calls `search.list` for one page of a channel's uploads, newest first.
    ///
    /// Search costs 100 quota units per page, so pages are always as large as the API
    /// allows.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    async fn search_channel_videos(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        let max_results_string = MAX_RESULTS_PER_PAGE.to_string();
        let mut query_params = vec![
            ("part", "id"),
            ("channelId", channel_id),
            ("order", "date"),
            ("maxResults", max_results_string.as_str()),
        ];

        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let results: SearchListResponse = self
            .make_request(Method::GET, "search", &query_params)
            .await?;

        tracing::debug!(
            channel_id,
            total_results = results.page_info.total_results,
            returned_items = results.items.len(),
            has_next_page = results.next_page_token.is_some(),
            "fetched search page"
        );

        Ok(results)
    }

    /// Calls `videos.list` for the snippet, content details and statistics of one video.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    async fn video_details(&self, video_id: &str) -> eyre::Result<VideoListResponse> {
        let query_params = [
            ("part", "snippet,contentDetails,statistics"),
            ("id", video_id),
        ];

        let videos: VideoListResponse = self
            .make_request(Method::GET, "videos", &query_params)
            .await?;

        tracing::trace!(
            video_id,
            returned_items = videos.items.len(),
            "fetched video details"
        );

        Ok(videos)
    }
}
