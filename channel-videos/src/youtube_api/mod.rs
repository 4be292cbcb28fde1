//! YouTube Data API v3 client library.
//!
//! Only the three read-only endpoints needed to list a channel's videos are covered:
//!
//! - `channels.list`, to turn a handle or legacy username into a channel ID
//! - `search.list`, to page through a channel's uploads newest first
//! - `videos.list`, for the details the search results lack (title, publish time,
//!   duration and view count)
//!
//! The [`DataApi`] trait is the seam between these endpoints and the rest of the crate.
//! [`YouTubeClient`] implements it over HTTP.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_channel_videos::config::ApiKey;
//! use youtube_channel_videos::youtube_api::{DataApi, YouTubeClient};
//! use std::time::Duration;
//!
//! # async fn example() -> eyre::Result<()> {
//! let key = ApiKey::new(std::env::var("YOUTUBE_API_KEY")?)?;
//! let client = YouTubeClient::new(key, "https://www.googleapis.com/youtube/v3", Duration::from_secs(30))?;
//!
//! let channels = client.channels_for_handle("GoogleDevelopers").await?;
//! for channel in channels.items {
//!     println!("channel id: {}", channel.id);
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;

pub mod channels;
pub mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod search;
pub mod types;
pub mod videos;

pub use client::YouTubeClient;
pub use types::{MAX_RESULTS_PER_PAGE, Page, PageInfo, PagedStream};

pub use channels::{Channel, ChannelListResponse};
pub use search::{SearchListResponse, SearchResult, SearchResultId};
pub use videos::{Video, VideoListResponse, VideoStatistics};

/// The YouTube Data API calls needed to enumerate a channel's videos.
///
/// Each method is a single request. Errors cover transport failures, non-success status
/// codes and undecodable bodies alike; callers decide how much of that to tolerate.
pub trait DataApi {
    /// `channels.list` filtered by handle (with or without the leading `@`).
    fn channels_for_handle(
        &self,
        handle: &str,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send;

    /// `channels.list` filtered by legacy username.
    fn channels_for_username(
        &self,
        username: &str,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send;

    /// One page of `search.list` over a channel, newest first, as many results per page as
    /// the API allows.
    fn search_channel_videos(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<SearchListResponse>> + Send;

    /// `videos.list` for a single video ID.
    fn video_details(
        &self,
        video_id: &str,
    ) -> impl Future<Output = eyre::Result<VideoListResponse>> + Send;
}

impl<A: DataApi> DataApi for &A {
    fn channels_for_handle(
        &self,
        handle: &str,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send {
        (**self).channels_for_handle(handle)
    }

    fn channels_for_username(
        &self,
        username: &str,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send {
        (**self).channels_for_username(username)
    }

    fn search_channel_videos(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<SearchListResponse>> + Send {
        (**self).search_channel_videos(channel_id, page_token)
    }

    fn video_details(
        &self,
        video_id: &str,
    ) -> impl Future<Output = eyre::Result<VideoListResponse>> + Send {
        (**self).video_details(video_id)
    }
}
