//! Lists every video of a channel, newest first, with the details the report needs.

use crate::reference::ChannelId;
use crate::youtube_api::{DataApi, Page, PagedStream, SearchResult, Video};
use eyre::Context;
use jiff::civil::Date;
use jiff::fmt::temporal::SpanParser;
use jiff::tz::TimeZone;
use jiff::{SpanRelativeTo, Unit};
use serde::Serialize;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

/// What `normalize_duration` falls back to when a duration cannot be read.
pub const ZERO_DURATION: &str = "00:00:00";

/// Accepts ISO 8601 durations only, not jiff's friendly `1h 2m` format.
static DURATION_PARSER: SpanParser = SpanParser::new();

/// One row of a channel's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub title: String,
    /// The day the video was published, in UTC.
    pub published_date: Date,
    /// `HH:MM:SS`, see [`normalize_duration`].
    pub duration: String,
    pub view_count: u64,
    /// `https://www.youtube.com/watch?v=<id>`
    pub url: String,
}

impl VideoRecord {
    fn from_video(video: Video) -> Self {
        Self {
            url: watch_url(&video.id),
            title: video.snippet.title,
            published_date: video.snippet.published_at.to_zoned(TimeZone::UTC).date(),
            duration: normalize_duration(&video.content_details.duration),
            view_count: video.statistics.views(),
        }
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Converts an ISO 8601 duration like `PT1H2M3S` into zero-padded `HH:MM:SS` text.
///
/// Days count as 24 hours, and hours are not wrapped, so `P1DT1H` becomes `25:00:00`.
/// Fractional seconds are dropped. Anything that cannot be read as a non-negative
/// ISO 8601 duration of at most days (including `garbage`, `5 seconds`, `P1M` and
/// `-PT5S`) becomes [`ZERO_DURATION`].
pub fn normalize_duration(iso: &str) -> String {
    match duration_secs(iso) {
        Ok(secs) => {
            let (hours, rest) = (secs / 3600, secs % 3600);
            format!("{:02}:{:02}:{:02}", hours, rest / 60, rest % 60)
        }
        Err(e) => {
            tracing::debug!(duration = iso, "unreadable video duration: {:#}", e);
            ZERO_DURATION.to_string()
        }
    }
}

fn duration_secs(iso: &str) -> eyre::Result<u64> {
    let span = DURATION_PARSER
        .parse_span(iso)
        .context("parse ISO 8601 duration")?;
    let secs = span
        .total((Unit::Second, SpanRelativeTo::days_are_24_hours()))
        .context("convert duration to seconds")?;
    if secs < 0.0 {
        eyre::bail!("negative duration");
    }
    Ok(secs as u64)
}

/// Walks a channel's uploads through `search.list` and fetches each video's details.
#[derive(Debug, Clone)]
pub struct Enumerator<A> {
    api: A,
}

impl<A: DataApi + Sync> Enumerator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns a stream of the channel's videos, most recent first.
    ///
    /// Search results are requested a full page at a time. Results that are not videos
    /// (playlists, the channel itself) are skipped. Each remaining video costs one
    /// `videos.list` call; a video whose details cannot be fetched is left out and the
    /// stream moves on. A failed search request ends the stream early, as if it had been
    /// the last page. Nothing is retried.
    pub fn videos<'a>(&'a self, channel_id: &'a ChannelId) -> impl Stream<Item = VideoRecord> + 'a {
        PagedStream::new(move |page_token: Option<String>| async move {
            self.api
                .search_channel_videos(channel_id.as_str(), page_token.as_deref())
                .await
                .map(Page::from)
        })
        .filter_map(move |result: eyre::Result<SearchResult>| match result {
            Ok(result) => result.into_video_id(),
            Err(e) => {
                tracing::warn!(%channel_id, "search failed, ending channel early: {:#}", e);
                None
            }
        })
        .then(move |video_id| self.video_record(video_id))
        .filter_map(|record| record)
    }

    /// Collects [`Self::videos`] into a list.
    #[instrument(skip(self, channel_id), fields(channel_id = %channel_id))]
    pub async fn enumerate(&self, channel_id: &ChannelId) -> Vec<VideoRecord> {
        let mut records = Vec::new();
        let mut videos = std::pin::pin!(self.videos(channel_id));
        while let Some(record) = videos.next().await {
            records.push(record);
        }
        tracing::debug!(videos = records.len(), "enumerated channel");
        records
    }

    async fn video_record(&self, video_id: String) -> Option<VideoRecord> {
        let details = match self.api.video_details(&video_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(video_id, "skipping video, details unavailable: {:#}", e);
                return None;
            }
        };

        let Some(video) = details.items.into_iter().find(|video| video.id == video_id) else {
            tracing::info!(video_id, "skipping video, no details returned");
            return None;
        };

        Some(VideoRecord::from_video(video))
    }
}
