//! YouTube Videos API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains the [`Video`] resources for the requested IDs. IDs of deleted or private
/// videos are silently omitted, so a single-ID lookup may come back with no items.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// Only the `snippet`, `contentDetails` and `statistics` parts are requested.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    pub snippet: VideoSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// Basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The date and time that the video was published.
    ///
    /// This may differ from the upload time, e.g. for videos uploaded as private and made
    /// public later.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}

/// Information about the video content.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The length of the video as an ISO 8601 duration, e.g. `PT15M33S`.
    ///
    /// Kept as text so that an unusual or missing value never fails the whole record.
    #[serde(default)]
    pub duration: String,
}

/// Statistics about the video.
///
/// The API encodes all counters as decimal strings.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    ///
    /// Missing when the owner has hidden it.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

impl VideoStatistics {
    /// The view count as a number, treating a hidden or unparsable count as zero.
    pub fn views(&self) -> u64 {
        self.view_count
            .as_deref()
            .and_then(|count| count.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_video_details() {
        let response: VideoListResponse = serde_json::from_str(
            r#"{
                "kind": "youtube#videoListResponse",
                "etag": "x",
                "items": [{
                    "kind": "youtube#video",
                    "etag": "y",
                    "id": "dQw4w9WgXcQ",
                    "snippet": {
                        "publishedAt": "2009-10-25T06:57:33Z",
                        "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                        "title": "Never Gonna Give You Up",
                        "description": "..."
                    },
                    "contentDetails": { "duration": "PT3M33S", "dimension": "2d" },
                    "statistics": { "viewCount": "1500000000", "likeCount": "17000000" }
                }],
                "pageInfo": { "totalResults": 1, "resultsPerPage": 1 }
            }"#,
        )
        .unwrap();

        let video = &response.items[0];
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert_eq!(video.snippet.title, "Never Gonna Give You Up");
        assert_eq!(
            video.snippet.published_at,
            "2009-10-25T06:57:33Z".parse::<Timestamp>().unwrap()
        );
        assert_eq!(video.content_details.duration, "PT3M33S");
        assert_eq!(video.statistics.views(), 1_500_000_000);
    }

    #[test]
    fn hidden_view_count_is_zero() {
        let stats: VideoStatistics = serde_json::from_str(r#"{ "likeCount": "3" }"#).unwrap();
        assert_eq!(stats.views(), 0);

        let stats: VideoStatistics = serde_json::from_str(r#"{ "viewCount": "lots" }"#).unwrap();
        assert_eq!(stats.views(), 0);
    }

    #[test]
    fn missing_duration_is_empty() {
        let details: VideoContentDetails =
            serde_json::from_str(r#"{ "dimension": "2d" }"#).unwrap();
        assert_eq!(details.duration, "");
    }

    #[test]
    fn missing_items_is_empty() {
        let response: VideoListResponse = serde_json::from_str(
            r#"{ "kind": "youtube#videoListResponse", "etag": "x", "items": [] }"#,
        )
        .unwrap();
        assert!(response.items.is_empty());
    }
}
