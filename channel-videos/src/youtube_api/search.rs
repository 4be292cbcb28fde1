//! YouTube Search API types.

use crate::youtube_api::types::{Page, PageInfo};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The `id.kind` of search results that refer to a video.
pub const VIDEO_KIND: &str = "youtube#video";

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// The search results, in the requested order.
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A search result, requested with `part=id` only.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

/// Identifies the resource that matched the search request.
///
/// Exactly one of the ID fields is set, depending on `kind`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    /// The type of the matched resource, e.g. `youtube#video` or `youtube#playlist`.
    pub kind: String,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

impl SearchResult {
    /// The video ID, if this result is a video.
    pub fn into_video_id(self) -> Option<String> {
        if self.id.kind == VIDEO_KIND {
            self.id.video_id
        } else {
            None
        }
    }
}

impl From<SearchListResponse> for Page<SearchResult> {
    fn from(response: SearchListResponse) -> Self {
        Page {
            items: response.items,
            next_page_token: response.next_page_token,
        }
    }
}
