//! In-memory [`DataApi`] for tests.

use super::{
    Channel, ChannelListResponse, DataApi, PageInfo, SearchListResponse, SearchResult,
    SearchResultId, Video, VideoListResponse, VideoStatistics,
    search::VIDEO_KIND,
    videos::{VideoContentDetails, VideoSnippet},
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// One `search.list` page: result stubs as `(kind, id)` plus the next cursor.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakePage {
    pub(crate) results: Vec<(&'static str, String)>,
    pub(crate) next_page_token: Option<String>,
}

impl FakePage {
    pub(crate) fn videos(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            results: ids.into_iter().map(|id| (VIDEO_KIND, id)).collect(),
            next_page_token: None,
        }
    }

    pub(crate) fn then(mut self, cursor: &str) -> Self {
        self.next_page_token = Some(cursor.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakeVideo {
    pub(crate) title: String,
    pub(crate) published_at: &'static str,
    pub(crate) duration: &'static str,
    pub(crate) view_count: Option<&'static str>,
}

impl FakeVideo {
    pub(crate) fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            published_at: "2024-03-01T12:00:00Z",
            duration: "PT4M5S",
            view_count: Some("10"),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub(crate) handles: HashMap<String, String>,
    pub(crate) usernames: HashMap<String, String>,
    /// Keyed by `(channel id, page token)`.
    pub(crate) pages: HashMap<(String, Option<String>), FakePage>,
    pub(crate) videos: HashMap<String, FakeVideo>,
    /// Video IDs whose detail lookup fails outright.
    pub(crate) broken_videos: HashSet<String>,
    /// Channel IDs whose search fails outright.
    pub(crate) broken_channels: HashSet<String>,
    /// Handles whose `channels.list` lookup fails outright.
    pub(crate) broken_handles: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn with_page(
        mut self,
        channel_id: &str,
        cursor: Option<&str>,
        page: FakePage,
    ) -> Self {
        self.pages
            .insert((channel_id.to_string(), cursor.map(str::to_string)), page);
        self
    }

    pub(crate) fn with_video(mut self, id: &str, video: FakeVideo) -> Self {
        self.videos.insert(id.to_string(), video);
        self
    }

    /// Every call made so far, as `endpoint:argument` strings.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn channel_list(id: Option<&String>) -> ChannelListResponse {
        ChannelListResponse {
            kind: "youtube#channelListResponse".to_string(),
            items: id.map(|id| Channel { id: id.clone() }).into_iter().collect(),
            page_info: PageInfo::default(),
        }
    }
}

impl DataApi for FakeApi {
    async fn channels_for_handle(&self, handle: &str) -> eyre::Result<ChannelListResponse> {
        self.record(format!("handle:{handle}"));
        if self.broken_handles.contains(handle) {
            eyre::bail!("YouTube API GET channels request failed with status 503");
        }
        Ok(Self::channel_list(self.handles.get(handle)))
    }

    async fn channels_for_username(&self, username: &str) -> eyre::Result<ChannelListResponse> {
        self.record(format!("username:{username}"));
        Ok(Self::channel_list(self.usernames.get(username)))
    }

    async fn search_channel_videos(
        &self,
        channel_id: &str,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        self.record(format!("search:{channel_id}:{}", page_token.unwrap_or("-")));
        if self.broken_channels.contains(channel_id) {
            eyre::bail!("search failed for {channel_id}");
        }

        let key = (channel_id.to_string(), page_token.map(str::to_string));
        let page = self.pages.get(&key).cloned().unwrap_or_default();
        Ok(SearchListResponse {
            kind: "youtube#searchListResponse".to_string(),
            items: page
                .results
                .into_iter()
                .map(|(kind, id)| SearchResult {
                    id: SearchResultId {
                        kind: kind.to_string(),
                        video_id: (kind == VIDEO_KIND).then(|| id.clone()),
                        channel_id: (kind == "youtube#channel").then(|| id.clone()),
                        playlist_id: (kind == "youtube#playlist").then(|| id.clone()),
                    },
                })
                .collect(),
            page_info: PageInfo::default(),
            next_page_token: page.next_page_token,
        })
    }

    async fn video_details(&self, video_id: &str) -> eyre::Result<VideoListResponse> {
        self.record(format!("video:{video_id}"));
        if self.broken_videos.contains(video_id) {
            eyre::bail!("connection reset while fetching {video_id}");
        }

        let items = self
            .videos
            .get(video_id)
            .map(|video| -> eyre::Result<Video> {
                Ok(Video {
                    id: video_id.to_string(),
                    snippet: VideoSnippet {
                        title: video.title.clone(),
                        published_at: video.published_at.parse()?,
                    },
                    content_details: VideoContentDetails {
                        duration: video.duration.to_string(),
                    },
                    statistics: VideoStatistics {
                        view_count: video.view_count.map(str::to_string),
                    },
                })
            })
            .transpose()?
            .into_iter()
            .collect();

        Ok(VideoListResponse {
            kind: "youtube#videoListResponse".to_string(),
            items,
            page_info: PageInfo::default(),
        })
    }
}
