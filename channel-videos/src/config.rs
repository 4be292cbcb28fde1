//! Command-line and environment configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Export every public video of a list of YouTube channels.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Args {
    /// JSON file listing the channels to export, as `[{"name": ..., "url": ...}]`.
    #[arg(short, long, default_value = "channels.json")]
    pub channels: PathBuf,

    /// Where to write the report [default: youtube_channel_videos_<YYYYMMDD>.json].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// YouTube Data API key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the YouTube Data API.
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Timeout for each API request, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no YouTube API key given; set `YOUTUBE_API_KEY` or pass --api-key")]
    MissingCredential,
}

/// A YouTube Data API key.
///
/// Never printed, not even in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a key, rejecting one that is empty or only whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingCredential);
        }
        Ok(Self(key))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub api_base_url: String,
    pub timeout: Duration,
    pub channels_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = ApiKey::new(args.api_key.ok_or(ConfigError::MissingCredential)?)?;
        let output_path = args.output.unwrap_or_else(default_output_path);
        Ok(Self {
            api_key,
            api_base_url: args.api_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
            channels_path: args.channels,
            output_path,
        })
    }
}

/// `youtube_channel_videos_<YYYYMMDD>.json`, stamped with today's local date.
pub fn default_output_path() -> PathBuf {
    let today = jiff::Zoned::now().strftime("%Y%m%d");
    PathBuf::from(format!("youtube_channel_videos_{today}.json"))
}
