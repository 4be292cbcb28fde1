//! Channel references as users write them, and the canonical IDs they resolve to.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/@([\w-]+)").expect("valid regex"));
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/(?:c|user)/([\w-]+)").expect("valid regex"));
static CHANNEL_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/channel/([\w-]+)").expect("valid regex"));
static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC[A-Za-z0-9_-]{22}$").expect("valid regex"));

/// A channel as given in the channel list, e.g. `https://www.youtube.com/@GoogleDevelopers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReference(String);

impl ChannelReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies this reference. See [`ReferenceKind::classify`].
    pub fn kind(&self) -> ReferenceKind {
        ReferenceKind::classify(&self.0)
    }
}

impl fmt::Display for ChannelReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The recognized shapes of a [`ChannelReference`], with the part that identifies the
/// channel pulled out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `youtube.com/@<handle>`. The handle is stored without its `@`.
    Handle(String),
    /// `youtube.com/c/<name>` or `youtube.com/user/<name>`.
    Username(String),
    /// `youtube.com/channel/<id>`. Already canonical.
    ChannelPath(String),
    /// A channel ID on its own, e.g. `UC_x5XG1OV2P6uZZ5FSM9Ttw`. Already canonical.
    BareId(String),
    /// None of the above.
    Unrecognized,
}

impl ReferenceKind {
    /// Classifies a reference.
    ///
    /// The shapes are tried in declaration order and the first match wins, so a URL that
    /// somehow contains both a handle and a `/channel/` segment is a handle.
    pub fn classify(reference: &str) -> Self {
        fn capture(re: &Regex, reference: &str) -> Option<String> {
            re.captures(reference)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
        }

        let reference = reference.trim();
        if let Some(handle) = capture(&HANDLE, reference) {
            Self::Handle(handle)
        } else if let Some(username) = capture(&USERNAME, reference) {
            Self::Username(username)
        } else if let Some(id) = capture(&CHANNEL_PATH, reference) {
            Self::ChannelPath(id)
        } else if BARE_ID.is_match(reference) {
            Self::BareId(reference.to_string())
        } else {
            Self::Unrecognized
        }
    }
}

/// The canonical ID YouTube uses for a channel, e.g. `UC_x5XG1OV2P6uZZ5FSM9Ttw`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
