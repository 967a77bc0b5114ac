// src/domain/video/value_objects.rs
//
// Video reference value objects.
//
// A lesson stores whatever the editor typed into its video field. Before
// rendering, that text is resolved into one of these values. They carry no
// behavior beyond classification helpers and are cheap to clone.

use serde::{Deserialize, Serialize};
use url::Url;

/// Strip surrounding whitespace and byte order marks from editor input.
///
/// Pasted text often carries a leading U+FEFF, which `str::trim` keeps.
pub fn trim_descriptor(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// ============================================================================
// VIDEO KIND
// ============================================================================

/// How a raw video descriptor was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoKind {
    /// Empty or whitespace-only input
    None,

    /// `<iframe>`/`<embed>` markup with a usable `src`
    Iframe,

    /// Embed markup without a `src` attribute
    Invalid,

    GoogleDrive,
    Youtube,
    Vimeo,

    /// Link to a video file, played natively
    Direct,

    /// Nothing recognised; passed through as-is
    Unknown,
}

impl VideoKind {
    pub const ALL: [VideoKind; 8] = [
        VideoKind::None,
        VideoKind::Iframe,
        VideoKind::Invalid,
        VideoKind::GoogleDrive,
        VideoKind::Youtube,
        VideoKind::Vimeo,
        VideoKind::Direct,
        VideoKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoKind::None => "none",
            VideoKind::Iframe => "iframe",
            VideoKind::Invalid => "invalid",
            VideoKind::GoogleDrive => "google-drive",
            VideoKind::Youtube => "youtube",
            VideoKind::Vimeo => "vimeo",
            VideoKind::Direct => "direct",
            VideoKind::Unknown => "unknown",
        }
    }

    /// True for the kinds that always yield a frame-ready URL
    pub fn is_embeddable(&self) -> bool {
        matches!(
            self,
            VideoKind::Iframe | VideoKind::GoogleDrive | VideoKind::Youtube | VideoKind::Vimeo
        )
    }
}

impl std::fmt::Display for VideoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RESOLVED VIDEO REFERENCE
// ============================================================================

/// The canonical, embeddable form of a video descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVideoReference {
    /// Value for the `src` of an embedded frame; empty when nothing was derived
    pub embeddable_url: String,

    pub classification: VideoKind,
}

impl ResolvedVideoReference {
    pub fn new(embeddable_url: impl Into<String>, classification: VideoKind) -> Self {
        Self {
            embeddable_url: embeddable_url.into(),
            classification,
        }
    }

    pub fn none() -> Self {
        Self::new(String::new(), VideoKind::None)
    }

    pub fn invalid() -> Self {
        Self::new(String::new(), VideoKind::Invalid)
    }

    /// True when there is nothing to embed (`none` or `invalid`)
    pub fn is_empty(&self) -> bool {
        self.embeddable_url.is_empty()
    }
}

// ============================================================================
// VIDEO PRESENTATION
// ============================================================================

/// What the presentation layer should render for a resolved reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VideoPresentation {
    /// Embedded frame with the given source
    Frame { src: String },

    /// Native `<video>` element for direct file links
    NativeVideo { src: String },

    /// Unrecognised but well-formed web address; offered as a plain link
    Link { href: String },

    /// Nothing playable; render the placeholder icon
    Placeholder,
}

impl VideoPresentation {
    pub fn for_reference(reference: &ResolvedVideoReference) -> Self {
        match reference.classification {
            VideoKind::None | VideoKind::Invalid => VideoPresentation::Placeholder,
            VideoKind::Direct => VideoPresentation::NativeVideo {
                src: reference.embeddable_url.clone(),
            },
            kind if kind.is_embeddable() => VideoPresentation::Frame {
                src: reference.embeddable_url.clone(),
            },
            _ if is_web_address(&reference.embeddable_url) => VideoPresentation::Link {
                href: reference.embeddable_url.clone(),
            },
            _ => VideoPresentation::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, VideoPresentation::Placeholder)
    }
}

/// Absolute http(s) URL with a host
fn is_web_address(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
