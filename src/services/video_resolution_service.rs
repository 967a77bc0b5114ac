// src/services/video_resolution_service.rs
//
// Video Resolution Service
//
// Turns whatever an editor pasted into a lesson's video field into a
// canonical, embeddable reference.
//
// CRITICAL RULES:
// - Resolution never fails; unrecognised input is passed through
// - Deterministic: same input → same output
// - Idempotent: canonical outputs resolve to themselves
// - No I/O; the only side effect of the service is event emission
// - Rules are evaluated in a fixed order, first match wins

use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{trim_descriptor, ResolvedVideoReference, VideoKind};
use crate::events::{
    EventBus, VideoBatchResolved, VideoFingerprint, VideoReferenceRejected,
    VideoReferenceResolved,
};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIMEO_PLAYER_BASE: &str = "https://player.vimeo.com/video/";
const DRIVE_FILE_BASE: &str = "https://drive.google.com/file/d/";

static DEFAULT_RULES: Lazy<VideoResolutionRules> = Lazy::new(VideoResolutionRules::default);

/// Resolve a free-form video descriptor with the default rules.
pub fn resolve(input: &str) -> ResolvedVideoReference {
    DEFAULT_RULES.resolve(input)
}

/// YouTube-only canonicalisation used by the course viewer.
pub fn youtube_embed_url(input: &str) -> String {
    DEFAULT_RULES.youtube_embed_url(input)
}

// ============================================================================
// VIDEO RESOLUTION SERVICE
// ============================================================================

pub struct VideoResolutionService {
    event_bus: Arc<EventBus>,
    emit_events: bool,
}

impl VideoResolutionService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            event_bus,
            emit_events: true,
        }
    }

    pub fn with_events(mut self, emit_events: bool) -> Self {
        self.emit_events = emit_events;
        self
    }

    /// Resolve one descriptor and announce the outcome
    pub fn resolve(&self, input: &str) -> ResolvedVideoReference {
        let reference = resolve(input);
        self.emit_resolution_event(input, &reference);
        reference
    }

    pub fn youtube_embed_url(&self, input: &str) -> String {
        youtube_embed_url(input)
    }

    /// Resolve many descriptors in order, followed by one summary event
    pub fn resolve_batch<I, S>(&self, inputs: I) -> Vec<ResolvedVideoReference>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let references: Vec<ResolvedVideoReference> = inputs
            .into_iter()
            .map(|input| self.resolve(input.as_ref()))
            .collect();

        if self.emit_events {
            self.event_bus
                .emit(VideoBatchResolved::from_references(&references));
        }
        references
    }

    fn emit_resolution_event(&self, input: &str, reference: &ResolvedVideoReference) {
        if !self.emit_events {
            return;
        }

        let fingerprint = VideoFingerprint::of(input);
        match reference.classification {
            VideoKind::Invalid => {
                self.event_bus.emit(VideoReferenceRejected::new(
                    fingerprint,
                    "Embed markup has no src attribute".to_string(),
                ));
            }
            _ => {
                self.event_bus
                    .emit(VideoReferenceResolved::new(fingerprint, reference.clone()));
            }
        }
    }
}

// ============================================================================
// VIDEO RESOLUTION RULES (DETERMINISTIC, ORDERED)
// ============================================================================

/// Compiled patterns for every supported video source.
pub struct VideoResolutionRules {
    /// First `src="..."` / `src='...'` inside embed markup
    embed_src: Regex,

    /// Drive file id: `/d/<id>`
    drive_file_id: Regex,

    /// YouTube id extractors, applied in order; the last match wins
    youtube_watch: Regex,
    youtube_short: Regex,
    youtube_embed: Regex,

    /// Numeric Vimeo id, on the public page or the player URL
    vimeo_id: Regex,

    /// Direct file extension, optionally followed by a query string
    direct_file: Regex,
}

impl Default for VideoResolutionRules {
    fn default() -> Self {
        Self {
            embed_src: Regex::new(r#"src=["']([^"']+)["']"#).unwrap(),
            drive_file_id: Regex::new(r"/d/([a-zA-Z0-9_-]+)").unwrap(),
            // youtube.com/watch?v=ID&...
            youtube_watch: Regex::new(r"youtube\.com/watch\?v=([^&]+)").unwrap(),
            // youtu.be/ID?t=5
            youtube_short: Regex::new(r"youtu\.be/([^?&]+)").unwrap(),
            // youtube.com/embed/ID?...
            youtube_embed: Regex::new(r"youtube\.com/embed/([^?&]+)").unwrap(),
            // vimeo.com/123, player.vimeo.com/video/123
            vimeo_id: Regex::new(r"vimeo\.com/(?:video/)?([0-9]+)").unwrap(),
            direct_file: Regex::new(r"(?i)\.(mp4|webm|ogg|mov)(\?|$)").unwrap(),
        }
    }
}

impl VideoResolutionRules {
    /// Classify and normalise a video descriptor.
    pub fn resolve(&self, input: &str) -> ResolvedVideoReference {
        let trimmed = trim_descriptor(input);
        let reference = self.resolve_trimmed(trimmed);
        debug!(
            "Resolved video reference as {} ({} bytes in)",
            reference.classification,
            trimmed.len()
        );
        reference
    }

    fn resolve_trimmed(&self, trimmed: &str) -> ResolvedVideoReference {
        if trimmed.is_empty() {
            return ResolvedVideoReference::none();
        }

        if is_embed_markup(trimmed) {
            return self.resolve_markup(trimmed);
        }

        if trimmed.contains("drive.google.com") {
            return self.resolve_google_drive(trimmed);
        }

        if is_youtube_domain(trimmed) {
            if trimmed.contains("youtube.com/embed/") {
                return ResolvedVideoReference::new(trimmed, VideoKind::Youtube);
            }
            if let Some(id) = self.extract_youtube_id(trimmed) {
                return ResolvedVideoReference::new(youtube_embed(id), VideoKind::Youtube);
            }
            // No id: continue with the generic rules below
        }

        if trimmed.contains("vimeo.com") {
            if let Some(id) = self.capture(&self.vimeo_id, trimmed) {
                return ResolvedVideoReference::new(
                    format!("{}{}", VIMEO_PLAYER_BASE, id),
                    VideoKind::Vimeo,
                );
            }
        }

        if self.direct_file.is_match(trimmed) {
            return ResolvedVideoReference::new(trimmed, VideoKind::Direct);
        }

        ResolvedVideoReference::new(trimmed, VideoKind::Unknown)
    }

    fn resolve_markup(&self, markup: &str) -> ResolvedVideoReference {
        match self.capture(&self.embed_src, markup) {
            Some(src) => ResolvedVideoReference::new(src, VideoKind::Iframe),
            None => {
                warn!("Embed markup without src attribute; nothing to embed");
                ResolvedVideoReference::invalid()
            }
        }
    }

    fn resolve_google_drive(&self, trimmed: &str) -> ResolvedVideoReference {
        match self.capture(&self.drive_file_id, trimmed) {
            Some(id) => ResolvedVideoReference::new(
                format!("{}{}/preview", DRIVE_FILE_BASE, id),
                VideoKind::GoogleDrive,
            ),
            None => ResolvedVideoReference::new(trimmed, VideoKind::GoogleDrive),
        }
    }

    /// Canonical YouTube embed URL, or the trimmed input when no rule applies.
    pub fn youtube_embed_url(&self, input: &str) -> String {
        let trimmed = trim_descriptor(input);
        if trimmed.is_empty() {
            return String::new();
        }
        if trimmed.contains("youtube.com/embed/") {
            return trimmed.to_string();
        }
        match self.extract_youtube_id(trimmed) {
            Some(id) => youtube_embed(id),
            None => trimmed.to_string(),
        }
    }

    /// Video id from watch, short-link or embed URLs.
    ///
    /// All three patterns are tried; a later match replaces an earlier one.
    pub fn extract_youtube_id<'a>(&self, text: &'a str) -> Option<&'a str> {
        [&self.youtube_watch, &self.youtube_short, &self.youtube_embed]
            .into_iter()
            .filter_map(|pattern| self.capture(pattern, text))
            .last()
    }

    fn capture<'a>(&self, pattern: &Regex, text: &'a str) -> Option<&'a str> {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

fn is_embed_markup(trimmed: &str) -> bool {
    trimmed.starts_with("<iframe") || trimmed.starts_with("<embed")
}

fn is_youtube_domain(trimmed: &str) -> bool {
    trimmed.contains("youtube.com") || trimmed.contains("youtu.be")
}

fn youtube_embed(id: &str) -> String {
    format!("{}{}", YOUTUBE_EMBED_BASE, id)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_blank_input_is_none() {
        for input in ["", "   ", "\n\t "] {
            let reference = resolve(input);
            assert_eq!(reference.classification, VideoKind::None);
            assert_eq!(reference.embeddable_url, "");
        }
    }

    #[test]
    fn test_iframe_src_extraction() {
        let reference = resolve(r#"<iframe src="https://x.com/v"></iframe>"#);
        assert_eq!(reference, ResolvedVideoReference::new("https://x.com/v", VideoKind::Iframe));

        let single = resolve("<embed width='640' src='https://cdn.test/movie'>");
        assert_eq!(single.classification, VideoKind::Iframe);
        assert_eq!(single.embeddable_url, "https://cdn.test/movie");
    }

    #[test]
    fn test_iframe_without_src_is_invalid() {
        let reference = resolve("<iframe></iframe>");
        assert_eq!(reference.classification, VideoKind::Invalid);
        assert_eq!(reference.embeddable_url, "");
    }

    #[test]
    fn test_markup_branch_stops_evaluation() {
        // Would otherwise be a YouTube watch URL
        let reference = resolve(r#"<iframe data="youtube.com/watch?v=abc"></iframe>"#);
        assert_eq!(reference.classification, VideoKind::Invalid);
    }

    #[test]
    fn test_markup_opener_is_case_sensitive() {
        let reference = resolve(r#"<IFRAME src="https://x.com/v"></IFRAME>"#);
        assert_eq!(reference.classification, VideoKind::Unknown);
    }

    #[test]
    fn test_youtube_forms() {
        let watch = resolve("https://www.youtube.com/watch?v=abc123");
        assert_eq!(watch.classification, VideoKind::Youtube);
        assert_eq!(watch.embeddable_url, "https://www.youtube.com/embed/abc123");

        let watch_params = resolve("https://www.youtube.com/watch?v=abc123&list=PL9&t=10");
        assert_eq!(watch_params.embeddable_url, "https://www.youtube.com/embed/abc123");

        let short = resolve("https://youtu.be/abc123?t=5");
        assert_eq!(short.classification, VideoKind::Youtube);
        assert_eq!(short.embeddable_url, "https://www.youtube.com/embed/abc123");

        let embed = resolve("https://youtube.com/embed/abc123");
        assert_eq!(embed.classification, VideoKind::Youtube);
        assert_eq!(embed.embeddable_url, "https://youtube.com/embed/abc123");
    }

    #[test]
    fn test_youtube_later_pattern_wins() {
        let rules = VideoResolutionRules::default();
        let mixed = "https://youtube.com/watch?v=first&next=https://youtu.be/second";
        assert_eq!(rules.extract_youtube_id(mixed), Some("second"));
    }

    #[test]
    fn test_youtube_without_id_falls_through() {
        let channel = resolve("https://www.youtube.com/channel/UC123");
        assert_eq!(channel.classification, VideoKind::Unknown);
        assert_eq!(channel.embeddable_url, "https://www.youtube.com/channel/UC123");

        let file = resolve("https://youtube.com/attachments/intro.mp4");
        assert_eq!(file.classification, VideoKind::Direct);
    }

    #[test]
    fn test_vimeo() {
        let reference = resolve("https://vimeo.com/123456");
        assert_eq!(reference.classification, VideoKind::Vimeo);
        assert_eq!(reference.embeddable_url, "https://player.vimeo.com/video/123456");

        let no_id = resolve("https://vimeo.com/channels/staffpicks");
        assert_eq!(no_id.classification, VideoKind::Unknown);
    }

    #[test]
    fn test_vimeo_id_is_ascii_digits_only() {
        let arabic_indic = "https://vimeo.com/\u{661}\u{662}\u{663}";
        let reference = resolve(arabic_indic);
        assert_eq!(reference.classification, VideoKind::Unknown);
        assert_eq!(reference.embeddable_url, arabic_indic);
    }

    #[test]
    fn test_google_drive() {
        let reference = resolve("https://drive.google.com/file/d/XYZ789/view");
        assert_eq!(reference.classification, VideoKind::GoogleDrive);
        assert_eq!(reference.embeddable_url, "https://drive.google.com/file/d/XYZ789/preview");

        let folder = resolve("https://drive.google.com/drive/folders");
        assert_eq!(folder.classification, VideoKind::GoogleDrive);
        assert_eq!(folder.embeddable_url, "https://drive.google.com/drive/folders");
    }

    #[test]
    fn test_drive_takes_priority_over_youtube() {
        let reference = resolve("https://drive.google.com/file/d/A_b-9/view?from=youtube.com");
        assert_eq!(reference.classification, VideoKind::GoogleDrive);
        assert_eq!(reference.embeddable_url, "https://drive.google.com/file/d/A_b-9/preview");
    }

    #[test]
    fn test_direct_files() {
        let reference = resolve("https://example.com/clip.mp4?x=1");
        assert_eq!(reference.classification, VideoKind::Direct);
        assert_eq!(reference.embeddable_url, "https://example.com/clip.mp4?x=1");

        assert_eq!(resolve("https://cdn.test/a.WEBM").classification, VideoKind::Direct);
        assert_eq!(resolve("/media/intro.mov").classification, VideoKind::Direct);
        assert_eq!(resolve("https://cdn.test/a.mp4#t=3").classification, VideoKind::Unknown);
        assert_eq!(resolve("https://cdn.test/a.mp4x").classification, VideoKind::Unknown);
    }

    #[test]
    fn test_unknown_passthrough_is_trimmed() {
        let reference = resolve("  not a url at all \n");
        assert_eq!(reference.classification, VideoKind::Unknown);
        assert_eq!(reference.embeddable_url, "not a url at all");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(resolve("\u{feff}"), ResolvedVideoReference::none());
        assert_eq!(resolve(" \u{feff}\n"), ResolvedVideoReference::none());

        let markup = resolve("\u{feff}<iframe src=\"https://x.com/v\"></iframe>");
        assert_eq!(markup, ResolvedVideoReference::new("https://x.com/v", VideoKind::Iframe));

        assert_eq!(youtube_embed_url("\u{feff}https://youtu.be/abc123"), "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_youtube_embed_url_variant() {
        assert_eq!(youtube_embed_url(""), "");
        assert_eq!(youtube_embed_url("   "), "");
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(
            youtube_embed_url("https://youtube.com/embed/abc123?start=4"),
            "https://youtube.com/embed/abc123?start=4"
        );
        assert_eq!(youtube_embed_url("https://vimeo.com/1"), "https://vimeo.com/1");
    }

    #[test]
    fn test_service_emits_events() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_resolved = Arc::clone(&seen);
        bus.subscribe::<VideoReferenceResolved, _>(move |event| {
            seen_resolved
                .lock()
                .unwrap()
                .push(event.reference.classification.to_string());
        });
        let seen_rejected = Arc::clone(&seen);
        bus.subscribe::<VideoReferenceRejected, _>(move |_| {
            seen_rejected.lock().unwrap().push("rejected".to_string());
        });

        let service = VideoResolutionService::new(Arc::clone(&bus));
        service.resolve("https://vimeo.com/42");
        service.resolve("<iframe></iframe>");
        service.resolve("");

        assert_eq!(*seen.lock().unwrap(), vec!["vimeo", "rejected", "none"]);
    }

    #[test]
    fn test_service_batch_summary() {
        let bus = Arc::new(EventBus::new());
        let summary = Arc::new(Mutex::new(None));
        let summary_clone = Arc::clone(&summary);
        bus.subscribe::<VideoBatchResolved, _>(move |event| {
            *summary_clone.lock().unwrap() = Some(event.clone());
        });

        let service = VideoResolutionService::new(Arc::clone(&bus));
        let refs = service.resolve_batch(["https://youtu.be/a", "https://youtu.be/b", "x"]);

        assert_eq!(refs.len(), 3);
        let summary = summary.lock().unwrap().clone().unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count_of(VideoKind::Youtube), 2);
        assert_eq!(summary.count_of(VideoKind::Unknown), 1);
    }

    #[test]
    fn test_service_events_can_be_disabled() {
        let bus = Arc::new(EventBus::new());
        let service = VideoResolutionService::new(Arc::clone(&bus)).with_events(false);

        service.resolve_batch(["https://vimeo.com/1"]);

        assert!(bus.get_event_log().is_empty());
    }
}
