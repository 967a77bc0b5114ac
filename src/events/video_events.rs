// src/events/video_events.rs
//
// Video Resolution Events
//
// Emitted by the video resolution service so that interested components
// (editor previews, audit logs) can observe how lesson videos were
// interpreted without calling the resolver themselves.
//
// INVARIANTS:
// - Events are deterministic: no operational timestamp in the payload
// - Event IDs are derived from the input fingerprint
// - occurred_at() returns SENTINEL_TIMESTAMP (Unix epoch)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::{trim_descriptor, ResolvedVideoReference, VideoKind};
use crate::events::DomainEvent;

const SENTINEL_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

// ============================================================================
// FINGERPRINT
// ============================================================================

/// SHA-256 of the trimmed input, hex encoded.
/// Identical descriptors (modulo surrounding whitespace) share a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoFingerprint(String);

impl VideoFingerprint {
    pub fn of(input: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(trim_descriptor(input).as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn event_id(&self, event_type: &str) -> Uuid {
        let key = format!("{}:{}", event_type, self.0);
        Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
    }
}

impl std::fmt::Display for VideoFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// VIDEO REFERENCE RESOLVED
// ============================================================================

/// A descriptor was resolved to something other than `invalid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoReferenceResolved {
    pub fingerprint: VideoFingerprint,
    pub reference: ResolvedVideoReference,
}

impl VideoReferenceResolved {
    pub fn new(fingerprint: VideoFingerprint, reference: ResolvedVideoReference) -> Self {
        Self { fingerprint, reference }
    }
}

impl DomainEvent for VideoReferenceResolved {
    fn event_id(&self) -> Uuid {
        self.fingerprint.event_id(self.event_type())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "VideoReferenceResolved"
    }
}

// ============================================================================
// VIDEO REFERENCE REJECTED
// ============================================================================

/// Embed markup carried no usable `src`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoReferenceRejected {
    pub fingerprint: VideoFingerprint,
    pub description: String,
}

impl VideoReferenceRejected {
    pub fn new(fingerprint: VideoFingerprint, description: String) -> Self {
        Self { fingerprint, description }
    }
}

impl DomainEvent for VideoReferenceRejected {
    fn event_id(&self) -> Uuid {
        self.fingerprint.event_id(self.event_type())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "VideoReferenceRejected"
    }
}

// ============================================================================
// VIDEO BATCH RESOLVED
// ============================================================================

/// Summary emitted once per batch resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoBatchResolved {
    pub total: usize,

    /// One entry per kind that occurred, in `VideoKind::ALL` order
    pub counts: Vec<(VideoKind, usize)>,
}

impl VideoBatchResolved {
    pub fn from_references(references: &[ResolvedVideoReference]) -> Self {
        let counts = VideoKind::ALL
            .iter()
            .map(|kind| {
                let n = references
                    .iter()
                    .filter(|r| r.classification == *kind)
                    .count();
                (*kind, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect();

        Self {
            total: references.len(),
            counts,
        }
    }

    pub fn count_of(&self, kind: VideoKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    fn fingerprint(&self) -> String {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(kind, n)| format!("{}={}", kind, n))
            .collect();
        format!("batch:{}:{}", self.total, parts.join(","))
    }
}

impl DomainEvent for VideoBatchResolved {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint().as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "VideoBatchResolved"
    }
}
