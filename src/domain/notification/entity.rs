use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

impl ToastKind {
    /// Case-insensitive lookup by display name
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Some(ToastKind::Success),
            "error" => Some(ToastKind::Error),
            "info" => Some(ToastKind::Info),
            _ => None,
        }
    }
}

/// A transient notification shown until dismissed or expired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Monotonic per notification center, starting at 1
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub raised_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl Toast {
    /// Saturates at the latest representable instant for huge durations
    pub fn expires_at(&self) -> DateTime<Utc> {
        i64::try_from(self.duration_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .and_then(|duration| self.raised_at.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() <= now
    }
}

/// Why a toast left the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Closed by the user
    User,
    /// Display duration elapsed
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry_boundary() {
        let raised_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let toast = Toast {
            id: 1,
            message: "Saved".to_string(),
            kind: ToastKind::Success,
            raised_at,
            duration_ms: 4000,
        };

        assert!(!toast.is_expired(raised_at + Duration::milliseconds(3999)));
        assert!(toast.is_expired(raised_at + Duration::milliseconds(4000)));
    }

    #[test]
    fn test_huge_duration_never_expires() {
        let raised_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let toast = Toast {
            id: 1,
            message: "Pinned".to_string(),
            kind: ToastKind::Info,
            raised_at,
            duration_ms: u64::MAX,
        };

        assert_eq!(toast.expires_at(), DateTime::<Utc>::MAX_UTC);
        assert!(!toast.is_expired(raised_at + Duration::days(365 * 100)));
    }

    #[test]
    fn test_kind_defaults_to_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Error.to_string(), "error");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ToastKind::parse(" Error "), Some(ToastKind::Error));
        assert_eq!(ToastKind::parse("success"), Some(ToastKind::Success));
        assert_eq!(ToastKind::parse("warning"), None);
    }
}
