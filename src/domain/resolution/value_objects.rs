// src/domain/resolution/value_objects.rs
//
// Resolution Value Objects
//
// The outcome of resolving one scanned code. Created per scan,
// never persisted.

use serde::{Deserialize, Serialize};

/// The outcome of resolving a scanned code against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// No record for this code
    NotFound,

    /// Record exists but its release date is in the future (or unreadable)
    Locked { date: String },

    /// Record is available; the url is ready to embed
    Unlocked { normalized_url: String },
}

impl ResolutionOutcome {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, ResolutionOutcome::Unlocked { .. })
    }

    /// The embeddable url, if unlocked
    pub fn normalized_url(&self) -> Option<&str> {
        match self {
            ResolutionOutcome::Unlocked { normalized_url } => Some(normalized_url),
            _ => None,
        }
    }

    /// Short tag used in logs and events
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionOutcome::NotFound => "not_found",
            ResolutionOutcome::Locked { .. } => "locked",
            ResolutionOutcome::Unlocked { .. } => "unlocked",
        }
    }

    /// Human-readable status for the presentation layer
    pub fn status_message(&self) -> String {
        match self {
            ResolutionOutcome::NotFound => "No media found for this QR.".to_string(),
            ResolutionOutcome::Locked { date } => format!("Locked until {}", date),
            ResolutionOutcome::Unlocked { .. } => "Opening media...".to_string(),
        }
    }
}

impl std::fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            ResolutionOutcome::NotFound.status_message(),
            "No media found for this QR."
        );
        assert_eq!(
            ResolutionOutcome::Locked { date: "2025-01-01".to_string() }.status_message(),
            "Locked until 2025-01-01"
        );
    }

    #[test]
    fn test_normalized_url_only_when_unlocked() {
        let unlocked = ResolutionOutcome::Unlocked {
            normalized_url: "https://example.com".to_string(),
        };
        assert_eq!(unlocked.normalized_url(), Some("https://example.com"));
        assert!(unlocked.is_unlocked());
        assert_eq!(ResolutionOutcome::NotFound.normalized_url(), None);
    }

    #[test]
    fn test_serialization_is_tagged() {
        let locked = ResolutionOutcome::Locked { date: "2025-01-01".to_string() };
        let json = serde_json::to_string(&locked).unwrap();
        assert!(json.contains("\"kind\":\"locked\""));
        assert!(json.contains("2025-01-01"));
    }
}
