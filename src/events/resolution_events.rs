// src/events/resolution_events.rs
//
// Resolution Events
//
// CRITICAL INVARIANTS:
// - Deterministic: no timestamps in the payload
// - Event IDs are derived from a fingerprint of (code, outcome)
// - occurred_at() returns SENTINEL_TIMESTAMP (Unix epoch) for trait compliance

use crate::domain::resolution::ResolutionOutcome;
use crate::events::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resolution is a pure function of its inputs, so its events carry no
/// operational timestamp.
const SENTINEL_TIMESTAMP: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Emitted once per resolved scan, whatever the outcome
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeResolved {
    /// The scanned code
    pub code: String,

    pub outcome: ResolutionOutcome,

    /// Deterministic fingerprint of (code, outcome)
    pub fingerprint: String,
}

impl CodeResolved {
    pub fn new(code: String, outcome: ResolutionOutcome) -> Self {
        let fingerprint = Self::compute_fingerprint(&code, &outcome);
        Self {
            code,
            outcome,
            fingerprint,
        }
    }

    fn compute_fingerprint(code: &str, outcome: &ResolutionOutcome) -> String {
        let detail = match outcome {
            ResolutionOutcome::NotFound => "",
            ResolutionOutcome::Locked { date } => date.as_str(),
            ResolutionOutcome::Unlocked { normalized_url } => normalized_url.as_str(),
        };
        format!("resolved:{}:{}:{}", code, outcome.kind(), detail)
    }
}

impl DomainEvent for CodeResolved {
    fn event_id(&self) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, self.fingerprint.as_bytes())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        SENTINEL_TIMESTAMP
    }

    fn event_type(&self) -> &'static str {
        "CodeResolved"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_resolved_is_deterministic() {
        let outcome = ResolutionOutcome::Locked {
            date: "2025-01-01".to_string(),
        };
        let first = CodeResolved::new("day-1".to_string(), outcome.clone());
        let second = CodeResolved::new("day-1".to_string(), outcome);

        assert_eq!(first, second);
        assert_eq!(first.event_id(), second.event_id());
        assert_eq!(first.occurred_at(), SENTINEL_TIMESTAMP);
    }

    #[test]
    fn test_different_outcomes_have_different_ids() {
        let locked = CodeResolved::new(
            "day-1".to_string(),
            ResolutionOutcome::Locked {
                date: "2025-01-01".to_string(),
            },
        );
        let unlocked = CodeResolved::new(
            "day-1".to_string(),
            ResolutionOutcome::Unlocked {
                normalized_url: "https://example.com".to_string(),
            },
        );
        assert_ne!(locked.event_id(), unlocked.event_id());
    }
}
