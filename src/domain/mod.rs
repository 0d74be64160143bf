// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod media;
pub mod playback;
pub mod resolution;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Media Domain
pub use media::{validate_media_record, MediaRecord};

// Resolution Domain
pub use resolution::ResolutionOutcome;

// Playback Domain
pub use playback::{EmbedFailure, EmbedSignal, PlaybackState, SessionId, UserAction};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate media id: {0}")]
    DuplicateMediaId(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
