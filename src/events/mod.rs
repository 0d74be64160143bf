// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod resolution_events;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Scanning
    CodeScanned,
    ScanIgnored,

    // Playback
    EmbedFailed,
    EmbedRequested,
    ExternalOpenFailed,
    ExternalOpenRequested,
    PlaybackStateChanged,
    SessionReset,
    StaleSignalDropped,

    // Presentation
    NoticeKind,
    UserNotified,
};

pub use bus::{EventBus, EventLogEntry};

pub use resolution_events::CodeResolved;
