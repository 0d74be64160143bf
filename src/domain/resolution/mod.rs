// src/domain/resolution/mod.rs
//
// Resolution Domain
//
// Value objects describing what a scanned code resolved to.
//
// CRITICAL RULES:
// - All types are pure value objects (immutable)
// - No side effects
// - No event emission (that's the service's job)
// - Deterministic: same (code, catalog, now) → same outcome

pub mod value_objects;

pub use value_objects::ResolutionOutcome;
