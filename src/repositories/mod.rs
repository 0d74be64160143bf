// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic (gating, normalization live in services)
// - NO event emission
// - Catalog is read-only after construction

pub mod media_catalog;

pub use media_catalog::{InMemoryMediaCatalog, MediaCatalog};
