// src/services/mod.rs
//
// Services Module - Decision logic and orchestration

pub mod playback_controller;
pub mod resolution_service;
pub mod unlock_gate;
pub mod url_normalizer;


pub use unlock_gate::is_unlocked;

pub use url_normalizer::{normalize, UrlNormalizer};

pub use resolution_service::{resolve, MediaAvailability, ResolutionService};

pub use playback_controller::{PlaybackController, ScanDisposition, SignalDisposition};
