// src/integrations/mod.rs
//
// External Integrations Module

pub mod browser;

pub use browser::client::{ExternalUrlOpener, SystemUrlOpener};

#[cfg(test)]
pub use browser::client::MockExternalUrlOpener;
