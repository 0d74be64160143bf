// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the host UI loop and services
// - Commands accept plain values, return DTOs
// - Commands handle error conversion for the UI
// - Commands NEVER contain business logic

pub mod media_commands;
pub mod scan_commands;

pub use media_commands::*;
pub use scan_commands::*;
