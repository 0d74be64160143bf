// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between the host UI loop and the services
// - Translates between DTOs and domain values
// - Holds the single PlaybackController of the process

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
