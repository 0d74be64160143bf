pub mod state;

pub use state::{EmbedFailure, EmbedSignal, PlaybackState, SessionId, UserAction};
