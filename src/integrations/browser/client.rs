// src/integrations/browser/client.rs
//
// Platform URL opener - hands a url to the system browser
//
// Note: This client does not touch playback state or call services.

use log::debug;
use opener::OpenError;

use crate::error::{AppError, AppResult};

/// Opens a url outside the app
#[cfg_attr(test, mockall::automock)]
pub trait ExternalUrlOpener: Send + Sync {
    fn open(&self, url: &str) -> AppResult<()>;
}

type Launcher = Box<dyn Fn(&str) -> Result<(), OpenError> + Send + Sync>;

/// Opens urls in the default web browser
pub struct SystemUrlOpener {
    launch: Launcher,
}

impl SystemUrlOpener {
    pub fn new() -> Self {
        Self {
            launch: Box::new(|url: &str| opener::open_browser(url)),
        }
    }

    #[cfg(test)]
    fn with_launcher<F>(launch: F) -> Self
    where
        F: Fn(&str) -> Result<(), OpenError> + Send + Sync + 'static,
    {
        Self {
            launch: Box::new(launch),
        }
    }
}

impl Default for SystemUrlOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalUrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> AppResult<()> {
        if url.trim().is_empty() {
            return Err(AppError::ExternalOpen("No URL to open".to_string()));
        }

        debug!("Opening {} in the default browser", url);
        (self.launch)(url).map_err(|e| AppError::ExternalOpen(e.to_string()))
    }
}
