// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::ExternalUrlOpener;
use crate::repositories::{InMemoryMediaCatalog, MediaCatalog};
use crate::services::{PlaybackController, ResolutionService};

/// Application state owned by the host event loop.
/// The catalog and services are shared; the controller is the single
/// owner of the playback session.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub resolution_service: Arc<ResolutionService>,
    pub playback_controller: PlaybackController,
}

impl AppState {
    /// Load the catalog named by the config and wire the services
    pub fn initialize(config: AppConfig, opener: Arc<dyn ExternalUrlOpener>) -> AppResult<Self> {
        let catalog = InMemoryMediaCatalog::from_path(&config.catalog_path)?;
        Ok(Self::with_catalog(config, Arc::new(catalog), opener))
    }

    pub fn with_catalog(
        config: AppConfig,
        catalog: Arc<dyn MediaCatalog>,
        opener: Arc<dyn ExternalUrlOpener>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let resolution_service = Arc::new(ResolutionService::new(
            catalog,
            event_bus.clone(),
            config.placeholder_thumbnail.clone(),
        ));
        let playback_controller =
            PlaybackController::new(event_bus.clone(), opener, config.embed.clone());

        Self {
            config,
            event_bus,
            resolution_service,
            playback_controller,
        }
    }
}
