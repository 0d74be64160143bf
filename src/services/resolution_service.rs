// src/services/resolution_service.rs
//
// Resolution Service
//
// Turns a scanned code into a ResolutionOutcome.
//
// CRITICAL RULES:
// - Catalog is read-only
// - `now` is always a parameter, never read here
// - Deterministic: same (code, catalog, now) → same outcome
// - No network access, no caching beyond the catalog table

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::media::MediaRecord;
use crate::domain::resolution::ResolutionOutcome;
use crate::events::{CodeResolved, EventBus};
use crate::repositories::MediaCatalog;
use crate::services::unlock_gate::is_unlocked;
use crate::services::url_normalizer::normalize;

/// Lookup, gate, normalize.
pub fn resolve(code: &str, catalog: &dyn MediaCatalog, now: NaiveDateTime) -> ResolutionOutcome {
    let Some(record) = catalog.lookup(code) else {
        return ResolutionOutcome::NotFound;
    };

    if !is_unlocked(record, now) {
        return ResolutionOutcome::Locked {
            date: record.date.clone(),
        };
    }

    ResolutionOutcome::Unlocked {
        normalized_url: normalize(&record.url),
    }
}

// ============================================================================
// RESOLUTION SERVICE
// ============================================================================

/// One row of the home overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAvailability {
    pub id: String,
    pub date: String,
    pub title: String,
    pub thumbnail: String,
    pub available: bool,
    /// Reaction recording is only offered once the media is available
    pub reaction_available: bool,
    pub youtube_id: Option<String>,
}

pub struct ResolutionService {
    catalog: Arc<dyn MediaCatalog>,
    event_bus: Arc<EventBus>,
    placeholder_thumbnail: String,
}

impl ResolutionService {
    pub fn new(
        catalog: Arc<dyn MediaCatalog>,
        event_bus: Arc<EventBus>,
        placeholder_thumbnail: String,
    ) -> Self {
        Self {
            catalog,
            event_bus,
            placeholder_thumbnail,
        }
    }

    /// Resolve a scanned code and publish the outcome
    pub fn resolve(&self, code: &str, now: NaiveDateTime) -> ResolutionOutcome {
        let outcome = resolve(code, self.catalog.as_ref(), now);
        info!("Resolved code {:?} → {}", code, outcome);
        self.event_bus
            .emit(CodeResolved::new(code.to_string(), outcome.clone()));
        outcome
    }

    /// Availability of every catalog record, ordered by id
    pub fn overview(&self, now: NaiveDateTime) -> Vec<MediaAvailability> {
        self.catalog
            .list_all()
            .into_iter()
            .map(|record| self.availability(record, now))
            .collect()
    }

    fn availability(&self, record: &MediaRecord, now: NaiveDateTime) -> MediaAvailability {
        let available = is_unlocked(record, now);
        MediaAvailability {
            id: record.id.clone(),
            date: record.date.clone(),
            title: record.display_title().to_string(),
            thumbnail: record
                .thumbnail
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| self.placeholder_thumbnail.clone()),
            available,
            reaction_available: available && record.has_reaction(),
            youtube_id: record.youtube_id.clone(),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn MediaCatalog> {
        &self.catalog
    }
}

// ============================================================================
// TESTS
// ============================================================================
