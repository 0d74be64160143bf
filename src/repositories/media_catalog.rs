// src/repositories/media_catalog.rs
//
// Media catalog - read-only id → record table, loaded once at startup

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use crate::domain::media::{validate_media_record, MediaRecord};
use crate::domain::DomainError;
use crate::error::{AppError, AppResult};

pub trait MediaCatalog: Send + Sync {
    /// Exact match on id. No trimming, no case folding.
    fn lookup(&self, id: &str) -> Option<&MediaRecord>;

    /// All records, ordered by id
    fn list_all(&self) -> Vec<&MediaRecord>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMediaCatalog {
    records: BTreeMap<String, MediaRecord>,
}

impl InMemoryMediaCatalog {
    /// Build a catalog from records, rejecting duplicate ids
    pub fn from_records(records: Vec<MediaRecord>) -> AppResult<Self> {
        let mut map = BTreeMap::new();
        for record in records {
            validate_media_record(&record)?;
            if map.contains_key(&record.id) {
                return Err(DomainError::DuplicateMediaId(record.id).into());
            }
            map.insert(record.id.clone(), record);
        }
        Ok(Self { records: map })
    }

    /// Parse the `{ "<id>": { date, url, ... } }` mapping.
    ///
    /// The mapping key is authoritative for the record id.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let mapping: BTreeMap<String, MediaRecord> = serde_json::from_str(json)?;
        let records = mapping
            .into_iter()
            .map(|(id, mut record)| {
                record.id = id;
                record
            })
            .collect();
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        debug!("Loading media catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Cannot read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} media records from {}",
            catalog.records.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl MediaCatalog for InMemoryMediaCatalog {
    fn lookup(&self, id: &str) -> Option<&MediaRecord> {
        self.records.get(id)
    }

    fn list_all(&self) -> Vec<&MediaRecord> {
        self.records.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MAPPING: &str = r#"{
        "day-1": {
            "date": "2025-12-01",
            "url": "https://drive.google.com/file/d/AAA111/view?usp=sharing",
            "thumbnail": "https://example.com/1.jpg"
        },
        "day-2": {
            "date": "2025-12-02",
            "url": "https://example.com/two.mp4",
            "youtubeId": "abc",
            "title": "Second door"
        }
    }"#;

    #[test]
    fn test_lookup_exact_match() {
        let catalog = InMemoryMediaCatalog::from_json_str(MAPPING).unwrap();
        assert_eq!(catalog.list_all().len(), 2);

        let record = catalog.lookup("day-2").unwrap();
        assert_eq!(record.id, "day-2");
        assert_eq!(record.title.as_deref(), Some("Second door"));

        assert!(catalog.lookup("DAY-2").is_none());
        assert!(catalog.lookup(" day-2").is_none());
        assert!(catalog.lookup("day-3").is_none());
    }

    #[test]
    fn test_list_all_is_ordered_by_id() {
        let catalog = InMemoryMediaCatalog::from_json_str(MAPPING).unwrap();
        let ids: Vec<&str> = catalog.list_all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["day-1", "day-2"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let records = vec![
            MediaRecord::new("day-1", "2025-12-01", "https://a"),
            MediaRecord::new("day-1", "2025-12-02", "https://b"),
        ];
        let result = InMemoryMediaCatalog::from_records(records);
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::DuplicateMediaId(_)))
        ));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let result = InMemoryMediaCatalog::from_json_str("[1, 2, 3]");
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAPPING.as_bytes()).unwrap();

        let catalog = InMemoryMediaCatalog::from_path(file.path()).unwrap();
        assert!(catalog.lookup("day-1").is_some());
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryMediaCatalog::from_path(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
