use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar format the catalog uses for release dates.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One unlockable media item from the catalog.
///
/// The id is the exact text encoded in the printed QR code. In the
/// catalog file the id is the mapping key, so it is filled in by the
/// loader rather than read from the record body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    /// Stable identifier (matches the scanned code)
    #[serde(default)]
    pub id: String,

    /// Release date, kept as written in the catalog
    pub date: String,

    /// Source link (may be a share-style "view" link)
    pub url: String,

    /// Preview art
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Companion reaction video; only the recording flow reads it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MediaRecord {
    /// Create a record with only the required fields
    pub fn new(id: impl Into<String>, date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            url: url.into(),
            thumbnail: None,
            youtube_id: None,
            title: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_youtube_id(mut self, youtube_id: impl Into<String>) -> Self {
        self.youtube_id = Some(youtube_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parse the release date down to its calendar day.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (reduced to the date
    /// written in the timestamp). Returns `None` for anything else.
    pub fn release_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, RELEASE_DATE_FORMAT) {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.date_naive())
    }

    /// Title shown to the user, falling back to the id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// True when a companion reaction recording exists
    pub fn has_reaction(&self) -> bool {
        self.youtube_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }
}
