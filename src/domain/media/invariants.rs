use log::warn;

use super::entity::MediaRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates all MediaRecord invariants
pub fn validate_media_record(record: &MediaRecord) -> DomainResult<()> {
    validate_id(record)?;
    validate_url(record)?;
    check_release_date(record);
    Ok(())
}

/// The id is what the QR code carries, so it must be non-empty
fn validate_id(record: &MediaRecord) -> DomainResult<()> {
    if record.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Media id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_url(record: &MediaRecord) -> DomainResult<()> {
    if record.url.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Media '{}' has an empty url",
            record.id
        )));
    }
    Ok(())
}

/// An unparsable date is not rejected: the unlock gate keeps such a
/// record locked. It is only reported here.
fn check_release_date(record: &MediaRecord) {
    if record.release_date().is_none() {
        warn!(
            "Media '{}' has an unparsable release date '{}'; it will stay locked",
            record.id, record.date
        );
    }
}

/// Critical MediaRecord Invariants:
///
/// 1. id is unique within the catalog (enforced by the catalog)
/// 2. id is non-empty
/// 3. url is non-empty
/// 4. date should parse as a calendar date; if not, the record is locked
