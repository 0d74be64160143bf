pub mod entity;
pub mod invariants;

pub use entity::MediaRecord;
pub use invariants::validate_media_record;
