//! Nusantara Atlas
//!
//! Platform-agnostic core of the Nusantara biodiversity encyclopedia.
//! This crate owns the province data model, conservation-status
//! classification, secondary-species resolution and the page state machine,
//! without any UI or browser dependencies.

pub mod category;
pub mod constants;
pub mod data;
pub mod detail;
pub mod fields;
pub mod secondary;
pub mod state;
pub mod status;

// Re-export commonly used types
pub use category::Category;
pub use data::{Database, FaunaProfile, FloraProfile, LoadError, ProvinceRecord};
pub use detail::{SpeciesDetail, resolve_detail};
pub use fields::{FAUNA_FIELDS, FLORA_FIELDS, FieldSlot, field_text};
pub use secondary::{ParsedLabel, SecondaryEntry, SpeciesRecord, parse_label};
pub use state::{AtlasAction, AtlasState, OverlayTarget, RenderToken};
pub use status::{StatusTier, classify};
