//! Embedded Indonesian UI strings.
mod bundle;
mod render;

pub use bundle::{I18nBundle, LANG};
pub use render::{t, tr};
