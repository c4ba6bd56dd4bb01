//! Fixed values shared by the core and the web front end.

/// Province shown when the page first loads.
pub const DEFAULT_PROVINCE: &str = "Aceh";

/// Text shown for any absent optional field.
pub const PLACEHOLDER: &str = "-";

/// Status used when a label entry carries no parenthesised status.
pub const UNKNOWN_STATUS: &str = "Tidak diketahui";

/// Delay between entering the busy state and committing a render.
pub const RENDER_TRANSITION_MS: i32 = 300;

/// Location of the province document, relative to the site root.
pub const DATA_PATH: &str = "assets/data/provinsi.json";

// Classifier keywords ------------------------------------------------------
pub(crate) const DANGER_KEYWORDS: &[&str] = &["Kritis", "Terancam", "Punah", "Langka", "Dilindungi"];
pub(crate) const WARNING_KEYWORDS: &[&str] = &["Rentan", "Hampir"];

// Synthesized detail text --------------------------------------------------
pub(crate) const THREAT_KEYWORDS: &[&str] = &["Kritis", "Terancam"];
pub(crate) const SUBTITLE_PENDING: &str = "Data detail belum tersedia";
pub(crate) const HABITAT_TEMPLATE: &str = "Tersebar di wilayah {province}";
pub(crate) const DESCRIPTION_TEMPLATE: &str = "{name} merupakan salah satu spesies {kind} yang dapat ditemukan di {province}. Spesies ini memiliki peran penting dalam ekosistem lokal.";
pub(crate) const THREAT_GENERIC: &str = "Perburuan, deforestasi, dan perubahan habitat";
