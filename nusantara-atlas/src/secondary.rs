use crate::data::null_as_default;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A fully described secondary species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nama: String,
    #[serde(default)]
    pub latin: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub ciri_khas: Option<String>,
    #[serde(default)]
    pub ancaman: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_detail: Option<String>,
}

impl SpeciesRecord {
    #[must_use]
    pub fn named(nama: impl Into<String>) -> Self {
        Self {
            nama: nama.into(),
            latin: None,
            habitat: None,
            deskripsi: None,
            ciri_khas: None,
            ancaman: None,
            status: None,
            status_detail: None,
        }
    }
}

/// One entry of a profile's `lainnya` list.
///
/// Older data stores a bare `"Name (Status)"` label; newer data stores a
/// [`SpeciesRecord`]. Both shapes may appear in the same list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondaryEntry {
    Label(String),
    Record(SpeciesRecord),
}

impl SecondaryEntry {
    /// Name shown on the grid tile.
    ///
    /// Records use `nama` verbatim; labels use everything before the first `" ("`.
    #[must_use]
    pub fn tile_name(&self) -> &str {
        match self {
            Self::Record(record) => &record.nama,
            Self::Label(label) => label.split_once(" (").map_or(label.as_str(), |(name, _)| name),
        }
    }
}

/// Name and status pulled out of a `"Name (Status)"` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel<'a> {
    pub name: &'a str,
    pub status: Option<&'a str>,
}

fn label_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(.+?)\s*\(([^)]+)\)$").ok())
        .as_ref()
}

/// Split a label into name and trailing parenthesised status.
///
/// A label without a trailing `(...)` keeps the whole text as its name.
#[must_use]
pub fn parse_label(label: &str) -> ParsedLabel<'_> {
    label_pattern()
        .and_then(|re| re.captures(label))
        .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .map_or(
            ParsedLabel {
                name: label,
                status: None,
            },
            |(name, status)| ParsedLabel {
                name,
                status: Some(status),
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_both_shapes_in_one_list() {
        let json = r#"[
            "Harimau Sumatera (Kritis)",
            {"nama": "Gajah Sumatera", "latin": "Elephas maximus sumatranus", "ciriKhas": "Telinga kecil", "statusDetail": "Kritis (CR) - IUCN"}
        ]"#;
        let entries: Vec<SecondaryEntry> = serde_json::from_str(json).unwrap();
        assert!(matches!(&entries[0], SecondaryEntry::Label(l) if l == "Harimau Sumatera (Kritis)"));
        let SecondaryEntry::Record(record) = &entries[1] else {
            panic!("expected record entry");
        };
        assert_eq!(record.ciri_khas.as_deref(), Some("Telinga kecil"));
        assert_eq!(record.status_detail.as_deref(), Some("Kritis (CR) - IUCN"));
        assert_eq!(record.status, None);
    }

    #[test]
    fn tile_name_for_record_is_verbatim() {
        let entry = SecondaryEntry::Record(SpeciesRecord::named("Orangutan Tapanuli (baru)"));
        assert_eq!(entry.tile_name(), "Orangutan Tapanuli (baru)");
    }

    #[test]
    fn tile_name_for_label_stops_at_first_paren() {
        let entry = SecondaryEntry::Label("Rusa Timor (Rentan) (Endemik)".into());
        assert_eq!(entry.tile_name(), "Rusa Timor");
        let bare = SecondaryEntry::Label("Kantong Semar".into());
        assert_eq!(bare.tile_name(), "Kantong Semar");
    }

    #[test]
    fn parse_label_extracts_name_and_status() {
        let parsed = parse_label("Harimau Sumatera (Kritis)");
        assert_eq!(parsed.name, "Harimau Sumatera");
        assert_eq!(parsed.status, Some("Kritis"));
    }

    #[test]
    fn parse_label_tolerates_missing_space_before_paren() {
        let parsed = parse_label("Badak(Punah)");
        assert_eq!(parsed.name, "Badak");
        assert_eq!(parsed.status, Some("Punah"));
    }

    #[test]
    fn parse_label_without_status_keeps_whole_text() {
        let parsed = parse_label("Kantong Semar");
        assert_eq!(parsed.name, "Kantong Semar");
        assert_eq!(parsed.status, None);

        let trailing = parse_label("Anggrek (Langka) liar");
        assert_eq!(trailing.name, "Anggrek (Langka) liar");
        assert_eq!(trailing.status, None);
    }
}
