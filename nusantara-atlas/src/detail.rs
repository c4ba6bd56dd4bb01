use crate::category::Category;
use crate::constants::{
    DESCRIPTION_TEMPLATE, HABITAT_TEMPLATE, PLACEHOLDER, SUBTITLE_PENDING, THREAT_GENERIC,
    THREAT_KEYWORDS, UNKNOWN_STATUS,
};
use crate::fields::field_text;
use crate::secondary::{SecondaryEntry, SpeciesRecord, parse_label};
use crate::status::{StatusTier, classify};
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;

/// Display-ready content of the detail overlay for one secondary species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesDetail {
    pub category: Category,
    pub title: String,
    pub subtitle: String,
    pub habitat: String,
    pub description: String,
    pub traits: String,
    pub threats: String,
    pub status: String,
    pub tier: StatusTier,
}

fn placeholder_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\{(name|kind|province)\}").ok())
        .as_ref()
}

/// Substitute template placeholders in one pass, so placeholder-like text
/// inside a substituted value is left as is.
fn fill_template(template: &str, name: &str, kind: &str, province: &str) -> String {
    let Some(pattern) = placeholder_pattern() else {
        return template.to_string();
    };
    pattern
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "name" => name.to_string(),
            "kind" => kind.to_string(),
            _ => province.to_string(),
        })
        .into_owned()
}

/// Normalize either entry shape into overlay content.
///
/// Label entries carry only a name and status, so the remaining text is
/// synthesized from the province and category.
#[must_use]
pub fn resolve_detail(entry: &SecondaryEntry, province: &str, category: Category) -> SpeciesDetail {
    match entry {
        SecondaryEntry::Record(record) => from_record(record, category),
        SecondaryEntry::Label(label) => from_label(label, province, category),
    }
}

fn from_record(record: &SpeciesRecord, category: Category) -> SpeciesDetail {
    let status = record
        .status_detail
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(record.status.as_deref());
    SpeciesDetail {
        category,
        title: record.nama.clone(),
        subtitle: field_text(record.latin.as_deref()).to_string(),
        habitat: field_text(record.habitat.as_deref()).to_string(),
        description: field_text(record.deskripsi.as_deref()).to_string(),
        traits: field_text(record.ciri_khas.as_deref()).to_string(),
        threats: field_text(record.ancaman.as_deref()).to_string(),
        status: field_text(status).to_string(),
        tier: classify(record.status.as_deref().unwrap_or_default()),
    }
}

fn from_label(label: &str, province: &str, category: Category) -> SpeciesDetail {
    let parsed = parse_label(label);
    let status = parsed.status.unwrap_or(UNKNOWN_STATUS);
    let threatened = THREAT_KEYWORDS.iter().any(|k| status.contains(k));
    let kind = category.kind_noun();
    SpeciesDetail {
        category,
        title: parsed.name.to_string(),
        subtitle: SUBTITLE_PENDING.to_string(),
        habitat: fill_template(HABITAT_TEMPLATE, parsed.name, kind, province),
        description: fill_template(DESCRIPTION_TEMPLATE, parsed.name, kind, province),
        traits: PLACEHOLDER.to_string(),
        threats: if threatened {
            THREAT_GENERIC.to_string()
        } else {
            PLACEHOLDER.to_string()
        },
        status: status.to_string(),
        tier: classify(status),
    }
}
