//! Declarative display-field templates for the two profile cards.
//!
//! Each [`FieldSlot`] names the element id it fills, the UI string key of its
//! label and an accessor into the profile. Rendering iterates the table instead
//! of writing one statement per field.

use crate::constants::PLACEHOLDER;
use crate::data::{FaunaProfile, FloraProfile};

pub struct FieldSlot<P: 'static> {
    pub slot_id: &'static str,
    pub label_key: &'static str,
    pub accessor: fn(&P) -> Option<&str>,
}

impl<P: 'static> FieldSlot<P> {
    /// Display text for this slot, falling back to the placeholder.
    #[must_use]
    pub fn text<'a>(&self, profile: &'a P) -> &'a str {
        field_text((self.accessor)(profile))
    }
}

/// Absent and empty values both render as the placeholder.
#[must_use]
pub fn field_text(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(PLACEHOLDER)
}

pub const FLORA_FIELDS: &[FieldSlot<FloraProfile>] = &[
    FieldSlot {
        slot_id: "f_alias",
        label_key: "flora.alias",
        accessor: |p| p.nama_lain.as_deref(),
    },
    FieldSlot {
        slot_id: "f_color",
        label_key: "flora.color",
        accessor: |p| p.warna.as_deref(),
    },
    FieldSlot {
        slot_id: "f_scent",
        label_key: "flora.scent",
        accessor: |p| p.aroma.as_deref(),
    },
    FieldSlot {
        slot_id: "f_height",
        label_key: "flora.height",
        accessor: |p| p.tinggi.as_deref(),
    },
    FieldSlot {
        slot_id: "f_habitat",
        label_key: "flora.habitat",
        accessor: |p| p.habitat.as_deref(),
    },
    FieldSlot {
        slot_id: "f_symbol",
        label_key: "flora.symbol",
        accessor: |p| p.simbol.as_deref(),
    },
    FieldSlot {
        slot_id: "f_culture",
        label_key: "flora.culture",
        accessor: |p| p.budaya.as_deref(),
    },
    FieldSlot {
        slot_id: "f_use",
        label_key: "flora.use",
        accessor: |p| p.manfaat.as_deref(),
    },
    FieldSlot {
        slot_id: "f_identity",
        label_key: "flora.identity",
        accessor: |p| p.identitas.as_deref(),
    },
    FieldSlot {
        slot_id: "f_tips",
        label_key: "flora.tips",
        accessor: |p| p.tips.as_deref(),
    },
];

pub const FAUNA_FIELDS: &[FieldSlot<FaunaProfile>] = &[
    FieldSlot {
        slot_id: "a_alias",
        label_key: "fauna.alias",
        accessor: |p| p.nama_lain.as_deref(),
    },
    FieldSlot {
        slot_id: "a_size",
        label_key: "fauna.size",
        accessor: |p| p.ukuran.as_deref(),
    },
    FieldSlot {
        slot_id: "a_color",
        label_key: "fauna.color",
        accessor: |p| p.warna.as_deref(),
    },
    FieldSlot {
        slot_id: "a_habitat",
        label_key: "fauna.habitat",
        accessor: |p| p.habitat.as_deref(),
    },
    FieldSlot {
        slot_id: "a_identity",
        label_key: "fauna.identity",
        accessor: |p| p.identitas.as_deref(),
    },
    FieldSlot {
        slot_id: "a_adapt",
        label_key: "fauna.adapt",
        accessor: |p| p.adaptasi.as_deref(),
    },
];
