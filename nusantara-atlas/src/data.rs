use crate::category::Category;
use crate::secondary::SecondaryEntry;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Read `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure to obtain the province database.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity flower of a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FloraProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nama: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latin: String,
    #[serde(default)]
    pub nama_lain: Option<String>,
    #[serde(default)]
    pub warna: Option<String>,
    #[serde(default)]
    pub aroma: Option<String>,
    #[serde(default)]
    pub tinggi: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub simbol: Option<String>,
    #[serde(default)]
    pub budaya: Option<String>,
    #[serde(default)]
    pub manfaat: Option<String>,
    #[serde(default)]
    pub identitas: Option<String>,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lainnya: Vec<SecondaryEntry>,
}

/// Identity animal of a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaunaProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nama: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latin: String,
    #[serde(default)]
    pub nama_lain: Option<String>,
    #[serde(default)]
    pub ukuran: Option<String>,
    #[serde(default)]
    pub warna: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub identitas: Option<String>,
    #[serde(default)]
    pub adaptasi: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lainnya: Vec<SecondaryEntry>,
}

/// Flora and fauna profile of one province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProvinceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub flora: FloraProfile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fauna: FaunaProfile,
}

impl ProvinceRecord {
    /// Secondary species list for the requested category.
    #[must_use]
    pub fn others(&self, category: Category) -> &[SecondaryEntry] {
        match category {
            Category::Flora => &self.flora.lainnya,
            Category::Fauna => &self.fauna.lainnya,
        }
    }

    /// Look up one secondary entry by its tile index.
    #[must_use]
    pub fn other(&self, category: Category, index: usize) -> Option<&SecondaryEntry> {
        self.others(category).get(index)
    }
}

/// Every province keyed by name. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Database {
    provinces: BTreeMap<String, ProvinceRecord>,
}

impl Database {
    /// Create an empty database (useful for tests and the pre-load state)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the province document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the JSON is not a province mapping.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn get(&self, province: &str) -> Option<&ProvinceRecord> {
        self.provinces.get(province)
    }

    #[must_use]
    pub fn contains(&self, province: &str) -> bool {
        self.provinces.contains_key(province)
    }

    /// Province names in ascending byte order.
    pub fn province_names(&self) -> impl Iterator<Item = &str> {
        self.provinces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}
