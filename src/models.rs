//! Data models for raw and normalized product feature records.

use serde::{Deserialize, Serialize};

/// A partially-populated record produced by a site strategy.
///
/// Fields mirror the wire vocabulary of the comparison API, hence the
/// capitalized JSON keys. A missing field means "not found" and is distinct
/// from an empty string; strategies never store empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeatureRecord {
    #[serde(rename = "Product", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Features", default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,
}

/// Feature list that tolerates a bare string where a list was expected.
///
/// Upstream producers occasionally emit a single scalar instead of a list;
/// deserialization accepts both and `into_list` flattens the difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureSet {
    Many(Vec<String>),
    One(String),
}

impl FeatureSet {
    /// Returns the features as a list, wrapping a scalar in a one-element list.
    pub fn into_list(self) -> Vec<String> {
        match self {
            FeatureSet::Many(items) => items,
            FeatureSet::One(item) => vec![item],
        }
    }
}

impl From<Vec<String>> for FeatureSet {
    fn from(items: Vec<String>) -> Self {
        FeatureSet::Many(items)
    }
}

impl RawFeatureRecord {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.product.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.features.is_none()
    }

    /// Names of the populated fields, for logging.
    pub fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.product.is_some() {
            fields.push("Product");
        }
        if self.price.is_some() {
            fields.push("Price");
        }
        if self.description.is_some() {
            fields.push("Description");
        }
        if self.features.is_some() {
            fields.push("Features");
        }
        fields
    }

    /// Maps this record into a fully-populated one.
    ///
    /// Pure and idempotent: every missing or empty field is replaced with a
    /// fixed placeholder, a scalar feature value is wrapped into a
    /// one-element list, and normalizing an already-normalized record
    /// changes nothing.
    pub fn normalize(self) -> NormalizedFeatureRecord {
        let features = match self.features {
            Some(set) => {
                let items = set.into_list();
                if items.is_empty() {
                    vec![NO_FEATURES.to_string()]
                } else {
                    items
                }
            }
            None => vec![NO_FEATURES.to_string()],
        };

        NormalizedFeatureRecord {
            product: non_empty_or(self.product, NO_PRODUCT),
            description: non_empty_or(self.description, NO_DESCRIPTION),
            features,
            price: non_empty_or(self.price, NO_PRICE),
        }
    }
}

const NO_PRODUCT: &str = "Unnamed Product";
const NO_DESCRIPTION: &str = "No description available";
const NO_PRICE: &str = "Price not found";
const NO_FEATURES: &str = "No detailed features available";

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string())
}

/// The record shape exposed to API callers: all four fields are present,
/// and `features` always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFeatureRecord {
    #[serde(rename = "Product")]
    pub product: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Features")]
    pub features: Vec<String>,

    #[serde(rename = "Price")]
    pub price: String,
}

impl From<NormalizedFeatureRecord> for RawFeatureRecord {
    fn from(record: NormalizedFeatureRecord) -> Self {
        Self {
            product: Some(record.product),
            price: Some(record.price),
            description: Some(record.description),
            features: Some(FeatureSet::Many(record.features)),
        }
    }
}
