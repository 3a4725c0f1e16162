//! Country and city models for the location hierarchy.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A country. Names are globally unique by normalized key.
///
/// Deleting a country cascades to delete its cities, the only cascading
/// relationship in the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Generated identifier (`country-<ts>-<suffix>`)
    pub id: String,

    /// Trimmed country name
    pub name: String,

    /// Timestamp when the record was created (UTC)
    pub created_at: Timestamp,
}

/// A city, weak-referencing its country by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct City {
    /// Generated identifier (`city-<ts>-<suffix>`)
    pub id: String,

    /// Trimmed city name, unique within its country
    pub name: String,

    /// Owning country's id
    pub country_id: String,

    /// Timestamp when the record was created (UTC)
    pub created_at: Timestamp,
}
