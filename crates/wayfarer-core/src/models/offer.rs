//! Offer model definition.

use serde::{Deserialize, Serialize};

use super::BudgetTier;

/// A promotional catalog entry. Simple entity, no derived fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Generated identifier (`offer-<ts>-<suffix>`, or `offer-N` for seeds)
    pub id: String,

    /// Offer headline
    pub title: String,

    /// City the offer applies to
    pub city: String,

    /// Budget tier the offer targets
    #[serde(default)]
    pub budget: BudgetTier,

    /// Short description
    #[serde(default)]
    pub description: String,
}
