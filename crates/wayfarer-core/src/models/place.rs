//! Place model and the tier enumerations shared with offers and the planner.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of catalog place types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    /// Sight worth visiting; never price-filtered by the planner
    Landmark,

    /// Dining option, filtered by the requested budget tier
    Restaurant,

    /// Accommodation, filtered by the requested budget tier
    Hotel,
}

impl FromStr for PlaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landmark" => Ok(PlaceType::Landmark),
            "restaurant" => Ok(PlaceType::Restaurant),
            "hotel" => Ok(PlaceType::Hotel),
            _ => Err(format!("Invalid place type: {s}")),
        }
    }
}

impl PlaceType {
    /// String representation as stored in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Landmark => "landmark",
            PlaceType::Restaurant => "restaurant",
            PlaceType::Hotel => "hotel",
        }
    }
}

/// Price classification attached to a place or offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Budget pricing
    #[default]
    Simple,

    /// Mid-range pricing
    Comfort,

    /// Premium pricing
    Luxury,
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(PriceTier::Simple),
            "comfort" => Ok(PriceTier::Comfort),
            "luxury" => Ok(PriceTier::Luxury),
            _ => Err(format!("Invalid price tier: {s}")),
        }
    }
}

impl PriceTier {
    /// String representation as stored in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Simple => "simple",
            PriceTier::Comfort => "comfort",
            PriceTier::Luxury => "luxury",
        }
    }
}

/// The requester's budget level, governing both catalog filtering and
/// scoring weights in the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Only simple-priced hotels and restaurants are eligible
    Simple,

    /// Simple and comfort price tiers are eligible
    #[default]
    Comfort,

    /// Every price tier is eligible
    Luxury,
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(BudgetTier::Simple),
            "comfort" => Ok(BudgetTier::Comfort),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(format!("Invalid budget tier: {s}")),
        }
    }
}

impl BudgetTier {
    /// String representation as stored in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Simple => "simple",
            BudgetTier::Comfort => "comfort",
            BudgetTier::Luxury => "luxury",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Simple => "Simple",
            BudgetTier::Comfort => "Comfort",
            BudgetTier::Luxury => "Luxury",
        }
    }

    /// Price tiers a place may carry and still be eligible under this budget.
    pub fn allowed_price_tiers(&self) -> &'static [PriceTier] {
        match self {
            BudgetTier::Simple => &[PriceTier::Simple],
            BudgetTier::Comfort => &[PriceTier::Simple, PriceTier::Comfort],
            BudgetTier::Luxury => &[PriceTier::Simple, PriceTier::Comfort, PriceTier::Luxury],
        }
    }

    /// Whether a place with the given price tier is eligible.
    pub fn allows(&self, tier: PriceTier) -> bool {
        self.allowed_price_tiers().contains(&tier)
    }
}

/// Geographic coordinates; defaults to the origin when absent in the
/// document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// A catalog entry: a landmark, restaurant or hotel in some city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Generated identifier (`place-<ts>-<suffix>` for created records,
    /// `place-N` for seed records)
    pub id: String,

    /// URL-friendly key derived from the name when not supplied; stable once
    /// set and never silently overwritten by later updates
    #[serde(default)]
    pub slug: Option<String>,

    /// Display name
    pub name: String,

    /// Country the place belongs to
    #[serde(default)]
    pub country: String,

    /// City the place belongs to; matched case-insensitively by the planner
    pub city: String,

    /// Catalog type
    #[serde(rename = "type")]
    pub place_type: PlaceType,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Price classification
    #[serde(default)]
    pub price_tier: PriceTier,

    /// Average visit cost, non-negative
    #[serde(default)]
    pub avg_cost: f64,

    /// Rating on a 1-5 scale; scoring defaults to 4 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Coordinates, origin when unknown
    #[serde(default)]
    pub coords: Coords,

    /// Free-form tags, matched case-insensitively against interests
    #[serde(default)]
    pub tags: Vec<String>,
}
