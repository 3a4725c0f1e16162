//! Itinerary types produced by the recommendation engine.

use serde::{Deserialize, Serialize};

use super::{BudgetTier, Place};

/// Kind tag attached to each scheduled item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Landmark,
    Restaurant,
    Hotel,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Landmark => "landmark",
            ItemKind::Restaurant => "restaurant",
            ItemKind::Hotel => "hotel",
        }
    }
}

/// One scheduled catalog entry within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayItem {
    pub kind: ItemKind,
    pub place: Place,
}

/// A single day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Day number, 1-based
    pub day: u32,

    /// Human-readable title, e.g. `Day 2 in Samarkand`
    pub title: String,

    /// Landmarks, restaurants and the shared hotel for this day
    pub items: Vec<DayItem>,

    /// Estimated cost for the day in whole units, hotel cost amortized
    pub estimated_cost: i64,
}

/// Headline summary of a generated itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySummary {
    /// The requested budget tier
    pub level: BudgetTier,

    /// Sum of all per-day estimated costs, in whole units
    pub total_estimated_cost: i64,

    /// The single chosen hotel, if the city had an eligible one
    pub hotel: Option<Place>,
}

/// A complete day-by-day travel plan.
///
/// An itinerary is always structurally valid: a city with no matching
/// catalog entries yields empty item lists and zero costs rather than an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Requested city, echoed as given
    pub city: String,

    /// Requested number of days
    pub days: u32,

    /// Requested budget tier
    pub budget: BudgetTier,

    /// Echoed interest tags
    pub interests: Vec<String>,

    /// Headline summary
    pub summary: ItinerarySummary,

    /// Day-by-day schedule, one entry per requested day
    pub itinerary: Vec<DaySchedule>,
}
