//! Place scoring.
//!
//! The score blends five signals: the rating baseline, interest overlap,
//! a landmark bonus, a budget-dependent cost term, and a tier affinity
//! bonus. Weights are fixed; changing them changes which places win, so any
//! adjustment needs the selection tests updated alongside.

use std::collections::HashSet;

use crate::models::{BudgetTier, Place, PlaceType, PriceTier};

/// Default rating applied when a place carries none.
const DEFAULT_RATING: f64 = 4.0;

/// Scores a place for the given lower-cased interest set and budget tier.
/// Higher is better.
pub(crate) fn score_place(place: &Place, interests: &HashSet<String>, budget: BudgetTier) -> f64 {
    let rating_weight = if budget == BudgetTier::Luxury { 12.0 } else { 10.0 };
    let mut score = place.rating.unwrap_or(DEFAULT_RATING) * rating_weight;

    let tags: HashSet<String> = place.tags.iter().map(|tag| tag.to_lowercase()).collect();
    for interest in interests {
        if tags.contains(interest) {
            score += 12.0;
        }
    }

    if place.place_type == PlaceType::Landmark {
        score += 8.0;
    }

    let cost = place.avg_cost;
    score += match budget {
        BudgetTier::Simple => (40.0 - cost).max(0.0) * 0.6,
        BudgetTier::Comfort => (40.0 - cost).max(0.0) * 0.3,
        BudgetTier::Luxury => cost.min(200.0) * 0.08,
    };

    score += match (budget, place.price_tier) {
        (BudgetTier::Luxury, PriceTier::Luxury) => 14.0,
        (BudgetTier::Comfort, PriceTier::Comfort) => 10.0,
        (BudgetTier::Simple, PriceTier::Simple) => 8.0,
        _ => 0.0,
    };

    score
}
