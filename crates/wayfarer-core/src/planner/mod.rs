//! Deterministic itinerary generation.
//!
//! The planner is a pure function over a place catalog and a
//! [`PlanRequest`]: no clock, no randomness, no store access. Identical
//! inputs always produce identical itineraries, which keeps plans cacheable
//! and the engine trivially testable.
//!
//! Selection runs in three stages. The catalog is narrowed to the requested
//! city (case-insensitively) and split by type, with hotels and restaurants
//! additionally filtered to the price tiers the budget allows; landmarks are
//! never price-filtered. Each pool is then ranked by [`score::score_place`]
//! and truncated to a candidate set sized for the trip. Finally days are
//! assembled by walking the ranked candidates with wrap-around, so short
//! pools repeat rather than leaving later days empty.

mod score;


use std::collections::HashSet;

use crate::models::{
    BudgetTier, DayItem, DaySchedule, Itinerary, ItinerarySummary, ItemKind, Place, PlaceType,
};
use crate::params::PlanRequest;
use score::score_place;

/// Per-day item quotas for a budget tier.
struct DayQuota {
    landmarks: usize,
    restaurants: usize,
}

fn day_quota(budget: BudgetTier) -> DayQuota {
    match budget {
        BudgetTier::Simple => DayQuota { landmarks: 2, restaurants: 1 },
        BudgetTier::Comfort => DayQuota { landmarks: 2, restaurants: 2 },
        BudgetTier::Luxury => DayQuota { landmarks: 3, restaurants: 2 },
    }
}

/// Generates a day-by-day itinerary from the given catalog.
///
/// Callers are expected to validate the request first via
/// [`PlanRequest::validate`]. A city with no matching catalog entries yields
/// a structurally complete itinerary with empty item lists and zero costs.
pub fn plan(catalog: &[Place], request: &PlanRequest) -> Itinerary {
    let budget = request.budget;
    let quota = day_quota(budget);
    let days = request.days.max(1) as usize;

    let city_key = request.city.trim().to_lowercase();
    let interests: HashSet<String> = request
        .interests
        .iter()
        .map(|interest| interest.to_lowercase())
        .collect();

    let city_places: Vec<&Place> = catalog
        .iter()
        .filter(|place| place.city.trim().to_lowercase() == city_key)
        .collect();

    let hotels = city_places
        .iter()
        .copied()
        .filter(|p| p.place_type == PlaceType::Hotel && budget.allows(p.price_tier));
    let restaurants = city_places
        .iter()
        .copied()
        .filter(|p| p.place_type == PlaceType::Restaurant && budget.allows(p.price_tier));
    let landmarks = city_places
        .iter()
        .copied()
        .filter(|p| p.place_type == PlaceType::Landmark);

    let hotel = pick_best(hotels, 1, &interests, budget).into_iter().next();

    // Candidate pools hold at least one spare beyond a single day's quota so
    // consecutive days differ even on one-day trips extended later.
    let restaurant_count = (quota.restaurants * days).max(quota.restaurants + 1);
    let landmark_count = (quota.landmarks * days).max(quota.landmarks + 1);

    let chosen_restaurants = pick_best(restaurants, restaurant_count, &interests, budget);
    let chosen_landmarks = pick_best(landmarks, landmark_count, &interests, budget);

    let mut schedule = Vec::with_capacity(days);
    let mut landmark_idx = 0;
    let mut restaurant_idx = 0;

    for day in 1..=request.days {
        let day_landmarks = take_with_wrap(&chosen_landmarks, landmark_idx, quota.landmarks);
        landmark_idx += quota.landmarks;

        let day_restaurants = take_with_wrap(&chosen_restaurants, restaurant_idx, quota.restaurants);
        restaurant_idx += quota.restaurants;

        let mut cost: f64 = day_landmarks.iter().map(|p| p.avg_cost).sum::<f64>()
            + day_restaurants.iter().map(|p| p.avg_cost).sum::<f64>();
        if let Some(hotel) = &hotel {
            cost += hotel.avg_cost / days as f64;
        }

        let mut items: Vec<DayItem> = Vec::new();
        items.extend(day_landmarks.into_iter().map(|place| DayItem {
            kind: ItemKind::Landmark,
            place,
        }));
        items.extend(day_restaurants.into_iter().map(|place| DayItem {
            kind: ItemKind::Restaurant,
            place,
        }));
        if let Some(hotel) = &hotel {
            items.push(DayItem {
                kind: ItemKind::Hotel,
                place: hotel.clone(),
            });
        }

        schedule.push(DaySchedule {
            day,
            title: format!("Day {day} in {}", request.city),
            items,
            estimated_cost: cost.round() as i64,
        });
    }

    // Total is the sum of rounded day costs, not a rounded sum.
    let total = schedule.iter().map(|d| d.estimated_cost).sum();

    Itinerary {
        city: request.city.clone(),
        days: request.days,
        budget,
        interests: request.interests.clone(),
        summary: ItinerarySummary {
            level: budget,
            total_estimated_cost: total,
            hotel,
        },
        itinerary: schedule,
    }
}

/// Ranks a pool by descending score and returns up to `count` clones.
///
/// Score ties break on ascending place id, so equal-scoring catalogs still
/// rank deterministically.
fn pick_best<'a>(
    pool: impl Iterator<Item = &'a Place>,
    count: usize,
    interests: &HashSet<String>,
    budget: BudgetTier,
) -> Vec<Place> {
    let mut scored: Vec<(f64, &Place)> = pool
        .map(|place| (score_place(place, interests, budget), place))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
    scored
        .into_iter()
        .take(count)
        .map(|(_, place)| place.clone())
        .collect()
}

/// Takes `count` entries starting at `start`, wrapping around the pool.
/// Returns an empty list for an empty pool.
fn take_with_wrap(pool: &[Place], start: usize, count: usize) -> Vec<Place> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }
    (0..count).map(|i| pool[(start + i) % pool.len()].clone()).collect()
}
