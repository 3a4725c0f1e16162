mod common;

use common::create_test_store;
use wayfarer_core::params::PlanRequest;
use wayfarer_core::{planner, BudgetTier, PriceTier};

fn request(city: &str, days: u32, budget: BudgetTier) -> PlanRequest {
    PlanRequest {
        city: city.to_string(),
        days,
        budget,
        interests: Vec::new(),
    }
}

#[tokio::test]
async fn comfort_plan_over_seeded_catalog() {
    let (_temp_dir, store) = create_test_store().await;
    let catalog = store.list_places();

    let itinerary = planner::plan(&catalog, &request("Samarkand", 2, BudgetTier::Comfort));

    assert_eq!(itinerary.itinerary.len(), 2);
    let hotel = itinerary.summary.hotel.as_ref().expect("comfort hotel available");
    assert_eq!(hotel.name, "Emirhan Hotel");

    let total: i64 = itinerary.itinerary.iter().map(|d| d.estimated_cost).sum();
    assert_eq!(itinerary.summary.total_estimated_cost, total);
    assert!(total > 0);
}

#[tokio::test]
async fn luxury_plan_upgrades_the_hotel() {
    let (_temp_dir, store) = create_test_store().await;
    let catalog = store.list_places();

    let itinerary = planner::plan(&catalog, &request("Samarkand", 3, BudgetTier::Luxury));
    let hotel = itinerary.summary.hotel.as_ref().expect("luxury hotel available");
    assert_eq!(hotel.name, "Hotel Registan Plaza");
    assert_eq!(hotel.price_tier, PriceTier::Luxury);
}

#[tokio::test]
async fn simple_plan_omits_hotels_above_tier() {
    let (_temp_dir, store) = create_test_store().await;
    let catalog = store.list_places();

    // The seeded Samarkand hotels are comfort and luxury only.
    let itinerary = planner::plan(&catalog, &request("Samarkand", 2, BudgetTier::Simple));
    assert!(itinerary.summary.hotel.is_none());
    for day in &itinerary.itinerary {
        for item in &day.items {
            assert_ne!(item.place.price_tier, PriceTier::Luxury);
        }
    }
}

#[tokio::test]
async fn repeated_planning_is_deterministic() {
    let (_temp_dir, store) = create_test_store().await;
    let catalog = store.list_places();
    let req = request("Bukhara", 4, BudgetTier::Comfort);

    assert_eq!(planner::plan(&catalog, &req), planner::plan(&catalog, &req));
}
