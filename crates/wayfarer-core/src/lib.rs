//! Core library for the Wayfarer travel planning application.
//!
//! This crate provides the business logic behind the CLI: a JSON-document
//! store for the travel catalog and account records, a refresh token vault,
//! a usage event log, and a deterministic itinerary planner.
//!
//! # Architecture
//!
//! - **Document store** ([`store`]): the whole state lives in one JSON file,
//!   loaded at startup and persisted with debounced atomic writes
//! - **Domain models** ([`models`]): the persisted records and itinerary
//!   types, with markdown [`std::fmt::Display`] implementations in
//!   [`display`]
//! - **Planner** ([`planner`]): a pure function from catalog and request to
//!   a day-by-day itinerary
//! - **Metrics** ([`metrics`]): aggregations over the usage event log
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_core::{planner, PlanRequest, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_data_path(Some("store.json"))
//!     .build()
//!     .await?;
//!
//! let request = PlanRequest {
//!     city: "Samarkand".to_string(),
//!     days: 3,
//!     ..Default::default()
//! }
//! .validate()?;
//!
//! let itinerary = planner::plan(&store.list_places(), &request);
//! println!("{itinerary}");
//!
//! store.flush()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod params;
pub mod planner;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use display::{Offers, Places};
pub use error::{Result, StoreError};
pub use metrics::EventSeries;
pub use models::{
    hash_token, BudgetTier, City, Country, Event, Itinerary, Offer, Place, PlaceType, PriceTier,
    Role, User,
};
pub use params::PlanRequest;
pub use store::{Store, StoreBuilder};
