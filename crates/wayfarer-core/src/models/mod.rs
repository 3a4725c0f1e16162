//! Data models for the travel catalog and its supporting records.
//!
//! This module contains the domain models persisted by the document store
//! (users, refresh tokens, places, offers, locations, events) and the
//! itinerary types produced by the planner. Display implementations live in
//! [`crate::display`] to keep data structures separate from presentation.
//!
//! All persisted models serialize with the document's stable camelCase field
//! names so that a hand-inspected or hand-edited store file remains loadable.

pub mod event;
pub mod itinerary;
pub mod location;
pub mod offer;
pub mod place;
pub mod token;
pub mod user;

pub use event::Event;
pub use itinerary::{DayItem, DaySchedule, ItemKind, Itinerary, ItinerarySummary};
pub use location::{City, Country};
pub use offer::Offer;
pub use place::{BudgetTier, Coords, Place, PlaceType, PriceTier};
pub use token::{hash_token, TokenEntry, TokenRecord};
pub use user::{Role, User};
