//! Parameter structures for store and planner operations.
//!
//! These structures are shared across interfaces (CLI, future HTTP layer)
//! without framework-specific derives. Interface layers wrap them with their
//! own argument types and convert via `From`/`Into`, keeping clap and
//! friends out of the core.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::models::{BudgetTier, Coords, PlaceType, PriceTier, Role};

/// Parameters for generating an itinerary.
///
/// The planner trusts its inputs; callers are expected to run
/// [`PlanRequest::validate`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Destination city, matched case-insensitively against the catalog
    pub city: String,
    /// Number of days to plan, 1 to 30
    pub days: u32,
    /// Budget tier governing filtering and scoring
    #[serde(default)]
    pub budget: BudgetTier,
    /// Interest tags, matched case-insensitively against place tags
    #[serde(default)]
    pub interests: Vec<String>,
}

impl PlanRequest {
    /// Upper bound on the planned day count.
    pub const MAX_DAYS: u32 = 30;

    /// Interests beyond this many are ignored.
    pub const MAX_INTERESTS: usize = 20;

    /// Validates and sanitizes the request.
    ///
    /// The city must be non-empty after trimming and the day count must be
    /// between 1 and 30. Interests are trimmed, emptied entries dropped, and
    /// the list capped. Returns the sanitized request.
    ///
    /// # Errors
    ///
    /// * `StoreError::InvalidInput` - when the city is empty or the day
    ///   count is out of range
    pub fn validate(&self) -> Result<PlanRequest> {
        let city = self.city.trim();
        if city.is_empty() {
            return Err(StoreError::invalid_input("city", "City is required"));
        }

        if self.days < 1 || self.days > Self::MAX_DAYS {
            return Err(StoreError::invalid_input(
                "days",
                format!("Days must be between 1 and {}", Self::MAX_DAYS),
            ));
        }

        let interests = self
            .interests
            .iter()
            .map(|interest| interest.trim())
            .filter(|interest| !interest.is_empty())
            .take(Self::MAX_INTERESTS)
            .map(str::to_string)
            .collect();

        Ok(PlanRequest {
            city: city.to_string(),
            days: self.days,
            budget: self.budget,
            interests,
        })
    }
}

/// Parameters for creating a user record.
///
/// The password digest is computed at the transport boundary; the store
/// never sees raw credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Email address; normalized (trimmed, lower-cased) on create
    pub email: String,
    /// Precomputed opaque password digest
    pub password_hash: String,
    /// Account role
    #[serde(default)]
    pub role: Role,
    /// Optional avatar reference
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial profile update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name; ignored when empty after trimming
    pub name: Option<String>,
    /// New avatar reference; ignored when empty after trimming
    pub avatar: Option<String>,
    /// Clears the avatar; takes precedence over `avatar`
    #[serde(default)]
    pub clear_avatar: bool,
}

/// Parameters for creating a catalog place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlace {
    /// Explicit slug; derived from the name when absent
    #[serde(default)]
    pub slug: Option<String>,
    /// Display name
    pub name: String,
    /// Country name
    #[serde(default)]
    pub country: String,
    /// City name
    pub city: String,
    /// Catalog type
    pub place_type: PlaceType,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Price classification
    #[serde(default)]
    pub price_tier: PriceTier,
    /// Average cost; negative values are clamped to zero
    #[serde(default)]
    pub avg_cost: f64,
    /// Rating on a 1-5 scale
    #[serde(default)]
    pub rating: Option<f64>,
    /// Coordinates; origin when absent
    #[serde(default)]
    pub coords: Option<Coords>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial place update. The slug, once derived, is only overwritten when
/// explicitly supplied here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlace {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub place_type: Option<PlaceType>,
    pub description: Option<String>,
    pub price_tier: Option<PriceTier>,
    pub avg_cost: Option<f64>,
    pub rating: Option<f64>,
    pub coords: Option<Coords>,
    pub tags: Option<Vec<String>>,
}

/// Parameters for creating an offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOffer {
    pub title: String,
    pub city: String,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub description: String,
}

/// Partial offer update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOffer {
    pub title: Option<String>,
    pub city: Option<String>,
    pub budget: Option<BudgetTier>,
    pub description: Option<String>,
}

/// Parameters for creating a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCountry {
    /// Country name; trimmed on create, globally unique by normalized key
    pub name: String,
}

/// Parameters for creating a city within a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCity {
    /// City name; trimmed on create, unique within its country
    pub name: String,
    /// Owning country id
    pub country_id: String,
}
