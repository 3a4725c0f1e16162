//! Command-line argument definitions using clap's derive API.
//!
//! The arg structs here wrap the core parameter types: clap attributes and
//! help text live on the wrappers, the core types stay framework-free, and
//! each wrapper converts via `From` so the boundary is explicit.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use wayfarer_core::metrics::DEFAULT_SERIES_DAYS;
use wayfarer_core::params::{CreatePlace, PlanRequest};
use wayfarer_core::{BudgetTier, PlaceType, PriceTier};

/// Main command-line interface for the Wayfarer travel planner
///
/// Wayfarer keeps a local catalog of places and offers in a single JSON
/// document and generates deterministic day-by-day itineraries from it.
#[derive(Parser)]
#[command(version, about, name = "wf")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/wayfarer/store.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfarer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an itinerary for a city
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Manage the place catalog
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
    /// Browse curated offers
    Offer {
        #[command(subcommand)]
        command: OfferCommands,
    },
    /// Show usage statistics from the event log
    Stats(StatsArgs),
}

/// Generate an itinerary
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Destination city
    pub city: String,
    /// Number of days to plan (1 to 30)
    #[arg(short, long, default_value_t = 3)]
    pub days: u32,
    /// Budget level for the trip
    #[arg(short, long, value_enum, default_value_t = BudgetArg::Comfort)]
    pub budget: BudgetArg,
    /// Interest tags as a comma-separated list (e.g. history,food)
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Vec<String>,
}

impl From<PlanArgs> for PlanRequest {
    fn from(val: PlanArgs) -> Self {
        PlanRequest {
            city: val.city,
            days: val.days,
            budget: val.budget.into(),
            interests: val.interests,
        }
    }
}

#[derive(Subcommand)]
pub enum PlaceCommands {
    /// List catalog places
    #[command(aliases = ["l", "ls"])]
    List(ListPlacesArgs),
    /// Show one place by id, slug, or name
    #[command(alias = "s")]
    Show(ShowPlaceArgs),
    /// Add a place to the catalog
    #[command(alias = "a")]
    Add(AddPlaceArgs),
    /// Remove a place by id, slug, or name
    #[command(aliases = ["d", "rm"])]
    Remove(RemovePlaceArgs),
}

/// List catalog places
#[derive(ClapArgs)]
pub struct ListPlacesArgs {
    /// Only show places in this city
    #[arg(long)]
    pub city: Option<String>,
}

/// Show one place
#[derive(ClapArgs)]
pub struct ShowPlaceArgs {
    /// Place id, slug, or name
    pub key: String,
}

/// Add a place to the catalog
#[derive(ClapArgs)]
pub struct AddPlaceArgs {
    /// Display name of the place
    pub name: String,
    /// City the place belongs to
    #[arg(long)]
    pub city: String,
    /// Country the place belongs to
    #[arg(long, default_value = "")]
    pub country: String,
    /// Kind of place
    #[arg(long, value_enum)]
    pub kind: PlaceTypeArg,
    /// Price classification
    #[arg(long, value_enum, default_value_t = PriceTierArg::Simple)]
    pub price: PriceTierArg,
    /// Average visit cost
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,
    /// Rating on a 1-5 scale
    #[arg(long)]
    pub rating: Option<f64>,
    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Tags as a comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Explicit slug; derived from the name when omitted
    #[arg(long)]
    pub slug: Option<String>,
}

impl From<AddPlaceArgs> for CreatePlace {
    fn from(val: AddPlaceArgs) -> Self {
        CreatePlace {
            slug: val.slug,
            name: val.name,
            country: val.country,
            city: val.city,
            place_type: val.kind.into(),
            description: val.description,
            price_tier: val.price.into(),
            avg_cost: val.cost,
            rating: val.rating,
            coords: None,
            tags: val.tags,
        }
    }
}

/// Remove a place
#[derive(ClapArgs)]
pub struct RemovePlaceArgs {
    /// Place id, slug, or name
    pub key: String,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum OfferCommands {
    /// List curated offers
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Show usage statistics
#[derive(ClapArgs)]
pub struct StatsArgs {
    /// Event kind to report on
    #[arg(long, default_value = "plan_generated")]
    pub kind: String,
    /// Trailing window in days
    #[arg(long, default_value_t = DEFAULT_SERIES_DAYS)]
    pub days: u32,
}

/// Command-line representation of the budget tier.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BudgetArg {
    Simple,
    Comfort,
    Luxury,
}

impl std::fmt::Display for BudgetArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetArg::Simple => write!(f, "simple"),
            BudgetArg::Comfort => write!(f, "comfort"),
            BudgetArg::Luxury => write!(f, "luxury"),
        }
    }
}

impl From<BudgetArg> for BudgetTier {
    fn from(val: BudgetArg) -> Self {
        match val {
            BudgetArg::Simple => BudgetTier::Simple,
            BudgetArg::Comfort => BudgetTier::Comfort,
            BudgetArg::Luxury => BudgetTier::Luxury,
        }
    }
}

/// Command-line representation of the place type.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlaceTypeArg {
    Landmark,
    Restaurant,
    Hotel,
}

impl From<PlaceTypeArg> for PlaceType {
    fn from(val: PlaceTypeArg) -> Self {
        match val {
            PlaceTypeArg::Landmark => PlaceType::Landmark,
            PlaceTypeArg::Restaurant => PlaceType::Restaurant,
            PlaceTypeArg::Hotel => PlaceType::Hotel,
        }
    }
}

/// Command-line representation of the price tier.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriceTierArg {
    Simple,
    Comfort,
    Luxury,
}

impl std::fmt::Display for PriceTierArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTierArg::Simple => write!(f, "simple"),
            PriceTierArg::Comfort => write!(f, "comfort"),
            PriceTierArg::Luxury => write!(f, "luxury"),
        }
    }
}

impl From<PriceTierArg> for PriceTier {
    fn from(val: PriceTierArg) -> Self {
        match val {
            PriceTierArg::Simple => PriceTier::Simple,
            PriceTierArg::Comfort => PriceTier::Comfort,
            PriceTierArg::Luxury => PriceTier::Luxury,
        }
    }
}
