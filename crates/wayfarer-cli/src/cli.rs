//! Command handlers bridging parsed arguments and the core library.
//!
//! Each handler fetches from the store, formats through the markdown Display
//! implementations, and hands the result to the terminal renderer.

use anyhow::{bail, Result};
use serde_json::json;
use wayfarer_core::params::{CreatePlace, PlanRequest};
use wayfarer_core::{metrics, planner, Offers, Places, Store};

use crate::args::{OfferCommands, PlaceCommands, StatsArgs};
use crate::renderer::TerminalRenderer;

pub struct Cli {
    store: Store,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: Store, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Validates the request, generates the itinerary, and records a usage
    /// event.
    pub fn generate_plan(&self, request: PlanRequest) -> Result<()> {
        let request = request.validate()?;
        let itinerary = planner::plan(&self.store.list_places(), &request);

        self.store.track_event(
            "plan_generated",
            Some(json!({
                "city": request.city,
                "days": request.days,
                "budget": request.budget.as_str(),
            })),
        );

        self.renderer.render(&itinerary.to_string())
    }

    pub fn handle_place_command(&self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::List(args) => self.list_places(args.city.as_deref()),
            PlaceCommands::Show(args) => self.show_place(&args.key),
            PlaceCommands::Add(args) => self.add_place(args.into()),
            PlaceCommands::Remove(args) => self.remove_place(&args.key, args.confirm),
        }
    }

    pub fn handle_offer_command(&self, command: OfferCommands) -> Result<()> {
        match command {
            OfferCommands::List => self.list_offers(),
        }
    }

    pub fn list_places(&self, city: Option<&str>) -> Result<()> {
        let mut places = self.store.list_places();
        if let Some(city) = city {
            let key = city.trim().to_lowercase();
            places.retain(|p| p.city.to_lowercase() == key);
        }
        self.renderer.render(&Places(places).to_string())
    }

    pub fn show_place(&self, key: &str) -> Result<()> {
        match self.store.find_place_by_key(key) {
            Some(place) => self.renderer.render(&place.to_string()),
            None => bail!("No place found for '{key}'"),
        }
    }

    pub fn add_place(&self, params: CreatePlace) -> Result<()> {
        if params.name.trim().is_empty() {
            bail!("Place name is required");
        }
        let place = self.store.create_place(&params);
        self.renderer.render(&format!("Added place: {} ({})\n", place.name, place.id))
    }

    pub fn remove_place(&self, key: &str, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Removal requires --confirm");
        }
        match self.store.delete_place_by_key(key) {
            Some(place) => self
                .renderer
                .render(&format!("Removed place: {} ({})\n", place.name, place.id)),
            None => bail!("No place found for '{key}'"),
        }
    }

    pub fn list_offers(&self) -> Result<()> {
        self.renderer.render(&Offers(self.store.list_offers()).to_string())
    }

    pub fn stats(&self, args: &StatsArgs) -> Result<()> {
        let events = self.store.list_events();
        let total = metrics::count_events(&events, &args.kind);
        let series = metrics::daily_series(&events, &args.kind, args.days);

        let mut output = format!("# Usage: {}\n\nTotal events: {total}\n\n", args.kind);
        output.push_str(&series.to_string());
        self.renderer.render(&output)
    }
}
