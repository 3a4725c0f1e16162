//! Place accessors and the heterogeneous key lookup.

use super::util::{make_id, normalize_key};
use super::Store;
use crate::models::Place;
use crate::params::{CreatePlace, UpdatePlace};

impl Store {
    /// Returns an independent copy of the place catalog.
    pub fn list_places(&self) -> Vec<Place> {
        self.state().places.clone()
    }

    /// Finds a place by exact id.
    pub fn find_place_by_id(&self, id: &str) -> Option<Place> {
        self.state().places.iter().find(|p| p.id == id).cloned()
    }

    /// Finds a place by a heterogeneous client-supplied key.
    ///
    /// Lookup strategies run in fixed priority order, first match wins:
    /// exact id, then normalized slug, then normalized name. This keeps a
    /// single lookup contract for all callers.
    pub fn find_place_by_key(&self, key: &str) -> Option<Place> {
        let raw = key.trim();
        if raw.is_empty() {
            return None;
        }

        let state = self.state();

        if let Some(place) = state.places.iter().find(|p| p.id == raw) {
            return Some(place.clone());
        }

        let normalized = normalize_key(raw);
        if let Some(place) = state.places.iter().find(|p| {
            p.slug
                .as_deref()
                .is_some_and(|slug| normalize_key(slug) == normalized)
        }) {
            return Some(place.clone());
        }

        state
            .places
            .iter()
            .find(|p| normalize_key(&p.name) == normalized)
            .cloned()
    }

    /// Creates a place, deriving a slug from the name when none is given.
    /// New places are prepended so recent additions list first.
    pub fn create_place(&self, params: &CreatePlace) -> Place {
        let slug = params
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .map(str::to_string)
            .or_else(|| derived_slug(&params.name));

        let place = Place {
            id: make_id("place"),
            slug,
            name: params.name.clone(),
            country: params.country.clone(),
            city: params.city.clone(),
            place_type: params.place_type,
            description: params.description.clone(),
            price_tier: params.price_tier,
            avg_cost: params.avg_cost.max(0.0),
            rating: params.rating,
            coords: params.coords.unwrap_or_default(),
            tags: params.tags.clone(),
        };

        self.state().places.insert(0, place.clone());
        self.schedule_save();
        place
    }

    /// Merges a partial update onto an existing place, preserving the id.
    ///
    /// The slug is only overwritten when explicitly supplied; when the
    /// record still has no slug after the merge, one is derived from the
    /// current name.
    pub fn update_place(&self, id: &str, params: &UpdatePlace) -> Option<Place> {
        let updated = {
            let mut state = self.state();
            let place = state.places.iter_mut().find(|p| p.id == id)?;

            if let Some(slug) = &params.slug {
                place.slug = Some(slug.clone());
            }
            if let Some(name) = &params.name {
                place.name = name.clone();
            }
            if let Some(country) = &params.country {
                place.country = country.clone();
            }
            if let Some(city) = &params.city {
                place.city = city.clone();
            }
            if let Some(place_type) = params.place_type {
                place.place_type = place_type;
            }
            if let Some(description) = &params.description {
                place.description = description.clone();
            }
            if let Some(price_tier) = params.price_tier {
                place.price_tier = price_tier;
            }
            if let Some(avg_cost) = params.avg_cost {
                place.avg_cost = avg_cost.max(0.0);
            }
            if let Some(rating) = params.rating {
                place.rating = Some(rating);
            }
            if let Some(coords) = params.coords {
                place.coords = coords;
            }
            if let Some(tags) = &params.tags {
                place.tags = tags.clone();
            }

            if place.slug.is_none() {
                place.slug = derived_slug(&place.name);
            }

            place.clone()
        };
        self.schedule_save();
        Some(updated)
    }

    /// Removes a place by id, returning the removed record.
    pub fn delete_place(&self, id: &str) -> Option<Place> {
        let removed = {
            let mut state = self.state();
            let index = state.places.iter().position(|p| p.id == id)?;
            state.places.remove(index)
        };
        self.schedule_save();
        Some(removed)
    }

    /// Removes a place located via the heterogeneous key lookup.
    pub fn delete_place_by_key(&self, key: &str) -> Option<Place> {
        let place = self.find_place_by_key(key)?;
        self.delete_place(&place.id)
    }
}

fn derived_slug(name: &str) -> Option<String> {
    let slug = normalize_key(name);
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}
