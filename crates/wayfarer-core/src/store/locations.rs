//! Country and city accessors.
//!
//! Deleting a country cascades to its cities, the only cascading delete in
//! the store.

use jiff::Timestamp;

use super::util::{make_id, normalize_key};
use super::Store;
use crate::models::{City, Country};
use crate::params::{CreateCity, CreateCountry};

impl Store {
    /// Returns an independent copy of the country list.
    pub fn list_countries(&self) -> Vec<Country> {
        self.state().countries.clone()
    }

    /// Finds a country by id.
    pub fn find_country_by_id(&self, id: &str) -> Option<Country> {
        self.state().countries.iter().find(|c| c.id == id).cloned()
    }

    /// Finds a country by normalized name.
    pub fn find_country_by_name(&self, name: &str) -> Option<Country> {
        let key = normalize_key(name);
        self.state()
            .countries
            .iter()
            .find(|c| normalize_key(&c.name) == key)
            .cloned()
    }

    /// Creates a country with a trimmed name.
    ///
    /// Name uniqueness is the caller's check, via
    /// [`Store::find_country_by_name`], before creating.
    pub fn create_country(&self, params: &CreateCountry) -> Country {
        let country = Country {
            id: make_id("country"),
            name: params.name.trim().to_string(),
            created_at: Timestamp::now(),
        };

        self.state().countries.push(country.clone());
        self.schedule_save();
        country
    }

    /// Removes a country and all of its cities, returning the removed
    /// country.
    pub fn delete_country(&self, id: &str) -> Option<Country> {
        let removed = {
            let mut state = self.state();
            let index = state.countries.iter().position(|c| c.id == id)?;
            let removed = state.countries.remove(index);
            state.cities.retain(|city| city.country_id != id);
            removed
        };
        self.schedule_save();
        Some(removed)
    }

    /// Returns an independent copy of the city list.
    pub fn list_cities(&self) -> Vec<City> {
        self.state().cities.clone()
    }

    /// Finds a city by id.
    pub fn find_city_by_id(&self, id: &str) -> Option<City> {
        self.state().cities.iter().find(|c| c.id == id).cloned()
    }

    /// Finds a city by normalized name, optionally scoped to a country.
    pub fn find_city_by_name(&self, name: &str, country_id: Option<&str>) -> Option<City> {
        let key = normalize_key(name);
        self.state()
            .cities
            .iter()
            .find(|city| {
                normalize_key(&city.name) == key
                    && country_id.is_none_or(|id| city.country_id == id)
            })
            .cloned()
    }

    /// Creates a city with a trimmed name under the given country.
    pub fn create_city(&self, params: &CreateCity) -> City {
        let city = City {
            id: make_id("city"),
            name: params.name.trim().to_string(),
            country_id: params.country_id.clone(),
            created_at: Timestamp::now(),
        };

        self.state().cities.push(city.clone());
        self.schedule_save();
        city
    }

    /// Removes a city by id, returning the removed record.
    pub fn delete_city(&self, id: &str) -> Option<City> {
        let removed = {
            let mut state = self.state();
            let index = state.cities.iter().position(|c| c.id == id)?;
            state.cities.remove(index)
        };
        self.schedule_save();
        Some(removed)
    }
}
