//! Offer accessors.

use super::util::make_id;
use super::Store;
use crate::models::Offer;
use crate::params::{CreateOffer, UpdateOffer};

impl Store {
    /// Returns an independent copy of the offer list.
    pub fn list_offers(&self) -> Vec<Offer> {
        self.state().offers.clone()
    }

    /// Finds an offer by id.
    pub fn find_offer_by_id(&self, id: &str) -> Option<Offer> {
        self.state().offers.iter().find(|o| o.id == id).cloned()
    }

    /// Creates an offer, prepended so recent additions list first.
    pub fn create_offer(&self, params: &CreateOffer) -> Offer {
        let offer = Offer {
            id: make_id("offer"),
            title: params.title.clone(),
            city: params.city.clone(),
            budget: params.budget,
            description: params.description.clone(),
        };

        self.state().offers.insert(0, offer.clone());
        self.schedule_save();
        offer
    }

    /// Merges a partial update onto an existing offer, preserving the id.
    pub fn update_offer(&self, id: &str, params: &UpdateOffer) -> Option<Offer> {
        let updated = {
            let mut state = self.state();
            let offer = state.offers.iter_mut().find(|o| o.id == id)?;

            if let Some(title) = &params.title {
                offer.title = title.clone();
            }
            if let Some(city) = &params.city {
                offer.city = city.clone();
            }
            if let Some(budget) = params.budget {
                offer.budget = budget;
            }
            if let Some(description) = &params.description {
                offer.description = description.clone();
            }

            offer.clone()
        };
        self.schedule_save();
        Some(updated)
    }

    /// Removes an offer by id, returning the removed record.
    pub fn delete_offer(&self, id: &str) -> Option<Offer> {
        let removed = {
            let mut state = self.state();
            let index = state.offers.iter().position(|o| o.id == id)?;
            state.offers.remove(index)
        };
        self.schedule_save();
        Some(removed)
    }
}
