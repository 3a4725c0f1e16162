//! Display implementations for domain models.
//!
//! All formatting lives here, separated from the model definitions. The
//! implementations produce markdown so the CLI can render them richly while
//! plain `println!` output stays readable.

use std::fmt;

use crate::metrics::EventSeries;
use crate::models::{DaySchedule, Itinerary, Offer, Place};

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.place_type.as_str())?;
        writeln!(f, "- City: {}, {}", self.city, self.country)?;
        writeln!(f, "- Price tier: {}", self.price_tier.as_str())?;
        writeln!(f, "- Average cost: {:.0}", self.avg_cost)?;
        if let Some(rating) = self.rating {
            writeln!(f, "- Rating: {rating:.1}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- City: {}", self.city)?;
        writeln!(f, "- Budget: {}", self.budget.label())?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        for item in &self.items {
            writeln!(
                f,
                "- [{}] {} ({:.0})",
                item.kind.as_str(),
                item.place.name,
                item.place.avg_cost
            )?;
        }
        if self.items.is_empty() {
            writeln!(f, "Nothing scheduled.")?;
        }
        writeln!(f)?;
        writeln!(f, "Estimated cost: {}", self.estimated_cost)?;
        Ok(())
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} days in {}", self.days, self.city)?;
        writeln!(f)?;
        writeln!(f, "- Budget: {}", self.summary.level.label())?;
        if !self.interests.is_empty() {
            writeln!(f, "- Interests: {}", self.interests.join(", "))?;
        }
        match &self.summary.hotel {
            Some(hotel) => writeln!(f, "- Hotel: {}", hotel.name)?,
            None => writeln!(f, "- Hotel: none available")?,
        }
        writeln!(f, "- Total estimated cost: {}", self.summary.total_estimated_cost)?;
        writeln!(f)?;
        for day in &self.itinerary {
            write!(f, "{day}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for EventSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.is_empty() {
            return writeln!(f, "No data.");
        }
        for (day, count) in self.days.iter().zip(&self.counts) {
            writeln!(f, "- {day}: {count}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a place catalog listing. Handles empty
/// collections gracefully.
pub struct Places(pub Vec<Place>);

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No places found.")
        } else {
            for place in &self.0 {
                write!(f, "{place}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying offer listings.
pub struct Offers(pub Vec<Offer>);

impl fmt::Display for Offers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No offers found.")
        } else {
            for offer in &self.0 {
                write!(f, "{offer}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}
