//! Built-in seed catalog.
//!
//! The store initializes from this fixed set of places and offers when no
//! document exists, and backfills any seed record whose id is missing after a
//! load. Ids are stable (`place-N`, `offer-N`) so repeated merges stay
//! idempotent. Every call returns fresh, independently owned records.

use crate::models::{BudgetTier, Coords, Offer, Place, PlaceType, PriceTier};

struct SeedPlace {
    id: &'static str,
    name: &'static str,
    city: &'static str,
    place_type: PlaceType,
    price_tier: PriceTier,
    avg_cost: f64,
    rating: f64,
    coords: (f64, f64),
    tags: &'static [&'static str],
    description: &'static str,
}

const SEED_PLACES: &[SeedPlace] = &[
    SeedPlace {
        id: "place-1",
        name: "Registan Square",
        city: "Samarkand",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 10.0,
        rating: 4.9,
        coords: (39.6547, 66.9758),
        tags: &["history", "architecture", "islamic"],
        description: "Three grand madrasahs framing the most famous square in Central Asia.",
    },
    SeedPlace {
        id: "place-2",
        name: "Gur-e-Amir Mausoleum",
        city: "Samarkand",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 8.0,
        rating: 4.7,
        coords: (39.6486, 66.9686),
        tags: &["history", "architecture"],
        description: "Resting place of Amir Timur under a ribbed azure dome.",
    },
    SeedPlace {
        id: "place-3",
        name: "Shah-i-Zinda",
        city: "Samarkand",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 9.0,
        rating: 4.8,
        coords: (39.6631, 66.9885),
        tags: &["history", "pilgrimage"],
        description: "Avenue of exquisitely tiled mausoleums on the Afrasiab hillside.",
    },
    SeedPlace {
        id: "place-4",
        name: "Siab Bazaar",
        city: "Samarkand",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 5.0,
        rating: 4.4,
        coords: (39.6628, 66.9800),
        tags: &["food", "market"],
        description: "Sprawling market of bread, dried fruit and spices next to Bibi-Khanym.",
    },
    SeedPlace {
        id: "place-5",
        name: "Samarkand Osh Center",
        city: "Samarkand",
        place_type: PlaceType::Restaurant,
        price_tier: PriceTier::Simple,
        avg_cost: 7.0,
        rating: 4.5,
        coords: (39.6550, 66.9600),
        tags: &["food", "local"],
        description: "Cauldron-cooked plov served until it runs out around noon.",
    },
    SeedPlace {
        id: "place-6",
        name: "Platan Restaurant",
        city: "Samarkand",
        place_type: PlaceType::Restaurant,
        price_tier: PriceTier::Comfort,
        avg_cost: 18.0,
        rating: 4.6,
        coords: (39.6539, 66.9505),
        tags: &["food", "european"],
        description: "Garden terrace mixing Uzbek classics with European dishes.",
    },
    SeedPlace {
        id: "place-7",
        name: "Emirhan Hotel",
        city: "Samarkand",
        place_type: PlaceType::Hotel,
        price_tier: PriceTier::Comfort,
        avg_cost: 45.0,
        rating: 4.3,
        coords: (39.6510, 66.9570),
        tags: &["boutique"],
        description: "Quiet boutique stay a short walk from Registan.",
    },
    SeedPlace {
        id: "place-8",
        name: "Hotel Registan Plaza",
        city: "Samarkand",
        place_type: PlaceType::Hotel,
        price_tier: PriceTier::Luxury,
        avg_cost: 120.0,
        rating: 4.5,
        coords: (39.6490, 66.9650),
        tags: &["spa", "pool"],
        description: "Full-service high-rise with spa, pool and city views.",
    },
    SeedPlace {
        id: "place-9",
        name: "Po-i-Kalyan Complex",
        city: "Bukhara",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 8.0,
        rating: 4.8,
        coords: (39.7757, 64.4142),
        tags: &["history", "architecture"],
        description: "Kalyan minaret and mosque ensemble at the heart of old Bukhara.",
    },
    SeedPlace {
        id: "place-10",
        name: "Ark Fortress",
        city: "Bukhara",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 6.0,
        rating: 4.5,
        coords: (39.7768, 64.4106),
        tags: &["history", "museum"],
        description: "Ancient royal citadel housing museums within its massive walls.",
    },
    SeedPlace {
        id: "place-11",
        name: "Lyabi Hauz",
        city: "Bukhara",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 0.0,
        rating: 4.6,
        coords: (39.7740, 64.4204),
        tags: &["plaza", "evening"],
        description: "Shaded pool plaza ringed by tea houses and mulberry trees.",
    },
    SeedPlace {
        id: "place-12",
        name: "Old Bukhara Restaurant",
        city: "Bukhara",
        place_type: PlaceType::Restaurant,
        price_tier: PriceTier::Comfort,
        avg_cost: 15.0,
        rating: 4.4,
        coords: (39.7735, 64.4210),
        tags: &["food", "local"],
        description: "Courtyard dining with shashlik and live folk music.",
    },
    SeedPlace {
        id: "place-13",
        name: "Hotel Asia Bukhara",
        city: "Bukhara",
        place_type: PlaceType::Hotel,
        price_tier: PriceTier::Comfort,
        avg_cost: 50.0,
        rating: 4.2,
        coords: (39.7720, 64.4190),
        tags: &["pool"],
        description: "Comfortable rooms and a courtyard pool near Lyabi Hauz.",
    },
    SeedPlace {
        id: "place-14",
        name: "Chorsu Bazaar",
        city: "Tashkent",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 3.0,
        rating: 4.5,
        coords: (41.3265, 69.2345),
        tags: &["market", "food"],
        description: "Domed central market stacked with produce, meat and spices.",
    },
    SeedPlace {
        id: "place-15",
        name: "Hazrati Imam Complex",
        city: "Tashkent",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 5.0,
        rating: 4.6,
        coords: (41.3380, 69.2350),
        tags: &["history", "islamic"],
        description: "Religious center holding one of the oldest Qurans in the world.",
    },
    SeedPlace {
        id: "place-16",
        name: "Tashkent Plov Center",
        city: "Tashkent",
        place_type: PlaceType::Restaurant,
        price_tier: PriceTier::Simple,
        avg_cost: 6.0,
        rating: 4.5,
        coords: (41.3210, 69.2890),
        tags: &["food", "local"],
        description: "Giant kazans of wedding plov, best visited before lunch.",
    },
    SeedPlace {
        id: "place-17",
        name: "Hyatt Regency Tashkent",
        city: "Tashkent",
        place_type: PlaceType::Hotel,
        price_tier: PriceTier::Luxury,
        avg_cost: 180.0,
        rating: 4.7,
        coords: (41.3190, 69.2820),
        tags: &["spa", "business"],
        description: "Premium rooms, spa and rooftop views in the city center.",
    },
    SeedPlace {
        id: "place-18",
        name: "Itchan Kala",
        city: "Khiva",
        place_type: PlaceType::Landmark,
        price_tier: PriceTier::Simple,
        avg_cost: 10.0,
        rating: 4.8,
        coords: (41.3783, 60.3639),
        tags: &["history", "unesco"],
        description: "Walled inner town of Khiva, a museum city of minarets.",
    },
    SeedPlace {
        id: "place-19",
        name: "Khorezm Art Restaurant",
        city: "Khiva",
        place_type: PlaceType::Restaurant,
        price_tier: PriceTier::Simple,
        avg_cost: 8.0,
        rating: 4.3,
        coords: (41.3779, 60.3620),
        tags: &["food", "local"],
        description: "Shivit oshi noodles and green tea inside the old walls.",
    },
    SeedPlace {
        id: "place-20",
        name: "Orient Star Khiva",
        city: "Khiva",
        place_type: PlaceType::Hotel,
        price_tier: PriceTier::Comfort,
        avg_cost: 55.0,
        rating: 4.4,
        coords: (41.3775, 60.3600),
        tags: &["heritage"],
        description: "Former madrasah converted into cell-room lodging by the gate.",
    },
];

/// Returns the fixed set of seed places with independently owned fields.
pub fn seed_places() -> Vec<Place> {
    SEED_PLACES
        .iter()
        .map(|seed| Place {
            id: seed.id.to_string(),
            slug: Some(crate::store::normalize_key(seed.name)),
            name: seed.name.to_string(),
            country: "Uzbekistan".to_string(),
            city: seed.city.to_string(),
            place_type: seed.place_type,
            description: seed.description.to_string(),
            price_tier: seed.price_tier,
            avg_cost: seed.avg_cost,
            rating: Some(seed.rating),
            coords: Coords {
                lat: seed.coords.0,
                lng: seed.coords.1,
            },
            tags: seed.tags.iter().map(|tag| (*tag).to_string()).collect(),
        })
        .collect()
}

/// Returns the fixed set of seed offers.
pub fn seed_offers() -> Vec<Offer> {
    let offers = [
        (
            "offer-1",
            "Local Guide (Samarkand) - 10% off",
            "Samarkand",
            BudgetTier::Comfort,
            "Book a certified guide and save on a 3-hour city walk.",
        ),
        (
            "offer-2",
            "Luxury Hotel Pickup (Tashkent)",
            "Tashkent",
            BudgetTier::Luxury,
            "Airport pickup included with selected premium stays.",
        ),
        (
            "offer-3",
            "Food Tour (Bukhara) - Simple",
            "Bukhara",
            BudgetTier::Simple,
            "Affordable street-food & bazaar tasting route.",
        ),
        (
            "offer-4",
            "Khiva Heritage Pass",
            "Khiva",
            BudgetTier::Comfort,
            "Guided walk through Itchan Kala with museum tickets.",
        ),
        (
            "offer-5",
            "Shahrisabz Culture Tour",
            "Shahrisabz",
            BudgetTier::Simple,
            "Day tour of Ak-Saray and Dorut Tilovat sites.",
        ),
        (
            "offer-6",
            "Kokand Palace Guide",
            "Kokand",
            BudgetTier::Comfort,
            "Local guide and transport to historic landmarks.",
        ),
        (
            "offer-7",
            "Termez Archaeology Pass",
            "Termez",
            BudgetTier::Simple,
            "Discounted entry to Fayaz Tepe and nearby sites.",
        ),
        (
            "offer-8",
            "Nukus Museum Combo",
            "Nukus",
            BudgetTier::Comfort,
            "Savitsky Museum ticket + local art gallery visit.",
        ),
    ];

    offers
        .into_iter()
        .map(|(id, title, city, budget, description)| Offer {
            id: id.to_string(),
            title: title.to_string(),
            city: city.to_string(),
            budget,
            description: description.to_string(),
        })
        .collect()
}
