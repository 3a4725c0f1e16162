//! In-memory state graph and schema normalization.
//!
//! [`StoreState`] is the canonical, always-valid in-memory shape and the
//! serialized document format. [`PersistedState`] is the lenient counterpart
//! used only at load time: every collection is optional, records parse
//! individually, and refresh tokens accept legacy shapes, so older or
//! hand-edited documents normalize into a current-schema state instead of
//! failing the parse.

use std::collections::{BTreeMap, HashSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{City, Country, Event, Offer, Place, TokenEntry, TokenRecord, User};
use crate::seed;

/// Current schema version written to the document.
pub(crate) const STATE_VERSION: u32 = 2;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Store-wide counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Meta {
    /// Monotonic counter for user identifiers.
    pub next_user_id: u64,
}

/// The canonical state graph, mutated by all store operations and written to
/// disk as a single JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoreState {
    pub version: u32,
    pub meta: Meta,
    pub users: Vec<User>,
    pub refresh_tokens: Vec<TokenRecord>,
    pub places: Vec<Place>,
    pub offers: Vec<Offer>,
    pub countries: Vec<Country>,
    pub cities: Vec<City>,
    pub events: Vec<Event>,
}

/// Lenient on-disk shape accepted at load time.
///
/// Collections parse as raw JSON values so one damaged record drops alone
/// during [`StoreState::normalize`] instead of failing the whole document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedState {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    meta: Option<RawMeta>,
    #[serde(default)]
    users: Option<Vec<Value>>,
    #[serde(default)]
    refresh_tokens: Option<Vec<TokenEntry>>,
    #[serde(default)]
    places: Option<Vec<Value>>,
    #[serde(default)]
    offers: Option<Vec<Value>>,
    #[serde(default)]
    countries: Option<Vec<Value>>,
    #[serde(default)]
    cities: Option<Vec<Value>>,
    #[serde(default)]
    events: Option<Vec<Value>>,
}

/// Parses each record independently, discarding the ones that do not fit the
/// current schema. `None` stays `None` so callers can tell a missing
/// collection from an empty one.
fn lenient_records<T: DeserializeOwned>(raw: Option<Vec<Value>>) -> Option<Vec<T>> {
    raw.map(|entries| {
        entries
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMeta {
    #[serde(default)]
    next_user_id: Option<f64>,
}

impl StoreState {
    /// A valid state with every collection empty.
    pub(crate) fn empty() -> Self {
        Self {
            version: STATE_VERSION,
            meta: Meta { next_user_id: 1 },
            users: Vec::new(),
            refresh_tokens: Vec::new(),
            places: Vec::new(),
            offers: Vec::new(),
            countries: Vec::new(),
            cities: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A fresh state carrying the built-in catalog.
    pub(crate) fn seeded() -> Self {
        let mut state = Self::empty();
        state.places = seed::seed_places();
        state.offers = seed::seed_offers();
        state
    }

    /// Produces a current-schema state from arbitrary parsed input.
    ///
    /// Missing collections become empty lists, except places and offers which
    /// fall back to the seed catalog. Records that fail the current schema
    /// are dropped individually, keeping the rest of the document. Legacy
    /// refresh-token entries collapse into canonical records; entries with no
    /// derivable digest are dropped. The user-id counter is recomputed from
    /// the data when absent or invalid.
    pub(crate) fn normalize(raw: PersistedState, now_ms: i64) -> Self {
        let mut state = Self::empty();

        state.version = raw.version.filter(|v| *v != 0).unwrap_or(STATE_VERSION);
        state.users = lenient_records(raw.users).unwrap_or_default();
        state.places = lenient_records(raw.places).unwrap_or_else(seed::seed_places);
        state.offers = lenient_records(raw.offers).unwrap_or_else(seed::seed_offers);
        state.countries = lenient_records(raw.countries).unwrap_or_default();
        state.cities = lenient_records(raw.cities).unwrap_or_default();
        state.events = lenient_records(raw.events).unwrap_or_default();

        state.refresh_tokens = raw
            .refresh_tokens
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| entry.into_record(now_ms))
            .collect();

        let stored_counter = raw
            .meta
            .and_then(|meta| meta.next_user_id)
            .filter(|value| value.fract() == 0.0 && *value >= 1.0)
            .map(|value| value as u64);
        state.meta.next_user_id = match stored_counter {
            Some(counter) => counter,
            None => Self::max_numeric_user_id(&state.users) + 1,
        };

        state
    }

    fn max_numeric_user_id(users: &[User]) -> u64 {
        users
            .iter()
            .filter_map(|user| user.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }

    /// Backfills seed records whose ids are not present yet. Never duplicates
    /// and never overwrites an existing record with the same id. Returns
    /// whether anything changed.
    pub(crate) fn merge_seeds(&mut self) -> bool {
        let mut changed = false;

        let place_ids: HashSet<String> = self.places.iter().map(|p| p.id.clone()).collect();
        for place in seed::seed_places() {
            if !place_ids.contains(&place.id) {
                self.places.push(place);
                changed = true;
            }
        }

        let offer_ids: HashSet<String> = self.offers.iter().map(|o| o.id.clone()).collect();
        for offer in seed::seed_offers() {
            if !offer_ids.contains(&offer.id) {
                self.offers.push(offer);
                changed = true;
            }
        }

        changed
    }

    /// Enforces both refresh-token bounds: the age window and the per-user
    /// cap. Either bound can be disabled independently with a non-positive
    /// value, but both run together on every pass so a high-churn user cannot
    /// accumulate records even within the age window.
    pub(crate) fn prune_refresh_tokens(
        &mut self,
        retention_days: i64,
        max_per_user: usize,
        now_ms: i64,
    ) {
        self.refresh_tokens.retain(|t| !t.token_hash.is_empty());

        if retention_days > 0 {
            let cutoff = now_ms - retention_days * MS_PER_DAY;
            self.refresh_tokens.retain(|t| t.created_at >= cutoff);
        }

        if max_per_user > 0 {
            let mut by_user: BTreeMap<String, Vec<TokenRecord>> = BTreeMap::new();
            for record in self.refresh_tokens.drain(..) {
                let key = record.user_id.clone().unwrap_or_else(|| "null".to_string());
                by_user.entry(key).or_default().push(record);
            }
            for records in by_user.values_mut() {
                records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                records.truncate(max_per_user);
            }
            self.refresh_tokens = by_user.into_values().flatten().collect();
        }
    }

    /// Discards events older than the retention window. A non-positive
    /// window disables pruning.
    pub(crate) fn prune_events(&mut self, retention_days: i64, now_ms: i64) {
        if retention_days <= 0 {
            return;
        }
        let cutoff = now_ms - retention_days * MS_PER_DAY;
        self.events.retain(|e| e.ts >= cutoff);
    }
}
