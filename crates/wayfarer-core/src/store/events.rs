//! Append-only usage event log.

use serde_json::Value;

use super::util::now_ms;
use super::Store;
use crate::models::Event;

impl Store {
    /// Appends an event stamped with the current time, then drops entries
    /// older than the retention window.
    pub fn track_event(&self, kind: &str, meta: Option<Value>) {
        let now = now_ms();
        {
            let mut state = self.state();
            state.events.push(Event {
                kind: kind.to_string(),
                meta,
                ts: now,
            });
            let retention = self.config().event_retention_days;
            state.prune_events(retention, now);
        }
        self.schedule_save();
    }

    /// Returns an independent copy of the event log, oldest first.
    pub fn list_events(&self) -> Vec<Event> {
        self.state().events.clone()
    }
}
