//! Refresh token vault.
//!
//! The vault only ever holds digests; raw token strings never reach the
//! store. Callers hash with [`crate::models::hash_token`] before calling in.
//! Every write runs the retention pass first, so the vault never grows past
//! its configured bounds.

use super::util::now_ms;
use super::Store;
use crate::models::TokenRecord;

impl Store {
    /// Records a refresh token digest for a subject.
    ///
    /// Empty-after-trim digests are ignored. The retention pass (age window
    /// plus per-subject cap) runs before the insert.
    pub fn add_refresh_token(&self, token_hash: &str, user_id: Option<&str>) {
        let token_hash = token_hash.trim();
        if token_hash.is_empty() {
            return;
        }

        let now = now_ms();
        {
            let mut state = self.state();
            let retention = self.config().token_retention_days;
            let cap = self.config().max_tokens_per_user;
            state.prune_refresh_tokens(retention, cap, now);
            state.refresh_tokens.push(TokenRecord {
                token_hash: token_hash.to_string(),
                user_id: user_id.map(str::to_string),
                created_at: now,
            });
        }
        self.schedule_save();
    }

    /// Removes every record carrying the given digest.
    ///
    /// Revoking an unknown digest is a no-op and schedules no write.
    pub fn revoke_refresh_token(&self, token_hash: &str) {
        let changed = {
            let mut state = self.state();
            let before = state.refresh_tokens.len();
            state.refresh_tokens.retain(|t| t.token_hash != token_hash);
            state.refresh_tokens.len() != before
        };
        if changed {
            self.schedule_save();
        }
    }

    /// Checks whether a digest is active for the given subject.
    ///
    /// Both the digest and the subject must match; a token recorded for one
    /// user is never active for another.
    pub fn is_refresh_token_active(&self, token_hash: &str, user_id: &str) -> bool {
        self.state().refresh_tokens.iter().any(|t| {
            t.token_hash == token_hash && t.user_id.as_deref() == Some(user_id)
        })
    }
}
