//! Refresh-token records and the legacy on-disk shapes accepted at load.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Computes the irreversible digest stored in place of a raw refresh token.
///
/// Two distinct raw tokens practically never share a digest, so the digest
/// doubles as the lookup key for revocation and activity checks.
pub fn hash_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Canonical refresh-token record.
///
/// Only the digest of the issued token is kept; the raw value is never
/// persisted or logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// SHA-256 hex digest of the raw token
    pub token_hash: String,

    /// Owning user id; a weak reference, deleting a user does not cascade
    #[serde(default)]
    pub user_id: Option<String>,

    /// Issue time in epoch milliseconds
    pub created_at: i64,
}

/// On-disk refresh-token entry, tolerating legacy shapes.
///
/// Older documents stored either a bare raw token string or an object
/// carrying a raw `token` field instead of a digest. All shapes collapse
/// into [`TokenRecord`] during normalization; entries that cannot yield a
/// non-empty digest are discarded.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenEntry {
    /// Legacy shape: the raw token itself
    Legacy(String),

    /// Structured shape with either a precomputed digest or a raw token
    Record {
        #[serde(default, rename = "tokenHash")]
        token_hash: Option<String>,
        #[serde(default)]
        token: Option<String>,
        #[serde(default, rename = "userId")]
        user_id: Option<serde_json::Value>,
        #[serde(default, rename = "createdAt")]
        created_at: Option<f64>,
    },

    /// Anything else is dropped during normalization
    Other(serde_json::Value),
}

impl TokenEntry {
    /// Collapses this entry into a canonical record, or `None` when no
    /// non-empty digest can be derived.
    pub fn into_record(self, now_ms: i64) -> Option<TokenRecord> {
        match self {
            TokenEntry::Legacy(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return None;
                }
                Some(TokenRecord {
                    token_hash: hash_token(raw),
                    user_id: None,
                    created_at: now_ms,
                })
            }
            TokenEntry::Record {
                token_hash,
                token,
                user_id,
                created_at,
            } => {
                let digest = token_hash
                    .as_deref()
                    .map(str::trim)
                    .filter(|hash| !hash.is_empty())
                    .map(str::to_string)
                    .or_else(|| {
                        token
                            .as_deref()
                            .map(str::trim)
                            .filter(|raw| !raw.is_empty())
                            .map(hash_token)
                    })?;

                Some(TokenRecord {
                    token_hash: digest,
                    user_id: coerce_user_id(user_id),
                    created_at: created_at.map(|ms| ms as i64).unwrap_or(now_ms),
                })
            }
            TokenEntry::Other(_) => None,
        }
    }
}

/// User ids may appear as strings or numbers in hand-edited documents.
fn coerce_user_id(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_string_entry_is_digested() {
        let record = TokenEntry::Legacy("raw-token".to_string())
            .into_record(1_000)
            .expect("legacy entry should normalize");
        assert_eq!(record.token_hash, hash_token("raw-token"));
        assert_eq!(record.user_id, None);
        assert_eq!(record.created_at, 1_000);
    }

    #[test]
    fn raw_token_object_is_digested() {
        let record = TokenEntry::Record {
            token_hash: None,
            token: Some("  raw-token  ".to_string()),
            user_id: Some(serde_json::json!(42)),
            created_at: Some(5.0),
        }
        .into_record(1_000)
        .expect("raw token object should normalize");
        assert_eq!(record.token_hash, hash_token("raw-token"));
        assert_eq!(record.user_id, Some("42".to_string()));
        assert_eq!(record.created_at, 5);
    }

    #[test]
    fn entry_without_digest_is_discarded() {
        let entry = TokenEntry::Record {
            token_hash: Some("   ".to_string()),
            token: None,
            user_id: None,
            created_at: None,
        };
        assert!(entry.into_record(0).is_none());

        assert!(TokenEntry::Other(serde_json::Value::Null)
            .into_record(0)
            .is_none());
    }

    #[test]
    fn distinct_tokens_produce_distinct_digests() {
        assert_ne!(hash_token("a"), hash_token("b"));
        assert_eq!(hash_token("a"), hash_token("a"));
    }
}
