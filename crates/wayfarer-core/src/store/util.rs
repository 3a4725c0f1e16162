//! Key normalization and id generation helpers.

use rand::RngCore;

/// Normalizes an email for uniqueness checks: trimmed and lower-cased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes a lookup key: trimmed, lower-cased, whitespace runs collapsed
/// to single dashes. Used for slugs, place names and location names.
pub fn normalize_key(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_ms() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}

/// Generates a record id: prefix, base36 epoch milliseconds, random base36
/// suffix. Collision probability is negligible; uniqueness is not separately
/// enforced.
pub(crate) fn make_id(prefix: &str) -> String {
    let millis = now_ms().max(0) as u64;
    let mut bytes = [0u8; 4];
    rand::thread_rng().fill_bytes(&mut bytes);
    let suffix = u64::from(u32::from_le_bytes(bytes));
    format!("{prefix}-{}-{}", base36(millis), base36(suffix))
}

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_key_collapses_whitespace() {
        assert_eq!(normalize_key("  Registan   Square "), "registan-square");
        assert_eq!(normalize_key("Khiva"), "khiva");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn normalize_email_lowercases() {
        assert_eq!(normalize_email("  Admin@Example.COM "), "admin@example.com");
    }

    #[test]
    fn make_id_carries_prefix_and_varies() {
        let a = make_id("place");
        let b = make_id("place");
        assert!(a.starts_with("place-"));
        assert_ne!(a, b);
    }

    #[test]
    fn base36_round_numbers() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
    }
}
