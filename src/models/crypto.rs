// Cryptographic utility functions and data types

use chrono::{NaiveDate, Utc};
use ring::digest;

pub const KEY_LENGTH: usize = 32;

// Day-scoped envelope key
// Flow: base secret + "YYYYMMDD" -> |SHA256| -> first 32 bytes
#[derive(Clone)]
pub struct DailyKey(pub [u8; KEY_LENGTH]);

impl DailyKey {
    /// Key for the current UTC calendar day. Derivation is pinned to UTC so
    /// every instance derives the same key at the same moment regardless of
    /// the host timezone.
    pub fn today(base_secret: &str) -> Self {
        Self::for_date(base_secret, Utc::now().date_naive())
    }

    /// Key for the UTC day before the current one. Used as a decryption
    /// fallback for payloads that straddle the midnight rotation.
    pub fn yesterday(base_secret: &str) -> Option<Self> {
        Utc::now()
            .date_naive()
            .pred_opt()
            .map(|date| Self::for_date(base_secret, date))
    }

    pub fn for_date(base_secret: &str, date: NaiveDate) -> Self {
        let full_key = format!("{}{}", base_secret, date.format("%Y%m%d"));
        let hash = digest::digest(&digest::SHA256, full_key.as_bytes());

        let mut result = [0u8; KEY_LENGTH];
        result.copy_from_slice(&hash.as_ref()[..KEY_LENGTH]);
        Self(result)
    }
}

// Retrieves current Unix timestamp in milliseconds, used for token claims
pub fn get_current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}
