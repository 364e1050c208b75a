//! Encrypted envelope codec used for login payloads.
//!
//! Wire format: `base64(iv) " " base64(ciphertext || tag)` with a fresh
//! random 12-byte IV per encryption, AES-256-GCM under the day-rotating key
//! from [`crate::models::crypto::DailyKey`] and a 16-byte auth tag. The
//! format deliberately carries no algorithm or key identifier since the key
//! is derivable from the calendar date alone.

use base64::{engine::general_purpose::STANDARD, Engine};
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::rand::{SecureRandom, SystemRandom};
use serde::Serialize;
use std::fmt::Display;

use super::crypto::DailyKey;

pub const IV_LENGTH: usize = 12;
pub const TAG_LENGTH: usize = 16;

#[derive(Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// Envelope fails structural validation before any cipher work.
    InvalidFormat,
    EncryptionFailed,
    /// Tag verification failed or the input was otherwise undecryptable. No
    /// distinction is made between "tampered" and "wrong key" to avoid
    /// giving callers an oracle.
    DecryptionFailed,
}

impl Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CryptoError::InvalidFormat => write!(f, "Invalid encrypted data format"),
            CryptoError::EncryptionFailed => write!(f, "Encryption failed"),
            CryptoError::DecryptionFailed => write!(f, "Decryption failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Encrypts `plaintext` under the current UTC day's key.
pub fn encrypt(base_secret: &str, plaintext: &str) -> Result<String, CryptoError> {
    let mut iv = [0u8; IV_LENGTH];
    SystemRandom::new()
        .fill(&mut iv)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    seal_with_key(&DailyKey::today(base_secret), iv, plaintext)
}

// IV generation is kept out of this function so tests can seal under a
// specific day's key.
pub(crate) fn seal_with_key(
    key: &DailyKey,
    iv: [u8; IV_LENGTH],
    plaintext: &str,
) -> Result<String, CryptoError> {
    let unbound = UnboundKey::new(&AES_256_GCM, &key.0).map_err(|_| CryptoError::EncryptionFailed)?;
    let sealing_key = LessSafeKey::new(unbound);
    let nonce = Nonce::assume_unique_for_key(iv);

    let mut in_out = plaintext.as_bytes().to_vec();
    sealing_key
        .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    Ok(format!("{} {}", STANDARD.encode(iv), STANDARD.encode(&in_out)))
}

/// Decrypts an envelope produced by [`encrypt`]. Tries the current UTC day's
/// key first and falls back to yesterday's, so a payload encrypted just
/// before midnight remains decryptable just after.
pub fn decrypt(base_secret: &str, envelope: &str) -> Result<String, CryptoError> {
    let (iv, ciphertext_with_tag) = parse(envelope)?;

    let mut keys = vec![DailyKey::today(base_secret)];
    if let Some(previous) = DailyKey::yesterday(base_secret) {
        keys.push(previous);
    }
    for key in &keys {
        if let Ok(plaintext) = open_with_key(key, iv, &ciphertext_with_tag) {
            return Ok(plaintext);
        }
    }
    Err(CryptoError::DecryptionFailed)
}

/// Decrypts and parses as JSON. If the plaintext is not valid JSON the raw
/// text is returned as a JSON string instead of failing; callers that need
/// structured credentials validate the shape themselves.
pub fn decrypt_json(base_secret: &str, envelope: &str) -> Result<serde_json::Value, CryptoError> {
    let plaintext = decrypt(base_secret, envelope)?;
    Ok(serde_json::from_str(&plaintext).unwrap_or(serde_json::Value::String(plaintext)))
}

fn open_with_key(
    key: &DailyKey,
    iv: [u8; IV_LENGTH],
    ciphertext_with_tag: &[u8],
) -> Result<String, CryptoError> {
    let unbound = UnboundKey::new(&AES_256_GCM, &key.0).map_err(|_| CryptoError::DecryptionFailed)?;
    let opening_key = LessSafeKey::new(unbound);
    let nonce = Nonce::assume_unique_for_key(iv);

    let mut in_out = ciphertext_with_tag.to_vec();
    let plaintext = opening_key
        .open_in_place(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| CryptoError::DecryptionFailed)?;

    String::from_utf8(plaintext.to_vec()).map_err(|_| CryptoError::DecryptionFailed)
}

/// Structural validation only, no decryption: exactly two space-separated
/// base64 tokens, a 12-byte IV, and a second token longer than the tag.
pub fn is_valid_format(envelope: &str) -> bool {
    parse(envelope).is_ok()
}

fn parse(envelope: &str) -> Result<([u8; IV_LENGTH], Vec<u8>), CryptoError> {
    let parts: Vec<&str> = envelope.split(' ').collect();
    let &[iv_base64, ciphertext_base64] = parts.as_slice() else {
        return Err(CryptoError::InvalidFormat);
    };

    let iv_bytes = STANDARD
        .decode(iv_base64)
        .map_err(|_| CryptoError::InvalidFormat)?;
    let iv: [u8; IV_LENGTH] = iv_bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidFormat)?;

    let ciphertext_with_tag = STANDARD
        .decode(ciphertext_base64)
        .map_err(|_| CryptoError::InvalidFormat)?;
    if ciphertext_with_tag.len() <= TAG_LENGTH {
        return Err(CryptoError::InvalidFormat);
    }

    Ok((iv, ciphertext_with_tag))
}

/// Wraps a JSON-serializable payload the way browser clients send mutation
/// bodies: `{"encData": "<envelope>"}`.
#[derive(Debug, Serialize)]
pub struct EncryptedPayload {
    #[serde(rename = "encData")]
    pub enc_data: String,
}

pub fn encrypt_payload<T: Serialize>(
    base_secret: &str,
    payload: &T,
) -> Result<EncryptedPayload, CryptoError> {
    let json = serde_json::to_string(payload).map_err(|_| CryptoError::EncryptionFailed)?;
    Ok(EncryptedPayload {
        enc_data: encrypt(base_secret, &json)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use quickcheck_macros::quickcheck;

    const SECRET: &str = "test-base-secret";

    #[test]
    fn test_round_trip_same_day() {
        let envelope = encrypt(SECRET, "hello teachers").unwrap();
        assert_eq!(decrypt(SECRET, &envelope).unwrap(), "hello teachers");
    }

    #[quickcheck]
    fn prop_round_trip(plaintext: String) -> bool {
        let envelope = encrypt(SECRET, &plaintext).unwrap();
        decrypt(SECRET, &envelope).unwrap() == plaintext
    }

    #[test]
    fn test_fresh_iv_per_encryption() {
        let a = encrypt(SECRET, "same input").unwrap();
        let b = encrypt(SECRET, "same input").unwrap();
        assert_ne!(a, b);
        assert_eq!(decrypt(SECRET, &a).unwrap(), "same input");
        assert_eq!(decrypt(SECRET, &b).unwrap(), "same input");
    }

    #[test]
    fn test_yesterday_key_still_accepted() {
        let yesterday = Utc::now().date_naive().pred_opt().unwrap();
        let key = DailyKey::for_date(SECRET, yesterday);
        let envelope = seal_with_key(&key, [7u8; IV_LENGTH], "straddles midnight").unwrap();
        assert_eq!(decrypt(SECRET, &envelope).unwrap(), "straddles midnight");
    }

    #[test]
    fn test_two_days_old_key_rejected() {
        let stale = Utc::now()
            .date_naive()
            .pred_opt()
            .unwrap()
            .pred_opt()
            .unwrap();
        let key = DailyKey::for_date(SECRET, stale);
        let envelope = seal_with_key(&key, [7u8; IV_LENGTH], "too old").unwrap();
        assert_eq!(decrypt(SECRET, &envelope), Err(CryptoError::DecryptionFailed));
    }

    #[test]
    fn test_is_valid_format_rejects_malformed_inputs() {
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("single-token"));
        assert!(!is_valid_format("not-base64 also-not"));
        assert!(!is_valid_format("a b c"));
        // 8-byte IV instead of 12
        let short_iv = format!("{} {}", STANDARD.encode([0u8; 8]), STANDARD.encode([0u8; 32]));
        assert!(!is_valid_format(&short_iv));
        // second token no longer than the tag
        let tag_only = format!(
            "{} {}",
            STANDARD.encode([0u8; IV_LENGTH]),
            STANDARD.encode([0u8; TAG_LENGTH])
        );
        assert!(!is_valid_format(&tag_only));
    }

    #[test]
    fn test_is_valid_format_accepts_real_envelope() {
        let envelope = encrypt(SECRET, "payload").unwrap();
        assert!(is_valid_format(&envelope));
    }

    #[test]
    fn test_bit_flip_anywhere_fails_decryption() {
        let envelope = encrypt(SECRET, "tamper target").unwrap();
        let (iv_part, body_part) = envelope.split_once(' ').unwrap();
        let body = STANDARD.decode(body_part).unwrap();
        for index in [0, body.len() / 2, body.len() - 1] {
            let mut tampered = body.clone();
            tampered[index] ^= 0x01;
            let forged = format!("{} {}", iv_part, STANDARD.encode(&tampered));
            assert_eq!(decrypt(SECRET, &forged), Err(CryptoError::DecryptionFailed));
        }
        // untouched envelope still opens
        assert_eq!(decrypt(SECRET, &envelope).unwrap(), "tamper target");
    }

    #[test]
    fn test_decrypt_json_parses_structured_payloads() {
        let envelope = encrypt(SECRET, r#"{"email":"a@b.c"}"#).unwrap();
        let value = decrypt_json(SECRET, &envelope).unwrap();
        assert_eq!(value["email"], "a@b.c");
    }

    #[test]
    fn test_decrypt_json_falls_back_to_raw_text() {
        let envelope = encrypt(SECRET, "not json at all").unwrap();
        let value = decrypt_json(SECRET, &envelope).unwrap();
        assert_eq!(value, serde_json::Value::String("not json at all".into()));
    }

    #[test]
    fn test_encrypt_payload_wraps_enc_data() {
        let payload = serde_json::json!({"email": "a@b.c", "password": "pw"});
        let wrapped = encrypt_payload(SECRET, &payload).unwrap();
        assert!(is_valid_format(&wrapped.enc_data));
        let value = decrypt_json(SECRET, &wrapped.enc_data).unwrap();
        assert_eq!(value["password"], "pw");
    }
}
