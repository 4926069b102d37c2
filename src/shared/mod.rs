//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the read API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use crate::error::TransformError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_pubkey::Pubkey;
use std::str::FromStr;

// ─── PubkeyStr ───────────────────────────────────────────────────────────────

/// A Solana public key stored as a base58 string.
///
/// Serializes transparently as a JSON string. Decoding to a [`Pubkey`] is
/// deferred until a transformer needs the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubkeyStr(String);

impl PubkeyStr {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode into a [`Pubkey`], naming `field` in the error.
    pub fn to_pubkey(&self, field: &'static str) -> Result<Pubkey, TransformError> {
        Pubkey::from_str(&self.0).map_err(|e| self.invalid(field, e.to_string()))
    }

    pub fn from_pubkey(pk: &Pubkey) -> Self {
        Self(pk.to_string())
    }

    fn invalid(&self, field: &'static str, reason: String) -> TransformError {
        TransformError::InvalidAddress {
            field,
            value: self.0.clone(),
            reason,
        }
    }
}

impl std::fmt::Display for PubkeyStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PubkeyStr {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PubkeyStr {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Pubkey> for PubkeyStr {
    fn from(pk: Pubkey) -> Self {
        Self(pk.to_string())
    }
}

impl Serialize for PubkeyStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PubkeyStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PubkeyStr(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_pubkey::ParsePubkeyError;

    #[test]
    fn test_pubkey_str_serde() {
        let pk = PubkeyStr::new("7BgBvyjrZX1YKz4oh9mjb8ZScatkkwb8DzFx7LoiVkM3");
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json, "\"7BgBvyjrZX1YKz4oh9mjb8ZScatkkwb8DzFx7LoiVkM3\"");
        let back: PubkeyStr = serde_json::from_str(&json).unwrap();
        assert_eq!(pk, back);
    }

    #[test]
    fn test_pubkey_str_round_trips_through_pubkey() {
        let pk = Pubkey::new_from_array([7u8; 32]);
        let s = PubkeyStr::from(pk);
        assert_eq!(s.to_pubkey("id").unwrap(), pk);
        assert_eq!(PubkeyStr::from_pubkey(&pk), s);
    }

    #[test]
    fn test_pubkey_str_rejects_non_base58() {
        let err = PubkeyStr::new("not-base58-0OIl").to_pubkey("tree").unwrap_err();
        match err {
            TransformError::InvalidAddress {
                field,
                value,
                reason,
            } => {
                assert_eq!(field, "tree");
                assert_eq!(value, "not-base58-0OIl");
                assert_eq!(reason, ParsePubkeyError::Invalid.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pubkey_str_rejects_wrong_length() {
        let short = bs58::encode([1u8; 8]).into_string();
        let err = PubkeyStr::from(short).to_pubkey("id").unwrap_err();
        match err {
            TransformError::InvalidAddress { field, reason, .. } => {
                assert_eq!(field, "id");
                assert_eq!(reason, ParsePubkeyError::WrongSize.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
