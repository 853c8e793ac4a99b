//! In-memory token list records.
//!
//! These mirror the token list document format field for field. They are
//! assumed to come from an upstream layer that already checked the
//! document against its schema; nothing here re-validates patterns or
//! length limits.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::TokenListError;
use crate::version::Version;

/// Vendor-specific scalar metadata attached to a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// Metadata for a single token.
///
/// `(chain_id, address)` is the identity key; every other field is
/// compared when diffing two revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, ExtensionValue>>,
}

impl TokenInfo {
    pub fn new(
        chain_id: u64,
        address: impl Into<String>,
        decimals: u8,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        TokenInfo {
            chain_id,
            address: address.into(),
            decimals,
            name: name.into(),
            symbol: symbol.into(),
            logo_uri: None,
            tags: None,
            extensions: None,
        }
    }

    /// The `(chainId, address)` identity key.
    pub fn key(&self) -> (u64, &str) {
        (self.chain_id, self.address.as_str())
    }
}

/// A list-level tag that tokens reference by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    pub description: String,
}

/// A complete, versioned token list document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenList {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub version: Version,
    pub tokens: Vec<TokenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, TagDefinition>>,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

/// Identity keys that occur more than once, in order of first repeat.
pub fn find_duplicate_tokens(tokens: &[TokenInfo]) -> Vec<(u64, String)> {
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for token in tokens {
        let key = token.key();
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push((key.0, key.1.to_string()));
        }
    }
    duplicates
}

/// Fail fast if any identity key repeats.
///
/// Diffing is only well defined for lists with unique keys. The diff
/// itself never calls this; it is for callers that want a hard error
/// instead of last-write-wins indexing.
pub fn ensure_unique_tokens(tokens: &[TokenInfo]) -> Result<(), TokenListError> {
    match find_duplicate_tokens(tokens).into_iter().next() {
        Some((chain_id, address)) => Err(TokenListError::DuplicateToken { chain_id, address }),
        None => Ok(()),
    }
}
