//! Structural diff between two revisions of a token list.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::types::{ExtensionValue, TokenInfo};

/// A comparable, non-identity field of a [`TokenInfo`].
///
/// Renders as the field's name in the document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenField {
    #[serde(rename = "decimals")]
    Decimals,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "logoURI")]
    LogoUri,
    #[serde(rename = "tags")]
    Tags,
    #[serde(rename = "extensions")]
    Extensions,
}

impl TokenField {
    /// Every comparable field, in reporting order.
    pub const ALL: [TokenField; 6] = [
        TokenField::Decimals,
        TokenField::Name,
        TokenField::Symbol,
        TokenField::LogoUri,
        TokenField::Tags,
        TokenField::Extensions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenField::Decimals => "decimals",
            TokenField::Name => "name",
            TokenField::Symbol => "symbol",
            TokenField::LogoUri => "logoURI",
            TokenField::Tags => "tags",
            TokenField::Extensions => "extensions",
        }
    }

    /// Whether this field holds the same value on both records.
    ///
    /// Shallow: scalars compare directly, `tags` compares element-wise in
    /// order, `extensions` compares one level of scalar values.
    fn same_on(self, base: &TokenInfo, update: &TokenInfo) -> bool {
        match self {
            TokenField::Decimals => base.decimals == update.decimals,
            TokenField::Name => base.name == update.name,
            TokenField::Symbol => base.symbol == update.symbol,
            TokenField::LogoUri => base.logo_uri == update.logo_uri,
            TokenField::Tags => optional_eq(&base.tags, &update.tags, |a, b| sequence_eq(a, b)),
            TokenField::Extensions => {
                optional_eq(&base.extensions, &update.extensions, |a, b| {
                    a.len() == b.len()
                        && a.iter()
                            .all(|(k, v)| b.get(k).is_some_and(|other| scalar_eq(v, other)))
                })
            }
        }
    }
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Present on one side only counts as different.
fn optional_eq<T>(a: &Option<T>, b: &Option<T>, eq: impl Fn(&T, &T) -> bool) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn sequence_eq(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

fn scalar_eq(a: &ExtensionValue, b: &ExtensionValue) -> bool {
    match (a, b) {
        (ExtensionValue::Number(x), ExtensionValue::Number(y)) => {
            if x == y {
                return true;
            }
            // 15 and 15.0 are the same number; two integers never go through f64
            if !(x.is_f64() || y.is_f64()) {
                return false;
            }
            matches!((x.as_f64(), y.as_f64()), (Some(x), Some(y)) if x == y)
        }
        _ => a == b,
    }
}

/// Names of the fields that differ between two records with the same key.
pub fn changed_fields(base: &TokenInfo, update: &TokenInfo) -> Vec<TokenField> {
    TokenField::ALL
        .into_iter()
        .filter(|field| !field.same_on(base, update))
        .collect()
}

/// Changed fields keyed by chain id, then address.
pub type ChangedTokens = BTreeMap<u64, BTreeMap<String, Vec<TokenField>>>;

/// The result of diffing a base token list against an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenListDiff {
    /// Records in the update whose key is absent from the base, in update order.
    pub added: Vec<TokenInfo>,
    /// Records in the base whose key is absent from the update, in base order.
    pub removed: Vec<TokenInfo>,
    /// Records present in both with at least one differing field.
    pub changed: ChangedTokens,
}

impl TokenListDiff {
    /// Returns true if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Number of tokens with at least one changed field.
    pub fn changed_count(&self) -> usize {
        self.changed.values().map(BTreeMap::len).sum()
    }

    /// Fields changed on the token with the given key, if any.
    pub fn changed_fields_of(&self, chain_id: u64, address: &str) -> Option<&[TokenField]> {
        self.changed
            .get(&chain_id)
            .and_then(|by_address| by_address.get(address))
            .map(Vec::as_slice)
    }

    /// Serialize the diff to a JSON value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Format the diff as human-readable text.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();

        for t in &self.added {
            lines.push(format!("+ {} {} {}", t.chain_id, t.address, t.symbol));
        }
        for t in &self.removed {
            lines.push(format!("- {} {} {}", t.chain_id, t.address, t.symbol));
        }
        for (chain_id, by_address) in &self.changed {
            for (address, fields) in by_address {
                let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
                lines.push(format!("~ {} {}: {}", chain_id, address, names.join(", ")));
            }
        }

        lines.join("\n")
    }
}

/// Diff two token lists by `(chainId, address)` identity.
///
/// Order within either list is irrelevant to which tokens are added,
/// removed or changed. If a key repeats within one list the last record
/// wins in the index, so results are only meaningful for unique keys.
pub fn diff_token_lists(base: &[TokenInfo], update: &[TokenInfo]) -> TokenListDiff {
    let mut base_index: HashMap<u64, HashMap<&str, &TokenInfo>> = HashMap::new();
    for token in base {
        base_index
            .entry(token.chain_id)
            .or_default()
            .insert(token.address.as_str(), token);
    }

    let mut seen: HashMap<u64, HashSet<&str>> = HashMap::new();
    let mut diff = TokenListDiff::default();

    for token in update {
        let base_token = base_index
            .get(&token.chain_id)
            .and_then(|by_address| by_address.get(token.address.as_str()));

        match base_token {
            None => diff.added.push(token.clone()),
            Some(base_token) => {
                let fields = changed_fields(base_token, token);
                if !fields.is_empty() {
                    diff.changed
                        .entry(token.chain_id)
                        .or_default()
                        .insert(token.address.clone(), fields);
                }
            }
        }

        seen.entry(token.chain_id)
            .or_default()
            .insert(token.address.as_str());
    }

    diff.removed = base
        .iter()
        .filter(|token| {
            !seen
                .get(&token.chain_id)
                .is_some_and(|addresses| addresses.contains(token.address.as_str()))
        })
        .cloned()
        .collect();

    tracing::debug!(
        base = base.len(),
        update = update.len(),
        added = diff.added.len(),
        removed = diff.removed.len(),
        changed = diff.changed_count(),
        "diffed token lists"
    );

    diff
}
