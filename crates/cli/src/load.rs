//! Reading token list files from disk.
//!
//! Documents are expected to be schema-valid already; this only turns
//! JSON into core records and reports what cannot be read.

use std::path::Path;

use serde_json::Value;
use tokenlist_core::{ensure_unique_tokens, TokenInfo, TokenList};

/// A token list as read from a file: either a whole document or just
/// its `tokens` array.
pub(crate) enum LoadedList {
    Document(TokenList),
    Tokens(Vec<TokenInfo>),
}

impl LoadedList {
    pub(crate) fn tokens(&self) -> &[TokenInfo] {
        match self {
            LoadedList::Document(list) => &list.tokens,
            LoadedList::Tokens(tokens) => tokens,
        }
    }

    pub(crate) fn document(&self) -> Option<&TokenList> {
        match self {
            LoadedList::Document(list) => Some(list),
            LoadedList::Tokens(_) => None,
        }
    }
}

fn read_json(path: &Path) -> Result<Value, String> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| format!("error reading '{}': {}", path.display(), e))?;
    serde_json::from_str(&src)
        .map_err(|e| format!("error parsing JSON in '{}': {}", path.display(), e))
}

fn check_unique(path: &Path, tokens: &[TokenInfo], strict: bool) -> Result<(), String> {
    if strict {
        ensure_unique_tokens(tokens).map_err(|e| format!("'{}': {}", path.display(), e))?;
    }
    Ok(())
}

/// Load either a token list document or a bare array of token records.
pub(crate) fn load_list(path: &Path, strict: bool) -> Result<LoadedList, String> {
    let value = read_json(path)?;
    let loaded = if value.is_array() {
        let tokens: Vec<TokenInfo> = serde_json::from_value(value)
            .map_err(|e| format!("invalid token array in '{}': {}", path.display(), e))?;
        LoadedList::Tokens(tokens)
    } else {
        let list: TokenList = serde_json::from_value(value)
            .map_err(|e| format!("invalid token list in '{}': {}", path.display(), e))?;
        LoadedList::Document(list)
    };
    check_unique(path, loaded.tokens(), strict)?;

    tracing::info!(
        path = %path.display(),
        tokens = loaded.tokens().len(),
        document = loaded.document().is_some(),
        "loaded token list"
    );
    Ok(loaded)
}

/// Load a full token list document; bare token arrays are rejected
/// because they carry no version.
pub(crate) fn load_document(path: &Path, strict: bool) -> Result<TokenList, String> {
    match load_list(path, strict)? {
        LoadedList::Document(list) => Ok(list),
        LoadedList::Tokens(_) => Err(format!(
            "'{}' is a bare token array; a token list document with a version is required",
            path.display()
        )),
    }
}
