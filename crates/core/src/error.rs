use crate::upgrade::VersionUpgrade;
use crate::version::Version;

/// A version string that is not of the form `major.minor.patch`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version '{input}': {reason}")]
pub struct VersionParseError {
    pub input: String,
    pub reason: String,
}

impl VersionParseError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        VersionParseError {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Errors raised at the boundary where loosely-typed input becomes core values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenListError {
    /// A bump name or numeric code outside `none`/`patch`/`minor`/`major`.
    #[error("unknown version upgrade '{0}' (expected none, patch, minor or major)")]
    UnknownUpgrade(String),

    /// Two records in one list share the same `(chainId, address)` identity.
    #[error("duplicate token {address} on chain {chain_id}")]
    DuplicateToken { chain_id: u64, address: String },

    /// Bumping would push a version component past `u64::MAX`.
    #[error("cannot apply a {bump} bump to {version}: version component overflows")]
    VersionOverflow {
        version: Version,
        bump: VersionUpgrade,
    },
}
