//! Severity of a version change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenListError;

/// Magnitude of a version change, ordered by severity.
///
/// `None < Patch < Minor < Major`; the derived `Ord` follows declaration
/// order, so the variants must stay sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionUpgrade {
    None,
    Patch,
    Minor,
    Major,
}

impl VersionUpgrade {
    pub const ALL: [VersionUpgrade; 4] = [
        VersionUpgrade::None,
        VersionUpgrade::Patch,
        VersionUpgrade::Minor,
        VersionUpgrade::Major,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VersionUpgrade::None => "none",
            VersionUpgrade::Patch => "patch",
            VersionUpgrade::Minor => "minor",
            VersionUpgrade::Major => "major",
        }
    }
}

impl fmt::Display for VersionUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionUpgrade {
    type Err = TokenListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionUpgrade::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenListError::UnknownUpgrade(s.to_string()))
    }
}

/// Numeric encoding used by older tooling: 0 = none .. 3 = major.
impl TryFrom<u8> for VersionUpgrade {
    type Error = TokenListError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        VersionUpgrade::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| TokenListError::UnknownUpgrade(code.to_string()))
    }
}
