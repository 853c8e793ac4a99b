//! Mapping diffs and version pairs onto version bumps.
//!
//! Compatibility policy for a token list: removing a token breaks
//! consumers (major), adding one is additive (minor), and editing an
//! existing token's metadata is a fix (patch). The rules form a strict
//! priority cascade, not a sum.

use serde::Serialize;
use serde_json::Value;

use crate::diff::{diff_token_lists, TokenListDiff};
use crate::error::TokenListError;
use crate::types::{TokenInfo, TokenList};
use crate::upgrade::VersionUpgrade;
use crate::version::{is_version_update, Version};

impl TokenListDiff {
    /// The smallest bump that covers every change in this diff.
    pub fn required_upgrade(&self) -> VersionUpgrade {
        if !self.removed.is_empty() {
            VersionUpgrade::Major
        } else if !self.added.is_empty() {
            VersionUpgrade::Minor
        } else if !self.changed.is_empty() {
            VersionUpgrade::Patch
        } else {
            VersionUpgrade::None
        }
    }
}

/// The minimum version bump needed to publish `update` over `base`.
pub fn minimum_version_bump(base: &[TokenInfo], update: &[TokenInfo]) -> VersionUpgrade {
    let bump = diff_token_lists(base, update).required_upgrade();
    tracing::debug!(%bump, "computed minimum version bump");
    bump
}

/// Apply `bump` to `base`, producing a new version.
///
/// Lower components reset to zero on a minor or major bump. Fails with
/// [`TokenListError::VersionOverflow`] when the bumped component is
/// already `u64::MAX`.
pub fn next_version(base: Version, bump: VersionUpgrade) -> Result<Version, TokenListError> {
    let overflow = || TokenListError::VersionOverflow { version: base, bump };
    let next = match bump {
        VersionUpgrade::None => base,
        VersionUpgrade::Patch => Version::new(
            base.major,
            base.minor,
            base.patch.checked_add(1).ok_or_else(overflow)?,
        ),
        VersionUpgrade::Minor => {
            Version::new(base.major, base.minor.checked_add(1).ok_or_else(overflow)?, 0)
        }
        VersionUpgrade::Major => {
            Version::new(base.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
        }
    };
    Ok(next)
}

/// Classify the step from `base` to `update` by comparing components.
///
/// Higher components short-circuit: a smaller major yields `None` even if
/// minor or patch went up. Downgrades and equal versions are both `None`.
pub fn version_upgrade_between(base: &Version, update: &Version) -> VersionUpgrade {
    if update.major != base.major {
        return if update.major > base.major {
            VersionUpgrade::Major
        } else {
            VersionUpgrade::None
        };
    }
    if update.minor != base.minor {
        return if update.minor > base.minor {
            VersionUpgrade::Minor
        } else {
            VersionUpgrade::None
        };
    }
    if update.patch > base.patch {
        VersionUpgrade::Patch
    } else {
        VersionUpgrade::None
    }
}

/// The version `base` should be published as after taking `update_tokens`.
pub fn plan_release(
    base: &TokenList,
    update_tokens: &[TokenInfo],
) -> Result<Version, TokenListError> {
    next_version(
        base.version,
        minimum_version_bump(&base.tokens, update_tokens),
    )
}

/// Outcome of checking an updated list's declared version against its base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseCheck {
    pub base_version: Version,
    pub declared_version: Version,
    /// Bump implied by the token diff.
    pub required: VersionUpgrade,
    /// Bump implied by the two declared versions.
    pub declared: VersionUpgrade,
    /// The smallest acceptable version for the update.
    pub minimum_version: Version,
    #[serde(skip)]
    pub diff: TokenListDiff,
}

impl ReleaseCheck {
    /// True when the declared version is high enough for the changes made.
    ///
    /// An unchanged token set accepts an unchanged version; otherwise the
    /// declared version must be a strict update carrying at least the
    /// required bump.
    pub fn is_sufficient(&self) -> bool {
        match self.required {
            VersionUpgrade::None => self.declared_version >= self.base_version,
            required => {
                is_version_update(&self.base_version, &self.declared_version)
                    && self.declared >= required
            }
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "base_version": self.base_version.to_string(),
            "declared_version": self.declared_version.to_string(),
            "required": self.required,
            "declared": self.declared,
            "minimum_version": self.minimum_version.to_string(),
            "sufficient": self.is_sufficient(),
            "diff": self.diff.to_json(),
        })
    }

    pub fn to_text(&self) -> String {
        let verdict = if self.is_sufficient() { "ok" } else { "insufficient" };
        format!(
            "{}: {} -> {} is a {} bump, changes require {} (minimum {})",
            verdict,
            self.base_version,
            self.declared_version,
            self.declared,
            self.required,
            self.minimum_version
        )
    }
}

/// Check that `update` declares a version that covers its token changes.
///
/// Fails only when the minimum acceptable version cannot be represented.
pub fn check_release(base: &TokenList, update: &TokenList) -> Result<ReleaseCheck, TokenListError> {
    let diff = diff_token_lists(&base.tokens, &update.tokens);
    let required = diff.required_upgrade();
    let check = ReleaseCheck {
        base_version: base.version,
        declared_version: update.version,
        required,
        declared: version_upgrade_between(&base.version, &update.version),
        minimum_version: next_version(base.version, required)?,
        diff,
    };
    tracing::debug!(
        required = %check.required,
        declared = %check.declared,
        sufficient = check.is_sufficient(),
        "checked release version"
    );
    Ok(check)
}
