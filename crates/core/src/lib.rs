//! tokenlist-core: token list diffing and version planning.
//!
//! Compares two revisions of a token list and derives the smallest
//! semantic version bump needed to publish the newer one.
//!
//! # Public API
//!
//! Key types and entry points are re-exported at the crate root:
//!
//! - [`compare_versions()`] / [`is_version_update()`] -- version ordering
//! - [`diff_token_lists()`] -- added / removed / changed tokens
//! - [`minimum_version_bump()`] -- severity of a diff as a [`VersionUpgrade`]
//! - [`next_version()`] -- apply a bump to a [`Version`]
//! - [`version_upgrade_between()`] -- classify the step between two versions
//! - [`check_release()`] -- gate a publish on the declared version
//!
//! All operations are pure functions over already-parsed records. The
//! crate does no schema validation; [`ensure_unique_tokens()`] is the one
//! optional boundary check for callers that want to fail fast.

pub mod diff;
pub mod error;
pub mod planner;
pub mod types;
pub mod upgrade;
pub mod version;

// ── Convenience re-exports: key types ────────────────────────────────

pub use diff::{TokenField, TokenListDiff};
pub use error::{TokenListError, VersionParseError};
pub use planner::ReleaseCheck;
pub use types::{ExtensionValue, TagDefinition, TokenInfo, TokenList};
pub use upgrade::VersionUpgrade;
pub use version::Version;

// ── Convenience re-exports: operations ───────────────────────────────

pub use diff::diff_token_lists;
pub use planner::{
    check_release, minimum_version_bump, next_version, plan_release, version_upgrade_between,
};
pub use types::{ensure_unique_tokens, find_duplicate_tokens};
pub use version::{compare_versions, is_version_update};
