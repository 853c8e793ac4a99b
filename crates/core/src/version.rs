//! Three-component list versions and their ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersionParseError;

/// The version of a token list.
///
/// Field order matters: the derived `Ord` compares `major`, then `minor`,
/// then `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionParseError::new(
                s,
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        let mut nums = [0u64; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            // u64::from_str accepts a leading '+', which is not a version
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionParseError::new(
                    s,
                    format!("component '{}' is not a non-negative integer", part),
                ));
            }
            *slot = part
                .parse()
                .map_err(|e| VersionParseError::new(s, format!("component '{}': {}", part, e)))?;
        }

        Ok(Version::new(nums[0], nums[1], nums[2]))
    }
}

/// Compare two versions on `(major, minor, patch)` in priority order.
///
/// `Less` means `a` precedes `b`. Callers that need the numeric form can
/// map `Less`/`Equal`/`Greater` to -1/0/1.
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
}

/// True iff `candidate` strictly follows `base`.
pub fn is_version_update(base: &Version, candidate: &Version) -> bool {
    compare_versions(base, candidate) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_orders_by_major_first() {
        let a = Version::new(1, 9, 9);
        let b = Version::new(2, 0, 0);
        assert_eq!(compare_versions(&a, &b), Ordering::Less);
        assert_eq!(compare_versions(&b, &a), Ordering::Greater);
    }

    #[test]
    fn compare_falls_through_to_minor_and_patch() {
        assert_eq!(
            compare_versions(&Version::new(1, 2, 0), &Version::new(1, 3, 0)),
            Ordering::Less
        );
        assert_eq!(
            compare_versions(&Version::new(1, 2, 4), &Version::new(1, 2, 3)),
            Ordering::Greater
        );
        assert_eq!(
            compare_versions(&Version::new(1, 2, 3), &Version::new(1, 2, 3)),
            Ordering::Equal
        );
    }

    #[test]
    fn compare_agrees_with_derived_ord() {
        let mut versions = vec![
            Version::new(2, 0, 0),
            Version::new(1, 0, 1),
            Version::new(1, 1, 0),
            Version::new(0, 9, 9),
        ];
        versions.sort_by(compare_versions);
        let mut derived = versions.clone();
        derived.sort();
        assert_eq!(versions, derived);
        assert_eq!(versions[0], Version::new(0, 9, 9));
    }

    #[test]
    fn update_requires_strictly_greater() {
        let base = Version::new(1, 0, 0);
        assert!(is_version_update(&base, &Version::new(1, 0, 1)));
        assert!(!is_version_update(&base, &base));
        assert!(!is_version_update(&base, &Version::new(0, 9, 0)));
    }

    #[test]
    fn parse_and_display() {
        let v: Version = "1.2.3".parse().unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("1.-2.3".parse::<Version>().is_err());
        assert!("1.+2.3".parse::<Version>().is_err());
        assert!("a.b.c".parse::<Version>().is_err());
        assert!("1..3".parse::<Version>().is_err());
    }

    #[test]
    fn deserializes_from_document_object() {
        let v: Version =
            serde_json::from_value(serde_json::json!({"major": 1, "minor": 0, "patch": 2}))
                .unwrap();
        assert_eq!(v, Version::new(1, 0, 2));

        let negative = serde_json::from_value::<Version>(
            serde_json::json!({"major": -1, "minor": 0, "patch": 0}),
        );
        assert!(negative.is_err());
    }
}
