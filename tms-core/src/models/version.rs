use thiserror::Error;

/// The version counter of a tender or bid.
///
/// New records start at [`Version::INITIAL`] and every successful edit
/// (including status changes, decisions and rollbacks) moves to
/// [`Version::next`]. Archived snapshots keep the version they had when they
/// were archived.
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u32")]
pub struct Version(u32);

impl Version {
    /// The version of a freshly created record
    pub const INITIAL: Self = Self(1);

    /// The version that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The raw counter value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Version> for u32 {
    fn from(value: Version) -> Self {
        value.0
    }
}

/// A version number outside of the valid range was supplied
#[derive(Debug, Error, PartialEq, Eq)]
#[error("version must be a positive integer, got {0}")]
pub struct InvalidVersion(pub i64);

impl TryFrom<i64> for Version {
    type Error = InvalidVersion;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(version) if version >= 1 => Ok(Self(version)),
            _ => Err(InvalidVersion(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_start_at_one_and_count_up() {
        assert_eq!(Version::INITIAL.get(), 1);
        assert_eq!(Version::INITIAL.next().next().get(), 3);
    }

    #[test]
    fn non_positive_versions_are_rejected() {
        assert_eq!(Version::try_from(0_i64), Err(InvalidVersion(0)));
        assert_eq!(Version::try_from(-4_i64), Err(InvalidVersion(-4)));
        assert_eq!(Version::try_from(7_i64).map(Version::get), Ok(7));
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<Version>("0").is_err());
        assert_eq!(serde_json::from_str::<Version>("2").unwrap().get(), 2);
        assert_eq!(serde_json::to_string(&Version::INITIAL).unwrap(), "1");
    }
}
