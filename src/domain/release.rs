use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::version::RC_SUFFIX;
use crate::error::UnknownName;

/// Release category derived from which tail parts a version carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseType {
    /// `1.2.3`
    Release,
    /// `1.2.3-rc`
    Rc,
    /// `1.2.3-abc1234`
    Dev,
    /// `1.2.3-rc-abc1234`
    RcDev,
    /// `1.2.3-beta`
    Custom,
    /// `1.2.3-beta-abc1234`
    CustomDev,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 6] = [
        ReleaseType::Release,
        ReleaseType::Rc,
        ReleaseType::Dev,
        ReleaseType::RcDev,
        ReleaseType::Custom,
        ReleaseType::CustomDev,
    ];

    /// Classify a suffix/hash combination.
    pub fn of(suffix: Option<&str>, has_hash: bool) -> Self {
        match (suffix, has_hash) {
            (None, false) => ReleaseType::Release,
            (None, true) => ReleaseType::Dev,
            (Some(RC_SUFFIX), false) => ReleaseType::Rc,
            (Some(RC_SUFFIX), true) => ReleaseType::RcDev,
            (Some(_), false) => ReleaseType::Custom,
            (Some(_), true) => ReleaseType::CustomDev,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReleaseType::Release => "release",
            ReleaseType::Rc => "rc",
            ReleaseType::Dev => "dev",
            ReleaseType::RcDev => "rc-dev",
            ReleaseType::Custom => "custom",
            ReleaseType::CustomDev => "custom-dev",
        }
    }

    pub fn has_hash(self) -> bool {
        matches!(
            self,
            ReleaseType::Dev | ReleaseType::RcDev | ReleaseType::CustomDev
        )
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseType::ALL
            .into_iter()
            .find(|release_type| release_type.name() == s)
            .ok_or_else(|| UnknownName::ReleaseType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_table() {
        assert_eq!(ReleaseType::of(None, false), ReleaseType::Release);
        assert_eq!(ReleaseType::of(Some("rc"), false), ReleaseType::Rc);
        assert_eq!(ReleaseType::of(None, true), ReleaseType::Dev);
        assert_eq!(ReleaseType::of(Some("rc"), true), ReleaseType::RcDev);
        assert_eq!(ReleaseType::of(Some("beta"), false), ReleaseType::Custom);
        assert_eq!(ReleaseType::of(Some("beta"), true), ReleaseType::CustomDev);
    }

    #[test]
    fn test_rc_match_is_exact() {
        assert_eq!(ReleaseType::of(Some("RC"), false), ReleaseType::Custom);
        assert_eq!(ReleaseType::of(Some("rc-1"), false), ReleaseType::Custom);
    }

    #[test]
    fn test_names_round_trip() {
        for release_type in ReleaseType::ALL {
            assert_eq!(release_type.name().parse(), Ok(release_type));
        }
        assert!("nightly".parse::<ReleaseType>().is_err());
    }
}
