use crate::error::{ReleaseBumpError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a string (e.g., "1.2.3" -> Version(1,2,3))
    pub fn parse(raw: &str) -> Result<Self> {
        // Tolerate 'v' or 'V' prefix
        let clean = raw.trim_start_matches('v').trim_start_matches('V');

        // Split by '.' and parse
        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseBumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                raw
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            ReleaseBumpError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump kind
    pub fn bump(&self, kind: &BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Parse the bump kind from the CLI argument.
    ///
    /// Matching is case-insensitive. An absent or unrecognized argument
    /// falls back to `Patch`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(|s| s.to_lowercase()).as_deref() {
            Some("major") => BumpKind::Major,
            Some("minor") => BumpKind::Minor,
            _ => BumpKind::Patch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_with_v_prefix() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1.x.3").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&BumpKind::Major);
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&BumpKind::Minor);
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&BumpKind::Patch);
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_zeroes_lower_components() {
        let v = Version::new(3, 7, 9);
        assert_eq!(v.bump(&BumpKind::Major), Version::new(4, 0, 0));
        assert_eq!(v.bump(&BumpKind::Minor), Version::new(3, 8, 0));
    }

    #[test]
    fn test_version_bump_never_decreases() {
        let v = Version::new(2, 5, 8);
        for kind in [BumpKind::Major, BumpKind::Minor, BumpKind::Patch] {
            let bumped = v.bump(&kind);
            assert!(bumped > v);
            assert!(bumped.major >= v.major);
        }
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_bump_kind_from_arg() {
        assert_eq!(BumpKind::from_arg(Some("major")), BumpKind::Major);
        assert_eq!(BumpKind::from_arg(Some("minor")), BumpKind::Minor);
        assert_eq!(BumpKind::from_arg(Some("patch")), BumpKind::Patch);
    }

    #[test]
    fn test_bump_kind_case_insensitive() {
        assert_eq!(BumpKind::from_arg(Some("PATCH")), BumpKind::Patch);
        assert_eq!(BumpKind::from_arg(Some("Major")), BumpKind::Major);
        assert_eq!(BumpKind::from_arg(Some("MiNoR")), BumpKind::Minor);
    }

    #[test]
    fn test_bump_kind_defaults_to_patch() {
        assert_eq!(BumpKind::from_arg(None), BumpKind::Patch);
        assert_eq!(BumpKind::from_arg(Some("bogus")), BumpKind::Patch);
        assert_eq!(BumpKind::from_arg(Some("")), BumpKind::Patch);
    }
}
