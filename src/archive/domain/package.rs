use crate::shared::error::RdepsError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a Debian package name given by a user.
///
/// Debian policy allows lowercase letters, digits, `+`, `-` and `.`, at least
/// two characters, starting with an alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid(&name, "Package name cannot be empty"));
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                &name,
                &format!(
                    "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        if name.len() < 2 {
            return Err(invalid(&name, "Package name must be at least two characters long"));
        }

        if !name.starts_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err(invalid(&name, "Package name must start with a lowercase letter or digit"));
        }

        // Security: the name ends up in file paths and DOT identifiers
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        {
            return Err(invalid(
                &name,
                "Package name contains invalid characters. Only lowercase letters, digits, '+', '-' and '.' are allowed.",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(name: &str, reason: &str) -> anyhow::Error {
    RdepsError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PackageName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_new_valid() {
        for name in ["python2.7", "libstdc++6", "g++-12", "0ad", "python-six"] {
            let package = PackageName::new(name.to_string()).unwrap();
            assert_eq!(package.as_str(), name);
        }
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_uppercase_and_paths() {
        assert!(PackageName::new("Python".to_string()).is_err());
        assert!(PackageName::new("../etc/passwd".to_string()).is_err());
        assert!(PackageName::new("foo bar".to_string()).is_err());
        assert!(PackageName::new("-foo".to_string()).is_err());
    }

    #[test]
    fn test_package_name_too_short_or_long() {
        assert!(PackageName::new("a".to_string()).is_err());
        assert!(PackageName::new("a".repeat(256)).is_err());
    }

    #[test]
    fn test_package_name_error_is_typed() {
        let err = PackageName::new("Bad".to_string()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RdepsError>(),
            Some(RdepsError::InvalidPackageName { .. })
        ));
    }

    #[test]
    fn test_package_name_display() {
        let name: PackageName = "python2.7".parse().unwrap();
        assert_eq!(format!("{}", name), "python2.7");
    }
}
