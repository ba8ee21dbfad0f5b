use serde::{Deserialize, Serialize};

/// Decides whether a package name belongs to the runtime being phased out.
///
/// A name is obsolete when it equals one of `names` or starts with one of
/// `prefixes`, unless it starts with one of `excluded_prefixes` or ends with
/// one of `excluded_suffixes`. The default describes the Python 2 removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObsoleteDependencyPolicy {
    pub names: Vec<String>,
    pub prefixes: Vec<String>,
    pub excluded_prefixes: Vec<String>,
    pub excluded_suffixes: Vec<String>,
}

impl Default for ObsoleteDependencyPolicy {
    fn default() -> Self {
        Self {
            names: vec!["python".to_string()],
            prefixes: vec![
                "python2".to_string(),
                "python-".to_string(),
                "libpython2".to_string(),
                "libpython-".to_string(),
            ],
            excluded_prefixes: vec!["libboost-python".to_string()],
            excluded_suffixes: vec!["-doc".to_string()],
        }
    }
}

impl ObsoleteDependencyPolicy {
    pub fn is_obsolete(&self, name: &str) -> bool {
        if self.excluded_prefixes.iter().any(|p| name.starts_with(p.as_str()))
            || self.excluded_suffixes.iter().any(|s| name.ends_with(s.as_str()))
        {
            return false;
        }
        self.names.iter().any(|n| n == name) || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_python2_packages() {
        let policy = ObsoleteDependencyPolicy::default();
        assert!(policy.is_obsolete("python"));
        assert!(policy.is_obsolete("python2.7"));
        assert!(policy.is_obsolete("python-six"));
        assert!(policy.is_obsolete("libpython2.7"));
        assert!(policy.is_obsolete("libpython-dev"));
    }

    #[test]
    fn test_default_leaves_python3_alone() {
        let policy = ObsoleteDependencyPolicy::default();
        assert!(!policy.is_obsolete("python3"));
        assert!(!policy.is_obsolete("python3-six"));
        assert!(!policy.is_obsolete("libpython3.11"));
        assert!(!policy.is_obsolete("pythonmagick"));
    }

    #[test]
    fn test_exclusions_win() {
        let policy = ObsoleteDependencyPolicy::default();
        assert!(!policy.is_obsolete("python-six-doc"));
        assert!(!policy.is_obsolete("libboost-python1.74-dev"));
    }

    #[test]
    fn test_custom_policy_from_yaml() {
        let yaml = "names: [perl4]\nprefixes: [libperl4-]\n";
        let policy: ObsoleteDependencyPolicy = serde_yaml_ng::from_str(yaml).unwrap();
        assert!(policy.is_obsolete("perl4"));
        assert!(policy.is_obsolete("libperl4-corelibs"));
        assert!(!policy.is_obsolete("python-six"));
        // unspecified lists fall back to the defaults
        assert_eq!(policy.excluded_suffixes, vec!["-doc".to_string()]);
    }

    #[test]
    fn test_empty_policy() {
        let policy = ObsoleteDependencyPolicy {
            names: vec![],
            prefixes: vec![],
            excluded_prefixes: vec![],
            excluded_suffixes: vec![],
        };
        assert!(policy.is_empty());
        assert!(!policy.is_obsolete("python"));
    }
}
