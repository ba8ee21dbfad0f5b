//! Structured form of Debian relationship fields.
//!
//! A field such as
//!
//! ```text
//! Build-Depends: debhelper-compat (= 13), python3-all:any | python3:any,
//!  libfoo-dev [linux-any] <!nocheck>
//! ```
//!
//! is a comma separated list of clauses; each clause is an or-group of
//! alternatives separated by `|`. The parser never fails: empty clauses are
//! skipped and anything it does not understand after a package name is dropped.

use std::fmt;

/// Version relation operator inside `( ... )`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOperator {
    Earlier,
    EarlierOrEqual,
    Exactly,
    LaterOrEqual,
    Later,
}

impl VersionOperator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "<<" => Some(Self::Earlier),
            "<=" | "<" => Some(Self::EarlierOrEqual),
            "=" => Some(Self::Exactly),
            ">=" | ">" => Some(Self::LaterOrEqual),
            ">>" => Some(Self::Later),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earlier => "<<",
            Self::EarlierOrEqual => "<=",
            Self::Exactly => "=",
            Self::LaterOrEqual => ">=",
            Self::Later => ">>",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub operator: VersionOperator,
    pub version: String,
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator.as_str(), self.version)
    }
}

/// One alternative of an or-group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTarget {
    name: String,
    arch_qualifier: Option<String>,
    constraint: Option<VersionConstraint>,
    architectures: Vec<String>,
    profiles: Vec<String>,
}

impl RelationTarget {
    /// Package name without the `:any`/`:native` qualifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arch_qualifier(&self) -> Option<&str> {
        self.arch_qualifier.as_deref()
    }

    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }

    pub fn architectures(&self) -> &[String] {
        &self.architectures
    }

    /// Raw build profile formulas, one per `<...>` group.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let name_end = input
            .find(|c: char| c.is_whitespace() || matches!(c, '(' | '[' | '<'))
            .unwrap_or(input.len());
        let (qualified_name, mut rest) = input.split_at(name_end);
        if qualified_name.is_empty() {
            return None;
        }

        let (name, arch_qualifier) = match qualified_name.split_once(':') {
            Some((name, qualifier)) => (name, Some(qualifier.to_string())),
            None => (qualified_name, None),
        };
        if name.is_empty() {
            return None;
        }

        let mut target = Self {
            name: name.to_string(),
            arch_qualifier,
            constraint: None,
            architectures: Vec::new(),
            profiles: Vec::new(),
        };

        loop {
            rest = rest.trim_start();
            let close = match rest.chars().next() {
                Some('(') => ')',
                Some('[') => ']',
                Some('<') => '>',
                _ => break,
            };
            let Some(end) = rest.find(close) else {
                break;
            };
            let inner = rest[1..end].trim();
            match close {
                ')' => target.constraint = parse_constraint(inner),
                ']' => target
                    .architectures
                    .extend(inner.split_whitespace().map(str::to_string)),
                _ => target.profiles.push(inner.to_string()),
            }
            rest = &rest[end + 1..];
        }

        Some(target)
    }
}

fn parse_constraint(inner: &str) -> Option<VersionConstraint> {
    let op_end = inner
        .find(|c: char| !matches!(c, '<' | '>' | '='))
        .unwrap_or(inner.len());
    let operator = VersionOperator::parse(&inner[..op_end])?;
    let version = inner[op_end..].trim();
    if version.is_empty() {
        return None;
    }
    Some(VersionConstraint {
        operator,
        version: version.to_string(),
    })
}

/// An or-group: satisfied by any one of its alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationClause {
    alternatives: Vec<RelationTarget>,
}

impl RelationClause {
    pub fn new(alternatives: Vec<RelationTarget>) -> Option<Self> {
        if alternatives.is_empty() {
            None
        } else {
            Some(Self { alternatives })
        }
    }

    pub fn alternatives(&self) -> &[RelationTarget] {
        &self.alternatives
    }

    /// The package named first in the clause; this is the name the reverse
    /// indexes are keyed by.
    pub fn first(&self) -> &RelationTarget {
        &self.alternatives[0]
    }

    fn parse(input: &str) -> Option<Self> {
        let alternatives = input.split('|').filter_map(RelationTarget::parse).collect();
        Self::new(alternatives)
    }
}

/// A whole relationship field, parsed once and kept in structured form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    clauses: Vec<RelationClause>,
}

impl Relation {
    pub fn parse(field: &str) -> Self {
        let clauses = field
            .split(',')
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .filter_map(RelationClause::parse)
            .collect();
        Self { clauses }
    }

    pub fn clauses(&self) -> &[RelationClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// First package name of every clause, in field order.
    pub fn first_names(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|clause| clause.first().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        let relation = Relation::parse("debhelper-compat (= 13), python3, dh-python");
        let names: Vec<&str> = relation.first_names().collect();
        assert_eq!(names, vec!["debhelper-compat", "python3", "dh-python"]);
    }

    #[test]
    fn test_parse_constraint_and_qualifiers() {
        let relation = Relation::parse("libfoo-dev:native (>= 1.2~) [linux-any !hurd-i386] <!nocheck> <cross>");
        let target = relation.clauses()[0].first();
        assert_eq!(target.name(), "libfoo-dev");
        assert_eq!(target.arch_qualifier(), Some("native"));
        let constraint = target.constraint().unwrap();
        assert_eq!(constraint.operator, VersionOperator::LaterOrEqual);
        assert_eq!(constraint.version, "1.2~");
        assert_eq!(target.architectures(), &["linux-any", "!hurd-i386"]);
        assert_eq!(target.profiles(), &["!nocheck", "cross"]);
    }

    #[test]
    fn test_parse_or_group_keeps_first_alternative() {
        let relation = Relation::parse("python-dev | python-all-dev (>= 2.7), cython");
        assert_eq!(relation.len(), 2);
        let clause = &relation.clauses()[0];
        assert_eq!(clause.alternatives().len(), 2);
        assert_eq!(clause.first().name(), "python-dev");
        assert_eq!(clause.alternatives()[1].name(), "python-all-dev");
    }

    #[test]
    fn test_parse_skips_empty_clauses() {
        let relation = Relation::parse(" , foo,, bar ,");
        let names: Vec<&str> = relation.first_names().collect();
        assert_eq!(names, vec!["foo", "bar"]);
    }

    #[test]
    fn test_parse_multiline_field() {
        let relation = Relation::parse("foo,\n bar (<< 3),\n baz");
        let names: Vec<&str> = relation.first_names().collect();
        assert_eq!(names, vec!["foo", "bar", "baz"]);
        assert_eq!(
            relation.clauses()[1].first().constraint().unwrap().to_string(),
            "<< 3"
        );
    }

    #[test]
    fn test_parse_constraint_without_space() {
        let relation = Relation::parse("foo(>=1.0)");
        let target = relation.clauses()[0].first();
        assert_eq!(target.name(), "foo");
        assert_eq!(target.constraint().unwrap().version, "1.0");
    }

    #[test]
    fn test_parse_tolerates_unclosed_group() {
        let relation = Relation::parse("foo (>= 1.0, bar");
        let names: Vec<&str> = relation.first_names().collect();
        assert_eq!(names, vec!["foo", "bar"]);
        assert!(relation.clauses()[0].first().constraint().is_none());
    }

    #[test]
    fn test_parse_empty_field() {
        assert!(Relation::parse("").is_empty());
        assert!(Relation::parse("   ").is_empty());
    }
}
