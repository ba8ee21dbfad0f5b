use crate::archive::domain::{BinaryPackage, RelationClause, RelationKind};
use crate::shared::error::RdepsError;
use crate::shared::Result;

/// Result of looking a name up in the cache.
#[derive(Debug, Clone, Copy)]
pub enum PackageLookup<'a> {
    /// Not known in this snapshot at all
    Unknown,
    /// Only provided by other packages, or built for another architecture
    Virtual,
    Installable(&'a BinaryPackage),
}

/// `dependent` declares a `kind` relation on the package it was looked up for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseDependency {
    pub dependent: String,
    pub kind: RelationKind,
}

/// BinaryPackageCache port: read-only view of the binary packages of one
/// architecture in one snapshot.
///
/// Implementations are loaded once per snapshot and never mutated, so a
/// shared reference can be handed to any number of traversal workers.
pub trait BinaryPackageCache {
    fn lookup(&self, name: &str) -> PackageLookup<'_>;

    /// Every `(dependent, kind)` pair naming `name` in one of its or-groups,
    /// for all relation kinds. Callers filter the kinds they follow.
    fn reverse_dependencies(&self, name: &str) -> &[ReverseDependency];

    fn contains(&self, name: &str) -> bool {
        !matches!(self.lookup(name), PackageLookup::Unknown)
    }

    /// Archive section of an installable package (`python`, `contrib/libs`, ...)
    fn section(&self, name: &str) -> Option<&str> {
        match self.lookup(name) {
            PackageLookup::Installable(package) => package.section(),
            _ => None,
        }
    }

    /// # Errors
    /// `UnknownPackage` or `VirtualOrForeignArchPackage` when `name` has no
    /// installable version.
    fn installable(&self, name: &str) -> Result<&BinaryPackage> {
        match self.lookup(name) {
            PackageLookup::Installable(package) => Ok(package),
            PackageLookup::Virtual => Err(RdepsError::VirtualOrForeignArchPackage {
                name: name.to_string(),
            }
            .into()),
            PackageLookup::Unknown => Err(RdepsError::UnknownPackage {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Or-groups of the given relation kinds. A virtual or foreign package
    /// has none.
    ///
    /// # Errors
    /// `UnknownPackage` when `name` is not in the cache.
    fn forward_dependencies(&self, name: &str, kinds: &[RelationKind]) -> Result<Vec<RelationClause>> {
        match self.lookup(name) {
            PackageLookup::Installable(package) => Ok(package
                .clauses(kinds)
                .map(|(_, clause)| clause.clone())
                .collect()),
            PackageLookup::Virtual => Ok(Vec::new()),
            PackageLookup::Unknown => Err(RdepsError::UnknownPackage {
                name: name.to_string(),
            }
            .into()),
        }
    }
}
