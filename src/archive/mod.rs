/// Archive analysis core
///
/// Contains the package model parsed from apt indexes, the classification
/// policies and the services that build indexes and reverse-dependency graphs.
pub mod domain;
pub mod policies;
pub mod services;
