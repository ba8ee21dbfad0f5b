pub mod node_classification;
pub mod obsolete_dependency;

pub use node_classification::{Candidate, ClassificationContext, ClassificationRule, NodeClassifier};
pub use obsolete_dependency::ObsoleteDependencyPolicy;
