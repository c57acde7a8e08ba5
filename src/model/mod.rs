//! Decision tree data handed in by the learner.
//!
//! Everything here is read-only once loaded; the viewer only walks it.

mod distribution;
mod domain;
mod examples;
mod tree;

pub use distribution::Distribution;
pub use domain::{Domain, VarKind, Variable};
pub use examples::{ExampleTable, Instance};
pub use tree::{BranchSelector, Node, NodeId, TreeClassifier};
