//! Class Tree Viewer - browse classification decision trees
//!
//! This crate provides functionality for:
//! - Loading trained decision trees with their training data
//! - Projecting a tree onto rows with class probabilities and distributions
//! - Deriving the decision rule that leads to a node
//! - Interactive TUI for tree exploration

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ViewerError};
pub use model::TreeClassifier;
pub use view::TreeViewer;
