//! Subcommand implementations.

pub mod dump;
pub mod rule;
pub mod view;

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Result, ViewerError};
use crate::model::TreeClassifier;
use crate::view::TreeViewer;

/// Load a tree file into a viewer configured from `config`.
///
/// Fails if the viewer rejects the tree, since the non-interactive commands
/// have nothing to show without one.
fn load_viewer(path: &Path, config: &Config) -> Result<TreeViewer> {
    tracing::info!(path = %path.display(), "Loading tree");
    let tree = TreeClassifier::load(path)?;

    let mut viewer = TreeViewer::from_config(config);
    viewer.set_tree(Some(Arc::new(tree)));

    match viewer.error() {
        Some(error) => Err(ViewerError::IncompatibleTree(error.to_string())),
        None => Ok(viewer),
    }
}
