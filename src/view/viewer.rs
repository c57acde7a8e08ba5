//! The tree viewer: input handling, display controls, selection and output.

use std::sync::Arc;

use crate::config::{
    Config, DisplaySettings, TargetContexts, MAX_EXPAND_LEVEL, MIN_EXPAND_LEVEL,
};
use crate::model::{ExampleTable, NodeId, TreeClassifier};

use super::display::DisplayField;
use super::projection::{ViewId, ViewTree};
use super::rule::decision_rule;

/// Reported when a tree without a discrete class variable arrives.
pub const INCOMPATIBLE_TREE_MESSAGE: &str = "This viewer only shows trees with discrete classes.";

/// Status label shown while there is no tree.
pub const NO_TREE_STATUS: &str = "No tree on input";

/// View state for one classification tree.
///
/// Holds the input tree, the projected rows, the display controls and the
/// current selection with its output examples and rule text.
#[derive(Debug, Clone)]
pub struct TreeViewer {
    tree: Option<Arc<TreeClassifier>>,
    view: ViewTree,
    settings: DisplaySettings,
    target_class: usize,
    target_classes: Vec<String>,
    contexts: TargetContexts,
    context_key: Option<String>,
    selected: Option<ViewId>,
    output: Option<ExampleTable>,
    rule: String,
    error: Option<String>,
}

impl Default for TreeViewer {
    fn default() -> Self {
        Self::new(DisplaySettings::default(), TargetContexts::new())
    }
}

impl TreeViewer {
    pub fn new(settings: DisplaySettings, contexts: TargetContexts) -> Self {
        let mut view = ViewTree::empty();
        view.set_columns(&settings.fields);
        Self {
            tree: None,
            view,
            settings,
            target_class: 0,
            target_classes: Vec::new(),
            contexts,
            context_key: None,
            selected: None,
            output: None,
            rule: String::new(),
            error: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.display, config.contexts.clone())
    }

    /// Settings to persist at shutdown.
    pub fn to_config(&self) -> Config {
        Config {
            display: self.settings,
            contexts: self.contexts.clone(),
        }
    }

    /// Replace the input tree.
    ///
    /// All previous rows, selection and output are dropped first. A tree
    /// without a discrete class variable is rejected: the error is recorded
    /// and the viewer behaves as if no tree was given.
    pub fn set_tree(&mut self, tree: Option<Arc<TreeClassifier>>) {
        self.selected = None;
        self.output = None;
        self.rule.clear();
        self.context_key = None;
        self.target_classes.clear();
        self.target_class = 0;

        self.tree = match tree {
            Some(tree) if tree.domain().class_values().is_none() => {
                tracing::warn!(
                    class_var = ?tree.class_var().map(|v| &v.name),
                    "Rejecting tree without discrete class"
                );
                self.error = Some(INCOMPATIBLE_TREE_MESSAGE.to_string());
                None
            }
            other => {
                self.error = None;
                other
            }
        };

        self.view = match &self.tree {
            Some(tree) => ViewTree::build(tree),
            None => ViewTree::empty(),
        };

        if let Some(tree) = &self.tree {
            let domain = tree.domain();
            self.target_classes = domain.class_values().map(<[String]>::to_vec).unwrap_or_default();

            let key = domain.context_key();
            if let Some(index) = self.contexts.get(&key) {
                if index < self.target_classes.len() {
                    self.target_class = index;
                    self.contexts.remember(&key, index);
                }
            }
            self.context_key = Some(key);

            tracing::info!(
                nodes = tree.count_nodes(),
                leaves = tree.count_leaves(),
                target = self.target_class,
                "Loaded classification tree"
            );
        }

        self.refresh();
    }

    /// Recompute the column set and all row cells.
    fn refresh(&mut self) {
        match &self.tree {
            Some(tree) => self
                .view
                .refresh(tree, &self.settings.fields, self.target_class),
            None => self.view.set_columns(&self.settings.fields),
        }
    }

    /// Flip a display field and rebuild the columns. Returns the new state.
    pub fn toggle_field(&mut self, field: DisplayField) -> bool {
        let enabled = self.settings.fields.toggle(field);
        self.refresh();
        enabled
    }

    pub fn set_field(&mut self, field: DisplayField, enabled: bool) {
        if self.settings.fields.is_enabled(field) != enabled {
            self.settings.fields.set(field, enabled);
            self.refresh();
        }
    }

    /// Open rows shallower than `level` (clamped to 1-9) and close the rest.
    pub fn set_expand_level(&mut self, level: u8) {
        let level = level.clamp(MIN_EXPAND_LEVEL, MAX_EXPAND_LEVEL);
        self.settings.expand_level = level;
        self.view.expand_to_level(usize::from(level));
    }

    /// Select the target class. Out-of-range indices are ignored and
    /// `false` is returned.
    pub fn set_target_class(&mut self, index: usize) -> bool {
        if index >= self.target_classes.len() {
            return false;
        }

        self.target_class = index;
        if let Some(key) = &self.context_key {
            self.contexts.remember(key, index);
        }
        if self.settings.fields.target_probability {
            if let Some(tree) = &self.tree {
                self.view.update_target(tree, index);
            }
        }
        true
    }

    /// Select a row, or clear the selection with `None`.
    ///
    /// Updates the output examples and the rule text.
    pub fn select(&mut self, id: Option<ViewId>) {
        self.selected = id.filter(|&id| self.view.get(id).is_some());

        match (&self.tree, self.selected) {
            (Some(tree), Some(id)) => {
                let source = self.view.node(id).source;
                self.output = Some(tree.node_examples(source));
                self.rule = decision_rule(&self.view, tree, id);
            }
            _ => {
                self.output = None;
                self.rule.clear();
            }
        }
    }

    /// Select the row mirroring a tree node.
    pub fn select_source(&mut self, source: NodeId) -> Option<ViewId> {
        let id = self.view.find_source(source);
        if id.is_some() {
            self.select(id);
        }
        id
    }

    pub fn set_open(&mut self, id: ViewId, open: bool) {
        self.view.set_open(id, open);
    }

    pub fn tree(&self) -> Option<&Arc<TreeClassifier>> {
        self.tree.as_ref()
    }

    pub fn view(&self) -> &ViewTree {
        &self.view
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn target_class(&self) -> usize {
        self.target_class
    }

    /// Class values available as targets.
    pub fn target_classes(&self) -> &[String] {
        &self.target_classes
    }

    pub fn selected(&self) -> Option<ViewId> {
        self.selected
    }

    /// Examples at the selected row.
    pub fn output(&self) -> Option<&ExampleTable> {
        self.output.as_ref()
    }

    /// Rule for the selected row, empty without a selection.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Input error, if the last tree was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn node_count(&self) -> Option<usize> {
        self.tree.as_ref().map(|t| t.count_nodes())
    }

    pub fn leaf_count(&self) -> Option<usize> {
        self.tree.as_ref().map(|t| t.count_leaves())
    }

    /// The two tree-size status labels.
    pub fn status_lines(&self) -> [String; 2] {
        match (self.node_count(), self.leaf_count()) {
            (Some(nodes), Some(leaves)) => [
                format!("Number of nodes: {}", nodes),
                format!("Number of leaves: {}", leaves),
            ],
            _ => [NO_TREE_STATUS.to_string(), String::new()],
        }
    }
}
