//! Projection of a [`TreeClassifier`] onto view rows.
//!
//! The view tree mirrors the source tree node for node. Building it sets up
//! structure and labels; refreshing fills the enabled columns.

use crate::model::{Distribution, NodeId, TreeClassifier};

use super::display::{DisplayField, DisplayFields};

/// Label of the synthetic root row.
pub const ROOT_LABEL: &str = "<root>";

/// Rendered in place of values that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator between per-class values in distribution columns.
const DISTRIBUTION_SEPARATOR: &str = ":";

/// Totals below this are treated as 1.
const MIN_TOTAL: f64 = 1e-20;

/// Index of a row in the view arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

impl ViewId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One row of the tree view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode {
    /// `<root>` or the branch condition leading here.
    pub label: String,
    /// The tree node this row mirrors.
    pub source: NodeId,
    pub parent: Option<ViewId>,
    pub children: Vec<ViewId>,
    /// Distance from the root.
    pub depth: usize,
    /// Whether children are shown.
    pub open: bool,
    /// Values of the enabled columns, aligned with [`ViewTree::columns`].
    pub cells: Vec<String>,
}

impl ViewNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The full set of view rows for one tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
    columns: Vec<DisplayField>,
}

impl ViewTree {
    /// A view with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create one row per node of `tree`, every row open. Columns are left
    /// empty until [`ViewTree::refresh`].
    pub fn build(tree: &TreeClassifier) -> Self {
        let mut view = Self::empty();
        if let Some(root) = tree.root() {
            let id = view.push(ROOT_LABEL.to_string(), root, None, 0);
            view.build_children(tree, root, id);
        }
        tracing::debug!(rows = view.nodes.len(), "Built tree view");
        view
    }

    fn build_children(&mut self, tree: &TreeClassifier, source: NodeId, parent: ViewId) {
        let node = tree.node(source);
        let Some(selector) = &node.selector else {
            return;
        };

        let depth = self.nodes[parent.0].depth + 1;
        for (child, desc) in node.children() {
            let id = self.push(branch_label(&selector.feature, desc), child, Some(parent), depth);
            self.nodes[parent.0].children.push(id);
            self.build_children(tree, child, id);
        }
    }

    fn push(&mut self, label: String, source: NodeId, parent: Option<ViewId>, depth: usize) -> ViewId {
        let id = ViewId(self.nodes.len());
        self.nodes.push(ViewNode {
            label,
            source,
            parent,
            children: Vec::new(),
            depth,
            open: true,
            cells: Vec::new(),
        });
        id
    }

    /// Rebuild the column set from `fields` without touching cells.
    pub fn set_columns(&mut self, fields: &DisplayFields) {
        self.columns = fields.enabled();
    }

    /// Recompute the column set and every row's cells.
    pub fn refresh(&mut self, tree: &TreeClassifier, fields: &DisplayFields, target: usize) {
        self.set_columns(fields);
        for node in &mut self.nodes {
            node.cells = self
                .columns
                .iter()
                .map(|&field| field_value(tree, node.source, field, target))
                .collect();
        }
    }

    /// Recompute only the target probability column, if shown.
    pub fn update_target(&mut self, tree: &TreeClassifier, target: usize) {
        let Some(pos) = self
            .columns
            .iter()
            .position(|&f| f == DisplayField::TargetProbability)
        else {
            return;
        };

        for node in &mut self.nodes {
            node.cells[pos] = target_probability(&tree.node(node.source).distribution, target);
        }
    }

    /// Open rows shallower than `level`, close the rest.
    pub fn expand_to_level(&mut self, level: usize) {
        for node in &mut self.nodes {
            node.open = node.depth < level;
        }
    }

    pub fn set_open(&mut self, id: ViewId, open: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.open = open;
        }
    }

    pub fn root(&self) -> Option<ViewId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(ViewId(0))
        }
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(id.0)
    }

    /// Row by id. Panics on an id from another view.
    pub fn node(&self, id: ViewId) -> &ViewNode {
        &self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &ViewNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (ViewId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shown columns in display order.
    pub fn columns(&self) -> &[DisplayField] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|f| f.header()).collect()
    }

    /// Row mirroring a tree node.
    pub fn find_source(&self, source: NodeId) -> Option<ViewId> {
        self.nodes
            .iter()
            .position(|n| n.source == source)
            .map(ViewId)
    }

    /// Rows reachable through open rows, in pre-order.
    pub fn visible(&self) -> Vec<ViewId> {
        let mut rows = Vec::new();
        if let Some(root) = self.root() {
            self.collect_visible(root, &mut rows);
        }
        rows
    }

    fn collect_visible(&self, id: ViewId, rows: &mut Vec<ViewId>) {
        rows.push(id);
        let node = &self.nodes[id.0];
        if node.open {
            for &child in &node.children {
                self.collect_visible(child, rows);
            }
        }
    }
}

/// Row label for the branch `desc` of a node testing `feature`.
pub fn branch_label(feature: &str, desc: &str) -> String {
    if desc.starts_with('<') || desc.starts_with('>') {
        format!("{} {}", feature, desc)
    } else {
        format!("{} = {}", feature, desc)
    }
}

fn field_value(tree: &TreeClassifier, id: NodeId, field: DisplayField, target: usize) -> String {
    let node = tree.node(id);
    let dist = &node.distribution;
    match field {
        DisplayField::MajorityClass => tree.majority_label(id).to_string(),
        DisplayField::MajorityProbability => node
            .majority
            .and_then(|m| probability(dist, m))
            .map_or_else(|| NOT_AVAILABLE.to_string(), format_value),
        DisplayField::TargetProbability => target_probability(dist, target),
        DisplayField::InstanceCount => dist.cases().to_string(),
        DisplayField::RelativeDistribution => relative_distribution(dist),
        DisplayField::AbsoluteDistribution => absolute_distribution(dist),
    }
}

fn safe_total(dist: &Distribution) -> f64 {
    let total = dist.abs();
    if total < MIN_TOTAL {
        1.0
    } else {
        total
    }
}

fn probability(dist: &Distribution, index: usize) -> Option<f64> {
    dist.get(index).map(|count| count / safe_total(dist))
}

fn format_value(value: f64) -> String {
    format!("{:.3}", value)
}

/// P(target) cell text.
pub fn target_probability(dist: &Distribution, target: usize) -> String {
    probability(dist, target).map_or_else(|| NOT_AVAILABLE.to_string(), format_value)
}

/// Per-class shares, e.g. `0.250:0.750`.
pub fn relative_distribution(dist: &Distribution) -> String {
    if dist.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let total = safe_total(dist);
    dist.counts()
        .iter()
        .map(|&c| format_value(c / total))
        .collect::<Vec<_>>()
        .join(DISTRIBUTION_SEPARATOR)
}

/// Per-class counts, e.g. `5:15`.
pub fn absolute_distribution(dist: &Distribution) -> String {
    if dist.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    dist.counts()
        .iter()
        .map(|&c| (c.trunc() as i64).to_string())
        .collect::<Vec<_>>()
        .join(DISTRIBUTION_SEPARATOR)
}
