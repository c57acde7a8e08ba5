//! Decision rule text for a selected row.

use crate::model::TreeClassifier;

use super::projection::{ViewId, ViewTree};

/// Joins consecutive branch conditions.
const CONJUNCTION: &str = " AND\n    ";

/// Rule leading to `id`, e.g. `IF outlook = sunny\nTHEN play = no`.
///
/// Conditions are listed from the selected row upward, nearest first. The
/// root row yields the bare assignment `<class> = <label>`.
pub fn decision_rule(view: &ViewTree, tree: &TreeClassifier, id: ViewId) -> String {
    let selected = view.node(id);
    let class_name = tree.class_var().map_or("", |var| var.name.as_str());
    let class_label = tree.majority_label(selected.source);

    let mut conditions = Vec::new();
    let mut current = id;
    while let Some(parent) = view.node(current).parent {
        conditions.push(view.node(current).label.as_str());
        current = parent;
    }

    if conditions.is_empty() {
        format!("{} = {}", class_name, class_label)
    } else {
        format!(
            "IF {}\nTHEN {} = {}",
            conditions.join(CONJUNCTION),
            class_name,
            class_label
        )
    }
}
