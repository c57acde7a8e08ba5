//! Behavior of the tree viewer against whole tree documents.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use class_tree_viewer::model::TreeClassifier;
use class_tree_viewer::view::{format_table, DisplayField, TreeViewer, INCOMPATIBLE_TREE_MESSAGE};
use class_tree_viewer::Config;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> Arc<TreeClassifier> {
    Arc::new(TreeClassifier::load(&fixture(name)).unwrap())
}

fn viewer_with(tree: Arc<TreeClassifier>) -> TreeViewer {
    let mut viewer = TreeViewer::default();
    viewer.set_tree(Some(tree));
    viewer
}

/// A chain of binary splits `depth` levels deep.
fn chain_tree(depth: usize) -> Arc<TreeClassifier> {
    fn node(level: usize, depth: usize) -> Value {
        if level == depth {
            return json!({"distribution": {"counts": [1, 1]}, "majority": 0});
        }
        json!({
            "distribution": {"counts": [2, 2]},
            "majority": 0,
            "selector": "x",
            "branch_descriptions": [format!("<={}", level), format!(">{}", level)],
            "branches": [
                {"distribution": {"counts": [1, 1]}, "majority": 1},
                node(level + 1, depth)
            ]
        })
    }

    let document = json!({
        "domain": {
            "attributes": [{"name": "x", "kind": "continuous"}],
            "class_var": {"name": "c", "kind": {"discrete": ["a", "b"]}}
        },
        "root": node(0, depth)
    });
    Arc::new(TreeClassifier::from_json_str(&document.to_string()).unwrap())
}

#[test]
fn test_view_mirrors_every_node() {
    let tree = load("weather.json");
    let viewer = viewer_with(tree.clone());

    assert_eq!(viewer.view().len(), tree.count_nodes());
    assert_eq!(viewer.view().len(), 8);
    assert_eq!(
        viewer.status_lines(),
        [
            "Number of nodes: 8".to_string(),
            "Number of leaves: 5".to_string()
        ]
    );
}

#[test]
fn test_rebuild_is_deterministic() {
    let tree = load("weather.json");
    let first = viewer_with(tree.clone());
    let mut second = viewer_with(tree.clone());
    second.set_tree(Some(tree));

    assert_eq!(format_table(first.view()), format_table(second.view()));
}

#[test]
fn test_toggle_field_restores_columns() {
    let mut viewer = viewer_with(load("weather.json"));
    let before = viewer.view().columns().to_vec();

    viewer.toggle_field(DisplayField::MajorityProbability);
    assert_eq!(viewer.view().columns().len(), before.len() - 1);
    viewer.toggle_field(DisplayField::MajorityProbability);

    assert_eq!(viewer.view().columns(), before.as_slice());
}

#[test]
fn test_uniform_distribution_probabilities() {
    let document = json!({
        "domain": {
            "attributes": [],
            "class_var": {"name": "c", "kind": {"discrete": ["a", "b"]}}
        },
        "root": {"distribution": {"counts": [10, 10], "abs": 20}, "majority": 0}
    });
    let tree = Arc::new(TreeClassifier::from_json_str(&document.to_string()).unwrap());
    let viewer = viewer_with(tree);

    let view = viewer.view();
    let root = view.node(view.root().unwrap());
    let cell = |field: DisplayField| {
        let pos = view.columns().iter().position(|&f| f == field).unwrap();
        root.cells[pos].clone()
    };
    assert_eq!(cell(DisplayField::MajorityProbability), "0.500");
    assert_eq!(cell(DisplayField::TargetProbability), "0.500");
    assert_eq!(cell(DisplayField::RelativeDistribution), "0.500:0.500");
    assert_eq!(cell(DisplayField::AbsoluteDistribution), "10:10");
}

#[test]
fn test_rule_lists_nearest_condition_first() {
    let document = json!({
        "domain": {
            "attributes": [
                {"name": "A", "kind": {"discrete": ["0", "1"]}},
                {"name": "B", "kind": "continuous"}
            ],
            "class_var": {"name": "y", "kind": {"discrete": ["neg", "pos"]}}
        },
        "root": {
            "distribution": {"counts": [6, 4]},
            "majority": 0,
            "selector": "A",
            "branch_descriptions": ["0", "1"],
            "branches": [
                {"distribution": {"counts": [4, 0]}, "majority": 0},
                {
                    "distribution": {"counts": [2, 4]},
                    "majority": 1,
                    "selector": "B",
                    "branch_descriptions": ["<= 3", "> 3"],
                    "branches": [
                        {"distribution": {"counts": [2, 0]}, "majority": 0},
                        {"distribution": {"counts": [0, 4]}, "majority": 1}
                    ]
                }
            ]
        }
    });
    let tree = Arc::new(TreeClassifier::from_json_str(&document.to_string()).unwrap());
    let node = tree.node_at_path(&[1, 1]).unwrap();
    let mut viewer = viewer_with(tree);

    viewer.select_source(node).unwrap();

    assert_eq!(viewer.rule(), "IF B > 3 AND\n    A = 1\nTHEN y = pos");
}

#[test]
fn test_expand_to_level_one() {
    let mut viewer = viewer_with(chain_tree(4));
    viewer.set_expand_level(1);

    let view = viewer.view();
    let root = view.node(view.root().unwrap());
    assert!(root.open);
    assert!(root.children.iter().all(|&c| !view.node(c).open));
    assert_eq!(view.visible().len(), 3);
}

#[test]
fn test_expand_to_level_nine_opens_everything() {
    let mut viewer = viewer_with(chain_tree(4));
    viewer.set_expand_level(2);
    viewer.set_expand_level(9);

    let view = viewer.view();
    assert!(view.iter().all(|(_, node)| node.open));
    assert_eq!(view.visible().len(), view.len());
}

#[test]
fn test_continuous_class_is_rejected() {
    let mut viewer = viewer_with(load("weather.json"));
    viewer.select(viewer.view().root());
    assert!(viewer.output().is_some());

    viewer.set_tree(Some(load("housing_regression.json")));

    assert_eq!(viewer.error(), Some(INCOMPATIBLE_TREE_MESSAGE));
    assert!(viewer.view().is_empty());
    assert!(viewer.output().is_none());
    assert!(viewer.rule().is_empty());
    assert_eq!(viewer.status_lines()[0], "No tree on input");
}

#[test]
fn test_missing_class_variable_is_rejected() {
    let document = json!({
        "domain": {
            "attributes": [{"name": "outlook", "kind": {"discrete": ["sunny", "rainy"]}}]
        },
        "root": {"distribution": {"counts": [1, 1]}}
    });
    let tree = Arc::new(TreeClassifier::from_json_str(&document.to_string()).unwrap());
    let mut viewer = viewer_with(load("weather.json"));
    viewer.select(viewer.view().root());

    viewer.set_tree(Some(tree));

    assert_eq!(viewer.error(), Some(INCOMPATIBLE_TREE_MESSAGE));
    assert!(viewer.view().is_empty());
    assert!(viewer.output().is_none());
    assert!(viewer.target_classes().is_empty());
}

#[test]
fn test_rootless_tree_has_no_rows() {
    let document = json!({
        "domain": {
            "attributes": [{"name": "x", "kind": "continuous"}],
            "class_var": {"name": "c", "kind": {"discrete": ["a", "b"]}}
        },
        "root": null
    });
    let tree = Arc::new(TreeClassifier::from_json_str(&document.to_string()).unwrap());
    let mut viewer = viewer_with(load("weather.json"));

    viewer.set_tree(Some(tree));

    assert_eq!(viewer.view().len(), 0);
    assert!(viewer.view().visible().is_empty());
    assert!(viewer.error().is_none());
    assert_eq!(
        viewer.status_lines(),
        [
            "Number of nodes: 0".to_string(),
            "Number of leaves: 0".to_string()
        ]
    );
    assert_eq!(format_table(viewer.view()).lines().count(), 1);
}

#[test]
fn test_valid_tree_clears_previous_error() {
    let mut viewer = viewer_with(load("housing_regression.json"));
    assert!(viewer.error().is_some());

    viewer.set_tree(Some(load("weather.json")));
    assert!(viewer.error().is_none());
    assert_eq!(viewer.view().len(), 8);
}

#[test]
fn test_target_class_remembered_per_domain() {
    let mut viewer = viewer_with(load("weather.json"));
    assert!(viewer.set_target_class(1));

    let config = viewer.to_config();
    let mut restored = TreeViewer::from_config(&config);
    restored.set_tree(Some(load("weather.json")));
    assert_eq!(restored.target_class(), 1);

    let mut other = TreeViewer::from_config(&config);
    other.set_tree(Some(chain_tree(2)));
    assert_eq!(other.target_class(), 0);
}

#[test]
fn test_selection_exposes_node_examples() {
    let tree = load("weather.json");
    let rainy = tree.node_at_path(&[2]).unwrap();
    let mut viewer = viewer_with(tree);

    viewer.select_source(rainy).unwrap();

    let output = viewer.output().unwrap();
    assert_eq!(output.len(), 5);
    assert!(output.rows.iter().all(|row| row[0] == "rainy"));
    assert_eq!(viewer.rule(), "IF outlook = rainy\nTHEN play = yes");
}

#[test]
fn test_default_config_round_trip_through_viewer() {
    let viewer = TreeViewer::from_config(&Config::default());
    assert_eq!(viewer.to_config(), Config::default());
}
