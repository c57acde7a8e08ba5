use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::distribution::Distribution;
use super::domain::{Domain, Variable};
use super::examples::{ExampleTable, Instance};
use crate::error::{Result, ViewerError};

/// Label used when a node's majority class cannot be resolved.
const UNKNOWN_VALUE: &str = "?";

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The feature test splitting a node into branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSelector {
    /// Name of the tested feature.
    pub feature: String,
}

/// A tree node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Class distribution of the examples reaching this node.
    pub distribution: Distribution,
    /// Class value index predicted at this node.
    pub majority: Option<usize>,
    /// Feature test, `None` for leaves.
    pub selector: Option<BranchSelector>,
    /// One description per branch slot (`"sunny"`, `"<=2.45"`, ...).
    pub branch_descriptions: Vec<String>,
    /// Child per branch slot; `None` marks a null branch.
    pub branches: Vec<Option<NodeId>>,
    /// Parent back-reference, `None` for the root.
    pub parent: Option<NodeId>,
    /// Row indices into the tree's example table.
    pub examples: Vec<usize>,
}

impl Node {
    /// A node without branches.
    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Non-null children with their branch descriptions, in branch order.
    pub fn children(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.branches
            .iter()
            .zip(&self.branch_descriptions)
            .filter_map(|(child, desc)| child.map(|id| (id, desc.as_str())))
    }
}

/// A trained classification tree together with its training data.
#[derive(Debug, Clone)]
pub struct TreeClassifier {
    domain: Domain,
    examples: ExampleTable,
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

#[derive(Deserialize)]
struct TreeDocument {
    domain: Domain,
    #[serde(default)]
    examples: Vec<Instance>,
    #[serde(default)]
    root: Option<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    distribution: Distribution,
    #[serde(default)]
    majority: Option<usize>,
    #[serde(default)]
    selector: Option<String>,
    #[serde(default)]
    branch_descriptions: Vec<String>,
    #[serde(default)]
    branches: Vec<Option<RawNode>>,
    #[serde(default)]
    examples: Vec<usize>,
}

impl TreeClassifier {
    /// Read a JSON tree document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a JSON tree document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: TreeDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    fn from_document(document: TreeDocument) -> Result<Self> {
        let examples = ExampleTable::new(document.domain.clone(), document.examples);
        let mut tree = TreeClassifier {
            domain: document.domain,
            examples,
            nodes: Vec::new(),
            root: None,
        };

        if let Some(raw) = document.root {
            tree.root = Some(tree.insert(raw, None)?);
        }

        tracing::debug!(nodes = tree.nodes.len(), "Loaded tree document");
        Ok(tree)
    }

    /// Move a raw subtree into the arena, depth first.
    fn insert(&mut self, raw: RawNode, parent: Option<NodeId>) -> Result<NodeId> {
        if raw.branches.len() != raw.branch_descriptions.len() {
            return Err(ViewerError::MalformedTree(format!(
                "{} branches but {} branch descriptions",
                raw.branches.len(),
                raw.branch_descriptions.len()
            )));
        }
        if !raw.branches.is_empty() && raw.selector.is_none() {
            return Err(ViewerError::MalformedTree(
                "node with branches has no selector".into(),
            ));
        }
        if let Some(&bad) = raw.examples.iter().find(|&&i| i >= self.examples.len()) {
            return Err(ViewerError::MalformedTree(format!(
                "example index {} out of range ({} examples)",
                bad,
                self.examples.len()
            )));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            distribution: raw.distribution,
            majority: raw.majority,
            selector: raw.selector.map(|feature| BranchSelector { feature }),
            branch_descriptions: raw.branch_descriptions,
            branches: Vec::with_capacity(raw.branches.len()),
            parent,
            examples: raw.examples,
        });

        for branch in raw.branches {
            let child = match branch {
                Some(child) => Some(self.insert(child, Some(id))?),
                None => None,
            };
            self.nodes[id.0].branches.push(child);
        }

        Ok(id)
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn class_var(&self) -> Option<&Variable> {
        self.domain.class_var.as_ref()
    }

    /// All training examples.
    pub fn examples(&self) -> &ExampleTable {
        &self.examples
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Node by id.
    ///
    /// Ids are only handed out by this tree, so a foreign id is a bug.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Nodes in depth-first order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Class value predicted at `id`, or `"?"` if it cannot be resolved.
    pub fn majority_label(&self, id: NodeId) -> &str {
        let node = self.node(id);
        self.domain
            .class_values()
            .zip(node.majority)
            .and_then(|(values, i)| values.get(i))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_VALUE)
    }

    /// Training examples that reached `id`.
    pub fn node_examples(&self, id: NodeId) -> ExampleTable {
        self.examples.subset(&self.node(id).examples)
    }

    /// Number of non-null nodes.
    pub fn count_nodes(&self) -> usize {
        self.root.map_or(0, |root| self.count_from(root, &|_: &Node| true))
    }

    /// Number of nodes without branches.
    pub fn count_leaves(&self) -> usize {
        self.root
            .map_or(0, |root| self.count_from(root, &|node: &Node| node.is_leaf()))
    }

    fn count_from(&self, id: NodeId, pred: &dyn Fn(&Node) -> bool) -> usize {
        let node = self.node(id);
        let own = usize::from(pred(node));
        own + node
            .branches
            .iter()
            .flatten()
            .map(|&child| self.count_from(child, pred))
            .sum::<usize>()
    }

    /// Depth of the deepest node; the root is at depth 0.
    pub fn depth(&self) -> Option<usize> {
        fn walk(tree: &TreeClassifier, id: NodeId) -> usize {
            tree.node(id)
                .branches
                .iter()
                .flatten()
                .map(|&child| 1 + walk(tree, child))
                .max()
                .unwrap_or(0)
        }
        self.root.map(|root| walk(self, root))
    }

    /// Follow branch indices from the root.
    pub fn node_at_path(&self, path: &[usize]) -> Option<NodeId> {
        let mut current = self.root?;
        for &branch in path {
            current = (*self.node(current).branches.get(branch)?)?;
        }
        Some(current)
    }
}
