use serde::{Deserialize, Serialize};

use super::domain::Domain;

/// One data row; values follow the domain's attribute order, then the class.
pub type Instance = Vec<serde_json::Value>;

/// A set of examples sharing one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleTable {
    pub domain: Domain,
    pub rows: Vec<Instance>,
}

impl ExampleTable {
    pub fn new(domain: Domain, rows: Vec<Instance>) -> Self {
        Self { domain, rows }
    }

    /// Rows at `indices`, in the given order. Out-of-range indices are skipped.
    pub fn subset(&self, indices: &[usize]) -> ExampleTable {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        ExampleTable::new(self.domain.clone(), rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
