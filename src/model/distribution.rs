use serde::{Deserialize, Serialize};

/// Class distribution at a tree node.
///
/// `counts` holds one (possibly weighted) count per class value in
/// class-index order. `abs` is the total weight and `cases` the raw number
/// of examples that reached the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDistribution")]
pub struct Distribution {
    counts: Vec<f64>,
    abs: f64,
    cases: u64,
}

#[derive(Deserialize)]
struct RawDistribution {
    #[serde(default)]
    counts: Vec<f64>,
    #[serde(default)]
    abs: Option<f64>,
    #[serde(default)]
    cases: Option<u64>,
}

impl From<RawDistribution> for Distribution {
    fn from(raw: RawDistribution) -> Self {
        let abs = raw.abs.unwrap_or_else(|| raw.counts.iter().sum());
        let cases = raw.cases.unwrap_or(abs.max(0.0).round() as u64);
        Self {
            counts: raw.counts,
            abs,
            cases,
        }
    }
}

impl Distribution {
    /// Distribution whose total is the sum of `counts`.
    pub fn new(counts: Vec<f64>) -> Self {
        Distribution::from(RawDistribution {
            counts,
            abs: None,
            cases: None,
        })
    }

    pub fn with_totals(counts: Vec<f64>, abs: f64, cases: u64) -> Self {
        Self { counts, abs, cases }
    }

    /// Count for a class index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.counts.get(index).copied()
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    pub fn abs(&self) -> f64 {
        self.abs
    }

    pub fn cases(&self) -> u64 {
        self.cases
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_default_to_sum() {
        let dist = Distribution::new(vec![3.0, 7.0]);
        assert_eq!(dist.abs(), 10.0);
        assert_eq!(dist.cases(), 10);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let dist = Distribution::new(vec![1.0]);
        assert_eq!(dist.get(0), Some(1.0));
        assert_eq!(dist.get(1), None);
    }

    #[test]
    fn test_explicit_totals_from_json() {
        let dist: Distribution =
            serde_json::from_str(r#"{"counts": [1.5, 2.5], "abs": 4.0, "cases": 3}"#).unwrap();
        assert_eq!(dist.abs(), 4.0);
        assert_eq!(dist.cases(), 3);
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_empty_distribution() {
        let dist: Distribution = serde_json::from_str("{}").unwrap();
        assert!(dist.is_empty());
        assert_eq!(dist.abs(), 0.0);
        assert_eq!(dist.cases(), 0);
    }
}
