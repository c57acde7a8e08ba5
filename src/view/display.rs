//! The six optional columns of the tree view.

use serde::{Deserialize, Serialize};

/// An optional per-node column. Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DisplayField {
    MajorityClass,
    MajorityProbability,
    TargetProbability,
    InstanceCount,
    RelativeDistribution,
    AbsoluteDistribution,
}

impl DisplayField {
    /// All fields in display order.
    pub const ALL: [DisplayField; 6] = [
        DisplayField::MajorityClass,
        DisplayField::MajorityProbability,
        DisplayField::TargetProbability,
        DisplayField::InstanceCount,
        DisplayField::RelativeDistribution,
        DisplayField::AbsoluteDistribution,
    ];

    /// Checkbox label.
    pub fn label(self) -> &'static str {
        match self {
            DisplayField::MajorityClass => "Majority class",
            DisplayField::MajorityProbability => "Probability of majority class",
            DisplayField::TargetProbability => "Probability of target class",
            DisplayField::InstanceCount => "Number of instances",
            DisplayField::RelativeDistribution => "Relative distribution",
            DisplayField::AbsoluteDistribution => "Absolute distribution",
        }
    }

    /// Column header.
    pub fn header(self) -> &'static str {
        match self {
            DisplayField::MajorityClass => "Class",
            DisplayField::MajorityProbability => "P(Class)",
            DisplayField::TargetProbability => "P(Target)",
            DisplayField::InstanceCount => "#Inst",
            DisplayField::RelativeDistribution => "Distribution (rel)",
            DisplayField::AbsoluteDistribution => "Distribution (abs)",
        }
    }

    /// Name used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            DisplayField::MajorityClass => "majority_class",
            DisplayField::MajorityProbability => "majority_probability",
            DisplayField::TargetProbability => "target_probability",
            DisplayField::InstanceCount => "instance_count",
            DisplayField::RelativeDistribution => "relative_distribution",
            DisplayField::AbsoluteDistribution => "absolute_distribution",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// On/off state of every optional column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFields {
    pub majority_class: bool,
    pub majority_probability: bool,
    pub target_probability: bool,
    pub instance_count: bool,
    pub relative_distribution: bool,
    pub absolute_distribution: bool,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self::all(true)
    }
}

impl DisplayFields {
    pub fn all(enabled: bool) -> Self {
        Self {
            majority_class: enabled,
            majority_probability: enabled,
            target_probability: enabled,
            instance_count: enabled,
            relative_distribution: enabled,
            absolute_distribution: enabled,
        }
    }

    fn slot(&mut self, field: DisplayField) -> &mut bool {
        match field {
            DisplayField::MajorityClass => &mut self.majority_class,
            DisplayField::MajorityProbability => &mut self.majority_probability,
            DisplayField::TargetProbability => &mut self.target_probability,
            DisplayField::InstanceCount => &mut self.instance_count,
            DisplayField::RelativeDistribution => &mut self.relative_distribution,
            DisplayField::AbsoluteDistribution => &mut self.absolute_distribution,
        }
    }

    pub fn is_enabled(&self, field: DisplayField) -> bool {
        match field {
            DisplayField::MajorityClass => self.majority_class,
            DisplayField::MajorityProbability => self.majority_probability,
            DisplayField::TargetProbability => self.target_probability,
            DisplayField::InstanceCount => self.instance_count,
            DisplayField::RelativeDistribution => self.relative_distribution,
            DisplayField::AbsoluteDistribution => self.absolute_distribution,
        }
    }

    pub fn set(&mut self, field: DisplayField, enabled: bool) {
        *self.slot(field) = enabled;
    }

    /// Flip a field and return its new state.
    pub fn toggle(&mut self, field: DisplayField) -> bool {
        let slot = self.slot(field);
        *slot = !*slot;
        *slot
    }

    /// Enabled fields in display order, regardless of toggle history.
    pub fn enabled(&self) -> Vec<DisplayField> {
        DisplayField::ALL
            .into_iter()
            .filter(|&f| self.is_enabled(f))
            .collect()
    }
}
