use serde::{Deserialize, Serialize};

/// Value set of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// Categorical variable with its ordered values.
    Discrete(Vec<String>),
    /// Real-valued variable.
    Continuous,
}

/// A named attribute or class variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
}

impl Variable {
    pub fn discrete(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Discrete(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Continuous,
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self.kind, VarKind::Discrete(_))
    }

    /// Values of a discrete variable, `None` for continuous ones.
    pub fn values(&self) -> Option<&[String]> {
        match &self.kind {
            VarKind::Discrete(values) => Some(values),
            VarKind::Continuous => None,
        }
    }
}

/// Attributes and class variable of a data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub attributes: Vec<Variable>,
    #[serde(default)]
    pub class_var: Option<Variable>,
}

impl Domain {
    /// Class values if the class variable exists and is discrete.
    pub fn class_values(&self) -> Option<&[String]> {
        self.class_var.as_ref().and_then(Variable::values)
    }

    /// Key under which per-domain settings are remembered.
    ///
    /// Two domains share a key only if attribute names, class name and
    /// class values all match.
    pub fn context_key(&self) -> String {
        let attributes: Vec<&str> = self.attributes.iter().map(|a| a.name.as_str()).collect();
        let class = match &self.class_var {
            Some(var) => match var.values() {
                Some(values) => format!("{}={}", var.name, values.join(",")),
                None => var.name.clone(),
            },
            None => String::new(),
        };
        format!("{}|{}", attributes.join(","), class)
    }
}
