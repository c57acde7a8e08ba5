//! Headless view model of the classification tree viewer.

mod display;
mod dump;
mod projection;
mod rule;
mod viewer;

pub use display::{DisplayField, DisplayFields};
pub use dump::{format_table, NAME_HEADER};
pub use projection::{
    absolute_distribution, branch_label, relative_distribution, target_probability, ViewId,
    ViewNode, ViewTree, NOT_AVAILABLE, ROOT_LABEL,
};
pub use rule::decision_rule;
pub use viewer::{TreeViewer, INCOMPATIBLE_TREE_MESSAGE, NO_TREE_STATUS};
