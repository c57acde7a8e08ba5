//! Application state for the TUI.

use std::path::PathBuf;

use crate::view::{DisplayField, TreeViewer, ViewId};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// Tree state, controls and selection.
    pub viewer: TreeViewer,

    /// File the tree was loaded from.
    pub source: Option<PathBuf>,

    /// Rows currently reachable through open rows (for rendering).
    pub visible_rows: Vec<ViewId>,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance around an already loaded viewer.
    pub fn new(viewer: TreeViewer, source: Option<PathBuf>) -> Self {
        let mut app = Self {
            viewer,
            source,
            visible_rows: Vec::new(),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
        };
        app.rebuild_visible_rows();
        app
    }

    /// Index of the selected row in `visible_rows`.
    pub fn cursor(&self) -> Option<usize> {
        let selected = self.viewer.selected()?;
        self.visible_rows.iter().position(|&id| id == selected)
    }

    /// Recompute visible rows after open states changed.
    ///
    /// A selection hidden inside a closed subtree moves to its nearest
    /// visible ancestor.
    pub fn rebuild_visible_rows(&mut self) {
        self.visible_rows = self.viewer.view().visible();

        let mut current = self.viewer.selected();
        while let Some(id) = current {
            if self.visible_rows.contains(&id) {
                break;
            }
            current = self.viewer.view().get(id).and_then(|n| n.parent);
        }
        if current != self.viewer.selected() {
            self.viewer.select(current);
        }
    }

    /// Move the selection by `delta` rows, clamped to the visible range.
    ///
    /// Without a selection, the first move selects the top row.
    pub fn move_selection(&mut self, delta: isize) {
        if self.visible_rows.is_empty() {
            return;
        }
        let last = self.visible_rows.len() - 1;
        let index = match self.cursor() {
            Some(cursor) => cursor.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.select_row(index);
    }

    /// Select the visible row at `index`.
    pub fn select_row(&mut self, index: usize) {
        if let Some(&id) = self.visible_rows.get(index) {
            self.viewer.select(Some(id));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible_rows.is_empty() {
            self.select_row(self.visible_rows.len() - 1);
        }
    }

    pub fn clear_selection(&mut self) {
        self.viewer.select(None);
    }

    /// Open the selected row.
    pub fn expand_selected(&mut self) {
        if let Some(id) = self.viewer.selected() {
            self.viewer.set_open(id, true);
            self.rebuild_visible_rows();
        }
    }

    /// Close the selected row, or jump to its parent if it is already
    /// closed or a leaf.
    pub fn collapse_selected(&mut self) {
        let Some(id) = self.viewer.selected() else {
            return;
        };
        let node = self.viewer.view().node(id);
        if node.open && !node.is_leaf() {
            self.viewer.set_open(id, false);
            self.rebuild_visible_rows();
        } else if let Some(parent) = node.parent {
            self.viewer.select(Some(parent));
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.viewer.selected() {
            let open = self.viewer.view().node(id).open;
            self.viewer.set_open(id, !open);
            self.rebuild_visible_rows();
        }
    }

    /// Show or hide a column.
    pub fn toggle_field(&mut self, field: DisplayField) {
        let enabled = self.viewer.toggle_field(field);
        self.status_message = Some(format!(
            "{} {}",
            if enabled { "Showing" } else { "Hiding" },
            field.label().to_lowercase()
        ));
    }

    /// Move the expand level by `delta` and apply it.
    pub fn change_level(&mut self, delta: i8) {
        let level = self.viewer.settings().expand_level.saturating_add_signed(delta);
        self.viewer.set_expand_level(level);
        self.rebuild_visible_rows();
        self.status_message = Some(format!(
            "Expanded to level {}",
            self.viewer.settings().expand_level
        ));
    }

    /// Step through the target classes, wrapping around.
    pub fn cycle_target(&mut self, step: isize) {
        let count = self.viewer.target_classes().len();
        if count == 0 {
            return;
        }
        let next = (self.viewer.target_class() as isize + step).rem_euclid(count as isize) as usize;
        self.viewer.set_target_class(next);
        self.status_message = self
            .target_label()
            .map(|label| format!("Target class: {}", label));
    }

    /// Name of the current target class.
    pub fn target_label(&self) -> Option<&str> {
        self.viewer
            .target_classes()
            .get(self.viewer.target_class())
            .map(String::as_str)
    }
}
