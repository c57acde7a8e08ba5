//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use super::app::{App, Mode};
use crate::view::{DisplayField, ViewNode, NAME_HEADER};

/// Width of the controls panel.
const CONTROLS_WIDTH: u16 = 36;

/// Height of the rule pane, borders included.
const RULE_HEIGHT: u16 = 7;

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Min(1),              // Controls + tree
            Constraint::Length(RULE_HEIGHT), // Rule
            Constraint::Length(1),           // Footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);

    render_header(app, frame, chunks[0]);
    render_controls(app, frame, body[0]);
    render_tree_area(app, frame, body[1]);
    render_rule(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no file)".to_string());
    let [nodes, leaves] = app.viewer.status_lines();

    let header_text = if leaves.is_empty() {
        format!(" {}  │  {}", source, nodes)
    } else {
        format!(" {}  │  {}  {}", source, nodes, leaves)
    };

    let block = Block::default()
        .title(" Classification Tree Viewer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let fields = &app.viewer.settings().fields;
    let mut lines = vec![Line::styled(
        "Displayed information",
        Style::default().fg(Color::Cyan).bold(),
    )];

    for (i, field) in DisplayField::ALL.into_iter().enumerate() {
        let mark = if fields.is_enabled(field) { "x" } else { " " };
        lines.push(Line::from(format!(" {} [{}] {}", i + 1, mark, field.label())));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Expand/shrink to level",
        Style::default().fg(Color::Cyan).bold(),
    ));
    lines.push(Line::from(format!(
        " [-] {:>2} [+]",
        app.viewer.settings().expand_level
    )));

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Target class",
        Style::default().fg(Color::Cyan).bold(),
    ));
    lines.push(Line::from(format!(
        " [t] {}",
        app.target_label().unwrap_or("-")
    )));

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Tree size",
        Style::default().fg(Color::Cyan).bold(),
    ));
    for status in app.viewer.status_lines() {
        if !status.is_empty() {
            lines.push(Line::from(format!(" {}", status)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if let Some(error) = app.viewer.error() {
        let paragraph = Paragraph::new(error)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }

    if app.visible_rows.is_empty() {
        let paragraph = Paragraph::new("No tree on input")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let view = app.viewer.view();
    let nodes: Vec<&ViewNode> = app.visible_rows.iter().map(|&id| view.node(id)).collect();

    let mut header = vec![Cell::from(NAME_HEADER)];
    header.extend(view.headers().into_iter().map(Cell::from));

    let rows = nodes.iter().map(|node| {
        let mut cells = vec![Cell::from(name_cell(node))];
        cells.extend(node.cells.iter().map(|c| Cell::from(c.as_str())));
        let style = if node.is_leaf() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Blue).bold()
        };
        Row::new(cells).style(style)
    });

    let mut widths = vec![Constraint::Min(NAME_HEADER.len() as u16)];
    for (i, field) in view.columns().iter().enumerate() {
        let width = nodes
            .iter()
            .filter_map(|n| n.cells.get(i))
            .map(|c| c.chars().count())
            .chain(std::iter::once(field.header().len()))
            .max()
            .unwrap_or(0);
        widths.push(Constraint::Length(width as u16));
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(Style::default().fg(Color::Yellow).bold()))
        .block(block)
        .column_spacing(2)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default().with_selected(app.cursor());
    frame.render_stateful_widget(table, area, &mut state);
}

fn name_cell(node: &ViewNode) -> String {
    let icon = if node.is_leaf() {
        "  "
    } else if node.open {
        "▼ "
    } else {
        "► "
    };
    format!("{}{}{}", "  ".repeat(node.depth), icon, node.label)
}

fn render_rule(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Rule ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let paragraph = Paragraph::new(app.viewer.rule())
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => {
            "[↑↓] Navigate  [←→] Expand  [1-6] Columns  [+-] Level  [t] Target  [?] Help  [q] Quit"
        }
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 26u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 →/l        Expand node
 ←/h        Collapse / Go to parent
 Enter      Toggle expand/collapse
 g / G      Go to top / bottom
 x          Clear selection

 VIEW
 ─────────────────────────────────
 1-6        Toggle displayed columns
 + / -      Expand/shrink to level
 t / T      Next / previous target class
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
