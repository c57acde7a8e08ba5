//! Dump command implementation

use crate::cli::DumpArgs;
use crate::config::Config;
use crate::error::{Result, ViewerError};
use crate::view::{format_table, DisplayField, TreeViewer};

/// Run the dump command
pub fn run(args: DumpArgs, config: &Config) -> Result<()> {
    let viewer = prepare(&args, config)?;
    print!("{}", render(&viewer));
    Ok(())
}

/// Load the tree and apply the command-line overrides.
pub fn prepare(args: &DumpArgs, config: &Config) -> Result<TreeViewer> {
    let mut viewer = super::load_viewer(&args.path, config)?;

    if let Some(columns) = &args.columns {
        let fields = parse_columns(columns)?;
        for field in DisplayField::ALL {
            viewer.set_field(field, fields.contains(&field));
        }
    }

    if let Some(target) = &args.target {
        let index = resolve_target(viewer.target_classes(), target)?;
        viewer.set_target_class(index);
    }

    if let Some(level) = args.level {
        viewer.set_expand_level(level);
    }

    Ok(viewer)
}

/// Table followed by the tree-size lines.
pub fn render(viewer: &TreeViewer) -> String {
    let mut output = format_table(viewer.view());
    output.push('\n');
    for line in viewer.status_lines() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn parse_columns(columns: &[String]) -> Result<Vec<DisplayField>> {
    columns
        .iter()
        .map(|c| DisplayField::from_key(c.trim()).ok_or_else(|| ViewerError::UnknownColumn(c.clone())))
        .collect()
}

/// Accept a class value name or its index.
fn resolve_target(classes: &[String], target: &str) -> Result<usize> {
    if let Some(index) = classes.iter().position(|c| c == target) {
        return Ok(index);
    }
    match target.parse::<usize>() {
        Ok(index) if index < classes.len() => Ok(index),
        _ => Err(ViewerError::UnknownTarget(target.to_string())),
    }
}
