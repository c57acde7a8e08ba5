//! Rule command implementation

use crate::cli::RuleArgs;
use crate::config::Config;
use crate::error::{Result, ViewerError};

/// Run the rule command
pub fn run(args: RuleArgs, config: &Config) -> Result<()> {
    let mut viewer = super::load_viewer(&args.path, config)?;

    let node = viewer
        .tree()
        .and_then(|tree| tree.node_at_path(&args.node))
        .ok_or_else(|| ViewerError::NodeNotFound(format_path(&args.node)))?;
    viewer.select_source(node);

    println!("{}", viewer.rule());

    if args.examples {
        println!();
        println!("{}", serde_json::to_string_pretty(&viewer.output())?);
    }

    Ok(())
}

fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "<root>");
        assert_eq!(format_path(&[1, 0, 2]), "1,0,2");
    }
}
