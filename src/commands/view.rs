//! View command implementation

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::cli::ViewArgs;
use crate::config::Config;
use crate::error::{Result, ViewerError};
use crate::model::{ExampleTable, TreeClassifier};
use crate::tui;
use crate::view::TreeViewer;

/// Run the view command
///
/// Settings are saved to `config_path` (or the default location) when the
/// session ends.
pub fn run(args: ViewArgs, config: &Config, config_path: Option<&Path>) -> Result<()> {
    let tree = args
        .path
        .as_deref()
        .map(TreeClassifier::load)
        .transpose()?
        .map(Arc::new);

    let mut viewer = TreeViewer::from_config(config);
    viewer.set_tree(tree);

    let viewer = tui::run(viewer, args.path.clone()).map_err(ViewerError::Terminal)?;

    finish(&viewer, &args, config_path)
}

/// Write the output file and save the settings.
///
/// Both are attempted; the first failure is returned.
fn finish(viewer: &TreeViewer, args: &ViewArgs, config_path: Option<&Path>) -> Result<()> {
    let written = match &args.output {
        Some(output) => write_output(output, viewer.output()),
        None => Ok(()),
    };

    let saved = if args.no_save {
        Ok(())
    } else {
        viewer.to_config().save(config_path)
    };

    written.and(saved)
}

/// Write the selected examples as JSON (`null` without a selection).
pub fn write_output(path: &Path, output: Option<&ExampleTable>) -> Result<()> {
    let json = serde_json::to_string_pretty(&output)?;
    fs::write(path, json).map_err(|source| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        rows = output.map_or(0, ExampleTable::len),
        "Wrote selected examples"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Domain, Variable};
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_write_output_without_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(&path, None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "null");
    }

    #[test]
    fn test_write_output_with_examples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let table = ExampleTable::new(
            Domain {
                attributes: vec![Variable::continuous("x")],
                class_var: Some(Variable::discrete("c", &["a", "b"])),
            },
            vec![vec![json!(1.5), json!("a")]],
        );

        write_output(&path, Some(&table)).unwrap();

        let written: ExampleTable =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, table);
    }

    fn view_args(output: Option<PathBuf>, no_save: bool) -> ViewArgs {
        ViewArgs {
            path: None,
            output,
            no_save,
        }
    }

    #[test]
    fn test_finish_writes_output_when_save_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let config_path = blocker.join("config.toml");
        let output = dir.path().join("out.json");

        let result = finish(
            &TreeViewer::default(),
            &view_args(Some(output.clone()), false),
            Some(&config_path),
        );

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "null");
    }

    #[test]
    fn test_finish_saves_config_when_output_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let output = dir.path().join("missing").join("out.json");

        let result = finish(
            &TreeViewer::default(),
            &view_args(Some(output), false),
            Some(&config_path),
        );

        assert!(matches!(result, Err(ViewerError::Io { .. })));
        assert!(config_path.exists());
    }

    #[test]
    fn test_finish_respects_no_save() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        finish(&TreeViewer::default(), &view_args(None, true), Some(&config_path)).unwrap();

        assert!(!config_path.exists());
    }
}
