use anyhow::Result;
use clap::{CommandFactory, Parser};

use class_tree_viewer::cli::{Cli, Command};
use class_tree_viewer::commands;
use class_tree_viewer::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::View(args) => {
            tracing::info!(?args, "Starting viewer");
            commands::view::run(args, &config, cli.config.as_deref())?;
        }
        Command::Dump(args) => {
            tracing::info!(?args, "Starting dump");
            commands::dump::run(args, &config)?;
        }
        Command::Rule(args) => {
            tracing::info!(?args, "Starting rule");
            commands::rule::run(args, &config)?;
        }
        Command::Completions(args) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("class_tree_viewer={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
