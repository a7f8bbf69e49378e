//! Mission Console - CLI entry point
//!
//! This binary launches the terminal console and provides a couple of
//! utility subcommands for inspecting the widget catalog and managing
//! the configuration file.

use clap::{Parser, Subcommand};
use mission_console::config::loader::ConfigLoader;
use mission_console::logging;
use mission_console::tui::app::App;
use mission_console::widgets::{WidgetInfo, WidgetRegistry};
use std::path::PathBuf;
use std::process::ExitCode;

/// Mission Console
#[derive(Parser)]
#[command(name = "msc")]
#[command(version, about = "Terminal mission-control console with synthetic fleet telemetry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the msc CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Path to a configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the widget catalog, or describe a single widget
    Widgets {
        /// Widget to describe (e.g. "clock", "sticky-notes")
        kind: Option<mission_console::WidgetKind>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { config } => {
            // Only wire up stderr logging when explicitly requested:
            // unredirected log lines would bleed through the alternate
            // screen.
            if std::env::var_os("MSC_LOG").is_some() {
                logging::init();
            }
            let config = match config {
                Some(path) => ConfigLoader::load_from_path(&path),
                None => ConfigLoader::load_default(),
            };
            let config = match config {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let rt =
                tokio::runtime::Runtime::new().expect("failed to create tokio runtime for TUI");
            if let Err(e) = rt.block_on(async {
                let mut app = App::new(&config);
                app.run().await
            }) {
                eprintln!("TUI error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        Commands::Widgets { kind, format } => {
            logging::init();
            return run_widgets_command(kind, &format);
        }
        Commands::Config { action } => {
            logging::init();
            use mission_console::config::{default, xdg};
            let result = match action {
                ConfigAction::Init { force } => match default::create_default_config(force) {
                    Ok(path) => {
                        println!("Created configuration at {}", path.display());
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                ConfigAction::Path => {
                    println!("{}", xdg::config_path().display());
                    Ok(())
                }
                ConfigAction::Validate => match ConfigLoader::load_default() {
                    Ok(config) => {
                        println!("Configuration is valid");
                        println!("{config:#?}");
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };
            if let Err(e) = result {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Prints the widget catalog (or one entry) in the requested format.
fn run_widgets_command(kind: Option<mission_console::WidgetKind>, format: &str) -> ExitCode {
    let result = match kind {
        Some(kind) => render_widget_entry(kind, format),
        None => render_widget_catalog(format),
    };
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders the widget catalog as text or JSON.
fn render_widget_catalog(format: &str) -> Result<String, String> {
    let registry = WidgetRegistry::new();
    match format {
        "text" => {
            let lines: Vec<String> = registry
                .available()
                .map(|info| {
                    format!(
                        "{:<16} {:<16} {}",
                        info.kind.id(),
                        info.title,
                        info.description
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        "json" => {
            let catalog: Vec<&WidgetInfo> = registry.available().collect();
            serde_json::to_string_pretty(&catalog)
                .map_err(|e| format!("failed to serialize catalog: {e}"))
        }
        other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
    }
}

/// Renders a single catalog entry as text or JSON.
fn render_widget_entry(kind: mission_console::WidgetKind, format: &str) -> Result<String, String> {
    let registry = WidgetRegistry::new();
    let info = registry.info(kind);
    match format {
        "text" => Ok(format!(
            "{:<16} {:<16} {}",
            info.kind.id(),
            info.title,
            info.description
        )),
        "json" => serde_json::to_string_pretty(info)
            .map_err(|e| format!("failed to serialize entry: {e}")),
        other => Err(format!("unknown format '{other}', expected 'text' or 'json'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify the CLI configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tui_subcommand_parses() {
        let cli = Cli::try_parse_from(["msc", "tui"]).expect("tui should parse");
        match cli.command {
            Commands::Tui { config } => assert!(config.is_none()),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_tui_with_config_path() {
        let cli = Cli::try_parse_from(["msc", "tui", "--config", "/tmp/custom.toml"])
            .expect("tui --config should parse");
        match cli.command {
            Commands::Tui { config } => {
                assert_eq!(config, Some(PathBuf::from("/tmp/custom.toml")));
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_widgets_default_format_is_text() {
        let cli = Cli::try_parse_from(["msc", "widgets"]).expect("widgets should parse");
        match cli.command {
            Commands::Widgets { kind, format } => {
                assert!(kind.is_none());
                assert_eq!(format, "text");
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_widgets_json_format_parses() {
        let cli = Cli::try_parse_from(["msc", "widgets", "--format", "json"])
            .expect("widgets --format json should parse");
        match cli.command {
            Commands::Widgets { format, .. } => assert_eq!(format, "json"),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_widgets_kind_positional_parses() {
        let cli =
            Cli::try_parse_from(["msc", "widgets", "clock"]).expect("widgets clock should parse");
        match cli.command {
            Commands::Widgets { kind, .. } => {
                assert_eq!(kind, Some(mission_console::WidgetKind::Clock));
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_widgets_unknown_kind_fails_to_parse() {
        let result = Cli::try_parse_from(["msc", "widgets", "teleporter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_widget_entry_text_describes_kind() {
        let output = render_widget_entry(mission_console::WidgetKind::StickyNotes, "text")
            .expect("text entry renders");
        assert!(output.contains("sticky-notes"));
        assert!(output.contains("FIELD NOTES"));
    }

    #[test]
    fn test_widgets_unknown_format_fails_at_runtime() {
        // CLI accepts any string for format; validation happens at runtime
        let err = render_widget_catalog("yaml").expect_err("yaml should be rejected");
        assert!(err.contains("unknown format"));
    }

    #[test]
    fn test_widget_catalog_text_lists_all_kinds() {
        let output = render_widget_catalog("text").expect("text format renders");
        for kind in mission_console::WidgetKind::ALL {
            assert!(output.contains(kind.id()), "missing {kind} in catalog");
        }
    }

    #[test]
    fn test_widget_catalog_json_round_trips() {
        let output = render_widget_catalog("json").expect("json format renders");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(
            parsed.as_array().map(|a| a.len()),
            Some(mission_console::WidgetKind::ALL.len())
        );
    }

    #[test]
    fn test_config_init_parses() {
        let cli = Cli::try_parse_from(["msc", "config", "init"]).expect("config init should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Init { force } => assert!(!force),
                _ => panic!("expected Init action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_init_force_parses() {
        let cli = Cli::try_parse_from(["msc", "config", "init", "--force"])
            .expect("config init --force should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Init { force } => assert!(force),
                _ => panic!("expected Init action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_path_parses() {
        let cli = Cli::try_parse_from(["msc", "config", "path"]).expect("config path should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Path => {}
                _ => panic!("expected Path action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_validate_parses() {
        let cli =
            Cli::try_parse_from(["msc", "config", "validate"]).expect("config validate parses");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Validate => {}
                _ => panic!("expected Validate action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_without_action_fails() {
        let result = Cli::try_parse_from(["msc", "config"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_fails() {
        let result = Cli::try_parse_from(["msc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        let result = Cli::try_parse_from(["msc", "daemon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_fails() {
        let result = Cli::try_parse_from(["msc", "tui", "--unknown-flag"]);
        assert!(result.is_err());
    }
}
