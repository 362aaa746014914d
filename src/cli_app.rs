//! Top-level CLI definition and dispatch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::Colorize;
use colored::control;
use serde_json::json;
use thiserror::Error;

use nimbus_console::core::config::ConsoleConfig;
use nimbus_console::core::errors::ConsoleError;
use nimbus_console::core::paths;
use nimbus_console::project::registry::FeatureFlags;
use nimbus_console::route::Route;
use nimbus_console::tui::adapters::{FileSnapshotAdapter, SnapshotAdapter, SnapshotFreshness};
use nimbus_console::tui::classifier::{DisplayMode, resolve_display};
use nimbus_console::tui::model::ChromeOptions;
use nimbus_console::tui::runtime::{ShellRuntimeConfig, run_shell};
use nimbus_console::tui::title::{TitleContext, build_title};
use nimbus_console::tui::widgets::human_duration;

/// Feature flag gating the incident banner row in the chrome header.
const INCIDENT_BANNER_FLAG: &str = "console_incident_banner";

/// Nimbus Console: terminal shell for the Nimbus database platform.
#[derive(Debug, Parser)]
#[command(
    name = "nbc",
    author,
    version,
    about = "Nimbus Console - terminal shell for the Nimbus database platform",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Run the live console shell.
    Dashboard(DashboardArgs),
    /// Classify the current snapshot once and print the display mode.
    Status(StatusArgs),
    /// View and manage configuration.
    Config(ConfigArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Default)]
struct DashboardArgs {
    /// Route to open, e.g. `/project/abc123/sql`.
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
    /// Override the snapshot file written by the status fetcher.
    #[arg(long, value_name = "PATH")]
    snapshot_file: Option<PathBuf>,
    /// Override the poll interval in milliseconds.
    #[arg(long, value_name = "MS")]
    refresh_ms: Option<u64>,
    /// Explicit page title (wins the title priority chain).
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,
    /// Suppress the header rows.
    #[arg(long)]
    hide_header: bool,
    /// Suppress the icon-bar rail.
    #[arg(long)]
    hide_icon_bar: bool,
    /// Start with the product menu expanded.
    #[arg(long)]
    menu: bool,
}

#[derive(Debug, Clone, Args, Default)]
struct StatusArgs {
    /// Route to classify against, e.g. `/project/abc123/sql`.
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
    /// Override the snapshot file written by the status fetcher.
    #[arg(long, value_name = "PATH")]
    snapshot_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigAction {
    /// Print the effective configuration.
    Show,
    /// Print the config file path in use.
    Path,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// CLI-layer error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("io failure: {0}")]
    Io(#[from] io::Error),
}

/// Dispatch the parsed CLI.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color || cli.json {
        control::set_override(false);
    }
    let config = ConsoleConfig::load_or_default(cli.config.as_deref())?;

    match &cli.command {
        Command::Dashboard(args) => run_dashboard(&config, args),
        Command::Status(args) => run_status(&config, args, cli.json),
        Command::Config(args) => run_config(&config, cli.config.as_deref(), args, cli.json),
        Command::Completions(args) => {
            generate(args.shell, &mut Cli::command(), "nbc", &mut io::stdout());
            Ok(())
        }
    }
}

// ──────────────────── dashboard ────────────────────

fn run_dashboard(config: &ConsoleConfig, args: &DashboardArgs) -> Result<(), CliError> {
    let flags = FeatureFlags::from_seeds(config.flags.clone());
    let route = Route::parse(
        args.route
            .as_deref()
            .unwrap_or(&config.console.start_route),
    );
    let refresh_ms = args.refresh_ms.unwrap_or(config.console.refresh_ms).max(100);

    let runtime = ShellRuntimeConfig {
        snapshot_file: args
            .snapshot_file
            .clone()
            .unwrap_or_else(|| config.paths.snapshot_file.clone()),
        refresh: Duration::from_millis(refresh_ms),
        stale_threshold: Duration::from_secs(config.console.snapshot_stale_secs),
        start_route: route,
        options: ChromeOptions {
            title: args.title.clone(),
            is_loading: false,
            hide_header: args.hide_header,
            hide_icon_bar: args.hide_icon_bar,
            show_product_menu: args.menu,
        },
        brand: config.console.brand.clone(),
        incident_banner: flags.is_enabled(INCIDENT_BANNER_FLAG),
        log_file: Some(config.paths.log_file.clone()),
    };
    run_shell(&runtime)?;
    Ok(())
}

// ──────────────────── status ────────────────────

fn run_status(config: &ConsoleConfig, args: &StatusArgs, json: bool) -> Result<(), CliError> {
    let snapshot_file = args
        .snapshot_file
        .clone()
        .unwrap_or_else(|| config.paths.snapshot_file.clone());
    let route = Route::parse(
        args.route
            .as_deref()
            .unwrap_or(&config.console.start_route),
    );

    let adapter = FileSnapshotAdapter::new(Duration::from_secs(
        config.console.snapshot_stale_secs,
    ));
    let freshness = adapter.classify_freshness(&snapshot_file);
    let snapshot = adapter.read_snapshot(&snapshot_file);
    let loading = snapshot.is_none();
    let (project, organization, table) = snapshot.map_or((None, None, None), |s| {
        (s.project, s.organization, s.selected_table)
    });

    let mode = resolve_display(loading, project.as_ref(), &route);
    let title = build_title(
        &TitleContext {
            explicit: None,
            table_name: table.as_deref(),
            project: project.as_ref(),
            organization: organization.as_ref(),
        },
        &config.console.brand,
    );

    if json {
        let payload = json!({
            "mode": mode.as_wire(),
            "route": route.as_str(),
            "title": title,
            "project_status": project.as_ref().map(|p| p.status.as_wire()),
            "gateway_status": project.as_ref().map(|p| p.gateway_status.as_wire()),
            "snapshot": describe_freshness(&freshness),
            "snapshot_file": snapshot_file,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).map_err(ConsoleError::from)?
        );
    } else {
        println!("mode      {}", paint_mode(mode));
        println!("route     {route}");
        println!("title     {title}");
        println!("snapshot  {}", describe_freshness(&freshness));
        if let Some(project) = project.as_ref() {
            println!(
                "project   {} ({}) status={} gateway={}",
                project.name,
                project.ref_id,
                project.status.label(),
                project.gateway_status.as_wire().to_ascii_lowercase()
            );
        } else {
            println!("project   (snapshot unavailable at {})", snapshot_file.display());
        }
    }
    Ok(())
}

fn describe_freshness(freshness: &SnapshotFreshness) -> String {
    match freshness {
        SnapshotFreshness::Fresh => "fresh".to_owned(),
        SnapshotFreshness::Stale { age } => {
            format!("stale ({})", human_duration(age.as_secs()))
        }
        SnapshotFreshness::Missing => "missing".to_owned(),
        SnapshotFreshness::Malformed => "malformed".to_owned(),
        SnapshotFreshness::ReadError(details) => format!("read error: {details}"),
    }
}

fn paint_mode(mode: DisplayMode) -> String {
    let label = mode.as_wire();
    match mode {
        DisplayMode::Content => label.green().bold(),
        DisplayMode::Connecting | DisplayMode::Building => label.cyan().bold(),
        DisplayMode::Upgrading | DisplayMode::Restoring | DisplayMode::Pausing => {
            label.yellow().bold()
        }
        DisplayMode::OfflineGateway => label.red().bold(),
        DisplayMode::PausedFullScreen => label.dimmed().bold(),
    }
    .to_string()
}

// ──────────────────── config ────────────────────

fn run_config(
    config: &ConsoleConfig,
    override_path: Option<&std::path::Path>,
    args: &ConfigArgs,
    json: bool,
) -> Result<(), CliError> {
    let path = override_path.map_or_else(paths::default_config_path, PathBuf::from);
    match &args.action {
        ConfigAction::Show => {
            if json {
                println!("{}", serde_json::to_string_pretty(config).map_err(ConsoleError::from)?);
            } else {
                let rendered =
                    toml::to_string_pretty(config).map_err(|e| ConsoleError::Serialization {
                        context: "toml",
                        details: e.to_string(),
                    })?;
                print!("{rendered}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init { force } => {
            if path.exists() && !*force {
                return Err(ConsoleError::InvalidConfig {
                    details: format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    ),
                }
                .into());
            }
            ConsoleConfig::default().save(&path)?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashboard_flags() {
        let cli = Cli::try_parse_from([
            "nbc",
            "dashboard",
            "--route",
            "/project/abc123/sql",
            "--refresh-ms",
            "500",
            "--menu",
        ])
        .unwrap();
        match cli.command {
            Command::Dashboard(args) => {
                assert_eq!(args.route.as_deref(), Some("/project/abc123/sql"));
                assert_eq!(args.refresh_ms, Some(500));
                assert!(args.menu);
                assert!(!args.hide_header);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn status_accepts_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["nbc", "status", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn rejects_unknown_subcommands() {
        assert!(Cli::try_parse_from(["nbc", "frobnicate"]).is_err());
    }
}
