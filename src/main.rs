//! Dashboard Filters CLI
//!
//! Validates, normalizes, and evaluates saved dashboard filter documents.
//!
//! Usage:
//!   dashboard-filters validate --file filters.json
//!   dashboard-filters normalize --file filters.json --pretty
//!   dashboard-filters check --file filters.json --view "Team A" build deploy
//!   dashboard-filters defaults
//!
//! `--file` falls back to `filters_file` from the config / DASHBOARD_FILTERS_FILE.
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_filters::config::{load_config, log_filter, EngineConfig};
use dashboard_filters::filters::{DashboardFilter, Filters};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Dashboard pipeline-visibility filters
#[derive(Parser)]
#[command(name = "dashboard-filters")]
struct Args {
    /// TOML config file
    #[arg(short, long, env = "DASHBOARD_FILTERS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overrides config)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a filters document against all naming and collection rules
    Validate {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the canonical form of a filters document
    Normalize {
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Show which pipelines a view includes
    Check {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// View name (case-insensitive)
        #[arg(long, default_value = "Default")]
        view: String,
        /// Pipeline names to evaluate
        #[arg(required = true)]
        pipelines: Vec<String>,
    },
    /// Print the built-in default document (wildcard view only)
    Defaults {
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    // Initialize logging (stderr, so stdout stays machine-readable)
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.filters.log_level.clone());
    let env_filter: EnvFilter = log_filter(&level)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    debug!(
        "Config: duplicate_names={}, filters_file={:?}",
        config.filters.duplicate_names, config.filters.filters_file
    );

    match args.command {
        Command::Validate { file } => {
            let filters = read_filters(&config, file)?;
            println!(
                "OK: {} views, default view is {}",
                filters.len(),
                filters.default_filter().filter_type()
            );
        }
        Command::Normalize { file, pretty } => {
            let filters = read_filters(&config, file)?;
            println!("{}", render(&filters, pretty)?);
        }
        Command::Check { file, view, pipelines } => {
            let filters = read_filters(&config, file)?;
            let filter = select_view(&filters, &view)?;
            info!(
                "Evaluating {} pipelines against view '{}' ({})",
                pipelines.len(),
                filter.name(),
                filter.filter_type()
            );
            for pipeline in &pipelines {
                println!("{}\t{}", pipeline, verdict(filter, pipeline));
            }
        }
        Command::Defaults { pretty } => {
            println!("{}", render(&Filters::defaults(), pretty)?);
        }
    }

    Ok(())
}

/// `--file` wins; otherwise the configured `filters_file`.
fn resolve_filters_path(config: &EngineConfig, file: Option<PathBuf>) -> Result<PathBuf> {
    file.or_else(|| config.filters.filters_file.clone())
        .context("No filters file given. Pass --file or set DASHBOARD_FILTERS_FILE")
}

/// Load and validate the document named on the command line, or the configured one.
fn read_filters(config: &EngineConfig, file: Option<PathBuf>) -> Result<Filters> {
    let path = resolve_filters_path(config, file)?;

    // On rejection the error chain ends in the literal validation message
    Filters::load_with_policy(&path, config.filters.duplicate_names)
}

fn select_view<'a>(filters: &'a Filters, view: &str) -> Result<&'a DashboardFilter> {
    filters
        .named(view)
        .with_context(|| format!("No view named '{}'", view))
}

fn verdict(filter: &DashboardFilter, pipeline: &str) -> &'static str {
    if filter.is_pipeline_included(pipeline) {
        "included"
    } else {
        "excluded"
    }
}

fn render(filters: &Filters, pretty: bool) -> Result<String> {
    let json = if pretty {
        Filters::to_json_pretty(filters)?
    } else {
        Filters::to_json(filters)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_filters::filters::{FiltersError, MSG_NO_DEFAULT_FILTER};
    use std::path::Path;

    fn config_with_file(path: Option<&Path>) -> EngineConfig {
        let mut config = EngineConfig::default();
        config.filters.filters_file = path.map(Path::to_path_buf);
        config
    }

    fn write_filters(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("filters.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_file_flag_wins_over_config() {
        let config = config_with_file(Some(Path::new("/etc/configured.json")));
        let path = resolve_filters_path(&config, Some(PathBuf::from("cli.json"))).unwrap();
        assert_eq!(path, PathBuf::from("cli.json"));
    }

    #[test]
    fn test_falls_back_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_filters(
            dir.path(),
            r#"{"filters":[{"name":"default","type":"whitelist","pipelines":["p1"]}]}"#,
        );

        let config = config_with_file(Some(&path));
        let filters = read_filters(&config, None).unwrap();
        assert_eq!(filters.default_filter().name(), "Default");
    }

    #[test]
    fn test_no_file_anywhere() {
        let err = read_filters(&EngineConfig::default(), None).unwrap_err();
        assert!(err.to_string().contains("No filters file given"));
    }

    #[test]
    fn test_validation_message_reaches_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_filters(
            dir.path(),
            r#"{"filters":[{"name":"foo","type":"whitelist","pipelines":["bar"]}]}"#,
        );

        let err = read_filters(&config_with_file(None), Some(path)).unwrap_err();
        assert_eq!(err.root_cause().to_string(), MSG_NO_DEFAULT_FILTER);
        assert!(format!("{:#}", err).ends_with(MSG_NO_DEFAULT_FILTER));
        assert!(err.downcast_ref::<FiltersError>().unwrap().is_validation());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_filters(dir.path(), r#"{"filters":[{"name":"Default","type":"all"}]}"#);

        let err = read_filters(&config_with_file(None), Some(path)).unwrap_err();
        assert!(err.downcast_ref::<FiltersError>().unwrap().is_parse());
    }

    #[test]
    fn test_duplicate_policy_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_filters(
            dir.path(),
            r#"{"filters":[
                {"name":"Default","type":"blacklist"},
                {"name":"one","type":"whitelist"},
                {"name":"ONE","type":"whitelist"}
            ]}"#,
        );

        let mut config = config_with_file(Some(&path));
        assert!(read_filters(&config, None).is_ok());

        config.filters.duplicate_names = dashboard_filters::DuplicateNames::CaseInsensitive;
        let err = read_filters(&config, None).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Duplicate filter name: ONE");
    }

    #[test]
    fn test_select_view() {
        let filters = Filters::defaults();
        assert_eq!(select_view(&filters, "DEFAULT").unwrap().name(), "Default");

        let err = select_view(&filters, "Team A").unwrap_err();
        assert_eq!(err.to_string(), "No view named 'Team A'");
    }

    #[test]
    fn test_verdict() {
        let filters = Filters::defaults();
        assert_eq!(verdict(filters.default_filter(), "anything"), "included");

        let only_p1 = DashboardFilter::whitelist("Default", vec!["p1".into()]);
        assert_eq!(verdict(&only_p1, "P1"), "included");
        assert_eq!(verdict(&only_p1, "p2"), "excluded");
    }
}
