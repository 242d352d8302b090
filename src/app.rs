//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the sales CSV
//! - dispatches to the report/regions printers or the interactive TUI

use clap::Parser;

use crate::cli::{Command, DataArgs, ReportArgs};
use crate::domain::DashConfig;
use crate::error::AppError;

pub mod pipeline;

use pipeline::DashboardData;

/// Entry point for the `sd` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `sd` and `sd -f other.csv` to behave like `sd tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the "just run it" UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => handle_tui(args),
        Command::Report(args) => handle_report(args),
        Command::Regions(args) => handle_regions(args),
    }
}

fn handle_tui(args: DataArgs) -> Result<(), AppError> {
    // Load before touching the terminal: a missing file must terminate with
    // its message printed plainly, never inside the alternate screen.
    let data = DashboardData::load(&config_from_args(&args))?;
    crate::tui::run(data)
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let data = DashboardData::load(&config_from_args(&args.data))?;

    let region = match &args.region {
        Some(region) => {
            if !data.regions().iter().any(|r| r == region) {
                return Err(AppError::input(format!(
                    "Unknown region '{region}'. Known regions: {}.",
                    data.regions().join(", ")
                )));
            }
            region.clone()
        }
        None => data
            .first_region()
            .ok_or_else(|| AppError::data("Dataset contains no regions."))?
            .to_string(),
    };

    let view = data.view(&region);
    println!("{}", crate::report::format_region_report(&view.summary));

    if let Some(path) = &args.export {
        crate::io::export::write_totals_csv(path, &view.summary)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &args.export_json {
        crate::io::export::write_totals_json(path, &view.summary)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_regions(args: DataArgs) -> Result<(), AppError> {
    let data = DashboardData::load(&config_from_args(&args))?;
    print!("{}", crate::report::format_regions(data.regions()));
    Ok(())
}

fn config_from_args(args: &DataArgs) -> DashConfig {
    DashConfig {
        csv_path: args.file.clone(),
    }
}

/// Rewrite argv so `sd` defaults to `sd tui`.
///
/// Rules:
/// - `sd`                      -> `sd tui`
/// - `sd -f ventas.csv ...`    -> `sd tui -f ventas.csv ...`
/// - `sd --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "report" | "regions");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["sd"])), argv(&["sd", "tui"]));
    }

    #[test]
    fn leading_flag_is_treated_as_tui_flag() {
        assert_eq!(
            rewrite_args(argv(&["sd", "-f", "ventas.csv"])),
            argv(&["sd", "tui", "-f", "ventas.csv"])
        );
    }

    #[test]
    fn explicit_subcommands_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["sd", "report", "-r", "North"])),
            argv(&["sd", "report", "-r", "North"])
        );
        assert_eq!(rewrite_args(argv(&["sd", "regions"])), argv(&["sd", "regions"]));
    }

    #[test]
    fn help_and_version_pass_through() {
        assert_eq!(rewrite_args(argv(&["sd", "--help"])), argv(&["sd", "--help"]));
        assert_eq!(rewrite_args(argv(&["sd", "-V"])), argv(&["sd", "-V"]));
    }
}
