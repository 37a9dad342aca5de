//! Foxtab command-line front end

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Duration, Local, Utc};
use clap::Parser;

use foxtab_core::{Config, CoreError, TabExtractor};

#[derive(Parser, Debug)]
#[command(
    name = "foxtab",
    about = "Extract Firefox browser tabs for organization and productivity",
    version,
    after_help = "Examples:\n  foxtab\n  foxtab --json my_tabs.json --csv my_tabs.csv\n  foxtab --stats-only\n  foxtab --profile ~/.mozilla/firefox/abc123.default"
)]
struct Cli {
    /// Output JSON file path (default: firefox_tabs_YYYYMMDD_HHMMSS.json)
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Output CSV file path (default: firefox_tabs_YYYYMMDD_HHMMSS.csv)
    #[arg(short, long)]
    csv: Option<PathBuf>,

    /// Firefox profile directory to read instead of searching
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Show statistics only, don't save files
    #[arg(short, long)]
    stats_only: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of tabs to preview (0 disables)
    #[arg(short = 'P', long, default_value_t = 5)]
    preview: usize,

    /// List tabs accessed within this many days (0 disables)
    #[arg(long, default_value_t = 7)]
    recent_days: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    foxtab_core::init_logging(if cli.verbose { "debug" } else { "info" });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Extraction failed");
            report::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CoreError> {
    let mut config = Config::from_env();
    if let Some(profile) = &cli.profile {
        config = config.with_profile(profile.clone());
    }
    let extractor = TabExtractor::new(config);

    println!("Firefox Tab Extractor");
    println!("{}", "=".repeat(50));

    let tabs = extractor.extract_tabs()?;
    let stats = extractor.statistics(&tabs);
    let windows = extractor.windows(&tabs);

    report::print_summary(&stats);
    report::print_preview(&tabs, cli.preview);
    report::print_windows(&windows);
    report::print_top_domains(&tabs, 5);
    if cli.recent_days > 0 {
        if let Some(since) =
            Duration::try_days(cli.recent_days).and_then(|d| Utc::now().checked_sub_signed(d))
        {
            report::print_recent(&tabs, since, cli.recent_days);
        }
    }

    if cli.stats_only {
        return Ok(());
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let json_path = cli
        .json
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("firefox_tabs_{stamp}.json")));
    let csv_path = cli
        .csv
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("firefox_tabs_{stamp}.csv")));

    println!("\nSaving files...");
    foxtab_core::save_json(&tabs, &json_path)?;
    println!("  JSON: {}", json_path.display());
    foxtab_core::save_csv(&tabs, &csv_path)?;
    println!("  CSV:  {}", csv_path.display());

    println!("\nExtraction completed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["foxtab"]);
        assert_eq!(cli.preview, 5);
        assert_eq!(cli.recent_days, 7);
        assert!(!cli.stats_only);
        assert!(cli.json.is_none());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["foxtab", "-s", "-v", "-P", "0", "-j", "t.json", "-p", "/tmp/prof"]);
        assert!(cli.stats_only);
        assert!(cli.verbose);
        assert_eq!(cli.preview, 0);
        assert_eq!(cli.json, Some(PathBuf::from("t.json")));
        assert_eq!(cli.profile, Some(PathBuf::from("/tmp/prof")));
    }
}
