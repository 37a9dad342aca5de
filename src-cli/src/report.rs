//! Console report

use chrono::{DateTime, Utc};

use foxtab_core::{domain_counts, recently_accessed, CoreError, Statistics, Tab, Window};

const TITLE_WIDTH: usize = 60;
const URL_WIDTH: usize = 80;

pub fn print_summary(stats: &Statistics) {
    println!("\nSummary:");
    println!("  - Total tabs:   {}", stats.total_tabs);
    println!("  - Windows:      {}", stats.total_windows);
    println!("  - Pinned tabs:  {}", stats.pinned_tabs);
    println!("  - Hidden tabs:  {}", stats.hidden_tabs);
    println!("  - Visible tabs: {}", stats.visible_tabs);
    println!("  - Domains:      {}", stats.domains.len());
}

pub fn print_preview(tabs: &[Tab], count: usize) {
    if count == 0 || tabs.is_empty() {
        return;
    }

    println!("\nPreview of first {} tabs:", count.min(tabs.len()));
    for (i, tab) in tabs.iter().take(count).enumerate() {
        println!("  {}. {}", i + 1, truncate(tab.display_title(), TITLE_WIDTH));
        println!("     URL: {}", truncate(tab.url(), URL_WIDTH));
        println!("     Window: {}, Tab: {}", tab.window_index(), tab.tab_index());
        if tab.is_pinned() {
            println!("     Pinned");
        }
    }
}

pub fn print_windows(windows: &[Window]) {
    println!("\nWindows:");
    for window in windows {
        let summary = window.summary();
        println!(
            "  Window {}: {} tabs ({} pinned, {} visible)",
            summary.window_index,
            summary.tab_count,
            summary.pinned_tab_count,
            summary.visible_tab_count
        );
    }
}

pub fn print_top_domains(tabs: &[Tab], limit: usize) {
    let ranked = domain_counts(tabs);
    if ranked.is_empty() {
        return;
    }

    println!("\nTop domains:");
    for entry in ranked.iter().take(limit) {
        println!("  - {}: {} tabs", entry.domain, entry.tabs);
    }
}

pub fn print_recent(tabs: &[Tab], since: DateTime<Utc>, days: i64) {
    let recent = recently_accessed(tabs, since);
    println!("\nRecently accessed tabs (last {days} days): {}", recent.len());
    for (i, tab) in recent.iter().take(5).enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            truncate(tab.display_title(), TITLE_WIDTH),
            tab.last_accessed_readable()
        );
    }
}

pub fn print_error(err: &CoreError) {
    match err {
        CoreError::ProfileNotFound(_) => {
            eprintln!("Firefox profile not found!");
            eprintln!("Make sure Firefox is installed and has been run at least once.");
            eprintln!("  - Check if Firefox is installed via snap: snap list firefox");
            eprintln!("  - Use --profile to specify a custom profile path");
        }
        CoreError::Format(_) => {
            eprintln!("{err}");
            eprintln!("The file is not a mozLz40 session file; check the --profile path.");
        }
        CoreError::Decompression(_) => {
            eprintln!("{err}");
            eprintln!("This might happen if Firefox is currently writing it.");
            eprintln!("Try closing Firefox and running the extractor again.");
        }
        CoreError::SessionData(_) => {
            eprintln!("{err}");
            eprintln!("Try closing and reopening Firefox to refresh session data.");
        }
        CoreError::NoTabsFound => {
            eprintln!("No tabs found in session data");
            eprintln!("Make sure Firefox has active tabs open.");
        }
        CoreError::Io(_) | CoreError::Serialization(_) => {
            eprintln!("Unexpected error: {err}");
        }
    }
}

/// Cut to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
