//! JSON and CSV export
//!
//! Both formats list tabs in the same order. The CSV follows RFC 4180
//! (CRLF line endings, fields quoted only when needed) so spreadsheet and
//! note-taking importers accept it as-is.

use serde::Serialize;
use std::path::Path;

use foxtab_tabs::Tab;

use crate::Result;

pub const CSV_HEADER: &str =
    "window_index,tab_index,title,url,domain,last_accessed,last_accessed_readable,pinned,hidden";

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub total_tabs: usize,
    pub tabs: &'a [Tab],
}

impl<'a> ExportDocument<'a> {
    pub fn new(tabs: &'a [Tab]) -> Self {
        Self {
            total_tabs: tabs.len(),
            tabs,
        }
    }
}

pub fn to_json(tabs: &[Tab]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ExportDocument::new(tabs))?)
}

pub fn to_csv(tabs: &[Tab]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + tabs.len() * 128);
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");

    for tab in tabs {
        let fields = [
            tab.window_index().to_string(),
            tab.tab_index().to_string(),
            escape_csv(tab.title()),
            escape_csv(tab.url()),
            escape_csv(tab.domain().unwrap_or_default()),
            tab.last_accessed().to_string(),
            escape_csv(tab.last_accessed_readable()),
            tab.is_pinned().to_string(),
            tab.is_hidden().to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push_str("\r\n");
    }

    out
}

pub fn save_json(tabs: &[Tab], path: &Path) -> Result<()> {
    std::fs::write(path, to_json(tabs)?)?;
    tracing::info!(path = %path.display(), tabs = tabs.len(), "Saved JSON export");
    Ok(())
}

pub fn save_csv(tabs: &[Tab], path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(tabs))?;
    tracing::info!(path = %path.display(), tabs = tabs.len(), "Saved CSV export");
    Ok(())
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
