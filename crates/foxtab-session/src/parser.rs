//! Session traversal
//!
//! Windows outer, tabs inner, both in document order. A tab's window and tab
//! index are its 1-based positions in the `windows` and `tabs` arrays.

use foxtab_tabs::Tab;

use crate::error::SessionError;
use crate::schema::SessionDocument;
use crate::Result;

/// Parse decompressed session bytes into tabs.
pub fn parse_session(bytes: &[u8]) -> Result<Vec<Tab>> {
    let document: SessionDocument = serde_json::from_slice(bytes)?;
    tabs_from_document(&document)
}

/// Reconstruct tabs from an already-parsed session document.
pub fn tabs_from_document(document: &SessionDocument) -> Result<Vec<Tab>> {
    let mut tabs = Vec::new();

    for (window_pos, window) in document.windows.iter().enumerate() {
        let window_index = window_pos + 1;

        for (tab_pos, entry) in window.tabs.iter().enumerate() {
            let tab_index = tab_pos + 1;

            let Some(current) = entry.current_entry() else {
                tracing::debug!(window_index, tab_index, "Skipping tab without navigation entries");
                continue;
            };

            let tab = Tab::new(window_index, tab_index, current.url.clone().unwrap_or_default())?
                .with_title(current.title.clone().unwrap_or_default())
                .with_last_accessed(entry.last_accessed.unwrap_or(0))
                .with_pinned(entry.pinned.unwrap_or(false))
                .with_hidden(entry.hidden.unwrap_or(false));

            tabs.push(tab);
        }
    }

    if tabs.is_empty() {
        return Err(SessionError::NoTabsFound);
    }

    tracing::info!(
        windows = document.windows.len(),
        tabs = tabs.len(),
        "Reconstructed session tabs"
    );

    Ok(tabs)
}
