//! Window grouping
//!
//! A window is just the tabs that share a window index, kept in document order.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::TabError;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    /// 1-based window position shared by every tab
    window_index: usize,
    /// Tabs in session order
    tabs: Vec<Tab>,
}

/// Per-window counts for reports and exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSummary {
    pub window_index: usize,
    pub tab_count: usize,
    pub pinned_tab_count: usize,
    /// Tabs not marked hidden
    pub visible_tab_count: usize,
}

impl Window {
    pub fn new(window_index: usize, tabs: Vec<Tab>) -> Result<Self> {
        if let Some(stray) = tabs.iter().find(|t| t.window_index() != window_index) {
            return Err(TabError::WindowMismatch {
                window: window_index,
                tab_window: stray.window_index(),
            });
        }

        Ok(Self { window_index, tabs })
    }

    pub fn window_index(&self) -> usize {
        self.window_index
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn pinned_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().filter(|t| t.is_pinned()).collect()
    }

    pub fn visible_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().filter(|t| t.is_visible()).collect()
    }

    pub fn hidden_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().filter(|t| t.is_hidden()).collect()
    }

    pub fn summary(&self) -> WindowSummary {
        WindowSummary {
            window_index: self.window_index,
            tab_count: self.tab_count(),
            pinned_tab_count: self.pinned_tabs().len(),
            visible_tab_count: self.visible_tabs().len(),
        }
    }
}

/// Partition tabs into windows, keeping first-seen window order and the
/// relative order of tabs inside each window.
pub fn group_into_windows(tabs: impl IntoIterator<Item = Tab>) -> Vec<Window> {
    let mut windows: Vec<Window> = Vec::new();
    let mut slots: HashMap<usize, usize> = HashMap::new();

    for tab in tabs {
        let index = tab.window_index();
        let slot = *slots.entry(index).or_insert_with(|| {
            windows.push(Window {
                window_index: index,
                tabs: Vec::new(),
            });
            windows.len() - 1
        });
        windows[slot].tabs.push(tab);
    }

    windows
}
