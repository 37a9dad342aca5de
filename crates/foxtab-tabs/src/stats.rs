//! Summary statistics over a tab collection

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::tab::Tab;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of tabs
    pub total_tabs: usize,
    /// Number of distinct window indices
    pub total_windows: usize,
    /// Pinned tabs, hidden or not
    pub pinned_tabs: usize,
    pub hidden_tabs: usize,
    /// Always `total_tabs - hidden_tabs`
    pub visible_tabs: usize,
    /// Distinct domains, sorted
    pub domains: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    /// Tabs open on this domain
    pub tabs: usize,
}

pub fn compute_statistics(tabs: &[Tab]) -> Statistics {
    let mut windows = HashSet::new();
    let mut stats = Statistics {
        total_tabs: tabs.len(),
        ..Statistics::default()
    };

    for tab in tabs {
        windows.insert(tab.window_index());
        if tab.is_pinned() {
            stats.pinned_tabs += 1;
        }
        if tab.is_hidden() {
            stats.hidden_tabs += 1;
        }
        if let Some(domain) = tab.domain() {
            stats.domains.insert(domain.to_string());
        }
    }

    stats.total_windows = windows.len();
    stats.visible_tabs = stats.total_tabs - stats.hidden_tabs;
    stats
}

/// Tabs per domain, most common first (ties broken alphabetically)
pub fn domain_counts(tabs: &[Tab]) -> Vec<DomainCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for domain in tabs.iter().filter_map(Tab::domain) {
        *counts.entry(domain).or_default() += 1;
    }

    let mut ranked: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, tabs)| DomainCount {
            domain: domain.to_string(),
            tabs,
        })
        .collect();
    ranked.sort_by(|a, b| b.tabs.cmp(&a.tabs).then_with(|| a.domain.cmp(&b.domain)));
    ranked
}

/// Tabs last accessed at or after `since`, in their original order
pub fn recently_accessed(tabs: &[Tab], since: DateTime<Utc>) -> Vec<&Tab> {
    tabs.iter()
        .filter(|t| t.last_accessed_at().is_some_and(|at| at >= since))
        .collect()
}
