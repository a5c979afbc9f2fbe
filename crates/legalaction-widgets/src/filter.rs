//! Filter State
//!
//! Derived from the three filter inputs on every input event. Never stored
//! across filter passes.

use crate::config::WidgetConfig;
use crate::models::LawsuitRow;

/// Value of a status or court select
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// The "all" sentinel: predicate always holds
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn from_value(value: &str, all_value: &str) -> Self {
        if value == all_value {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == category,
        }
    }
}

/// Combined search text, status and court
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Lowercased search text, whitespace kept
    search: String,
    pub status: Selection,
    pub court: Selection,
    min_search_len: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new("", Selection::All, Selection::All, WidgetConfig::default().min_search_len)
    }
}

impl FilterState {
    pub fn new(search: &str, status: Selection, court: Selection, min_search_len: usize) -> Self {
        Self {
            search: search.to_lowercase(),
            status,
            court,
            min_search_len,
        }
    }

    /// Build from raw input values as read from the page
    pub fn from_inputs(search: &str, status: &str, court: &str, config: &WidgetConfig) -> Self {
        Self::new(
            search,
            Selection::from_value(status, &config.all_value),
            Selection::from_value(court, &config.all_value),
            config.min_search_len,
        )
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Text predicate is off below the length threshold
    pub fn text_active(&self) -> bool {
        self.search.chars().count() >= self.min_search_len
    }

    fn text_matches(&self, row: &LawsuitRow) -> bool {
        if !self.text_active() {
            return true;
        }
        row.title.to_lowercase().contains(&self.search)
            || row.reference.to_lowercase().contains(&self.search)
    }

    /// All three predicates, AND-combined
    pub fn matches(&self, row: &LawsuitRow) -> bool {
        self.status.matches(&row.status) && self.court.matches(&row.court) && self.text_matches(row)
    }
}
