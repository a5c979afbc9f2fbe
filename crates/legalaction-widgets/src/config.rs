//! Widget Configuration
//!
//! Selectors, class names and thresholds shared by the model and the DOM layer.
//! Every field has a default matching the server-rendered lawsuit table markup.

use serde::Deserialize;

use crate::error::Result;

/// Configuration of one lawsuit table widget (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Lawsuit rows under the table root
    pub row_selector: String,
    /// Title cell inside a row
    pub title_selector: String,
    /// Chevron icon inside the title cell
    pub icon_selector: String,
    /// Page-level "no results" indicator
    pub no_results_selector: String,
    /// In-page links that open a row by fragment
    pub trigger_selector: String,
    pub search_input_id: String,
    pub status_input_id: String,
    pub court_input_id: String,
    /// Class that hides rows and the indicator
    pub hidden_class: String,
    /// Class carried by an expanded row
    pub active_class: String,
    /// Fragment marker in front of the primary key
    pub permalink_prefix: String,
    /// Select value meaning "do not filter on this column"
    pub all_value: String,
    /// Search text shorter than this leaves the text predicate off
    pub min_search_len: usize,
    /// Overrides the column span derived from the table header
    pub expanded_colspan: Option<u32>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            row_selector: "tr.lawsuit-table-item".to_string(),
            title_selector: ".lawsuit-table-item-title".to_string(),
            icon_selector: "i.fa".to_string(),
            no_results_selector: ".lawsuits-table-no-results".to_string(),
            trigger_selector: "[data-toggle-hash]".to_string(),
            search_input_id: "lawsuits-search".to_string(),
            status_input_id: "lawsuits-status".to_string(),
            court_input_id: "lawsuits-court".to_string(),
            hidden_class: "d-none".to_string(),
            active_class: "active".to_string(),
            permalink_prefix: "klage-detail-".to_string(),
            all_value: "all".to_string(),
            min_search_len: 3,
            expanded_colspan: None,
        }
    }
}

impl WidgetConfig {
    /// Parse a `data-config` attribute; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fragment id for a row's primary key, e.g. `klage-detail-12`
    pub fn fragment_for(&self, pk: u32) -> String {
        format!("{}{}", self.permalink_prefix, pk)
    }
}
