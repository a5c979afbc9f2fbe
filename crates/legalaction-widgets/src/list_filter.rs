//! List Filter
//!
//! Live substring filter over link labels. Case-sensitive, no tokenization.

use crate::models::ListEntry;

pub fn label_matches(label: &str, query: &str) -> bool {
    label.contains(query)
}

/// Show entries whose label contains `query`, hide the rest.
/// Returns the number of visible entries.
pub fn filter_entries(entries: &mut [ListEntry], query: &str) -> usize {
    let mut visible = 0;
    for entry in entries.iter_mut() {
        entry.visible = label_matches(&entry.label, query);
        if entry.visible {
            visible += 1;
        }
    }
    log::debug!("list filter {:?}: {} of {} visible", query, visible, entries.len());
    visible
}
