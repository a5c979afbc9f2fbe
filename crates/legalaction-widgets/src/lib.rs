//! Legal Action Widgets
//!
//! Headless model behind the lawsuit table and the list filter.
//! Rows live in memory; the browser crate only projects this state onto the DOM.

mod config;
mod error;
mod filter;
mod list_filter;
mod models;
mod permalink;
mod table;

#[cfg(test)]
mod tests;

pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use filter::{FilterState, Selection};
pub use list_filter::{filter_entries, label_matches};
pub use models::{LawsuitRow, ListEntry};
pub use permalink::{fragment_of, PermalinkParser};
pub use table::{FilterOutcome, LawsuitTable, PermalinkHit};
