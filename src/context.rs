//! Table Context
//!
//! Reactive handle on one lawsuit table. Event handlers mutate the model
//! through it; the render effect subscribes to it.

use leptos::prelude::*;
use legalaction_widgets::{FilterOutcome, FilterState, LawsuitTable, PermalinkHit};

#[derive(Clone, Copy)]
pub struct TableContext {
    /// Table model - read by the render effect
    pub table: RwSignal<LawsuitTable>,
}

impl TableContext {
    pub fn new(table: LawsuitTable) -> Self {
        Self {
            table: RwSignal::new(table),
        }
    }

    /// Toggle a row; returns the fragment to write into the URL
    pub fn click_row(&self, pk: u32) -> Option<String> {
        self.table.try_update(|table| table.click_row(pk)).flatten()
    }

    /// Run a filter pass
    pub fn refilter(&self, filters: &FilterState) -> Option<FilterOutcome> {
        self.table.try_update(|table| table.update_filters(filters))
    }

    pub fn resolve_permalink(&self, hash_or_href: &str) -> Option<PermalinkHit> {
        self.table.try_update(|table| table.resolve_permalink(hash_or_href)).flatten()
    }
}
