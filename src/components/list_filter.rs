//! List Filter Binding
//!
//! Each `.list-filter__search` box filters the `<ul>` in its container by
//! link text as the user types.

use leptos::prelude::*;
use legalaction_widgets::{filter_entries, ListEntry};
use web_sys::Element;

use crate::dom;
use crate::error::Result;

const SEARCH_BOX_SELECTOR: &str = ".list-filter__search";

/// The list a search box filters: first `<ul>` in the box's container
fn associated_list(search_box: &Element) -> Result<Option<Element>> {
    match search_box.parent_element() {
        Some(container) => dom::query(&container, "ul"),
        None => Ok(None),
    }
}

/// Recompute entry visibility from the live list and project it as inline style
fn apply_filter(list: &Element, query: &str) -> Result<()> {
    let items = dom::query_all(list, "li")?;
    let mut entries = Vec::with_capacity(items.len());
    for item in &items {
        let label = dom::query(item, "a")?
            .and_then(|link| link.text_content())
            .unwrap_or_default();
        entries.push(ListEntry::new(label));
    }
    filter_entries(&mut entries, query);
    for (item, entry) in items.iter().zip(&entries) {
        dom::set_displayed(item, entry.visible)?;
    }
    Ok(())
}

/// Whether `query` differs from what the list currently shows.
/// Before the first input the list shows the server-rendered state, i.e. "".
fn needs_apply(applied: Option<&str>, query: &str) -> bool {
    query != applied.unwrap_or_default()
}

/// Wire every list filter under `root`. Returns how many were wired.
pub fn init_list_filters(root: &Element) -> Result<u32> {
    let mut wired = 0;
    for search_box in dom::query_all(root, SEARCH_BOX_SELECTOR)? {
        let Some(list) = associated_list(&search_box)? else {
            log::warn!("list filter without a list, skipping");
            continue;
        };

        let query = RwSignal::new(String::new());
        Effect::new(move |applied: Option<String>| {
            let value = query.get();
            if needs_apply(applied.as_deref(), &value) {
                if let Err(err) = apply_filter(&list, &value) {
                    log::error!("list filter failed: {}", err);
                }
            }
            value
        });

        let source = search_box.clone();
        dom::listen(&search_box, "input", move |_| query.set(dom::control_value(&source)))?;
        wired += 1;
    }
    log::info!("{} list filter(s) ready", wired);
    Ok(wired)
}
