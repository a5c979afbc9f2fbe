//! Lawsuit Table Binding
//!
//! Reads the server-rendered rows into the headless model, then keeps the
//! page in sync with it: clicks and filter input mutate the model, a render
//! effect projects it back onto classes and attributes.

use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;
use legalaction_widgets::{fragment_of, FilterState, LawsuitRow, LawsuitTable, PermalinkHit, WidgetConfig};
use web_sys::{Document, Element};

use crate::context::TableContext;
use crate::dom;
use crate::error::Result;

const CHEVRON_UP: &str = "fa-chevron-up";
const CHEVRON_DOWN: &str = "fa-chevron-down";

/// Pick the widget configuration: explicit options, then the root's
/// `data-config` attribute, then defaults
pub fn resolve_config(options: Option<WidgetConfig>, data_config: Option<&str>) -> Result<WidgetConfig> {
    if let Some(config) = options {
        return Ok(config);
    }
    match data_config {
        Some(json) => Ok(WidgetConfig::from_json(json)?),
        None => Ok(WidgetConfig::default()),
    }
}

/// DOM handles of one row
struct RowView {
    pk: u32,
    row: Element,
    title: Option<Element>,
    icon: Option<Element>,
}

struct TableView {
    rows: Vec<RowView>,
    no_results: Option<Element>,
}

impl TableView {
    fn render(&self, table: &LawsuitTable) -> Result<()> {
        let config = table.config();
        for view in &self.rows {
            let Some(row) = table.row(view.pk) else { continue };
            dom::set_class(&view.row, &config.hidden_class, !row.visible)?;
            dom::set_class(&view.row, &config.active_class, row.expanded)?;
            if let Some(icon) = &view.icon {
                dom::set_class(icon, CHEVRON_UP, row.expanded)?;
                dom::set_class(icon, CHEVRON_DOWN, !row.expanded)?;
            }
            if let Some(title) = &view.title {
                let colspan = row.title_colspan(table.expanded_colspan());
                title.set_attribute("colspan", &colspan.to_string())?;
            }
        }
        if let Some(indicator) = &self.no_results {
            dom::set_class(indicator, &config.hidden_class, !table.no_results())?;
        }
        Ok(())
    }
}

/// Read one row element; `None` for rows without a usable primary key
fn read_row(element: &Element, config: &WidgetConfig) -> Result<Option<(LawsuitRow, RowView)>> {
    let anchor = element.id();
    let pk = match LawsuitRow::parse_pk(&anchor, element.get_attribute("data-pk").as_deref()) {
        Ok(pk) => pk,
        Err(err) => {
            log::warn!("skipping row: {}", err);
            return Ok(None);
        }
    };
    let anchor = if anchor.is_empty() { config.fragment_for(pk) } else { anchor };

    let title = dom::query(element, &config.title_selector)?;
    let icon = match &title {
        Some(cell) => dom::query(cell, &config.icon_selector)?,
        None => None,
    };
    let title_text = element
        .get_attribute("data-title")
        .or_else(|| title.as_ref().map(dom::text_of))
        .unwrap_or_default();

    let attr = |name: &str| element.get_attribute(name).unwrap_or_default();
    let row = LawsuitRow::new(pk, anchor, title_text, attr("data-reference"), attr("data-status"), attr("data-court"));
    let view = RowView {
        pk,
        row: element.clone(),
        title,
        icon,
    };
    Ok(Some((row, view)))
}

/// Header cell count, or the cell count of the first row
fn column_count(root: &Element, rows: &[RowView]) -> Result<u32> {
    let header = dom::query_all(root, "thead th")?.len();
    let count = match (header, rows.first()) {
        (0, Some(first)) => dom::query_all(&first.row, "td, th")?.len(),
        (header, _) => header,
    };
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

/// The three filter controls; any of them may be absent from the page
#[derive(Clone)]
struct FilterInputs {
    search: Option<Element>,
    status: Option<Element>,
    court: Option<Element>,
}

impl FilterInputs {
    fn find(document: &Document, config: &WidgetConfig) -> Self {
        let find = |id: &str| {
            let input = document.get_element_by_id(id);
            if input.is_none() {
                log::info!("no filter input #{}", id);
            }
            input
        };
        Self {
            search: find(&config.search_input_id),
            status: find(&config.status_input_id),
            court: find(&config.court_input_id),
        }
    }

    fn controls(&self) -> impl Iterator<Item = &Element> {
        [&self.search, &self.status, &self.court].into_iter().flatten()
    }

    fn read(&self, config: &WidgetConfig) -> FilterState {
        let value = |input: &Option<Element>, fallback: &str| {
            input.as_ref().map_or_else(|| fallback.to_string(), dom::control_value)
        };
        FilterState::from_inputs(
            &value(&self.search, ""),
            &value(&self.status, &config.all_value),
            &value(&self.court, &config.all_value),
            config,
        )
    }
}

/// Opens rows by permalink and scrolls them into view
#[derive(Clone)]
struct Permalinks {
    ctx: TableContext,
    rows: Rc<HashMap<u32, Element>>,
}

impl Permalinks {
    fn open(&self, hash_or_href: &str) -> Option<PermalinkHit> {
        let hit = self.ctx.resolve_permalink(hash_or_href)?;
        if let Some(row) = self.rows.get(&hit.pk) {
            row.scroll_into_view();
        }
        Some(hit)
    }
}

/// Wire the lawsuit table rooted at `root`
pub fn init_lawsuit_table(root: &Element, config: WidgetConfig) -> Result<TableContext> {
    let document = dom::document_of(root)?;
    let window = dom::window()?;

    let mut rows = Vec::new();
    let mut views: Vec<RowView> = Vec::new();
    for element in dom::query_all(root, &config.row_selector)? {
        let Some((row, view)) = read_row(&element, &config)? else { continue };
        if views.iter().any(|seen| seen.pk == row.pk) {
            log::warn!("duplicate row pk {}, skipping", row.pk);
            continue;
        }
        rows.push(row);
        views.push(view);
    }

    let columns = column_count(root, &views)?;
    let table = LawsuitTable::new(rows, columns, config.clone())?;
    let ctx = TableContext::new(table);

    let no_results = match dom::query(root, &config.no_results_selector)? {
        Some(indicator) => Some(indicator),
        None => dom::query(&dom::page_root(&document)?, &config.no_results_selector)?,
    };
    let row_elements: HashMap<u32, Element> = views.iter().map(|view| (view.pk, view.row.clone())).collect();
    let row_count = views.len();

    // Row clicks
    for view in &views {
        let pk = view.pk;
        dom::listen(&view.row, "click", move |ev| {
            if dom::from_link(&ev) {
                return;
            }
            ev.prevent_default();
            if let Some(fragment) = ctx.click_row(pk) {
                if let Err(err) = dom::replace_hash(&fragment) {
                    log::warn!("could not update hash: {}", err);
                }
            }
        })?;
    }

    // Filter inputs
    let inputs = FilterInputs::find(&document, &config);
    for control in inputs.controls() {
        let inputs = inputs.clone();
        let config = config.clone();
        dom::listen(control, "input", move |_| {
            if let Some(outcome) = ctx.refilter(&inputs.read(&config)) {
                log::debug!("{} of {} rows visible", outcome.visible, outcome.total);
            }
        })?;
    }

    let permalinks = Permalinks {
        ctx,
        rows: Rc::new(row_elements),
    };

    // Cross-reference links
    for link in dom::query_all(&dom::page_root(&document)?, &config.trigger_selector)? {
        let permalinks = permalinks.clone();
        let target = link.clone();
        dom::listen(&link, "click", move |ev| {
            let href = target.get_attribute("href").unwrap_or_default();
            // links to rows not on this page navigate as usual
            if permalinks.open(&href).is_none() {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            if let Err(err) = dom::replace_hash(fragment_of(&href)) {
                log::warn!("could not update hash: {}", err);
            }
        })?;
    }

    // Back/forward and pasted links
    {
        let permalinks = permalinks.clone();
        dom::listen(&window, "hashchange", move |_| match dom::current_hash() {
            Ok(hash) => {
                permalinks.open(&hash);
            }
            Err(err) => log::warn!("could not read hash: {}", err),
        })?;
    }

    let view = TableView { rows: views, no_results };
    Effect::new(move |_| {
        ctx.table.with(|table| {
            if let Err(err) = view.render(table) {
                log::error!("table render failed: {}", err);
            }
        })
    });

    // Initial permalink
    if let Some(hit) = permalinks.open(&dom::current_hash()?) {
        log::info!("opened row {} from permalink", hit.pk);
    }

    let visible = ctx.table.with_untracked(|table| table.visible_count());
    log::info!("lawsuit table ready: {} rows, {} visible, {} columns", row_count, visible, columns);
    Ok(ctx)
}
