//! Lawsuit Table
//!
//! Ordered rows with two independent flags each: expanded and visible.
//! Rows are never created or removed after construction.

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::filter::FilterState;
use crate::models::LawsuitRow;
use crate::permalink::PermalinkParser;

/// Result of one filter pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visible: usize,
    pub total: usize,
    /// Rows that were expanded before the pass
    pub collapsed: usize,
}

impl FilterOutcome {
    pub fn no_results(&self) -> bool {
        self.visible == 0
    }
}

/// A permalink that resolved to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermalinkHit {
    pub pk: u32,
    /// False when the row was already expanded
    pub toggled: bool,
}

#[derive(Debug, Clone)]
pub struct LawsuitTable {
    rows: Vec<LawsuitRow>,
    config: WidgetConfig,
    permalinks: PermalinkParser,
    expanded_colspan: u32,
}

impl LawsuitTable {
    /// `column_count` is the table's column count; a configured
    /// `expanded_colspan` takes precedence over it.
    pub fn new(rows: Vec<LawsuitRow>, column_count: u32, config: WidgetConfig) -> Result<Self> {
        let permalinks = PermalinkParser::new(&config.permalink_prefix)?;
        let expanded_colspan = config.expanded_colspan.unwrap_or(column_count).max(1);
        Ok(Self {
            rows,
            config,
            permalinks,
            expanded_colspan,
        })
    }

    pub fn rows(&self) -> &[LawsuitRow] {
        &self.rows
    }

    pub fn row(&self, pk: u32) -> Option<&LawsuitRow> {
        self.rows.iter().find(|row| row.pk == pk)
    }

    fn row_mut(&mut self, pk: u32) -> Option<&mut LawsuitRow> {
        self.rows.iter_mut().find(|row| row.pk == pk)
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn expanded_colspan(&self) -> u32 {
        self.expanded_colspan
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.visible).count()
    }

    /// Whether the "no results" indicator should show
    pub fn no_results(&self) -> bool {
        self.visible_count() == 0
    }

    /// Flip a row between collapsed and expanded.
    /// Returns the new state, or `None` for an unknown row.
    pub fn toggle_row(&mut self, pk: u32) -> Option<bool> {
        let row = self.row_mut(pk)?;
        row.expanded = !row.expanded;
        log::debug!("row {} {}", pk, if row.expanded { "expanded" } else { "collapsed" });
        Some(row.expanded)
    }

    /// Row click: toggle, then hand back the fragment to write into the URL
    pub fn click_row(&mut self, pk: u32) -> Option<String> {
        self.toggle_row(pk)?;
        self.row(pk).map(|row| row.anchor.clone())
    }

    /// Collapse every expanded row, then recompute visibility from `filters`
    pub fn update_filters(&mut self, filters: &FilterState) -> FilterOutcome {
        let mut outcome = FilterOutcome {
            visible: 0,
            total: self.rows.len(),
            collapsed: 0,
        };
        for row in &mut self.rows {
            if row.expanded {
                row.expanded = false;
                outcome.collapsed += 1;
            }
            row.visible = filters.matches(row);
            if row.visible {
                outcome.visible += 1;
            }
        }
        log::debug!(
            "filter pass {:?}: {} of {} visible, {} collapsed",
            filters,
            outcome.visible,
            outcome.total,
            outcome.collapsed
        );
        outcome
    }

    /// Expand the row a permalink points at. An already expanded row stays
    /// expanded; an unknown or malformed fragment is a no-op.
    pub fn resolve_permalink(&mut self, hash_or_href: &str) -> Option<PermalinkHit> {
        let pk = self.permalinks.parse(hash_or_href)?;
        let row = self.row_mut(pk)?;
        let toggled = !row.expanded;
        if toggled {
            row.expanded = true;
        }
        log::debug!("permalink {:?} -> row {} (toggled: {})", hash_or_href, pk, toggled);
        Some(PermalinkHit { pk, toggled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(pk: u32) -> LawsuitRow {
        LawsuitRow::new(
            pk,
            format!("klage-detail-{}", pk),
            format!("Lawsuit {}", pk),
            format!("REF-{:03}", pk),
            "open",
            "VG",
        )
    }

    fn make_table(count: u32) -> LawsuitTable {
        let rows = (1..=count).map(make_row).collect();
        LawsuitTable::new(rows, 4, WidgetConfig::default()).unwrap()
    }

    #[test]
    fn test_toggle_row() {
        let mut table = make_table(2);
        assert_eq!(table.toggle_row(1), Some(true));
        assert_eq!(table.row(1).unwrap().title_colspan(table.expanded_colspan()), 4);
        assert_eq!(table.toggle_row(1), Some(false));
        assert_eq!(table.row(1).unwrap().title_colspan(table.expanded_colspan()), 1);
        assert_eq!(table.toggle_row(99), None);
    }

    #[test]
    fn test_configured_colspan_wins() {
        let config = WidgetConfig {
            expanded_colspan: Some(3),
            ..WidgetConfig::default()
        };
        let table = LawsuitTable::new(vec![make_row(1)], 5, config).unwrap();
        assert_eq!(table.expanded_colspan(), 3);
    }

    #[test]
    fn test_zero_columns_still_spans_one() {
        let table = LawsuitTable::new(vec![make_row(1)], 0, WidgetConfig::default()).unwrap();
        assert_eq!(table.expanded_colspan(), 1);
    }

    #[test]
    fn test_click_row_returns_anchor() {
        let mut table = make_table(3);
        assert_eq!(table.click_row(2).as_deref(), Some("klage-detail-2"));
        assert!(table.row(2).unwrap().expanded);
        assert_eq!(table.click_row(42), None);
    }

    #[test]
    fn test_filter_pass_collapses_expanded_rows() {
        let mut table = make_table(3);
        table.toggle_row(1);
        table.toggle_row(3);

        let outcome = table.update_filters(&FilterState::default());

        assert_eq!(outcome.collapsed, 2);
        assert_eq!(outcome.visible, 3);
        assert!(table.rows().iter().all(|row| !row.expanded));
    }

    #[test]
    fn test_resolve_permalink_is_idempotent() {
        let mut table = make_table(3);

        let first = table.resolve_permalink("#klage-detail-2").unwrap();
        let second = table.resolve_permalink("#klage-detail-2").unwrap();

        assert!(first.toggled);
        assert!(!second.toggled);
        assert!(table.row(2).unwrap().expanded);
    }

    #[test]
    fn test_resolve_permalink_unknown_row() {
        let mut table = make_table(2);
        assert_eq!(table.resolve_permalink("#klage-detail-9"), None);
        assert_eq!(table.resolve_permalink("#nothing"), None);
        assert!(table.rows().iter().all(|row| !row.expanded));
    }

    #[test]
    fn test_href_to_row_elsewhere_is_no_match() {
        let mut table = make_table(2);
        table.toggle_row(1);

        assert_eq!(table.resolve_permalink("/klagen/#klage-detail-999"), None);
        assert_eq!(table.resolve_permalink("/klagen/"), None);
        assert!(table.row(1).unwrap().expanded);
        assert!(!table.row(2).unwrap().expanded);
    }
}
