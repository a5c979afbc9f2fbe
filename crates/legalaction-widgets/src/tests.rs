//! Widget Scenario Tests
//!
//! End-to-end behavior of the table and list filter over in-memory rows.

#[cfg(test)]
mod tests {
    use crate::{filter_entries, FilterState, LawsuitRow, LawsuitTable, ListEntry, WidgetConfig};
    use proptest::prelude::*;

    fn scenario_table() -> LawsuitTable {
        let rows = vec![
            LawsuitRow::new(1, "klage-detail-1", "Smith v Jones", "REF-001", "open", "A"),
            LawsuitRow::new(2, "klage-detail-2", "Doe v Roe", "REF-002", "closed", "B"),
        ];
        LawsuitTable::new(rows, 4, WidgetConfig::default()).expect("Failed to build table")
    }

    fn filter(table: &mut LawsuitTable, search: &str, status: &str, court: &str) -> Vec<u32> {
        let state = FilterState::from_inputs(search, status, court, table.config());
        table.update_filters(&state);
        table.rows().iter().filter(|row| row.visible).map(|row| row.pk).collect()
    }

    #[test]
    fn test_status_filter() {
        let mut table = scenario_table();
        assert_eq!(filter(&mut table, "", "closed", "all"), vec![2]);
    }

    #[test]
    fn test_search_filter() {
        let mut table = scenario_table();
        filter(&mut table, "", "closed", "all");
        assert_eq!(filter(&mut table, "smi", "all", "all"), vec![1]);
    }

    #[test]
    fn test_short_search_only_applies_selects() {
        let mut table = scenario_table();
        assert_eq!(filter(&mut table, "s", "all", "all"), vec![1, 2]);
        assert_eq!(filter(&mut table, "s", "all", "B"), vec![2]);
    }

    #[test]
    fn test_no_results_indicator_follows_filters() {
        let mut table = scenario_table();

        let outcome = table.update_filters(&FilterState::from_inputs("nobody", "all", "all", table.config()));
        assert!(outcome.no_results());
        assert!(table.no_results());

        let outcome = table.update_filters(&FilterState::from_inputs("roe", "all", "all", table.config()));
        assert!(!outcome.no_results());
        assert_eq!(table.visible_count(), 1);
    }

    #[test]
    fn test_permalink_on_load_then_trigger_link() {
        let mut table = scenario_table();

        // initial fragment on load
        let hit = table.resolve_permalink("#klage-detail-2").unwrap();
        assert!(hit.toggled);

        // trigger link pointing at the same row
        let hit = table.resolve_permalink("/klagen/#klage-detail-2").unwrap();
        assert!(!hit.toggled);
        assert!(table.row(2).unwrap().expanded);
        assert!(!table.row(1).unwrap().expanded);
    }

    #[test]
    fn test_click_then_resolve_round_trip() {
        let mut clicked = scenario_table();
        let fragment = clicked.click_row(1).unwrap();

        let mut reloaded = scenario_table();
        let hit = reloaded.resolve_permalink(&format!("#{}", fragment)).unwrap();

        assert_eq!(hit.pk, 1);
        assert_eq!(reloaded.row(1), clicked.row(1));
    }

    fn row_strategy() -> impl Strategy<Value = (String, String, &'static str, &'static str)> {
        (
            "[a-zA-Z ]{0,12}",
            "[A-Z]{3}-[0-9]{3}",
            prop::sample::select(vec!["open", "closed", "settled"]),
            prop::sample::select(vec!["VG", "OVG", "LG"]),
        )
    }

    fn build_table(raw: Vec<(String, String, &'static str, &'static str)>) -> LawsuitTable {
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(i, (title, reference, status, court))| {
                let pk = i as u32 + 1;
                LawsuitRow::new(pk, format!("klage-detail-{}", pk), title, reference, status, court)
            })
            .collect();
        LawsuitTable::new(rows, 4, WidgetConfig::default()).expect("Failed to build table")
    }

    proptest! {
        #[test]
        fn prop_row_visibility_matches_predicates(
            raw in prop::collection::vec(row_strategy(), 0..10),
            search in "[a-zA-Z -]{0,5}",
            status in prop::sample::select(vec!["all", "open", "closed", "settled"]),
            court in prop::sample::select(vec!["all", "VG", "OVG", "LG"])
        ) {
            let mut table = build_table(raw);
            let outcome = table.update_filters(&FilterState::from_inputs(&search, status, court, table.config()));

            let needle = search.to_lowercase();
            for row in table.rows() {
                let expected = (status == "all" || row.status == status)
                    && (court == "all" || row.court == court)
                    && (needle.chars().count() < 3
                        || row.title.to_lowercase().contains(&needle)
                        || row.reference.to_lowercase().contains(&needle));
                prop_assert_eq!(row.visible, expected);
                prop_assert!(!row.expanded);
            }
            prop_assert_eq!(outcome.no_results(), table.visible_count() == 0);
        }

        #[test]
        fn prop_permalink_resolution_is_idempotent(
            raw in prop::collection::vec(row_strategy(), 1..10),
            pick in any::<prop::sample::Index>()
        ) {
            let mut table = build_table(raw);
            let pk = pick.index(table.rows().len()) as u32 + 1;
            let hash = format!("#klage-detail-{}", pk);

            table.resolve_permalink(&hash);
            let again = table.resolve_permalink(&hash);

            prop_assert_eq!(again.map(|hit| hit.toggled), Some(false));
            prop_assert!(table.row(pk).unwrap().expanded);
            prop_assert_eq!(table.rows().iter().filter(|row| row.expanded).count(), 1);
        }

        #[test]
        fn prop_list_entry_visible_iff_substring(
            labels in prop::collection::vec("[a-cA-C ]{0,8}", 0..10),
            query in "[a-cA-C]{0,3}"
        ) {
            let mut entries: Vec<ListEntry> = labels.iter().map(ListEntry::new).collect();
            filter_entries(&mut entries, &query);
            for entry in &entries {
                prop_assert_eq!(entry.visible, entry.label.contains(query.as_str()));
            }
        }
    }
}
