//! Widget Models
//!
//! In-memory rows and list entries. The DOM is rendered from these.

use crate::error::{Result, WidgetError};

/// One lawsuit record rendered as a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawsuitRow {
    /// Primary key (`data-pk`)
    pub pk: u32,
    /// Fragment anchor of the row (its `id` attribute)
    pub anchor: String,
    pub title: String,
    pub reference: String,
    pub status: String,
    pub court: String,
    pub expanded: bool,
    pub visible: bool,
}

impl LawsuitRow {
    /// New row in its initial state: collapsed and visible
    pub fn new(
        pk: u32,
        anchor: impl Into<String>,
        title: impl Into<String>,
        reference: impl Into<String>,
        status: impl Into<String>,
        court: impl Into<String>,
    ) -> Self {
        Self {
            pk,
            anchor: anchor.into(),
            title: title.into(),
            reference: reference.into(),
            status: status.into(),
            court: court.into(),
            expanded: false,
            visible: true,
        }
    }

    /// Parse a raw `data-pk` value; `row` names the row in the error
    pub fn parse_pk(row: &str, raw: Option<&str>) -> Result<u32> {
        raw.map(str::trim)
            .and_then(|value| value.parse::<u32>().ok())
            .ok_or_else(|| WidgetError::InvalidPrimaryKey {
                row: row.to_string(),
                value: raw.map(str::to_string),
            })
    }

    /// Column span of the title cell in the current expansion state
    pub fn title_colspan(&self, expanded_colspan: u32) -> u32 {
        if self.expanded {
            expanded_colspan
        } else {
            1
        }
    }
}

/// A link-bearing list item under a list filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Visible text of the item's link
    pub label: String,
    pub visible: bool,
}

impl ListEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: true,
        }
    }
}
