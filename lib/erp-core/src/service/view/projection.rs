use std::fmt;

use super::pagination::PaginationControls;
use crate::model::common::SortDirection;

/// Everything a renderer needs to draw one table
#[derive(Clone, Debug, PartialEq)]
pub struct TableProjection<Id> {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<ProjectedRow<Id>>,
    pub counts: RowCounts,
    pub pagination: PaginationControls,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnHeader {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    /// set on the column the page is currently sorted by
    pub sort_direction: Option<SortDirection>,
}

impl fmt::Display for ColumnHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sort_direction {
            Some(SortDirection::Ascending) => write!(f, "{} ^", self.header),
            Some(SortDirection::Descending) => write!(f, "{} v", self.header),
            None => f.write_str(self.header),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectedRow<Id> {
    pub id: Id,
    pub selected: bool,
    /// rendered cells of the visible columns, in column order
    pub cells: Vec<String>,
}

/// Row counts shown below a table.
///
/// A client-side filter only narrows the page on screen, so its result is
/// reported against the page and never against the whole collection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowCounts {
    pub noun: &'static str,
    /// rows left after the client-side filter
    pub visible_rows: usize,
    /// rows of the fetched page
    pub page_rows: usize,
    /// rows of the whole collection, as reported by the server
    pub total_elements: u64,
    pub selected: usize,
    pub client_filter_active: bool,
}

impl fmt::Display for RowCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.client_filter_active {
            write!(
                f,
                "Showing {} of {} {} on this page ({} in total)",
                self.visible_rows, self.page_rows, self.noun, self.total_elements
            )?;
        } else {
            write!(
                f,
                "Showing {} of {} {}",
                self.page_rows, self.total_elements, self.noun
            )?;
        }

        if self.selected > 0 {
            write!(f, ", {} selected", self.selected)?;
        }
        Ok(())
    }
}
