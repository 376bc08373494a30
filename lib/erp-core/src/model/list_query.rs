use super::common::{ListSorting, SortDirection, SortableColumn};

/// What the user currently wants to see in a table view
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListQuery<Column> {
    /// zero-based
    pub page_index: u32,
    pub page_size: u32,
    /// `None` means the view default
    pub sort_column: Option<Column>,
    pub sort_direction: SortDirection,
    pub filter_text: String,
}

/// User interaction that changes a [`ListQuery`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListQueryAction<Column> {
    Sort(Column),
    FilterText(String),
    PageIndex(u32),
    PageSize(u32),
}

impl<Column: SortableColumn> ListQuery<Column> {
    pub fn new(page_size: u32, sort_direction: SortDirection) -> Self {
        Self {
            page_index: 0,
            page_size,
            sort_column: None,
            sort_direction,
            filter_text: String::new(),
        }
    }

    /// Returns the state that follows `self` after `action`
    #[must_use]
    pub fn reduce(&self, action: ListQueryAction<Column>) -> Self {
        let mut next = self.clone();
        match action {
            ListQueryAction::Sort(column) => next.set_sort(column),
            ListQueryAction::FilterText(text) => next.set_filter_text(text),
            ListQueryAction::PageIndex(index) => next.set_page_index(index),
            ListQueryAction::PageSize(size) => next.set_page_size(size),
        }
        next
    }

    /// Same column flips the direction, another column sorts ascending
    pub fn set_sort(&mut self, column: Column) {
        if self.sort_column == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
        self.page_index = 0;
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.page_index = 0;
    }

    /// Not clamped here, the caller owns the knowledge of the page count
    pub fn set_page_index(&mut self, index: u32) {
        self.page_index = index;
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
        self.page_index = 0;
    }

    /// Sorting sent to the server: the chosen column, or the view default
    pub fn effective_sorting(&self, default: &ListSorting<Column>) -> ListSorting<Column> {
        ListSorting {
            column: self.sort_column.unwrap_or(default.column),
            direction: self.sort_direction,
        }
    }
}
