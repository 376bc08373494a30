//! Declarative description of a table view and its projection into renderable rows.

use crate::model::common::{ListEntity, ListSorting, SortableColumn};
use crate::model::list_query::ListQuery;
use crate::model::page::PageResult;
use crate::provider::remote_collection::PageRequest;
use crate::service::error::{ServiceError, ValidationError};

pub mod column;
pub mod pagination;
pub mod projection;
pub mod selection;


use column::ColumnDescriptor;
use pagination::PaginationControls;
use projection::{ColumnHeader, ProjectedRow, RowCounts, TableProjection};
use selection::{ColumnVisibility, RowSelection};

/// Where the filter text is applied
pub enum FilterMode<E> {
    /// filter text is ignored
    None,
    /// case-insensitive substring over the given fields of the fetched page
    Client { fields: Vec<fn(&E) -> &str> },
    /// sent to the server as an extra query parameter
    Server { param: &'static str },
}

pub struct TableView<E: ListEntity, C> {
    /// plural noun, e.g. `products`
    pub entity_name: &'static str,
    /// path below the API base url
    pub collection_path: &'static str,
    /// sorting used while the user has not picked a column
    pub default_sorting: ListSorting<C>,
    pub filter: FilterMode<E>,
    pub columns: Vec<ColumnDescriptor<E, C>>,
    /// client-side payload check run before create and update
    pub validate_payload: fn(&E::Payload) -> Result<(), ValidationError>,
}

impl<E: ListEntity, C: SortableColumn> TableView<E, C> {
    /// Starts on the default sorting, so the first click on that column flips it
    pub fn initial_query(&self, page_size: u32) -> ListQuery<C> {
        let mut query = ListQuery::new(page_size, self.default_sorting.direction);
        query.sort_column = Some(self.default_sorting.column);
        query
    }

    /// Shown when a failed fetch carries no message of its own
    pub fn fetch_error_message(&self) -> String {
        format!("An error occurred while fetching {}", self.entity_name)
    }

    pub fn page_request(&self, query: &ListQuery<C>) -> PageRequest {
        let sorting = query.effective_sorting(&self.default_sorting);

        let mut extra = vec![];
        if let FilterMode::Server { param } = &self.filter {
            let text = query.filter_text.trim();
            if !text.is_empty() {
                extra.push((param.to_string(), text.to_string()));
            }
        }

        PageRequest {
            page: query.page_index,
            size: query.page_size,
            sort_by: sorting.column.field(),
            sort_dir: sorting.direction,
            extra,
        }
    }

    pub fn is_client_filtered(&self, filter_text: &str) -> bool {
        matches!(self.filter, FilterMode::Client { .. }) && !filter_text.trim().is_empty()
    }

    pub fn matches_filter(&self, entity: &E, filter_text: &str) -> bool {
        let FilterMode::Client { fields } = &self.filter else {
            return true;
        };

        let needle = filter_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        fields
            .iter()
            .any(|field| field(entity).to_lowercase().contains(&needle))
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDescriptor<E, C>> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Server sort column behind the header with the given id
    pub fn sortable_column(&self, id: &str) -> Result<C, ServiceError> {
        self.column(id)
            .and_then(|column| column.sort_by)
            .ok_or_else(|| ServiceError::MissingEntity(format!("sortable column `{id}`")))
    }

    /// Returns whether the column is visible afterwards; pinned columns stay visible
    pub fn toggle_column(
        &self,
        visibility: &mut ColumnVisibility,
        id: &str,
    ) -> Result<bool, ServiceError> {
        let column = self
            .column(id)
            .ok_or_else(|| ServiceError::MissingEntity(format!("column `{id}`")))?;

        if !column.hideable {
            return Ok(true);
        }
        Ok(visibility.toggle(column.id))
    }

    /// Rows of the fetched page that pass the client-side filter, in server order
    pub fn visible_rows<'a>(&self, page: &'a PageResult<E>, filter_text: &str) -> Vec<&'a E> {
        page.items
            .iter()
            .filter(|entity| self.matches_filter(entity, filter_text))
            .collect()
    }

    pub fn project(
        &self,
        page: Option<&PageResult<E>>,
        query: &ListQuery<C>,
        selection: &RowSelection<E::Id>,
        visibility: &ColumnVisibility,
    ) -> TableProjection<E::Id> {
        let sorting = query.effective_sorting(&self.default_sorting);
        let columns: Vec<&ColumnDescriptor<E, C>> = self
            .columns
            .iter()
            .filter(|column| !column.hideable || visibility.is_visible(column.id))
            .collect();

        let headers = columns
            .iter()
            .map(|column| ColumnHeader {
                id: column.id,
                header: column.header,
                sortable: column.is_sortable(),
                sort_direction: (column.sort_by == Some(sorting.column))
                    .then_some(sorting.direction),
            })
            .collect();

        let visible = page
            .map(|page| self.visible_rows(page, &query.filter_text))
            .unwrap_or_default();

        let rows = visible
            .iter()
            .map(|entity| {
                let id = entity.id();
                ProjectedRow {
                    selected: selection.is_selected(&id),
                    id,
                    cells: columns.iter().map(|column| column.cell(entity)).collect(),
                }
            })
            .collect();

        TableProjection {
            columns: headers,
            rows,
            counts: RowCounts {
                noun: self.entity_name,
                visible_rows: visible.len(),
                page_rows: page.map(PageResult::len).unwrap_or_default(),
                total_elements: page.map(|page| page.total_elements).unwrap_or_default(),
                selected: selection.len(),
                client_filter_active: self.is_client_filtered(&query.filter_text),
            },
            pagination: PaginationControls::new(query.page_index, page),
        }
    }
}
