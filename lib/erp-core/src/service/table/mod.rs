//! Generic controller keeping a server-paginated collection in sync with a table view.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::config::core_config::TableConfig;
use crate::model::common::{ListEntity, SortableColumn};
use crate::model::list_query::ListQuery;
use crate::provider::remote_collection::{PageRequest, RemoteCollection};
use crate::service::view::TableView;
use crate::service::view::selection::{ColumnVisibility, RowSelection};

pub mod dto;
pub mod service;

mod cache;
mod mutation;
mod validator;

#[cfg(test)]
mod test;

use cache::ResultCache;

pub struct TableController<E: ListEntity, C: SortableColumn> {
    remote: Arc<dyn RemoteCollection<E>>,
    view: Arc<TableView<E, C>>,
    config: TableConfig,
    state: Mutex<TableState<E, C>>,
    cancellation: CancellationToken,
}

struct TableState<E: ListEntity, C> {
    query: ListQuery<C>,
    cache: ResultCache<E>,
    selection: RowSelection<E::Id>,
    visibility: ColumnVisibility,
    /// sequence number of the latest issued fetch
    latest_request: u64,
    /// request of the latest issued fetch
    requested: Option<PageRequest>,
}

impl<E: ListEntity, C: SortableColumn> TableController<E, C> {
    pub fn new(
        remote: Arc<dyn RemoteCollection<E>>,
        view: Arc<TableView<E, C>>,
        config: TableConfig,
    ) -> Self {
        let state = TableState {
            query: view.initial_query(config.default_page_size),
            cache: ResultCache::default(),
            selection: RowSelection::default(),
            visibility: ColumnVisibility::default(),
            latest_request: 0,
            requested: None,
        };

        Self {
            remote,
            view,
            config,
            state: Mutex::new(state),
            cancellation: CancellationToken::new(),
        }
    }
}
