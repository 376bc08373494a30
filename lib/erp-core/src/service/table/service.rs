use super::validator::validate_page_size;
use super::{TableController, TableState};
use crate::model::common::{ListEntity, SortableColumn};
use crate::model::fetch_status::FetchStatus;
use crate::model::list_query::{ListQuery, ListQueryAction};
use crate::model::page::PageResult;
use crate::provider::remote_collection::PageRequest;
use crate::service::error::ServiceError;
use crate::service::view::TableView;
use crate::service::view::projection::TableProjection;

impl<E: ListEntity, C: SortableColumn> TableState<E, C> {
    /// Registers a new fetch of the current query, superseding every earlier one
    fn issue_request(&mut self, view: &TableView<E, C>) -> (u64, PageRequest) {
        self.latest_request += 1;
        let request = view.page_request(&self.query);
        self.requested = Some(request.clone());
        self.cache.begin();

        (self.latest_request, request)
    }

    fn visible_ids(&self, view: &TableView<E, C>) -> Vec<E::Id> {
        self.cache
            .page()
            .map(|page| {
                view.visible_rows(page, &self.query.filter_text)
                    .into_iter()
                    .map(|entity| entity.id())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<E: ListEntity, C: SortableColumn> TableController<E, C> {
    /// Fetches the current query again and returns the resulting status.
    ///
    /// A result superseded by a later request, or arriving after [`Self::close`],
    /// is dropped and the status of the newer state is returned.
    pub async fn refresh(&self) -> FetchStatus {
        let (sequence, request) = {
            let mut state = self.state.lock().await;
            if self.cancellation.is_cancelled() {
                return state.cache.status().clone();
            }
            state.issue_request(&self.view)
        };

        self.resolve(sequence, request).await
    }

    pub async fn set_sort(&self, column: C) -> FetchStatus {
        self.apply(ListQueryAction::Sort(column)).await
    }

    pub async fn set_filter_text(&self, text: impl Into<String>) -> FetchStatus {
        self.apply(ListQueryAction::FilterText(text.into())).await
    }

    /// Clamped to the page count of the last committed page, when known
    pub async fn set_page_index(&self, index: u32) -> FetchStatus {
        let index = {
            let state = self.state.lock().await;
            match state.cache.page() {
                Some(page) if page.total_pages > 0 => index.min(page.total_pages - 1),
                _ => index,
            }
        };

        self.apply(ListQueryAction::PageIndex(index)).await
    }

    pub async fn next_page(&self) -> FetchStatus {
        let index = self.state.lock().await.query.page_index.saturating_add(1);
        self.set_page_index(index).await
    }

    pub async fn previous_page(&self) -> FetchStatus {
        let index = self.state.lock().await.query.page_index.saturating_sub(1);
        self.set_page_index(index).await
    }

    /// Rejects sizes outside `1..=maxPageSize` before anything is sent
    pub async fn set_page_size(&self, size: u32) -> Result<FetchStatus, ServiceError> {
        validate_page_size(size, &self.config)?;

        Ok(self.apply(ListQueryAction::PageSize(size)).await)
    }

    pub async fn query_state(&self) -> ListQuery<C> {
        self.state.lock().await.query.clone()
    }

    pub async fn page_result(&self) -> Option<PageResult<E>> {
        self.state.lock().await.cache.page().cloned()
    }

    pub async fn fetch_status(&self) -> FetchStatus {
        self.state.lock().await.cache.status().clone()
    }

    pub async fn current(&self) -> (Option<PageResult<E>>, FetchStatus) {
        let state = self.state.lock().await;
        let (page, status) = state.cache.current();

        (page.cloned(), status.clone())
    }

    pub fn page_size_options(&self) -> &[u32] {
        &self.config.page_size_options
    }

    pub fn view(&self) -> &TableView<E, C> {
        &self.view
    }

    /// Stops committing results, e.g. when the view is unmounted
    pub fn close(&self) {
        self.cancellation.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Returns whether the row is selected afterwards
    pub async fn toggle_row(&self, id: &E::Id) -> Result<bool, ServiceError> {
        let mut state = self.state.lock().await;
        if !state.visible_ids(&self.view).contains(id) {
            return Err(ServiceError::MissingEntity(format!("row `{id}`")));
        }

        Ok(state.selection.toggle(id.clone()))
    }

    /// Selects every visible row, or clears the selection if all already are
    pub async fn toggle_all_rows(&self) {
        let mut state = self.state.lock().await;
        let ids = state.visible_ids(&self.view);
        state.selection.toggle_all(&ids);
    }

    /// Selected rows in page order
    pub async fn selected(&self) -> Vec<E::Id> {
        let state = self.state.lock().await;
        state
            .visible_ids(&self.view)
            .into_iter()
            .filter(|id| state.selection.is_selected(id))
            .collect()
    }

    pub async fn toggle_column(&self, id: &str) -> Result<bool, ServiceError> {
        let mut state = self.state.lock().await;
        self.view.toggle_column(&mut state.visibility, id)
    }

    pub async fn project(&self) -> TableProjection<E::Id> {
        let state = self.state.lock().await;
        self.view.project(
            state.cache.page(),
            &state.query,
            &state.selection,
            &state.visibility,
        )
    }

    /// Applies a user interaction to the query and fetches if the server-visible
    /// request changed
    async fn apply(&self, action: ListQueryAction<C>) -> FetchStatus {
        let (sequence, request) = {
            let mut state = self.state.lock().await;
            if self.cancellation.is_cancelled() {
                return state.cache.status().clone();
            }

            let query = state.query.reduce(action);
            if query.page_index != state.query.page_index {
                state.selection.clear();
            }
            state.query = query;

            let unchanged = state.requested.as_ref() == Some(&self.view.page_request(&state.query));
            let status = state.cache.status();
            let covered = status.is_loading() || *status == FetchStatus::Success;
            if unchanged && covered {
                return state.cache.status().clone();
            }

            state.issue_request(&self.view)
        };

        self.resolve(sequence, request).await
    }

    async fn resolve(&self, sequence: u64, request: PageRequest) -> FetchStatus {
        match self.fetch(sequence, &request).await {
            Ok(status) => status,
            Err(error) if error.is_internal() => {
                tracing::debug!(%error, sequence, "Fetch result not committed");
                self.fetch_status().await
            }
            Err(error) => {
                tracing::warn!(%error, sequence, "Fetch aborted");
                self.fetch_status().await
            }
        }
    }

    /// Awaits one page and commits it, unless a later request was issued in the
    /// meantime or the controller was closed
    async fn fetch(&self, sequence: u64, request: &PageRequest) -> Result<FetchStatus, ServiceError> {
        let result = tokio::select! {
            _ = self.cancellation.cancelled() => return Err(ServiceError::Closed),
            result = self.remote.get_page(request) => result,
        };

        let mut state = self.state.lock().await;
        if self.cancellation.is_cancelled() {
            return Err(ServiceError::Closed);
        }
        if sequence != state.latest_request {
            return Err(ServiceError::StaleResultDiscarded);
        }

        match result {
            Ok(page) => {
                tracing::debug!(
                    collection = self.view.entity_name,
                    sequence,
                    page = page.page_index,
                    items = page.len(),
                    total = page.total_elements,
                    "Committed page"
                );
                state.cache.commit(page);

                let ids = state.visible_ids(&self.view);
                state.selection.retain(&ids);
            }
            Err(error) => {
                let error = ServiceError::from(error);
                let message = error.user_message(&self.view.fetch_error_message());
                tracing::warn!(collection = self.view.entity_name, %error, "Fetch failed");
                state.cache.fail(message);
            }
        }

        Ok(state.cache.status().clone())
    }
}
