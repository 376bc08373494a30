use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use super::TableController;
use super::dto::{ActionIntent, DeleteIntent};
use crate::config::core_config::TableConfig;
use crate::model::common::{ListEntity, ListSorting, SortDirection, SortableColumn};
use crate::model::fetch_status::FetchStatus;
use crate::model::page::PageResult;
use crate::provider::remote_collection::error::RemoteCollectionError;
use crate::provider::remote_collection::{PageRequest, RemoteCollection};
use crate::service::error::{ServiceError, ValidationError};
use crate::service::view::column::{CellValue, ColumnDescriptor};
use crate::service::view::{FilterMode, TableView};

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: i64,
    label: String,
}

#[derive(Clone, Debug)]
struct ItemPayload {
    label: String,
}

impl ListEntity for Item {
    type Id = i64;
    type Payload = ItemPayload;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
enum ItemColumn {
    Label,
    Id,
}

impl SortableColumn for ItemColumn {
    fn field(&self) -> &'static str {
        match self {
            ItemColumn::Label => "label",
            ItemColumn::Id => "id",
        }
    }
}

fn item_label(item: &Item) -> &str {
    &item.label
}

fn validate_item(payload: &ItemPayload) -> Result<(), ValidationError> {
    if payload.label.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "label" });
    }
    Ok(())
}

fn item_view() -> TableView<Item, ItemColumn> {
    TableView {
        entity_name: "items",
        collection_path: "items",
        default_sorting: ListSorting {
            column: ItemColumn::Label,
            direction: SortDirection::Ascending,
        },
        filter: FilterMode::Client {
            fields: vec![item_label],
        },
        columns: vec![
            ColumnDescriptor::new("id", "Id", |item: &Item| CellValue::Integer(item.id))
                .sortable(ItemColumn::Id),
            ColumnDescriptor::new("label", "Label", |item: &Item| {
                CellValue::Text(item.label.clone())
            })
            .sortable(ItemColumn::Label),
        ],
        validate_payload: validate_item,
    }
}

type PageResponse = Result<PageResult<Item>, RemoteCollectionError>;

/// In-memory collection; page fetches can be held back and released in any order
#[derive(Default)]
struct FakeCollection {
    items: Mutex<Vec<Item>>,
    requests: Mutex<Vec<PageRequest>>,
    gates: Mutex<VecDeque<oneshot::Receiver<PageResponse>>>,
    mutations: Mutex<Vec<String>>,
    mutation_failure: Mutex<Option<String>>,
}

impl FakeCollection {
    fn with_items(count: i64) -> Arc<Self> {
        let collection = Self::default();
        *collection.items.lock().unwrap() = (1..=count)
            .map(|id| Item {
                id,
                label: format!("item {id}"),
            })
            .collect();
        Arc::new(collection)
    }

    /// The next page fetch waits for the returned sender
    fn gate(&self) -> oneshot::Sender<PageResponse> {
        let (sender, receiver) = oneshot::channel();
        self.gates.lock().unwrap().push_back(receiver);
        sender
    }

    fn fail_mutations(&self, message: &str) {
        *self.mutation_failure.lock().unwrap() = Some(message.to_string());
    }

    fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn mutations(&self) -> Vec<String> {
        self.mutations.lock().unwrap().clone()
    }

    async fn wait_for_requests(&self, count: usize) {
        while self.requests.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }

    fn serve(&self, request: &PageRequest) -> PageResult<Item> {
        let items = self.items.lock().unwrap();
        let size = request.size as usize;
        let total_pages = items.len().div_ceil(size) as u32;

        PageResult {
            items: items
                .iter()
                .skip(request.page as usize * size)
                .take(size)
                .cloned()
                .collect(),
            page_index: request.page,
            page_size: request.size,
            total_elements: items.len() as u64,
            total_pages,
            is_first: request.page == 0,
            is_last: request.page + 1 >= total_pages,
        }
    }

    fn record_mutation(&self, mutation: String) -> Result<(), RemoteCollectionError> {
        if let Some(message) = self.mutation_failure.lock().unwrap().clone() {
            return Err(RemoteCollectionError::Application { message });
        }
        self.mutations.lock().unwrap().push(mutation);
        Ok(())
    }
}

#[async_trait::async_trait]
impl RemoteCollection<Item> for FakeCollection {
    async fn get_page(&self, request: &PageRequest) -> PageResponse {
        self.requests.lock().unwrap().push(request.clone());

        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(receiver) => receiver.await.unwrap(),
            None => Ok(self.serve(request)),
        }
    }

    async fn get(&self, id: &i64) -> Result<Item, RemoteCollectionError> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == *id)
            .cloned()
            .ok_or_else(|| RemoteCollectionError::Application {
                message: format!("Item not found with id: {id}"),
            })
    }

    async fn create(&self, payload: ItemPayload) -> Result<Item, RemoteCollectionError> {
        self.record_mutation(format!("create {}", payload.label))?;

        let mut items = self.items.lock().unwrap();
        let item = Item {
            id: items.iter().map(|item| item.id).max().unwrap_or_default() + 1,
            label: payload.label,
        };
        items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &i64, payload: ItemPayload) -> Result<Item, RemoteCollectionError> {
        self.record_mutation(format!("update {id}"))?;

        let mut items = self.items.lock().unwrap();
        let item = items.iter_mut().find(|item| item.id == *id).unwrap();
        item.label = payload.label;
        Ok(item.clone())
    }

    async fn delete(&self, id: &i64) -> Result<(), RemoteCollectionError> {
        self.record_mutation(format!("delete {id}"))?;

        self.items.lock().unwrap().retain(|item| item.id != *id);
        Ok(())
    }

    async fn perform(&self, id: &i64, action: &str) -> Result<Item, RemoteCollectionError> {
        self.record_mutation(format!("{action} {id}"))?;

        let mut items = self.items.lock().unwrap();
        let item = items.iter_mut().find(|item| item.id == *id).unwrap();
        item.label = format!("{} ({action})", item.label);
        Ok(item.clone())
    }
}

fn controller(remote: Arc<FakeCollection>) -> Arc<TableController<Item, ItemColumn>> {
    Arc::new(TableController::new(
        remote,
        Arc::new(item_view()),
        TableConfig::default(),
    ))
}

fn labelled_page(label: &str) -> PageResult<Item> {
    PageResult {
        items: vec![Item {
            id: 100,
            label: label.to_string(),
        }],
        page_index: 0,
        page_size: 10,
        total_elements: 1,
        total_pages: 1,
        is_first: true,
        is_last: true,
    }
}

#[tokio::test]
async fn test_refresh_commits_page_with_default_sorting() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());

    assert_eq!(controller.fetch_status().await, FetchStatus::Idle);
    assert_eq!(controller.refresh().await, FetchStatus::Success);

    let requests = remote.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].page, 0);
    assert_eq!(requests[0].size, 10);
    assert_eq!(requests[0].sort_by, "label");
    assert_eq!(requests[0].sort_dir, SortDirection::Ascending);

    let (page, status) = controller.current().await;
    let page = page.unwrap();
    assert_eq!(status, FetchStatus::Success);
    assert_eq!(page.len(), 10);
    assert_eq!(page.total_elements, 25);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());

    controller.refresh().await;
    let first = controller.page_result().await;
    controller.refresh().await;
    let second = controller.page_result().await;

    assert!(first.is_some());
    assert_eq!(first, second);
    let requests = remote.requests();
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_newer_request_wins_when_it_resolves_first() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    let first_gate = remote.gate();
    let second_gate = remote.gate();

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.set_sort(ItemColumn::Id).await }
    });
    remote.wait_for_requests(1).await;

    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.set_sort(ItemColumn::Label).await }
    });
    remote.wait_for_requests(2).await;

    assert!(second_gate.send(Ok(labelled_page("second"))).is_ok());
    assert_eq!(second.await.unwrap(), FetchStatus::Success);

    assert!(first_gate.send(Ok(labelled_page("first"))).is_ok());
    assert_eq!(first.await.unwrap(), FetchStatus::Success);

    let page = controller.page_result().await.unwrap();
    assert_eq!(page.items[0].label, "second");
    assert_eq!(
        controller.query_state().await.sort_column,
        Some(ItemColumn::Label)
    );
}

#[tokio::test]
async fn test_older_request_resolving_first_is_discarded() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    let first_gate = remote.gate();
    let second_gate = remote.gate();

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.set_sort(ItemColumn::Id).await }
    });
    remote.wait_for_requests(1).await;

    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.set_sort(ItemColumn::Label).await }
    });
    remote.wait_for_requests(2).await;

    assert!(first_gate.send(Ok(labelled_page("first"))).is_ok());
    assert!(first.await.unwrap().is_loading());
    assert!(controller.fetch_status().await.is_loading());
    assert!(controller.page_result().await.is_none());

    assert!(second_gate.send(Ok(labelled_page("second"))).is_ok());
    assert_eq!(second.await.unwrap(), FetchStatus::Success);
    assert_eq!(controller.page_result().await.unwrap().items[0].label, "second");
}

#[tokio::test]
async fn test_application_failure_keeps_previous_page() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;
    let before = controller.page_result().await;

    let gate = remote.gate();
    assert!(
        gate.send(Err(RemoteCollectionError::Application {
            message: "Not found".to_string(),
        }))
        .is_ok()
    );

    let status = controller.refresh().await;
    assert_eq!(status, FetchStatus::Error("Not found".to_string()));
    assert_eq!(controller.page_result().await, before);
    assert!(before.is_some());
}

#[tokio::test]
async fn test_failure_without_message_uses_fallback() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());

    let gate = remote.gate();
    assert!(
        gate.send(Err(RemoteCollectionError::Application {
            message: String::new(),
        }))
        .is_ok()
    );

    let status = controller.refresh().await;
    assert_eq!(
        status.error_message(),
        Some("An error occurred while fetching items")
    );
    assert!(controller.page_result().await.is_none());
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());

    let gate = remote.gate();
    assert!(
        gate.send(Err(RemoteCollectionError::Transport(
            crate::provider::http_client::Error::HttpError("connection refused".to_string()),
        )))
        .is_ok()
    );

    let status = controller.refresh().await;
    assert!(status.error_message().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_sort_on_same_column_flips_and_resets_page() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;
    controller.set_page_index(2).await;

    controller.set_sort(ItemColumn::Id).await;
    controller.set_sort(ItemColumn::Id).await;

    let query = controller.query_state().await;
    assert_eq!(query.sort_column, Some(ItemColumn::Id));
    assert_eq!(query.sort_direction, SortDirection::Descending);
    assert_eq!(query.page_index, 0);
    assert_eq!(query.page_size, 10);

    let last = remote.requests().pop().unwrap();
    assert_eq!(last.sort_by, "id");
    assert_eq!(last.sort_dir, SortDirection::Descending);
}

#[tokio::test]
async fn test_page_index_is_clamped_to_known_pages() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;

    controller.set_page_index(10).await;
    assert_eq!(controller.query_state().await.page_index, 2);

    controller.next_page().await;
    assert_eq!(controller.query_state().await.page_index, 2);

    controller.previous_page().await;
    assert_eq!(controller.query_state().await.page_index, 1);
    assert_eq!(remote.requests().last().unwrap().page, 1);
}

#[tokio::test]
async fn test_invalid_page_size_is_rejected_before_request() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());

    for size in [0, 1001] {
        let result = controller.set_page_size(size).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::PageSizeOutOfRange { .. }))
        ));
    }
    assert!(remote.requests().is_empty());

    controller.set_page_size(20).await.unwrap();
    assert_eq!(remote.requests()[0].size, 20);
}

#[tokio::test]
async fn test_client_filter_does_not_refetch_same_page() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;

    let status = controller.set_filter_text("item 1").await;
    assert_eq!(status, FetchStatus::Success);
    assert_eq!(remote.requests().len(), 1);

    let projection = controller.project().await;
    assert_eq!(projection.rows.len(), 2);
    assert_eq!(
        projection.counts.to_string(),
        "Showing 2 of 10 items on this page (25 in total)"
    );

    controller.set_page_index(1).await;
    controller.set_filter_text("item 2").await;
    assert_eq!(remote.requests().len(), 3);
    assert_eq!(remote.requests()[2].page, 0);
}

#[tokio::test]
async fn test_delete_refreshes_unchanged_query_and_keeps_empty_page() {
    let remote = FakeCollection::with_items(21);
    let controller = controller(remote.clone());
    controller.refresh().await;
    controller.set_page_index(2).await;

    let page = controller.page_result().await.unwrap();
    assert_eq!(page.len(), 1);
    let query_before = controller.query_state().await;

    let intent = DeleteIntent::new(page.items[0].id);
    let outcome = controller.delete(intent.confirm()).await.unwrap();
    assert_eq!(outcome.refresh, FetchStatus::Success);

    assert_eq!(controller.query_state().await, query_before);
    let last = remote.requests().pop().unwrap();
    assert_eq!(last.page, 2);

    let page = controller.page_result().await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.page_index, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(remote.mutations(), ["delete 21"]);
}

#[tokio::test]
async fn test_failed_mutation_leaves_table_untouched() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;
    let (page_before, status_before) = controller.current().await;
    let query_before = controller.query_state().await;

    remote.fail_mutations("Cannot delete product with existing sales");
    let result = controller.delete(DeleteIntent::new(3).confirm()).await;

    assert!(matches!(
        result,
        Err(ServiceError::Application { message })
            if message == "Cannot delete product with existing sales"
    ));
    assert_eq!(remote.requests().len(), 1);
    assert_eq!(controller.current().await, (page_before, status_before));
    assert_eq!(controller.query_state().await, query_before);
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_server() {
    let remote = FakeCollection::with_items(2);
    let controller = controller(remote.clone());

    let result = controller
        .create(ItemPayload {
            label: "  ".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::MissingField { field: "label" }))
    ));
    assert!(remote.mutations().is_empty());
    assert!(remote.requests().is_empty());
}

#[tokio::test]
async fn test_create_and_update_refresh_page() {
    let remote = FakeCollection::with_items(2);
    let controller = controller(remote.clone());

    let created = controller
        .create(ItemPayload {
            label: "kettle".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.entity.id, 3);
    assert_eq!(created.refresh, FetchStatus::Success);
    assert_eq!(controller.page_result().await.unwrap().len(), 3);

    let updated = controller
        .update(
            &3,
            ItemPayload {
                label: "teapot".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.entity.label, "teapot");
    assert_eq!(remote.requests().len(), 2);
    assert_eq!(remote.mutations(), ["create kettle", "update 3"]);
}

#[tokio::test]
async fn test_confirmed_action_refreshes_page() {
    let remote = FakeCollection::with_items(2);
    let controller = controller(remote.clone());

    let outcome = controller
        .perform(ActionIntent::new(1, "cancel").confirm())
        .await
        .unwrap();

    assert_eq!(outcome.entity.label, "item 1 (cancel)");
    assert_eq!(remote.mutations(), ["cancel 1"]);
    assert_eq!(
        controller.page_result().await.unwrap().items[0].label,
        "item 1 (cancel)"
    );
}

#[tokio::test]
async fn test_get_does_not_touch_table() {
    let remote = FakeCollection::with_items(2);
    let controller = controller(remote.clone());

    assert_eq!(controller.get(&2).await.unwrap().label, "item 2");
    assert!(matches!(
        controller.get(&9).await,
        Err(ServiceError::Application { .. })
    ));
    assert!(remote.requests().is_empty());
    assert_eq!(controller.fetch_status().await, FetchStatus::Idle);
}

#[tokio::test]
async fn test_close_suppresses_commit() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    let gate = remote.gate();

    let pending = tokio::spawn({
        let controller = controller.clone();
        async move { controller.refresh().await }
    });
    remote.wait_for_requests(1).await;

    controller.close();
    assert_eq!(pending.await.unwrap(), FetchStatus::Loading);
    assert!(gate.send(Ok(labelled_page("late"))).is_err());
    assert!(controller.page_result().await.is_none());

    controller.refresh().await;
    assert_eq!(remote.requests().len(), 1);
    assert!(matches!(
        controller.delete(DeleteIntent::new(1).confirm()).await,
        Err(ServiceError::Closed)
    ));
}

#[tokio::test]
async fn test_selection_is_cleared_on_page_change() {
    let remote = FakeCollection::with_items(25);
    let controller = controller(remote.clone());
    controller.refresh().await;

    assert!(controller.toggle_row(&2).await.unwrap());
    assert!(matches!(
        controller.toggle_row(&20).await,
        Err(ServiceError::MissingEntity(_))
    ));
    assert_eq!(controller.selected().await, [2]);

    controller.next_page().await;
    assert!(controller.selected().await.is_empty());

    controller.toggle_all_rows().await;
    assert_eq!(controller.selected().await.len(), 10);
    assert_eq!(controller.project().await.counts.selected, 10);
}

#[tokio::test]
async fn test_hidden_column_is_not_projected() {
    let remote = FakeCollection::with_items(3);
    let controller = controller(remote.clone());
    controller.refresh().await;

    assert!(!controller.toggle_column("id").await.unwrap());
    let projection = controller.project().await;

    assert_eq!(projection.columns.len(), 1);
    assert_eq!(projection.rows[0].cells, ["item 1"]);
    assert_eq!(remote.requests().len(), 1);
}
