//! Paginated server collections (products, sales) and their single-resource endpoints.

use serde::Serialize;

use crate::model::common::{ListEntity, SortDirection};
use crate::model::page::PageResult;

pub mod error;
pub mod http_client;

use error::RemoteCollectionError;

#[async_trait::async_trait]
pub trait RemoteCollection<E: ListEntity>: Send + Sync {
    /// `GET /{collection}?page&size&sortBy&sortDir`
    async fn get_page(&self, request: &PageRequest) -> Result<PageResult<E>, RemoteCollectionError>;

    async fn get(&self, id: &E::Id) -> Result<E, RemoteCollectionError>;

    async fn create(&self, payload: E::Payload) -> Result<E, RemoteCollectionError>;

    async fn update(&self, id: &E::Id, payload: E::Payload) -> Result<E, RemoteCollectionError>;

    async fn delete(&self, id: &E::Id) -> Result<(), RemoteCollectionError>;

    /// `POST /{collection}/{id}/{action}`, e.g. cancelling a sale
    async fn perform(&self, id: &E::Id, action: &str) -> Result<E, RemoteCollectionError>;
}

/// Query sent for one page; two equal requests fetch the same page
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: &'static str,
    pub sort_dir: SortDirection,
    /// additional filter parameters, appended after the paging ones
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
}
