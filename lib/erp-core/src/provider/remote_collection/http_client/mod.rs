use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::common::ListEntity;
use crate::provider::http_client::HttpClient;

pub mod dto;
pub(crate) mod envelope;
mod provider;


/// Entity that travels over the wire as REST DTOs
pub trait RestEntity: ListEntity {
    type ResponseRestDTO: DeserializeOwned + Into<Self> + Send;
    type RequestRestDTO: Serialize + From<Self::Payload> + Send;
}

pub struct HTTPRemoteCollection<E> {
    http_client: Arc<dyn HttpClient>,
    collection_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E> HTTPRemoteCollection<E> {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: &str, path: &str) -> Self {
        Self {
            http_client,
            collection_url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                path.trim_matches('/')
            ),
            _entity: PhantomData,
        }
    }

    fn item_url(&self, id: &impl Display) -> String {
        format!("{}/{id}", self.collection_url)
    }
}
