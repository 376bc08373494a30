use serde::de::IgnoredAny;

use super::dto::PagedResponseRestDTO;
use super::envelope::{parse_data, parse_response};
use super::{HTTPRemoteCollection, RestEntity};
use crate::model::page::PageResult;
use crate::provider::remote_collection::error::RemoteCollectionError;
use crate::provider::remote_collection::{PageRequest, RemoteCollection};

#[async_trait::async_trait]
impl<E: RestEntity> RemoteCollection<E> for HTTPRemoteCollection<E> {
    async fn get_page(&self, request: &PageRequest) -> Result<PageResult<E>, RemoteCollectionError> {
        let response = self
            .http_client
            .get(&self.collection_url)
            .query(request)?
            .query(&request.extra)?
            .send()
            .await?;

        let page: PageResult<E> =
            parse_data::<PagedResponseRestDTO<E::ResponseRestDTO>>(response)?.into_page();
        page.validate()
            .map_err(RemoteCollectionError::MalformedResponse)?;

        tracing::debug!(
            collection = %self.collection_url,
            page = page.page_index,
            size = page.page_size,
            items = page.len(),
            total = page.total_elements,
            "Fetched page"
        );

        Ok(page)
    }

    async fn get(&self, id: &E::Id) -> Result<E, RemoteCollectionError> {
        let response = self.http_client.get(&self.item_url(id)).send().await?;

        Ok(parse_data::<E::ResponseRestDTO>(response)?.into())
    }

    async fn create(&self, payload: E::Payload) -> Result<E, RemoteCollectionError> {
        let response = self
            .http_client
            .post(&self.collection_url)
            .json(E::RequestRestDTO::from(payload))?
            .send()
            .await?;

        Ok(parse_data::<E::ResponseRestDTO>(response)?.into())
    }

    async fn update(&self, id: &E::Id, payload: E::Payload) -> Result<E, RemoteCollectionError> {
        let response = self
            .http_client
            .put(&self.item_url(id))
            .json(E::RequestRestDTO::from(payload))?
            .send()
            .await?;

        Ok(parse_data::<E::ResponseRestDTO>(response)?.into())
    }

    async fn delete(&self, id: &E::Id) -> Result<(), RemoteCollectionError> {
        let response = self.http_client.delete(&self.item_url(id)).send().await?;

        parse_response::<IgnoredAny>(response)?;
        Ok(())
    }

    async fn perform(&self, id: &E::Id, action: &str) -> Result<E, RemoteCollectionError> {
        let url = format!("{}/{action}", self.item_url(id));
        let response = self.http_client.post(&url).send().await?;

        Ok(parse_data::<E::ResponseRestDTO>(response)?.into())
    }
}
