use super::TableController;
use super::dto::{ConfirmedAction, ConfirmedDelete, MutationOutcome};
use crate::model::common::{ListEntity, SortableColumn};
use crate::provider::remote_collection::error::RemoteCollectionError;
use crate::service::error::ServiceError;

impl<E: ListEntity, C: SortableColumn> TableController<E, C> {
    /// `GET /{collection}/{id}`; leaves the table untouched
    pub async fn get(&self, id: &E::Id) -> Result<E, ServiceError> {
        self.ensure_open()?;

        Ok(self.remote.get(id).await?)
    }

    pub async fn create(&self, payload: E::Payload) -> Result<MutationOutcome<E>, ServiceError> {
        self.ensure_open()?;
        (self.view.validate_payload)(&payload)?;

        let entity = self
            .remote
            .create(payload)
            .await
            .map_err(|error| self.mutation_failed("create", error))?;

        Ok(MutationOutcome {
            entity,
            refresh: self.refresh().await,
        })
    }

    pub async fn update(
        &self,
        id: &E::Id,
        payload: E::Payload,
    ) -> Result<MutationOutcome<E>, ServiceError> {
        self.ensure_open()?;
        (self.view.validate_payload)(&payload)?;

        let entity = self
            .remote
            .update(id, payload)
            .await
            .map_err(|error| self.mutation_failed("update", error))?;

        Ok(MutationOutcome {
            entity,
            refresh: self.refresh().await,
        })
    }

    /// Refreshes the unchanged query afterwards; a page left empty is shown as such
    pub async fn delete(
        &self,
        intent: ConfirmedDelete<E::Id>,
    ) -> Result<MutationOutcome<()>, ServiceError> {
        self.ensure_open()?;

        self.remote
            .delete(intent.id())
            .await
            .map_err(|error| self.mutation_failed("delete", error))?;

        Ok(MutationOutcome {
            entity: (),
            refresh: self.refresh().await,
        })
    }

    /// `POST /{collection}/{id}/{action}`, e.g. cancelling a sale
    pub async fn perform(
        &self,
        intent: ConfirmedAction<E::Id>,
    ) -> Result<MutationOutcome<E>, ServiceError> {
        self.ensure_open()?;

        let entity = self
            .remote
            .perform(intent.id(), intent.action())
            .await
            .map_err(|error| self.mutation_failed(intent.action(), error))?;

        Ok(MutationOutcome {
            entity,
            refresh: self.refresh().await,
        })
    }

    fn ensure_open(&self) -> Result<(), ServiceError> {
        if self.is_closed() {
            return Err(ServiceError::Closed);
        }
        Ok(())
    }

    fn mutation_failed(&self, operation: &str, error: RemoteCollectionError) -> ServiceError {
        tracing::warn!(
            collection = self.view.entity_name,
            operation,
            %error,
            "Mutation failed"
        );
        error.into()
    }
}
