use crate::model::fetch_status::FetchStatus;

/// Result of a successful mutation and of the refresh it triggered
#[derive(Clone, Debug)]
pub struct MutationOutcome<T> {
    pub entity: T,
    pub refresh: FetchStatus,
}

/// Delete requested by the user, waiting for confirmation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteIntent<Id> {
    id: Id,
}

impl<Id> DeleteIntent<Id> {
    pub fn new(id: Id) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Called once the user confirmed, e.g. in a dialog
    pub fn confirm(self) -> ConfirmedDelete<Id> {
        ConfirmedDelete { id: self.id }
    }
}

/// Only obtainable through [`DeleteIntent::confirm`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmedDelete<Id> {
    id: Id,
}

impl<Id> ConfirmedDelete<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// Irreversible item action (e.g. `cancel`) waiting for confirmation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionIntent<Id> {
    id: Id,
    action: &'static str,
}

impl<Id> ActionIntent<Id> {
    pub fn new(id: Id, action: &'static str) -> Self {
        Self { id, action }
    }

    pub fn confirm(self) -> ConfirmedAction<Id> {
        ConfirmedAction {
            id: self.id,
            action: self.action,
        }
    }
}

/// Only obtainable through [`ActionIntent::confirm`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmedAction<Id> {
    id: Id,
    action: &'static str,
}

impl<Id> ConfirmedAction<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn action(&self) -> &'static str {
        self.action
    }
}
