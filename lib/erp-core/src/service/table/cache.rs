use crate::model::fetch_status::FetchStatus;
use crate::model::page::PageResult;

/// Latest committed page plus the status of the latest fetch.
///
/// Every successful fetch replaces the page wholesale; a failed one keeps it.
pub(super) struct ResultCache<E> {
    page: Option<PageResult<E>>,
    status: FetchStatus,
}

impl<E> Default for ResultCache<E> {
    fn default() -> Self {
        Self {
            page: None,
            status: FetchStatus::Idle,
        }
    }
}

impl<E> ResultCache<E> {
    pub fn current(&self) -> (Option<&PageResult<E>>, &FetchStatus) {
        (self.page.as_ref(), &self.status)
    }

    pub fn page(&self) -> Option<&PageResult<E>> {
        self.page.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    pub fn commit(&mut self, page: PageResult<E>) {
        self.page = Some(page);
        self.status = FetchStatus::Success;
    }

    pub fn fail(&mut self, message: String) {
        self.status = FetchStatus::Error(message);
    }
}
