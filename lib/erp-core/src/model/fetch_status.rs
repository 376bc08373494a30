/// Status of the most recent fetch of a collection page
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
