use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum RemoteCollectionError {
    /// Server answered with `success: false`
    #[error("Application error: `{message}`")]
    Application { message: String },
    #[error("Transport error: `{0}`")]
    Transport(#[from] http_client::Error),
    #[error("Malformed response: `{0}`")]
    MalformedResponse(String),
}
