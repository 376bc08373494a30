use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::provider::http_client::Response;
use crate::provider::remote_collection::error::RemoteCollectionError;

/// `{ success, message, data, timestamp }` wrapped around every backend answer
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiResponseRestDTO<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Unwraps the envelope, returning `data` when the server reports success.
///
/// An error status carrying a server message is an application failure, the
/// message is kept verbatim. Any other error status is a transport failure.
pub(crate) fn parse_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, RemoteCollectionError> {
    if !response.status.is_success() {
        let message = serde_json::from_slice::<ApiResponseRestDTO<IgnoredAny>>(&response.body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|message| !message.trim().is_empty());

        if let Some(message) = message {
            tracing::warn!(status = %response.status, %message, "Request rejected by server");
            return Err(RemoteCollectionError::Application { message });
        }
    }

    let response = response.error_for_status()?;
    if response.body.is_empty() {
        return Ok(None);
    }

    let envelope = response
        .json::<ApiResponseRestDTO<T>>()
        .map_err(|e| RemoteCollectionError::MalformedResponse(e.to_string()))?;

    if !envelope.success {
        return Err(RemoteCollectionError::Application {
            message: envelope.message.unwrap_or_default(),
        });
    }

    Ok(envelope.data)
}

pub(crate) fn parse_data<T: DeserializeOwned>(
    response: Response,
) -> Result<T, RemoteCollectionError> {
    parse_response(response)?.ok_or_else(|| {
        RemoteCollectionError::MalformedResponse("response data missing".to_string())
    })
}
