pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::Display;
use thiserror::Error;

/// Transport used by the backend providers; request building stays on this side
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;
    fn put(&self, url: &str) -> RequestBuilder;
    fn delete(&self, url: &str) -> RequestBuilder;

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx or 5xx
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug)]
pub struct Request {
    pub body: Option<Vec<u8>>,
    pub headers: Headers,
    pub method: Method,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status: StatusCode,

    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
    #[error("Url encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    fn logged(self, location: &Location, request: &Request) -> Self {
        tracing::error!(
            method = %request.method,
            url = %request.url,
            %location,
            error = %self,
            "Backend call failed"
        );
        trace_body("request", request.body.as_deref());
        self
    }
}

impl Response {
    #[track_caller]
    pub fn error_for_status(self) -> Result<Self, Error> {
        if !self.status.is_error() {
            return Ok(self);
        }
        Err(Error::StatusCodeIsError(self.status).logged(Location::caller(), &self.request))
    }

    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let location = Location::caller();
        serde_json::from_slice(&self.body)
            .map_err(|error| Error::JsonError(error).logged(location, &self.request))
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    body: Option<Vec<u8>>,
    headers: Headers,
    method: Method,
    url: String,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            body: None,
            headers: Headers::default(),
            method,
            url: url.to_string(),
        }
    }

    /// Appends url-encoded `value` to the query string, keeping what is already there
    #[track_caller]
    pub fn query<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, Error> {
        let location = Location::caller();
        let encoded = serde_urlencoded::to_string(value)
            .map_err(|error| Error::UrlEncode(error).logged(location, &self.snapshot()))?;

        if !encoded.is_empty() {
            let separator = if self.url.contains('?') { '&' } else { '?' };
            self.url = format!("{}{separator}{encoded}", self.url);
        }
        Ok(self)
    }

    #[track_caller]
    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let location = Location::caller();
        let body = serde_json::to_vec(&value)
            .map_err(|error| Error::JsonError(error).logged(location, &self.snapshot()))?;

        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(body);
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn send(self) -> Result<Response, Error> {
        let location = Location::caller();
        let request = self.snapshot();
        let headers = (!self.headers.is_empty()).then_some(self.headers);

        let response = self
            .client
            .send(&self.url, self.body, headers, self.method)
            .await
            .map_err(|error| error.logged(location, &request))?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status = %response.status,
            "Backend call completed"
        );
        trace_body("request", request.body.as_deref());
        trace_body("response", Some(response.body.as_slice()));

        Ok(response)
    }

    fn snapshot(&self) -> Request {
        Request {
            body: self.body.clone(),
            headers: self.headers.clone(),
            method: self.method,
            url: self.url.clone(),
        }
    }
}

fn trace_body(direction: &'static str, body: Option<&[u8]>) {
    let Some(body) = body else {
        return;
    };
    match std::str::from_utf8(body) {
        Ok(text) => tracing::trace!(direction, body = text, "Payload"),
        Err(_) => tracing::trace!(direction, bytes = body.len(), "Binary payload"),
    }
}

#[cfg(test)]
mod test;
