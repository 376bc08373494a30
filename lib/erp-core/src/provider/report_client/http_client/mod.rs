use std::sync::Arc;

use crate::provider::http_client::HttpClient;

mod dto;
mod provider;


pub struct HTTPReportClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl HTTPReportClient {
    pub fn new(http_client: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
