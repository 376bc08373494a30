use std::sync::Arc;

use crate::provider::http_client::HttpClient;
use crate::provider::report_client::ReportClient;
use crate::provider::report_client::http_client::HTTPReportClient;

pub mod service;
mod validator;


#[derive(Clone)]
pub struct ReportService {
    report_client: Arc<dyn ReportClient>,
}

impl ReportService {
    pub fn new(report_client: Arc<dyn ReportClient>) -> Self {
        Self { report_client }
    }

    pub fn from_http_client(http_client: Arc<dyn HttpClient>, base_url: &str) -> Self {
        Self::new(Arc::new(HTTPReportClient::new(http_client, base_url)))
    }
}
