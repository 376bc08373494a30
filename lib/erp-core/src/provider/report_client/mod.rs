use time::Date;

use crate::model::report::SalesSummary;
use crate::provider::remote_collection::error::RemoteCollectionError;

pub mod http_client;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ReportClient: Send + Sync {
    /// `GET /reports/sales/summary?startDate&endDate`, both dates inclusive
    async fn get_sales_summary(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<SalesSummary, RemoteCollectionError>;
}
