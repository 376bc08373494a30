use time::Date;

use super::HTTPReportClient;
use super::dto::{SalesSummaryQueryRestDTO, SalesSummaryResponseRestDTO};
use crate::model::report::SalesSummary;
use crate::provider::remote_collection::error::RemoteCollectionError;
use crate::provider::remote_collection::http_client::envelope::parse_data;
use crate::provider::report_client::ReportClient;

#[async_trait::async_trait]
impl ReportClient for HTTPReportClient {
    async fn get_sales_summary(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<SalesSummary, RemoteCollectionError> {
        let response = self
            .http_client
            .get(&format!("{}/reports/sales/summary", self.base_url))
            .query(&SalesSummaryQueryRestDTO {
                start_date,
                end_date,
            })?
            .send()
            .await?;

        Ok(parse_data::<SalesSummaryResponseRestDTO>(response)?.into())
    }
}
