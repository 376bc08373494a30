use time::Date;

use super::ReportService;
use super::validator::validate_date_range;
use crate::model::report::SalesSummary;
use crate::service::error::ServiceError;

impl ReportService {
    /// Sales totals for an inclusive date range
    ///
    /// # Arguments
    ///
    /// * `start_date` - first day of the range
    /// * `end_date` - last day of the range, not before `start_date`
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_sales_summary(
        &self,
        start_date: Option<Date>,
        end_date: Option<Date>,
    ) -> Result<SalesSummary, ServiceError> {
        let (start_date, end_date) = validate_date_range(start_date, end_date)?;

        Ok(self
            .report_client
            .get_sales_summary(start_date, end_date)
            .await?)
    }
}
