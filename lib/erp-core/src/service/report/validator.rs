use time::Date;

use crate::service::error::ValidationError;

pub(super) fn validate_date_range(
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> Result<(Date, Date), ValidationError> {
    let start_date = start_date.ok_or(ValidationError::MissingDate {
        field: "Start date",
    })?;
    let end_date = end_date.ok_or(ValidationError::MissingDate { field: "End date" })?;

    if start_date > end_date {
        return Err(ValidationError::InvalidDateRange);
    }

    Ok((start_date, end_date))
}
