use crate::service::error::ValidationError;

pub(crate) fn throw_if_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// NaN is rejected as well
pub(crate) fn throw_if_not_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ValidationError::NonPositive { field });
    }
    Ok(())
}

pub(crate) fn throw_if_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}
