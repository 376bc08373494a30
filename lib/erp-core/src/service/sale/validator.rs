use crate::common_validator::{throw_if_blank, throw_if_negative};
use crate::model::sale::{SaleItemPayload, SalePayload};
use crate::service::error::ValidationError;

const MAX_DISCOUNT_PERCENT: f64 = 100.0;

pub fn validate_sale_payload(payload: &SalePayload) -> Result<(), ValidationError> {
    throw_if_blank("Customer name", &payload.customer_name)?;
    throw_if_blank("Customer phone", &payload.customer_phone)?;

    if payload.items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }
    payload.items.iter().try_for_each(validate_sale_item)?;

    throw_if_negative("Tax amount", payload.tax_amount)?;
    throw_if_negative("Discount amount", payload.discount_amount)?;

    Ok(())
}

fn validate_sale_item(item: &SaleItemPayload) -> Result<(), ValidationError> {
    if i64::from(item.product_id) <= 0 {
        return Err(ValidationError::NonPositive { field: "Product" });
    }

    if item.quantity <= 0 {
        return Err(ValidationError::NonPositive { field: "Quantity" });
    }

    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&item.discount_percent) {
        return Err(ValidationError::OutOfRange {
            field: "Discount percent",
            min: 0.0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(())
}
