use url::Url;

use crate::common_validator::{throw_if_blank, throw_if_negative, throw_if_not_positive};
use crate::model::product::ProductPayload;
use crate::service::error::ValidationError;

pub fn validate_product_payload(payload: &ProductPayload) -> Result<(), ValidationError> {
    throw_if_blank("SKU", &payload.sku)?;
    throw_if_blank("Product name", &payload.name)?;
    throw_if_blank("Category", &payload.category)?;
    throw_if_not_positive("Price", payload.price)?;
    throw_if_negative("Stock quantity", payload.stock_quantity.into())?;

    if let Some(image_url) = payload
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        Url::parse(image_url).map_err(|_| ValidationError::InvalidUrl { field: "Image URL" })?;
    }

    Ok(())
}
