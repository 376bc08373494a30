use crate::config::core_config::TableConfig;
use crate::service::error::ValidationError;

pub(super) fn validate_page_size(size: u32, config: &TableConfig) -> Result<(), ValidationError> {
    if size == 0 || size > config.max_page_size {
        return Err(ValidationError::PageSizeOutOfRange {
            size,
            max: config.max_page_size,
        });
    }

    Ok(())
}
