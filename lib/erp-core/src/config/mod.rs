use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
    #[error("Unsupported config file `{0}`")]
    UnsupportedFile(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid base url `{value}`: {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("Page size `{0}` must be positive")]
    InvalidPageSize(u32),
    #[error("Default page size `{default}` exceeds maximum `{max}`")]
    DefaultPageSizeTooLarge { default: u32, max: u32 },
}
