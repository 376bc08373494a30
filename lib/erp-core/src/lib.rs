mod common_validator;
pub mod config;
pub mod model;
pub mod provider;
pub mod service;
