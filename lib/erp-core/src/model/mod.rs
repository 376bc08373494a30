pub mod common;
pub mod fetch_status;
pub mod list_query;
pub mod page;
pub mod product;
pub mod report;
pub mod sale;
