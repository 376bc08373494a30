pub mod error;
pub mod product;
pub mod report;
pub mod sale;
pub mod table;
pub mod view;
