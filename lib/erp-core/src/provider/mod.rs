pub mod http_client;
pub mod remote_collection;
pub mod report_client;
