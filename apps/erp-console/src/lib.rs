use serde::Deserialize;

pub mod command;
pub mod render;

/// `app` section of the console configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}
