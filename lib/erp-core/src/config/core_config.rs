use std::path::Path;
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
#[cfg(any(feature = "config_yaml", feature = "config_json"))]
use figment::providers::{Data, Format};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use url::Url;

use super::{ConfigParsingError, ConfigValidationError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoreConfigSerdeDTO {
    #[serde(default)]
    core: CoreConfig,
}

#[derive(Debug, Default, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    /// base of every collection path, e.g. `http://localhost:8080/api`
    pub base_url: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,
    pub access_token: Option<SecretString>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            request_timeout: Duration::from_secs(10),
            access_token: None,
        }
    }
}

impl ApiConfig {
    /// Base url without the trailing slash, so that joined paths never contain `//`
    pub fn normalized_base_url(&self) -> Result<String, ConfigValidationError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');

        Url::parse(trimmed).map_err(|source| ConfigValidationError::InvalidBaseUrl {
            value: self.base_url.to_owned(),
            source,
        })?;

        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub page_size_options: Vec<u32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 1000,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.default_page_size == 0 {
            return Err(ConfigValidationError::InvalidPageSize(
                self.default_page_size,
            ));
        }

        if let Some(size) = self.page_size_options.iter().find(|size| **size == 0) {
            return Err(ConfigValidationError::InvalidPageSize(*size));
        }

        if self.default_page_size > self.max_page_size {
            return Err(ConfigValidationError::DefaultPageSizeTooLarge {
                default: self.default_page_size,
                max: self.max_page_size,
            });
        }

        Ok(())
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::UnsupportedFile(
                path.as_ref().display().to_string(),
            ));
        }

        Self::parse(inputs)
    }

    pub fn parse(inputs: impl IntoIterator<Item = InputFormat>) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("ERP_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfigSerdeDTO>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core: core.core,
            app: custom.app,
        })
    }
}
