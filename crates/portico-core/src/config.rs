//! Client configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;
use crate::Result;

pub const API_URL_ENV: &str = "PORTICO_API_URL";
pub const SITE_TITLE_ENV: &str = "PORTICO_SITE_TITLE";

const DEFAULT_SITE_TITLE: &str = "Portico";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST backend
    pub api_url: Url,
    /// Site name appended to page titles
    pub site_title: String,
}

impl Config {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }

    /// Read configuration from the environment at process start. The API URL
    /// is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(API_URL_ENV)
            .map_err(|_| CoreError::Config(format!("{API_URL_ENV} is not set")))?;
        let api_url = raw
            .parse::<Url>()
            .map_err(|e| CoreError::Config(format!("invalid {API_URL_ENV}: {e}")))?;

        let mut config = Self::new(api_url);
        if let Ok(title) = std::env::var(SITE_TITLE_ENV) {
            config.site_title = title;
        }

        Ok(config)
    }
}
