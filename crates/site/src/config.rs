//! Runtime configuration.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{fetcher::FailurePolicy, render::Labels};

/// Path of the content document served next to the site.
pub const DEFAULT_CONTENT_URL: &str = "/content/site-content.json";
/// Id of the element rendered output is written into.
pub const DEFAULT_ROOT_ID: &str = "root";
/// Id of the optional inline `<script type="application/json">` block holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Language of the fixed renderer labels.
pub enum Locale {
    /// [`Labels::english`].
    #[default]
    English,
    /// [`Labels::japanese`].
    Japanese,
}

impl Locale {
    /// Label set for this locale.
    pub const fn labels(self) -> Labels {
        match self {
            Self::English => Labels::english(),
            Self::Japanese => Labels::japanese(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected configuration.
pub enum ConfigError {
    /// The input was not valid JSON for [`SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(String),
    /// A required string field was empty.
    #[error("site config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Renderer configuration; every field has a default.
pub struct SiteConfig {
    /// URL of the content document.
    pub content_url: String,
    /// Id of the root container element.
    pub root_id: String,
    /// Label language.
    pub locale: Locale,
    /// What a failed content load leaves behind.
    pub failure_policy: FailurePolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_url: DEFAULT_CONTENT_URL.to_string(),
            root_id: DEFAULT_ROOT_ID.to_string(),
            locale: Locale::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `raw` is not valid JSON for this shape or names an empty
    /// URL or root id.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config for a page whose inline override block contained `raw`.
    ///
    /// A missing or blank block yields the defaults; an invalid one is logged and ignored.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        Self::from_json_str(raw).unwrap_or_else(|err| {
            logging::warn!("ignoring inline config `#{CONFIG_ELEMENT_ID}`: {err}");
            Self::default()
        })
    }

    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] for a blank `content_url` or `root_id`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_url.trim().is_empty() {
            return Err(ConfigError::EmptyField("content_url"));
        }
        if self.root_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("root_id"));
        }
        Ok(())
    }

    /// Labels for the configured locale.
    pub const fn labels(&self) -> Labels {
        self.locale.labels()
    }
}
