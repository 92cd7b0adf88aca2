//! Builder for creating and configuring IdentificationClient instances.

use std::time::Duration;

use super::{AffirmationSelector, Affirmations, CareInstructionTable, IdentificationClient};
use crate::config::{Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, WhispererError};
use crate::identify::affirmation::{default_templates, RandomSelector};

/// Builder for creating and configuring IdentificationClient instances.
#[derive(Debug)]
pub struct IdentificationClientBuilder {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
    care: Option<CareInstructionTable>,
    templates: Option<Vec<String>>,
    selector: Option<Box<dyn AffirmationSelector>>,
}

impl IdentificationClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            care: None,
            templates: None,
            selector: None,
        }
    }

    /// Creates a builder seeded from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new()
            .with_endpoint(config.endpoint.clone())
            .with_timeout(config.timeout());
        builder.api_key = config.api_key.clone();
        builder
    }

    /// Sets the service base URL; `/all` is appended per request.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the service credential sent as the `api-key` query parameter.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_care_table(mut self, care: CareInstructionTable) -> Self {
        self.care = Some(care);
        self
    }

    /// Replaces the affirmation templates; `{name}` is interpolated.
    pub fn with_affirmation_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = Some(templates.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the random template selector, e.g. with a seeded one.
    pub fn with_selector(mut self, selector: Box<dyn AffirmationSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `WhispererError::Configuration` if no API key is set or the
    /// HTTP client cannot be created
    /// Returns `WhispererError::InvalidInput` for a malformed endpoint or an
    /// empty template list
    pub fn build(self) -> Result<IdentificationClient> {
        let api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WhispererError::Configuration {
                message: "missing API key for the identification service".to_string(),
            })?;

        let endpoint = self.endpoint.trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(WhispererError::invalid_input("endpoint")
                .with_reason(format!("'{endpoint}' is not an http(s) URL")));
        }

        let templates = self
            .templates
            .unwrap_or_else(default_templates);
        let selector = self.selector.unwrap_or_else(|| Box::new(RandomSelector));
        let affirmations = Affirmations::new(templates, selector)?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| WhispererError::Configuration {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(IdentificationClient {
            http,
            endpoint,
            api_key,
            care: self.care.unwrap_or_default(),
            affirmations,
        })
    }
}

impl Default for IdentificationClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
