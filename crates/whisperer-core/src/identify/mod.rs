//! Identification Client.
//!
//! Sends one image to the external plant identification service and turns
//! the best match into a [`PlantRecord`]:
//!
//! ```text
//! ImagePayload ──multipart──▶ POST {endpoint}/all?api-key=…
//!                                   │
//!                     results[0] ◀──┘
//!                         │
//!       name, confidence, family ──▶ CareInstructionTable
//!                         │
//!                         └────────▶ Affirmations
//! ```
//!
//! The care table and affirmation templates are owned by the client and
//! injected through [`IdentificationClientBuilder`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use whisperer_core::identify::IdentificationClient;
//! use whisperer_core::models::ImagePayload;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IdentificationClient::builder()
//!     .with_api_key("your-key")
//!     .build()?;
//!
//! let photo = ImagePayload::new(std::fs::read("fern.jpg")?, "fern.jpg", "image/jpeg");
//! let plant = client.identify(photo).await?;
//! println!("{} ({}%)", plant.name, plant.confidence);
//! # Ok(())
//! # }
//! ```

pub mod affirmation;
pub mod builder;
pub mod care;
pub mod response;

use std::error::Error as _;
use std::future::Future;

use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};

pub use affirmation::{AffirmationSelector, Affirmations, RandomSelector, SeededSelector};
pub use builder::IdentificationClientBuilder;
pub use care::CareInstructionTable;
pub use response::IdentifyResponse;

use crate::error::IdentifyError;
use crate::models::{ImagePayload, PlantRecord};

/// Fixed request parameters sent with every identification.
const ORGANS: &str = "auto";
const MODIFIERS: &str = "crops,fake_fruits,latin";
const PLANT_LANGUAGE: &str = "en";
const PLANT_DETAILS: &str = "common_names";

/// Anything that can turn an image into a plant record.
///
/// The scan workflow only depends on this trait, so tests and alternative
/// services can stand in for [`IdentificationClient`].
pub trait PlantIdentifier: Send + Sync {
    fn identify(
        &self,
        payload: ImagePayload,
    ) -> impl Future<Output = Result<PlantRecord, IdentifyError>> + Send;
}

/// HTTP client for the identification service.
#[derive(Debug)]
pub struct IdentificationClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    care: CareInstructionTable,
    affirmations: Affirmations,
}

impl IdentificationClient {
    pub fn builder() -> IdentificationClientBuilder {
        IdentificationClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn care_table(&self) -> &CareInstructionTable {
        &self.care
    }

    /// Uploads `payload` and builds a record from the best match.
    ///
    /// # Errors
    ///
    /// Returns `IdentifyError::Service` for non-success HTTP statuses
    /// Returns `IdentifyError::NoMatch` when the service found nothing
    /// Returns `IdentifyError::Network` when the request did not complete
    /// Returns `IdentifyError::MalformedResponse` for undecodable bodies
    pub async fn identify(&self, payload: ImagePayload) -> Result<PlantRecord, IdentifyError> {
        let url = format!("{}/all", self.endpoint.trim_end_matches('/'));
        info!(
            "Identifying '{}' ({} bytes, {})",
            payload.file_name,
            payload.len(),
            payload.media_type
        );

        let form = Self::form(payload)?;
        let resp = self
            .http
            .post(&url)
            .query(&[("api-key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("Identification service returned {status}: {body}");
            return Err(IdentifyError::Service {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(network_error)?;
        let response: IdentifyResponse =
            serde_json::from_slice(&body).map_err(|e| IdentifyError::MalformedResponse {
                message: e.to_string(),
            })?;

        self.interpret(response)
    }

    /// Builds a record from an already decoded response.
    pub fn interpret(&self, response: IdentifyResponse) -> Result<PlantRecord, IdentifyError> {
        debug!("Service returned {} candidate(s)", response.results.len());
        let best = response
            .results
            .into_iter()
            .next()
            .ok_or(IdentifyError::NoMatch)?;

        let species = &best.species;
        let name = species.display_name().to_string();
        let family = species.family_name().map(str::to_string);
        let care = self.care.lookup(family.as_deref()).clone();
        let affirmation = self.affirmations.generate(&name);

        Ok(PlantRecord {
            scientific_name: species.full_scientific_name().to_string(),
            common_names: species.common_names.clone(),
            confidence: best.confidence(),
            name,
            family,
            care,
            affirmation,
        })
    }

    fn form(payload: ImagePayload) -> Result<Form, IdentifyError> {
        let image = Part::bytes(payload.data)
            .file_name(payload.file_name)
            .mime_str(&payload.media_type)
            .map_err(network_error)?;

        Ok(Form::new()
            .part("images", image)
            .text("organs", ORGANS)
            .text("modifiers", MODIFIERS)
            .text("plant-language", PLANT_LANGUAGE)
            .text("plant-details", PLANT_DETAILS))
    }
}

impl PlantIdentifier for IdentificationClient {
    fn identify(
        &self,
        payload: ImagePayload,
    ) -> impl Future<Output = Result<PlantRecord, IdentifyError>> + Send {
        IdentificationClient::identify(self, payload)
    }
}

/// Maps a transport failure, dropping the request URL since its query
/// carries the API key.
fn network_error(err: reqwest::Error) -> IdentifyError {
    let timed_out = err.is_timeout();
    let err = err.without_url();

    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    if timed_out {
        message = format!("request timed out: {message}");
    }
    warn!("Identification request failed: {message}");
    IdentifyError::Network { message }
}
