//! Folio HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use folio_core::{ContactId, ContactRecord, ContactSubmission, NewContact, ValidationError};

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, ContactListResponse, ContactResponse, HealthResponse, SubmitResponse,
};

/// Folio API client.
#[derive(Debug, Clone)]
pub struct FolioClient {
    client: Client,
    base_url: String,
}

impl FolioClient {
    /// Create a new folio client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the folio service (e.g., `"http://localhost:3000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new folio client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit a contact message.
    ///
    /// The submission is validated locally first with the same rules the
    /// server applies, so an incomplete form never leaves the caller.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` for a rejected submission, or an
    /// error if the request fails.
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmitResponse, ClientError> {
        if let Err(err) = NewContact::parse(submission.clone()) {
            tracing::debug!(code = err.code(), "Submission failed local validation");
            return Err(ClientError::Validation(err));
        }

        let url = format!("{}/api/contact", self.base_url);
        let response = self.client.post(&url).json(&submission).send().await?;

        self.handle_response(response).await
    }

    /// List every stored contact, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ClientError> {
        let url = format!("{}/api/contacts", self.base_url);
        let response = self.client.get(&url).send().await?;

        let body: ContactListResponse = self.handle_response(response).await?;
        Ok(body.contacts)
    }

    /// Get one contact by id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the id is unknown, or an error if
    /// the request fails.
    pub async fn get_contact(&self, id: ContactId) -> Result<ContactRecord, ClientError> {
        let url = format!("{}/api/contacts/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let body: ContactResponse = self.handle_response(response).await?;
        Ok(body.contact)
    }

    /// Check that the service is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.code.unwrap_or_else(|| "unknown".to_string());

                // Map specific error codes to typed errors
                if let Some(validation) = ValidationError::from_code(&code) {
                    return Err(ClientError::Validation(validation));
                }
                if code == "not_found" {
                    return Err(ClientError::NotFound);
                }

                Err(ClientError::Api {
                    code,
                    message: api_error.error,
                    status: status.as_u16(),
                })
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 10).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
        }
    }
}
