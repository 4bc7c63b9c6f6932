use std::time::Duration;

use reqwest::multipart::{Form, Part};

use medifusion_core::models::payload::{UploadFile, UploadPayload};
use medifusion_core::models::response::{AnalysisResponse, PatientResult};

use crate::error::ClientError;

/// Build the HTTP client. Requests never time out unless `timeout` is set.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ClientError::Setup(e.to_string()))
}

/// Talks to the analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_http_client(timeout)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `payload` as one multipart body and parse the answer.
    ///
    /// Sent once; nothing is retried.
    pub async fn analyze(&self, payload: UploadPayload) -> Result<AnalysisResponse, ClientError> {
        let files = payload.file_count();
        let form = multipart_form(payload)?;

        tracing::info!(endpoint = %self.endpoint, files, "sending analysis request");
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "received analysis response");
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// One part per file, named after its modality, in payload order.
pub fn multipart_form(payload: UploadPayload) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for (modality, UploadFile { name, media_type, bytes }) in payload.into_parts() {
        let part = Part::bytes(bytes)
            .file_name(name.clone())
            .mime_str(&media_type)
            .map_err(|_| ClientError::MediaType {
                file: name,
                media_type: media_type.clone(),
            })?;
        form = form.part(modality.field_name(), part);
    }
    Ok(form)
}

pub fn parse_response(body: &str) -> Result<AnalysisResponse, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Payload(e.to_string()))
}

/// The patient results of a successful response, or the backend's
/// failure message.
pub fn into_results(response: AnalysisResponse) -> Result<Vec<PatientResult>, ClientError> {
    if response.is_success() {
        return Ok(response.results.unwrap_or_default());
    }
    Err(ClientError::Application(
        response.message.filter(|m| !m.is_empty()),
    ))
}
