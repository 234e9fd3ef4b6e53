use super::{AnalysisResult, SelectedFile};
use crate::config::AppConfig;
use crate::error::AnalysisError;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// Talks to the external ensemble service. One call, one multipart field.
#[derive(Clone)]
pub struct AnalysisClient {
    endpoint: String,
    client: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(config: &AppConfig) -> Result<Self, AnalysisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AnalysisError> {
        info!(
            file = file.name(),
            bytes = file.size(),
            endpoint = %self.endpoint,
            "Sending image for analysis"
        );

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.mime())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Received analysis response");

        let result: AnalysisResult = serde_json::from_slice(&body)?;
        info!(
            prediction = %result.final_prediction,
            confidence = result.confidence_score,
            "Analysis completed"
        );
        Ok(result)
    }
}
