use std::path::PathBuf;
use thiserror::Error;

/// The only message the panel ever shows for a failed analysis.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection Error: Neural Network Offline.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed analysis response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to start request runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl AnalysisError {
    pub fn user_message(&self) -> &'static str {
        CONNECTION_ERROR_MESSAGE
    }
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),
}

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported file type: {mime}")]
    UnsupportedType { mime: String },

    #[error("File too large: {size} (limit {limit})")]
    TooLarge { size: String, limit: String },
}
