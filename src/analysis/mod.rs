mod client;
mod file;
mod rules;
mod types;

pub use client::AnalysisClient;
pub use file::{SelectedFile, IMAGE_EXTENSIONS};
pub use rules::UploadCheck;
pub use types::{AnalysisResult, Breakdown};
