use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// What to do with a response that arrives after the user picked another file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Show it anyway. The result then describes the previous file.
    #[default]
    Apply,
    /// Drop it and keep the newer selection untouched.
    Discard,
}

#[derive(Debug, Clone)]
pub struct UploadRules {
    /// MIME glob the file dialog advertises, e.g. `image/*`.
    pub accept: String,
    /// When false the accept pattern and size limit are only logged.
    pub enforce: bool,
    pub max_bytes: Option<u64>,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            accept: "image/*".to_string(),
            enforce: false,
            max_bytes: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    /// `None` leaves the request open until the service answers.
    pub request_timeout: Option<Duration>,
    pub upload_rules: UploadRules,
    pub stale_responses: StaleResponsePolicy,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: None,
            upload_rules: UploadRules::default(),
            stale_responses: StaleResponsePolicy::default(),
            window_size: [1040.0, 760.0],
        }
    }
}
