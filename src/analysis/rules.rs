use super::SelectedFile;
use crate::config::UploadRules;
use crate::error::ValidationError;
use crate::utils::file_size::FileSizeUtils;
use glob::Pattern;
use tracing::warn;

/// Checks a file against the configured accept pattern and size limit.
pub struct UploadCheck {
    pattern: Option<Pattern>,
    enforce: bool,
    max_bytes: Option<u64>,
}

impl UploadCheck {
    pub fn new(rules: &UploadRules) -> Self {
        let pattern = match Pattern::new(&rules.accept) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(accept = %rules.accept, error = %e, "Ignoring invalid accept pattern");
                None
            }
        };

        Self {
            pattern,
            enforce: rules.enforce,
            max_bytes: rules.max_bytes,
        }
    }

    pub fn is_enforced(&self) -> bool {
        self.enforce
    }

    pub fn check(&self, file: &SelectedFile) -> Result<(), ValidationError> {
        if let Some(pattern) = &self.pattern {
            if !pattern.matches(file.mime()) {
                return Err(ValidationError::UnsupportedType {
                    mime: file.mime().to_string(),
                });
            }
        }

        if let Some(limit) = self.max_bytes {
            if file.size() > limit {
                return Err(ValidationError::TooLarge {
                    size: FileSizeUtils::format_size(file.size()),
                    limit: FileSizeUtils::format_size(limit),
                });
            }
        }

        Ok(())
    }
}
