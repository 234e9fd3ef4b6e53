use super::preview::PreviewHandle;
use crate::analysis::{AnalysisResult, SelectedFile, UploadCheck};
use crate::config::{AppConfig, StaleResponsePolicy};
use crate::error::AnalysisError;
use derivative::Derivative;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    FileSelected,
    Loading,
    Result(AnalysisResult),
    Error(String),
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Tags a request with the selection it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub selection: u64,
}

/// Everything the worker needs to perform one analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub ticket: RequestTicket,
    pub file: SelectedFile,
}

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub ticket: RequestTicket,
    pub result: Result<AnalysisResult, AnalysisError>,
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct PanelState {
    phase: Phase,
    selected: Option<SelectedFile>,
    preview: Option<PreviewHandle>,
    in_flight: Option<RequestTicket>,
    selection: u64,
    next_request: u64,
    stale_responses: StaleResponsePolicy,
    #[derivative(Debug = "ignore")]
    upload_check: UploadCheck,
}

impl PanelState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            phase: Phase::Idle,
            selected: None,
            preview: None,
            in_flight: None,
            selection: 0,
            next_request: 0,
            stale_responses: config.stale_responses,
            upload_check: UploadCheck::new(&config.upload_rules),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut PreviewHandle> {
        self.preview.as_mut()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selection += 1;

        if let Err(e) = self.upload_check.check(&file) {
            warn!(file = file.name(), reason = %e, "Selected file does not match the upload rules");
        }
        if self.is_loading() {
            info!(file = file.name(), "New file selected while a request is still in flight");
        }

        // Texture names are per selection so egui never reuses a stale one.
        let texture_name = format!("preview-{}-{}", self.selection, file.name());
        self.preview = match PreviewHandle::decode(texture_name, file.bytes()) {
            Ok(preview) => Some(preview),
            Err(e) => {
                warn!(file = file.name(), error = %e, "No preview for selected file");
                None
            }
        };

        info!(file = file.name(), bytes = file.size(), "File selected");
        self.selected = Some(file);
        self.phase = Phase::FileSelected;
    }

    /// Returns the request to send, or `None` when analysis cannot start.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        let Some(file) = &self.selected else {
            debug!("Analyze triggered without a selected file");
            return None;
        };

        if let Some(ticket) = self.in_flight {
            debug!(request = ticket.id, "Analyze triggered while a request is in flight");
            return None;
        }

        if self.upload_check.is_enforced() {
            if let Err(e) = self.upload_check.check(file) {
                warn!(file = file.name(), reason = %e, "Analysis refused");
                self.phase = Phase::Error(e.to_string());
                return None;
            }
        }

        self.next_request += 1;
        let ticket = RequestTicket {
            id: self.next_request,
            selection: self.selection,
        };
        let request = AnalysisRequest {
            ticket,
            file: file.clone(),
        };

        self.in_flight = Some(ticket);
        self.phase = Phase::Loading;
        Some(request)
    }

    pub fn complete(&mut self, outcome: AnalysisOutcome) {
        let AnalysisOutcome { ticket, result } = outcome;

        if self.in_flight != Some(ticket) {
            warn!(request = ticket.id, "Ignoring outcome for an unknown request");
            return;
        }
        self.in_flight = None;

        if let Err(e) = &result {
            error!(request = ticket.id, error = %e, "Analysis failed");
        }

        if ticket.selection != self.selection {
            match self.stale_responses {
                StaleResponsePolicy::Discard => {
                    info!(request = ticket.id, "Discarding response for a superseded file");
                    return;
                }
                StaleResponsePolicy::Apply => {
                    warn!(
                        request = ticket.id,
                        "Applying response for a superseded file; it describes the previous image"
                    );
                }
            }
        }

        self.phase = match result {
            Ok(result) => Phase::Result(result),
            Err(e) => Phase::Error(e.user_message().to_string()),
        };
    }
}
