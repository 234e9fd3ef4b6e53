mod preview;
mod state;
mod ui;
mod view;

use crate::analysis::{AnalysisClient, SelectedFile, IMAGE_EXTENSIONS};
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::utils::color::Palette;
use eframe::{egui, App};
use rfd::FileDialog;
use state::{AnalysisOutcome, PanelState};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{error, info};

pub struct InfraGuardApp {
    client: AnalysisClient,
    panel: PanelState,
    palette: Palette,
    outcome_sender: Sender<AnalysisOutcome>,
    outcome_receiver: Receiver<AnalysisOutcome>,
}

impl InfraGuardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        client: AnalysisClient,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::with_client(&config, client)
    }

    fn with_client(config: &AppConfig, client: AnalysisClient) -> Self {
        info!(endpoint = client.endpoint(), "Initializing InfraGuard AI client");

        let (outcome_sender, outcome_receiver) = mpsc::channel();
        Self {
            client,
            panel: PanelState::new(config),
            palette: Palette::default(),
            outcome_sender,
            outcome_receiver,
        }
    }

    pub fn pick_file(&mut self) {
        let picked = FileDialog::new()
            .set_title("Select inspection image")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        if let Some(path) = picked {
            self.load_file(&path);
        }
    }

    fn load_file(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => self.panel.select_file(file),
            Err(e) => error!(path = %path.display(), error = %e, "Failed to read selected file"),
        }
    }

    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        let Some(request) = self.panel.begin_analysis() else {
            return;
        };

        let client = self.client.clone();
        let sender = self.outcome_sender.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(client.analyze(&request.file)),
                Err(e) => Err(AnalysisError::Runtime(e)),
            };

            let _ = sender.send(AnalysisOutcome {
                ticket: request.ticket,
                result,
            });
            ctx.request_repaint();
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let dropped: Vec<_> = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next() {
            match (file.path, file.bytes) {
                (Some(path), _) => self.load_file(&path),
                (None, Some(bytes)) => self
                    .panel
                    .select_file(SelectedFile::from_bytes(file.name, bytes)),
                (None, None) => error!(name = %file.name, "Dropped file carried no data"),
            }
        }

        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.panel.complete(outcome);
        }
    }
}

impl App for InfraGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::preview::png_fixture;
    use super::*;
    use crate::error::CONNECTION_ERROR_MESSAGE;
    use std::time::{Duration, Instant};

    fn offline_app() -> InfraGuardApp {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = AppConfig {
            endpoint: format!("http://{}/analyze", addr),
            ..AppConfig::default()
        };
        let client = AnalysisClient::new(&config).unwrap();
        InfraGuardApp::with_client(&config, client)
    }

    fn frame(app: &mut InfraGuardApp, ctx: &egui::Context, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| app.update_state(ctx));
    }

    fn wait_until_idle(app: &mut InfraGuardApp, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while app.panel.is_loading() {
            assert!(Instant::now() < deadline, "analysis never resolved");
            std::thread::sleep(Duration::from_millis(20));
            frame(app, ctx, egui::RawInput::default());
        }
    }

    #[test]
    fn refused_connection_ends_in_error_state() {
        let ctx = egui::Context::default();
        let mut app = offline_app();
        app.panel
            .select_file(SelectedFile::from_bytes("road.png", png_fixture(8, 8)));

        app.start_analysis(&ctx);
        assert!(app.panel.is_loading());
        app.start_analysis(&ctx);

        wait_until_idle(&mut app, &ctx);
        assert_eq!(app.panel.error_message(), Some(CONNECTION_ERROR_MESSAGE));
        assert!(app.panel.can_analyze());

        // The second click was swallowed, so nothing else arrives.
        std::thread::sleep(Duration::from_millis(200));
        assert!(app.outcome_receiver.try_recv().is_err());
    }

    #[test]
    fn start_without_file_spawns_nothing() {
        let ctx = egui::Context::default();
        let mut app = offline_app();

        app.start_analysis(&ctx);
        assert!(!app.panel.is_loading());
        assert!(app.outcome_receiver.try_recv().is_err());
    }

    #[test]
    fn runtime_failure_outcome_shows_fixed_message() {
        let ctx = egui::Context::default();
        let mut app = offline_app();
        app.panel
            .select_file(SelectedFile::from_bytes("road.png", png_fixture(8, 8)));
        let request = app.panel.begin_analysis().unwrap();

        app.outcome_sender
            .send(AnalysisOutcome {
                ticket: request.ticket,
                result: Err(AnalysisError::Runtime(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "no threads",
                ))),
            })
            .unwrap();

        frame(&mut app, &ctx, egui::RawInput::default());
        assert!(!app.panel.is_loading());
        assert_eq!(app.panel.error_message(), Some(CONNECTION_ERROR_MESSAGE));
    }

    #[test]
    fn dropped_file_path_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lane.png");
        std::fs::write(&path, png_fixture(6, 4)).unwrap();

        let ctx = egui::Context::default();
        let mut app = offline_app();
        let input = egui::RawInput {
            dropped_files: vec![egui::DroppedFile {
                path: Some(path.clone()),
                name: "lane.png".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        frame(&mut app, &ctx, input);
        let selected = app.panel.selected().unwrap();
        assert_eq!(selected.name(), "lane.png");
        assert_eq!(selected.path(), Some(path.as_path()));
        assert_eq!(app.panel.preview().map(|p| p.size()), Some([6, 4]));
    }

    #[test]
    fn dropped_bytes_are_selected_without_a_path() {
        let ctx = egui::Context::default();
        let mut app = offline_app();
        let bytes: std::sync::Arc<[u8]> = png_fixture(4, 4).into();
        let input = egui::RawInput {
            dropped_files: vec![egui::DroppedFile {
                name: "web.png".to_string(),
                bytes: Some(bytes),
                ..Default::default()
            }],
            ..Default::default()
        };

        frame(&mut app, &ctx, input);
        let selected = app.panel.selected().unwrap();
        assert_eq!(selected.name(), "web.png");
        assert!(selected.path().is_none());
    }

    #[test]
    fn dropped_file_without_data_is_ignored() {
        let ctx = egui::Context::default();
        let mut app = offline_app();
        let input = egui::RawInput {
            dropped_files: vec![egui::DroppedFile {
                name: "empty".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        frame(&mut app, &ctx, input);
        assert!(app.panel.selected().is_none());
    }
}
