use super::state::Phase;
use super::view::{FeatureCard, Icon, ResultView, ScoreBar, FEATURES};
use super::InfraGuardApp;
use crate::utils::color::Palette;
use crate::utils::file_size::FileSizeUtils;
use chrono::Datelike;
use eframe::egui::{
    self, load::SizedTexture, Align, Button, Color32, CursorIcon, Frame, Layout, Margin, RichText,
    Sense, Stroke,
};

const DROP_ZONE_HEIGHT: f32 = 250.0;
const BUTTON_HEIGHT: f32 = 42.0;

impl InfraGuardApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let palette = self.palette.clone();

        egui::TopBottomPanel::top("nav")
            .frame(
                Frame::none()
                    .fill(palette.background)
                    .stroke(Stroke::new(1.0, palette.border))
                    .inner_margin(Margin::symmetric(24.0, 14.0)),
            )
            .show(ctx, |ui| render_nav(ui, &palette));

        egui::TopBottomPanel::bottom("footer")
            .frame(
                Frame::none()
                    .fill(palette.background)
                    .stroke(Stroke::new(1.0, palette.border))
                    .inner_margin(Margin::symmetric(24.0, 18.0)),
            )
            .show(ctx, |ui| render_footer(ui, &palette));

        egui::CentralPanel::default()
            .frame(Frame::none().fill(palette.background).inner_margin(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.columns(2, |columns| {
                        render_hero(&mut columns[0], &palette);
                        self.render_panel(&mut columns[1], &palette);
                    });
                });
            });
    }

    fn render_panel(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let ctx = ui.ctx().clone();

        Frame::none()
            .fill(palette.panel)
            .stroke(Stroke::new(1.0, palette.border))
            .rounding(14.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                render_window_dots(ui);
                ui.add_space(14.0);

                if self.render_drop_zone(ui, &ctx, palette) {
                    self.pick_file();
                }

                if let Some(file) = self.panel.selected() {
                    ui.add_space(6.0);
                    let label = ui.label(
                        RichText::new(format!(
                            "{} · {}",
                            file.name(),
                            FileSizeUtils::format_size(file.size())
                        ))
                        .small()
                        .color(palette.muted),
                    );
                    if let Some(path) = file.path() {
                        label.on_hover_text(path.display().to_string());
                    }
                }

                ui.add_space(14.0);
                self.render_actions(ui, &ctx, palette);

                if let Some(message) = self.panel.error_message() {
                    ui.add_space(14.0);
                    render_error(ui, message, palette);
                }

                if let Some(result) = self.panel.result() {
                    ui.add_space(18.0);
                    render_result(ui, &ResultView::new(result, palette), palette);
                }
            });
    }

    /// Returns true when the zone was clicked.
    fn render_drop_zone(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        palette: &Palette,
    ) -> bool {
        let idle = matches!(self.panel.phase(), Phase::Idle);
        let border = if self.panel.preview().is_some() {
            palette.accent.gamma_multiply(0.5)
        } else {
            palette.border
        };

        let response = Frame::none()
            .fill(palette.background)
            .stroke(Stroke::new(2.0, border))
            .rounding(10.0)
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT));
                ui.set_max_height(DROP_ZONE_HEIGHT);

                match self.panel.preview_mut() {
                    Some(preview) => {
                        let [width, height] = preview.size();
                        let texture = SizedTexture::from_handle(preview.texture(ctx));
                        let max = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
                        ui.centered_and_justified(|ui| {
                            ui.add(egui::Image::new(texture).max_size(max))
                                .on_hover_text(format!("{} × {} preview", width, height));
                        });
                    }
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(DROP_ZONE_HEIGHT / 2.0 - 48.0);
                            ui.label(
                                RichText::new(Icon::Upload.glyph())
                                    .size(28.0)
                                    .color(palette.muted),
                            );
                            ui.add_space(6.0);
                            let (title, hint) = if idle {
                                ("Upload Inspection Image", "Supports JPG, PNG, WEBP")
                            } else {
                                ("Preview unavailable", "The file will still be sent as-is")
                            };
                            ui.label(RichText::new(title).strong().color(palette.text));
                            ui.label(RichText::new(hint).small().color(palette.muted));
                        });
                    }
                }
            })
            .response;

        response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand)
            .clicked()
    }

    fn render_actions(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, palette: &Palette) {
        if self.panel.selected().is_none() {
            let button = Button::new(
                RichText::new(format!("{} SELECT FILE TO BEGIN", Icon::Image.glyph())).strong(),
            )
            .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
            if ui.add(button).clicked() {
                self.pick_file();
            }
            return;
        }

        ui.horizontal(|ui| {
            let change =
                Button::new(RichText::new(format!("{} CHANGE", Icon::RefreshCw.glyph())).strong())
                    .min_size(egui::vec2(ui.available_width() / 3.0, BUTTON_HEIGHT));
            if ui.add(change).clicked() {
                self.pick_file();
            }

            let label = if self.panel.is_loading() {
                ui.add(egui::Spinner::new().color(palette.accent));
                format!("PROCESSING {}", Icon::Activity.glyph())
            } else {
                format!("RUN DIAGNOSTICS {}", Icon::ChevronRight.glyph())
            };
            let run = Button::new(RichText::new(label).strong().color(Color32::WHITE))
                .fill(palette.accent)
                .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
            if ui.add_enabled(self.panel.can_analyze(), run).clicked() {
                self.start_analysis(ctx);
            }
        });
    }
}

fn render_nav(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(Icon::Scan.glyph()).size(20.0).color(palette.accent));
        ui.label(RichText::new("InfraGuard").strong().size(20.0).color(Color32::WHITE));
        ui.label(RichText::new("AI").strong().size(20.0).color(palette.accent));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(
                RichText::new("SYSTEM STATUS: ONLINE")
                    .monospace()
                    .small()
                    .color(palette.muted),
            );
        });
    });
}

fn render_hero(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(12.0);
    Frame::none()
        .fill(palette.accent.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, palette.accent.gamma_multiply(0.4)))
        .rounding(12.0)
        .inner_margin(Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} NEXT-GEN FORENSICS", Icon::Zap.glyph()))
                    .small()
                    .color(palette.accent),
            );
        });

    ui.add_space(12.0);
    ui.label(RichText::new("Autonomous Road").size(40.0).strong().color(Color32::WHITE));
    ui.label(RichText::new("Damage Detection").size(40.0).strong().color(palette.cyan));
    ui.add_space(12.0);
    ui.label(
        RichText::new(
            "Leveraging ensemble deep learning to analyze structural integrity. \
             Upload inspection imagery to detect cracks, potholes, and surface fatigue instantly.",
        )
        .size(15.0)
        .color(palette.muted),
    );

    ui.add_space(24.0);
    let card_width = (ui.available_width() - 12.0) / 2.0;
    egui::Grid::new("feature_cards")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (index, card) in FEATURES.iter().enumerate() {
                render_feature_card(ui, card, card_width, palette);
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn render_feature_card(ui: &mut egui::Ui, card: &FeatureCard, width: f32, palette: &Palette) {
    Frame::none()
        .fill(palette.panel)
        .stroke(Stroke::new(1.0, palette.border))
        .rounding(12.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(width - 28.0);
            ui.label(RichText::new(card.icon.glyph()).size(18.0).color(palette.accent));
            ui.add_space(6.0);
            ui.label(RichText::new(card.title).strong().color(Color32::WHITE));
            ui.label(RichText::new(card.desc).small().color(palette.muted));
        });
}

fn render_window_dots(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for color in [Color32::RED, Color32::YELLOW, Color32::GREEN] {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, color.gamma_multiply(0.35));
        }
    });
}

fn render_error(ui: &mut egui::Ui, message: &str, palette: &Palette) {
    Frame::none()
        .fill(palette.danger_bg)
        .stroke(Stroke::new(1.0, palette.danger.gamma_multiply(0.4)))
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(palette.danger, Icon::AlertTriangle.glyph());
                ui.colored_label(palette.danger, message);
            });
        });
}

fn render_result(ui: &mut egui::Ui, view: &ResultView, palette: &Palette) {
    ui.separator();
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("PRIMARY DETECTION").monospace().small().color(palette.muted));
            ui.label(RichText::new(&view.prediction).size(28.0).strong().color(Color32::WHITE));
        });
        ui.with_layout(Layout::top_down(Align::Max), |ui| {
            ui.label(
                RichText::new(&view.confidence)
                    .monospace()
                    .size(28.0)
                    .strong()
                    .color(palette.accent),
            );
            ui.label(RichText::new("CONFIDENCE").monospace().small().color(palette.muted));
        });
    });

    ui.add_space(16.0);
    ui.label(RichText::new("ENSEMBLE BREAKDOWN").small().strong().color(palette.muted));
    ui.add_space(8.0);
    for bar in &view.bars {
        render_score_bar(ui, bar, palette);
    }
}

fn render_score_bar(ui: &mut egui::Ui, bar: &ScoreBar, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(bar.label).monospace().small().color(palette.muted));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(bar.value_text()).monospace().small().color(Color32::WHITE));
        });
    });

    let (track, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 6.0), Sense::hover());
    ui.painter().rect_filled(track, 2.0, palette.track);

    let mut fill = track;
    fill.set_width(track.width() * bar.fill_fraction());
    ui.painter().rect_filled(fill, 2.0, bar.color);
    ui.add_space(10.0);
}

fn render_footer(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{} InfraGuard AI", Icon::Scan.glyph()))
                .strong()
                .color(palette.muted),
        );

        ui.with_layout(Layout::top_down(Align::Max), |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(RichText::new("Modern App").color(palette.muted));
                ui.label(RichText::new("InfraGuard AI").color(palette.text));
                ui.label(RichText::new("was designed by").color(palette.muted));
                ui.label(RichText::new("Suresh Maheshwari").color(palette.accent));
            });
            ui.label(
                RichText::new(format!(
                    "© {} All Systems Operational.",
                    chrono::Local::now().year()
                ))
                .small()
                .color(palette.muted),
            );
        });
    });
}
