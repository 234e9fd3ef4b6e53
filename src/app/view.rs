use crate::analysis::{AnalysisResult, Breakdown};
use crate::utils::color::Palette;
use eframe::egui::Color32;

/// Renders a [0, 1] score as a percentage with one decimal, e.g. `87.3%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cpu,
    Activity,
    ShieldCheck,
    Upload,
    Scan,
    Zap,
    AlertTriangle,
    ChevronRight,
    RefreshCw,
    Image,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cpu => "🖥",
            Icon::Activity => "📈",
            Icon::ShieldCheck => "🛡",
            Icon::Upload => "📤",
            Icon::Scan => "🔍",
            Icon::Zap => "⚡",
            Icon::AlertTriangle => "⚠",
            Icon::ChevronRight => "▶",
            Icon::RefreshCw => "🔄",
            Icon::Image => "🖼",
        }
    }
}

pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: Icon::Cpu,
        title: "Multi-Model Core",
        desc: "Combines CNN, SVM, and Random Forest for 99% accuracy.",
    },
    FeatureCard {
        icon: Icon::Activity,
        title: "Real-time Analysis",
        desc: "Instant processing via optimized FastAPI backend pipelines.",
    },
    FeatureCard {
        icon: Icon::ShieldCheck,
        title: "Grade-A Reliability",
        desc: "Enterprise-grade damage classification standards.",
    },
];

/// One row of the ensemble breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub score: f64,
    pub color: Color32,
}

impl ScoreBar {
    pub fn value_text(&self) -> String {
        format_percent(self.score)
    }

    /// Share of the track that is filled, in percent.
    pub fn width_percent(&self) -> f64 {
        self.score * 100.0
    }

    pub fn fill_fraction(&self) -> f32 {
        (self.width_percent() / 100.0).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub prediction: String,
    pub confidence: String,
    pub bars: [ScoreBar; 3],
}

impl ResultView {
    pub fn new(result: &AnalysisResult, palette: &Palette) -> Self {
        Self {
            prediction: capitalize(&result.final_prediction),
            confidence: format_percent(result.confidence_score),
            bars: breakdown_bars(&result.breakdown, palette),
        }
    }
}

fn breakdown_bars(breakdown: &Breakdown, palette: &Palette) -> [ScoreBar; 3] {
    [
        ScoreBar {
            label: "CNN (Deep Learning)",
            score: breakdown.cnn_confidence,
            color: palette.cyan,
        },
        ScoreBar {
            label: "Random Forest (Texture)",
            score: breakdown.rf_confidence,
            color: palette.emerald,
        },
        ScoreBar {
            label: "SVM (Structure)",
            score: breakdown.svm_confidence,
            color: palette.amber,
        },
    ]
}

fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> AnalysisResult {
        AnalysisResult {
            final_prediction: "alligator crack".to_string(),
            confidence_score: 0.873,
            breakdown: Breakdown {
                svm_confidence: 0.25,
                rf_confidence: 0.912,
                cnn_confidence: 0.5,
            },
        }
    }

    #[test]
    fn confidence_has_one_decimal() {
        let view = ResultView::new(&result(), &Palette::default());
        assert_eq!(view.confidence, "87.3%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn cnn_bar_is_half_width() {
        let view = ResultView::new(&result(), &Palette::default());
        let cnn = &view.bars[0];
        assert_eq!(cnn.label, "CNN (Deep Learning)");
        assert_eq!(cnn.width_percent(), 50.0);
        assert_eq!(cnn.fill_fraction(), 0.5);
        assert_eq!(cnn.value_text(), "50.0%");
    }

    #[test]
    fn bars_follow_cnn_rf_svm_order() {
        let view = ResultView::new(&result(), &Palette::default());
        let labels: Vec<_> = view.bars.iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            ["CNN (Deep Learning)", "Random Forest (Texture)", "SVM (Structure)"]
        );
        assert_eq!(view.bars[1].value_text(), "91.2%");
    }

    #[test]
    fn prediction_is_shown_capitalized() {
        let view = ResultView::new(&result(), &Palette::default());
        assert_eq!(view.prediction, "Alligator Crack");
    }

    #[test]
    fn out_of_range_scores_do_not_overflow_the_track() {
        let bar = ScoreBar {
            label: "x",
            score: 1.4,
            color: Color32::WHITE,
        };
        assert_eq!(bar.fill_fraction(), 1.0);
    }

    #[test]
    fn drawn_fill_tracks_width_percent() {
        let bar = ScoreBar {
            label: "x",
            score: 0.25,
            color: Color32::WHITE,
        };
        assert_eq!(bar.width_percent(), 25.0);
        assert_eq!(bar.fill_fraction(), 0.25);
    }
}
