use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

fn hex_or(hex: &str, fallback: Color32) -> Color32 {
    Color32::from_hex(hex).unwrap_or(fallback)
}

/// Dark neutral theme with indigo accents.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub border: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub cyan: Color32,
    pub emerald: Color32,
    pub amber: Color32,
    pub danger: Color32,
    pub danger_bg: Color32,
    pub track: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: hex_or("#0a0a0a", Color32::BLACK),
            panel: hex_or("#171717", Color32::DARK_GRAY),
            border: hex_or("#262626", Color32::DARK_GRAY),
            text: hex_or("#e5e5e5", Color32::LIGHT_GRAY),
            muted: hex_or("#737373", Color32::GRAY),
            accent: hex_or("#6366f1", Color32::from_rgb(99, 102, 241)),
            cyan: hex_or("#06b6d4", Color32::LIGHT_BLUE),
            emerald: hex_or("#10b981", Color32::GREEN),
            amber: hex_or("#f59e0b", Color32::YELLOW),
            danger: hex_or("#f87171", Color32::RED),
            danger_bg: hex_or("#2a1314", Color32::DARK_RED),
            track: hex_or("#262626", Color32::DARK_GRAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Color32::from_hex("#6366f1"), Some(Color32::from_rgb(99, 102, 241)));
        assert_eq!(Color32::from_hex("10b981"), Some(Color32::from_rgb(16, 185, 129)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color32::from_hex("#fff"), None);
        assert_eq!(Color32::from_hex("#zzzzzz"), None);
        assert_eq!(Color32::from_hex("#aébcd"), None);
    }
}
