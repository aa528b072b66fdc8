//! Theme definitions and accent color handling

use eframe::egui::Color32;

/// Accent used when no preference is stored or the stored value does not
/// parse
pub const DEFAULT_ACCENT: &str = "#ccff00";

/// One selectable accent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// The fixed accent offering shown in the settings dialog
pub fn accent_palette() -> &'static [AccentColor] {
    &[
        AccentColor { name: "Neon Lime", value: "#ccff00" },
        AccentColor { name: "Neon Blue", value: "#00d4ff" },
        AccentColor { name: "Neon Pink", value: "#ff007a" },
        AccentColor { name: "Neon Purple", value: "#bc13fe" },
        AccentColor { name: "Cyber Red", value: "#ff3131" },
    ]
}

/// Parse a `#rrggbb` hex string
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Accent color for an arbitrary stored string, falling back to the
/// default on anything unparseable
pub fn accent_or_default(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or(Color32::from_rgb(204, 255, 0))
}

/// Dark popup theme
#[derive(Clone, Copy)]
pub struct Theme {
    pub bg: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub card_hover_bg: Color32,
    pub input_bg: Color32,

    pub fg: Color32,
    pub fg_dim: Color32,
    pub fg_faint: Color32,
    pub fg_bright: Color32,

    pub accent: Color32,
    pub accent_dim: Color32,

    pub success: Color32,
    pub error: Color32,

    pub border: Color32,
    pub border_dim: Color32,
    pub toggle_off: Color32,
}

impl Theme {
    /// Build the dark theme around a user accent
    pub fn dark(accent: Color32) -> Self {
        Self {
            bg: Color32::from_rgb(9, 9, 11),              // #09090b
            panel_bg: Color32::from_rgb(14, 14, 17),      // #0e0e11
            card_bg: Color32::from_rgb(24, 24, 27),       // #18181b
            card_hover_bg: Color32::from_rgb(32, 32, 36), // #202024
            input_bg: Color32::from_rgb(39, 39, 42),      // #27272a

            fg: Color32::from_rgb(228, 228, 231),         // #e4e4e7
            fg_dim: Color32::from_rgb(113, 113, 122),     // #71717a
            fg_faint: Color32::from_rgb(63, 63, 70),      // #3f3f46
            fg_bright: Color32::from_rgb(250, 250, 250),  // #fafafa

            accent,
            accent_dim: Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 64),

            success: Color32::from_rgb(63, 185, 80),      // #3fb950
            error: Color32::from_rgb(248, 81, 73),        // #f85149

            border: Color32::from_rgb(39, 39, 42),        // #27272a
            border_dim: Color32::from_rgb(24, 24, 27),    // #18181b
            toggle_off: Color32::from_rgb(63, 63, 70),    // #3f3f46
        }
    }

    /// Theme for a stored accent string
    pub fn from_accent(hex: &str) -> Self {
        Self::dark(accent_or_default(hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ccff00"), Some(Color32::from_rgb(204, 255, 0)));
        assert_eq!(parse_hex("#000000"), Some(Color32::from_rgb(0, 0, 0)));
        assert_eq!(parse_hex("ccff00"), None);
        assert_eq!(parse_hex("#ccff0"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_accent_or_default_falls_back() {
        assert_eq!(accent_or_default("nonsense"), Color32::from_rgb(204, 255, 0));
        assert_eq!(accent_or_default("#ff3131"), Color32::from_rgb(255, 49, 49));
    }

    #[test]
    fn test_palette_contains_default() {
        assert!(accent_palette().iter().any(|c| c.value == DEFAULT_ACCENT));
    }
}
