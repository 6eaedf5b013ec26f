use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors for the search form and the picker panel
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Selected year and the open trigger's arrow
    pub highlight: Color,
    pub dim: Color,
    /// Background of the selected panel row
    pub selection_bg: Color,
    /// Panel border while idle
    pub border: Color,
    /// Panel border and trigger label while the panel is open
    pub border_open: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            border: Color::Rgb(0x7D, 0x78, 0xBF),
            border_open: Color::Rgb(0xFB, 0x41, 0x96),
        }
    }
}

/// Parse `#RRGGBB` or the short `#RGB` form
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::Rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

impl Theme {
    fn slot_mut(&mut self, name: &str) -> Option<&mut Color> {
        let slot = match name {
            "background" => &mut self.background,
            "text" => &mut self.text,
            "text_bright" => &mut self.text_bright,
            "highlight" => &mut self.highlight,
            "dim" => &mut self.dim,
            "selection_bg" => &mut self.selection_bg,
            "border" => &mut self.border,
            "border_open" => &mut self.border_open,
            _ => return None,
        };
        Some(slot)
    }

    /// Defaults with the `[ui.colors]` overrides applied. Unknown names and
    /// unparsable colors are skipped.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value)
                && let Some(slot) = theme.slot_mut(name)
            {
                *slot = color;
            }
        }
        theme
    }
}
