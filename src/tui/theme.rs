use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4F, 0xA8, 0xFF),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            red: Color::Rgb(0xE8, 0x4A, 0x4A),
            yellow: Color::Rgb(0xE8, 0xC5, 0x4A),
            green: Color::Rgb(0x4A, 0xD8, 0x7C),
            selection_bg: Color::Rgb(0x22, 0x32, 0x4A),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x10, 0x10, 0x18),
        }
    }
}

impl Theme {
    /// Build the theme from config, falling back to defaults for colors
    /// that are absent or unparseable.
    pub fn from_config(ui: &UiConfig) -> Theme {
        let mut theme = Theme::default();
        for (name, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match name.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                "search_match_bg" => theme.search_match_bg = color,
                "search_match_fg" => theme.search_match_fg = color,
                _ => {}
            }
        }
        theme
    }

    /// Color for a status marker/label.
    pub fn status_color(&self, status: crate::model::task::Status) -> Color {
        use crate::model::task::Status;
        match status {
            Status::Open => self.text,
            Status::InProgress => self.yellow,
            Status::Done => self.green,
        }
    }
}

/// Parse `#RRGGBB` into a Color.
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0080"), Some(Color::Rgb(0xFF, 0x00, 0x80)));
        assert_eq!(parse_hex_color("FF0080"), None);
        assert_eq!(parse_hex_color("#FF008"), None);
        assert_eq!(parse_hex_color("#GG0080"), None);
    }

    #[test]
    fn test_from_config_overrides_known_names_only() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#123456".to_string());
        colors.insert("no_such_color".to_string(), "#654321".to_string());
        let ui = UiConfig {
            show_key_hints: false,
            colors,
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.background, Theme::default().background);
    }
}
