//! Color palettes for the terminal views.
//!
//! A [`Theme`] is passed explicitly to every render function; there is no
//! global style state.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub selected_text: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::palette([205, 245, 0, 252, 255, 205, 196, 46])
    }
}

impl Theme {
    pub const NAMES: [&'static str; 5] = ["default", "dracula", "nord", "gruvbox", "solarized"];

    /// Theme by config name; unknown names fall back to the default palette.
    pub fn named(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dracula" => Self::palette([141, 61, 236, 253, 255, 141, 203, 84]),
            "nord" => Self::palette([110, 109, 237, 254, 255, 110, 167, 108]),
            "gruvbox" => Self::palette([214, 142, 235, 223, 229, 214, 167, 142]),
            "solarized" => Self::palette([136, 37, 234, 247, 254, 136, 160, 64]),
            "default" => Self::default(),
            other => {
                log::warn!("Unknown theme '{other}', using default");
                Self::default()
            }
        }
    }

    // primary, secondary, background, text, selected text, border, error, success
    fn palette(c: [u8; 8]) -> Self {
        Self {
            primary: Color::Indexed(c[0]),
            secondary: Color::Indexed(c[1]),
            background: Color::Indexed(c[2]),
            text: Color::Indexed(c[3]),
            selected_text: Color::Indexed(c[4]),
            border: Color::Indexed(c[5]),
            error: Color::Indexed(c[6]),
            success: Color::Indexed(c[7]),
        }
    }

    /// Fill for the whole frame
    pub fn base(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn item(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_text)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Badge style for the favorites-only indicator
    pub fn badge(&self) -> Style {
        Style::default().fg(Color::Indexed(0)).bg(self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes() {
        assert_eq!(Theme::named("default"), Theme::default());
        assert_eq!(Theme::named("Nord").primary, Color::Indexed(110));
        assert_eq!(Theme::named("no-such-theme"), Theme::default());
        for name in &Theme::NAMES[1..] {
            assert_ne!(Theme::named(name), Theme::default(), "{name}");
        }
    }
}
