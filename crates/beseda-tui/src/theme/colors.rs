//! Catppuccin Mocha color palette for the TUI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,

    // Foregrounds
    pub text: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub error: Color,

    // Bubble backgrounds
    pub user_bubble: Color,
    pub assistant_bubble: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46), // #1e1e2e

            // Foregrounds
            text: Color::Rgb(205, 214, 244), // #cdd6f4
            muted: Color::Rgb(108, 112, 134), // #6c7086

            // Accents
            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            // Semantic
            error: Color::Rgb(243, 139, 168), // #f38ba8 (red)

            // Bubble backgrounds: user slightly lighter than assistant,
            // mirroring the slate-700/slate-800 pair of the web widget
            user_bubble: Color::Rgb(69, 71, 90),      // #45475a
            assistant_bubble: Color::Rgb(49, 50, 68), // #313244

            // Borders
            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_default_is_mocha() {
        let default = Theme::default();
        assert!(matches!(default.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_bubble_backgrounds_differ() {
        let theme = Theme::mocha();
        assert_ne!(theme.user_bubble, theme.assistant_bubble);
    }
}
