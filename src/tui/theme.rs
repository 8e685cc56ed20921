//! Theme system for TUI colors and styles
//!
//! Colors line up with the CLI output in `display` (yellow stars, magenta genre, cyan ids).

use iocraft::prelude::Color;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Rating colors
    pub rating_high: Color,
    pub rating_mid: Color,
    pub rating_low: Color,

    pub genre: Color,
    pub year: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            rating_high: Color::Yellow,
            rating_mid: Color::DarkYellow,
            rating_low: GRAY,

            genre: Color::Magenta,
            year: GRAY,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Color for a 0-5 rating
    pub fn rating_color(&self, rating: f64) -> Color {
        if rating >= 4.0 {
            self.rating_high
        } else if rating >= 2.5 {
            self.rating_mid
        } else {
            self.rating_low
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_color_bands() {
        let theme = theme();
        assert_eq!(theme.rating_color(4.5), theme.rating_high);
        assert_eq!(theme.rating_color(3.0), theme.rating_mid);
        assert_eq!(theme.rating_color(1.0), theme.rating_low);
    }
}
