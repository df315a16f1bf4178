//! 24-bit RGB color theme for terminal output.

use owo_colors::{OwoColorize, Rgb};

/// Color palette for score and suggestion rendering.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Strong scores - green (34, 197, 94)
    pub success: Rgb,
    /// Weak scores, high priority - red (239, 68, 68)
    pub error: Rgb,
    /// Middling scores, medium priority - yellow (234, 179, 8)
    pub warning: Rgb,
    /// Muted/secondary text color - gray (107, 114, 128)
    pub muted: Rgb,
    /// Service ID highlight color - cyan (34, 211, 238)
    pub service_id: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Rgb(34, 197, 94),
            error: Rgb(239, 68, 68),
            warning: Rgb(234, 179, 8),
            muted: Rgb(107, 114, 128),
            service_id: Rgb(34, 211, 238),
        }
    }
}

impl Theme {
    /// Create a new theme with default colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a 0..=100 score: red below 40, yellow below 70, green otherwise.
    pub fn for_score(&self, score: u8) -> Rgb {
        match score {
            0..=39 => self.error,
            40..=69 => self.warning,
            _ => self.success,
        }
    }
}

/// Apply a color when enabled, otherwise return the text unchanged.
pub fn paint(text: &str, color: Rgb, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

/// Whether color output should be enabled, respecting `NO_COLOR`.
pub fn colors_supported() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Rgb) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn test_score_colors() {
        let theme = Theme::new();
        assert_eq!(rgb(theme.for_score(0)), rgb(theme.error));
        assert_eq!(rgb(theme.for_score(39)), rgb(theme.error));
        assert_eq!(rgb(theme.for_score(40)), rgb(theme.warning));
        assert_eq!(rgb(theme.for_score(70)), rgb(theme.success));
        assert_eq!(rgb(theme.for_score(100)), rgb(theme.success));
    }

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint("60", Rgb(1, 2, 3), false), "60");
    }

    #[test]
    fn test_paint_enabled_adds_escape_codes() {
        let painted = paint("60", Rgb(1, 2, 3), true);
        assert!(painted.contains("\x1b["));
        assert!(painted.contains("60"));
    }
}
