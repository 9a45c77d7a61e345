//! Theme for the MentalWell TUI.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Calm clinical palette: soft blue for structure, teal for progress,
/// amber for warnings.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection: Color,
    pub muted: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
}

/// Creates the default MentalWell theme.
pub fn mentalwell_default() -> Theme {
    let fg = Color::Rgb(220, 226, 235); // soft off-white

    Theme {
        name: "mentalwell".into(),

        bg: Color::Rgb(16, 20, 28),        // #10141c
        fg,
        accent: Color::Rgb(86, 156, 255),  // #569cff calm blue
        success: Color::Rgb(64, 200, 160), // #40c8a0 teal
        warning: Color::Rgb(255, 190, 70), // #ffbe46 amber
        error: Color::Rgb(255, 95, 95),    // #ff5f5f

        border: Color::Rgb(60, 70, 90),     // #3c465a
        selection: Color::Rgb(40, 60, 100), // #283c64
        muted: Color::Rgb(130, 140, 155),   // #828c9b

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_correct_name() {
        let theme = mentalwell_default();
        assert_eq!(theme.name, "mentalwell");
    }

    #[test]
    fn theme_is_clone() {
        let theme = mentalwell_default();
        let cloned = theme.clone();
        assert_eq!(theme.name, cloned.name);
    }
}
