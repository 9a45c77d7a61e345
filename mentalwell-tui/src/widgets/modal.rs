//! Centered modal dialogs.
//!
//! Two shapes: a plain message modal (completion acknowledgments) and the
//! emotion-results summary. Which modal is visible is decided by the flow
//! state machines, never by independent booleans, so two modals can never
//! stack.

use mentalwell_core::EmotionScores;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Theme;

/// Centered rect of the given size, clamped to the frame.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Render a message modal with a dismiss hint.
pub fn render_message_modal(frame: &mut Frame, theme: &Theme, title: &str, message: &str) {
    let area = centered(frame.area(), 56, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.fg))),
        Line::default(),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(theme.accent)),
            Span::styled(" Continue", Style::default().fg(theme.fg)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }), inner);
}

/// Render the emotion analysis summary: one line per label with a small
/// inline bar, dismissable with Enter.
pub fn render_results_modal(frame: &mut Frame, theme: &Theme, scores: &EmotionScores) {
    let labels = scores.0.len() as u16;
    let area = centered(frame.area(), 56, labels + 6);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Emotion Analysis Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if scores.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores returned.",
            Style::default().fg(theme.muted),
        )));
    }
    for (label, score) in scores.iter() {
        let percent = (score * 100.0).round() as usize;
        let filled = (percent / 5).min(20);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>10} "), Style::default().fg(theme.fg)),
            Span::styled(bar, Style::default().fg(theme.accent)),
            Span::styled(format!(" {percent:>3}%"), Style::default().fg(theme.muted)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(theme.accent)),
        Span::styled(" Continue", Style::default().fg(theme.fg)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered(area, 56, 7);
        assert_eq!(rect.width, 56);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.x, 22);
        assert_eq!(rect.y, 16);
    }

    #[test]
    fn centered_rect_clamps_to_small_frames() {
        let area = Rect::new(0, 0, 30, 6);
        let rect = centered(area, 56, 7);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
