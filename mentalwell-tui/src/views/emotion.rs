//! Facial emotion detection page: stage a video or photos, submit for
//! analysis.

use mentalwell_core::{UploadMode, UploadPhase, UploadSelection};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;

/// The upload page.
#[derive(Debug, Clone, Default)]
pub struct EmotionView;

impl EmotionView {
    fn mode_tabs(app: &App) -> Line<'static> {
        let (video_style, images_style) = match app.upload.mode() {
            UploadMode::Video => (
                app.theme.bold.fg(app.theme.accent),
                Style::default().fg(app.theme.muted),
            ),
            UploadMode::Images => (
                Style::default().fg(app.theme.muted),
                app.theme.bold.fg(app.theme.accent),
            ),
        };
        Line::from(vec![
            Span::styled(" Video ", video_style),
            Span::raw("  "),
            Span::styled(" Photos ", images_style),
        ])
    }

    fn staged_items(app: &App) -> Vec<ListItem<'static>> {
        match app.upload.selection() {
            UploadSelection::None => vec![ListItem::new(Line::from(Span::styled(
                "  nothing staged yet",
                Style::default().fg(app.theme.muted),
            )))],
            UploadSelection::Video(path) => vec![ListItem::new(Line::from(Span::styled(
                format!("  {}", path.display()),
                Style::default().fg(app.theme.fg),
            )))],
            UploadSelection::Images(paths) => paths
                .iter()
                .map(|path| {
                    ListItem::new(Line::from(Span::styled(
                        format!("  {}", path.display()),
                        Style::default().fg(app.theme.fg),
                    )))
                })
                .collect(),
        }
    }
}

impl ViewRenderer for EmotionView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(2),
            ])
            .split(area);

        let instructions = match app.upload.mode() {
            UploadMode::Video => "Upload one video of your face, up to 10 MB.",
            UploadMode::Images => "Upload one or more photos of your face.",
        };
        frame.render_widget(
            Paragraph::new(instructions)
                .style(Style::default().fg(app.theme.fg))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        frame.render_widget(Paragraph::new(Self::mode_tabs(app)), chunks[1]);

        let input_title = match app.upload.mode() {
            UploadMode::Video => " Video file path ",
            UploadMode::Images => " Photo file path (Enter to add) ",
        };
        let mut input = app.upload_input.clone();
        if !app.upload.is_busy() {
            input.push('▏');
        }
        frame.render_widget(
            Paragraph::new(input)
                .style(Style::default().fg(app.theme.fg))
                .block(
                    Block::default()
                        .title(input_title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(app.theme.accent)),
                ),
            chunks[2],
        );

        frame.render_widget(
            List::new(Self::staged_items(app)).block(
                Block::default()
                    .title(" Staged ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            ),
            chunks[3],
        );

        let status = if matches!(app.upload.phase(), UploadPhase::Submitting) {
            Line::from(Span::styled(
                "Analyzing... this can take a moment.",
                Style::default().fg(app.theme.warning),
            ))
        } else if let Some(error) = app.upload.error() {
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(app.theme.error),
            ))
        } else if !app.upload.selection().is_none() && app.upload_input.is_empty() {
            Line::from(Span::styled(
                "Enter to submit for analysis",
                app.theme.bold.fg(app.theme.success),
            ))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status), chunks[4]);
    }

    fn title(&self) -> &str {
        "Facial Emotion Detection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_view_has_correct_title() {
        let view = EmotionView;
        assert_eq!(view.title(), "Facial Emotion Detection");
    }
}
