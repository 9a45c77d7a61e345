//! Cognitive assessment page: one question at a time.

use mentalwell_core::AssessmentPhase;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;

/// The questionnaire wizard.
#[derive(Debug, Clone, Default)]
pub struct AssessmentView;

impl AssessmentView {
    fn render_question(&self, frame: &mut Frame, area: Rect, app: &App, current: usize) {
        let flow = &app.assessment;
        let Some(question) = flow.current_question() else {
            frame.render_widget(
                Paragraph::new("No questions available.")
                    .style(Style::default().fg(app.theme.muted)),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let ratio = if flow.len() == 0 {
            0.0
        } else {
            (current + 1) as f64 / flow.len() as f64
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(app.theme.accent).bg(app.theme.selection))
            .label(format!("Question {} of {}", current + 1, flow.len()))
            .ratio(ratio);
        frame.render_widget(gauge, chunks[0]);

        let text = Paragraph::new(Line::from(Span::styled(
            question.text.clone(),
            app.theme.bold.fg(app.theme.fg),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(text, chunks[2]);

        let selected = flow.current_answer().unwrap_or("");
        let items: Vec<ListItem> = question
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let marker = if option == selected { "●" } else { "○" };
                let style = if option == selected {
                    app.theme.bold.fg(app.theme.accent)
                } else {
                    Style::default().fg(app.theme.fg)
                };
                ListItem::new(Line::from(Span::styled(
                    format!("  {} {} {}", index + 1, marker, option),
                    style,
                )))
            })
            .collect();
        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            ),
            chunks[3],
        );

        let nav = if flow.can_submit() {
            Span::styled("Enter to submit your answers", app.theme.bold.fg(app.theme.success))
        } else if flow.is_last() {
            Span::styled("Answer this question to submit", Style::default().fg(app.theme.muted))
        } else if flow.can_advance() {
            Span::styled("→ next question", Style::default().fg(app.theme.muted))
        } else {
            Span::styled("Pick an answer to continue", Style::default().fg(app.theme.muted))
        };
        frame.render_widget(Paragraph::new(Line::from(nav)), chunks[4]);
    }
}

impl ViewRenderer for AssessmentView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        match app.assessment.phase() {
            AssessmentPhase::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading questions...")
                        .style(Style::default().fg(app.theme.muted)),
                    area,
                );
            }
            AssessmentPhase::InProgress { current } => {
                self.render_question(frame, area, app, *current);
            }
            AssessmentPhase::Submitting => {
                frame.render_widget(
                    Paragraph::new("Submitting your answers...")
                        .style(Style::default().fg(app.theme.warning)),
                    area,
                );
            }
            // The completion modal is drawn over the page by the app.
            AssessmentPhase::Complete => {}
            AssessmentPhase::Failed { message } => {
                frame.render_widget(
                    Paragraph::new(format!("Could not load the assessment: {message}"))
                        .style(Style::default().fg(app.theme.error))
                        .wrap(Wrap { trim: true }),
                    area,
                );
            }
        }
    }

    fn title(&self) -> &str {
        "Cognitive Assessment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_view_has_correct_title() {
        let view = AssessmentView;
        assert_eq!(view.title(), "Cognitive Assessment");
    }
}
