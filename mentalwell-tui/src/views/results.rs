//! Combined results dashboard.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::state::{ResultsData, ResultsState};

/// The dashboard over both completed assessments.
#[derive(Debug, Clone, Default)]
pub struct ResultsView;

impl ResultsView {
    fn render_ready(&self, frame: &mut Frame, area: Rect, app: &App, data: &ResultsData) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Min(6),
            ])
            .split(area);

        let combined = data.combined.clamp(0.0, 100.0);
        let combined_color = if combined >= 70.0 {
            app.theme.success
        } else if combined >= 40.0 {
            app.theme.warning
        } else {
            app.theme.error
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(" Combined Wellness Score ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            )
            .gauge_style(Style::default().fg(combined_color).bg(app.theme.selection))
            .label(format!("{combined:.0} / 100"))
            .ratio(combined / 100.0);
        frame.render_widget(gauge, chunks[0]);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_cognitive_panel(frame, halves[0], app, data);
        self.render_emotion_panel(frame, halves[1], app, data);

        let mut lines = vec![Line::from(Span::styled(
            data.cognitive.test_summary.clone(),
            Style::default().fg(app.theme.fg),
        ))];
        if !data.cognitive.areas_of_improvement.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Areas of improvement:",
                app.theme.bold.fg(app.theme.accent),
            )));
            for area_name in &data.cognitive.areas_of_improvement {
                lines.push(Line::from(Span::styled(
                    format!("  • {area_name}"),
                    Style::default().fg(app.theme.fg),
                )));
            }
        }
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .title(" Summary ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(app.theme.border)),
                )
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }

    fn render_cognitive_panel(&self, frame: &mut Frame, area: Rect, app: &App, data: &ResultsData) {
        let cognitive = &data.cognitive;
        let lines = vec![
            Line::from(vec![
                Span::styled("Score      ", Style::default().fg(app.theme.muted)),
                Span::styled(
                    format!("{:.0}%", cognitive.percentage_score),
                    app.theme.bold.fg(app.theme.accent),
                ),
            ]),
            Line::from(vec![
                Span::styled("Points     ", Style::default().fg(app.theme.muted)),
                Span::styled(
                    format!("{:.0}", cognitive.total_score),
                    Style::default().fg(app.theme.fg),
                ),
            ]),
            Line::from(vec![
                Span::styled("Questions  ", Style::default().fg(app.theme.muted)),
                Span::styled(
                    cognitive.question_details.len().to_string(),
                    Style::default().fg(app.theme.fg),
                ),
            ]),
            Line::from(vec![
                Span::styled("Taken      ", Style::default().fg(app.theme.muted)),
                Span::styled(
                    cognitive.submitted_at.clone(),
                    Style::default().fg(app.theme.fg),
                ),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(" Cognitive ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            ),
            area,
        );
    }

    fn render_emotion_panel(&self, frame: &mut Frame, area: Rect, app: &App, data: &ResultsData) {
        let emotion = &data.emotion;
        let mut lines = Vec::new();
        for (label, score) in emotion.scores.iter() {
            let percent = (score * 100.0).round() as usize;
            let filled = (percent / 10).min(10);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
            lines.push(Line::from(vec![
                Span::styled(format!("{label:>10} "), Style::default().fg(app.theme.muted)),
                Span::styled(bar, Style::default().fg(app.theme.accent)),
                Span::styled(format!(" {percent:>3}%"), Style::default().fg(app.theme.fg)),
            ]));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "no emotion scores",
                Style::default().fg(app.theme.muted),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(format!(" Emotions ({}) ", emotion.kind))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            ),
            area,
        );
    }
}

impl ViewRenderer for ResultsView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        match &app.results {
            ResultsState::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading your results...")
                        .style(Style::default().fg(app.theme.muted)),
                    area,
                );
            }
            ResultsState::Ready(data) => self.render_ready(frame, area, app, data),
            ResultsState::Failed(message) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Could not load your results.",
                        app.theme.bold.fg(app.theme.error),
                    )),
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(app.theme.muted),
                    )),
                    Line::default(),
                    Line::from(Span::styled(
                        "Complete both assessments, then come back here.",
                        Style::default().fg(app.theme.fg),
                    )),
                ];
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
            }
        }
    }

    fn title(&self) -> &str {
        "Assessment Results"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_view_has_correct_title() {
        let view = ResultsView;
        assert_eq!(view.title(), "Assessment Results");
    }
}
