//! Landing page: product pitch, navigation menu, completion badges.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::state::home_menu;

const TAGLINE: &str = "Understand your mind. Track your mood.";

const PITCH: &str = "MentalWell combines a short cognitive questionnaire with \
facial emotion analysis to give you a single picture of your mental wellness. \
Take both assessments, then visit your results for a combined score and \
personalized suggestions.";

/// The landing page.
#[derive(Debug, Clone, Default)]
pub struct HomeView;

impl HomeView {
    fn badge(done: Option<bool>) -> (&'static str, bool) {
        match done {
            Some(true) => ("completed", true),
            Some(false) => ("not taken yet", false),
            None => ("", false),
        }
    }
}

impl ViewRenderer for HomeView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let tagline = Paragraph::new(Line::from(Span::styled(
            TAGLINE,
            app.theme.bold.fg(app.theme.accent),
        )));
        frame.render_widget(tagline, chunks[0]);

        let pitch = Paragraph::new(PITCH)
            .style(Style::default().fg(app.theme.muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(pitch, chunks[1]);

        let logged_in = app.store.is_logged_in();
        let items: Vec<ListItem> = home_menu(logged_in)
            .into_iter()
            .enumerate()
            .map(|(index, (label, _))| {
                let badge = match index {
                    0 => Self::badge(app.home.cognitive_done),
                    1 => Self::badge(app.home.emotion_done),
                    _ => ("", false),
                };
                let mut spans = vec![Span::styled(
                    format!("  {label:<28}"),
                    Style::default().fg(app.theme.fg),
                )];
                if !badge.0.is_empty() {
                    let color = if badge.1 {
                        app.theme.success
                    } else {
                        app.theme.muted
                    };
                    spans.push(Span::styled(badge.0, Style::default().fg(color)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            )
            .highlight_style(app.theme.bold.bg(app.theme.selection));
        let mut list_state = ListState::default().with_selected(Some(app.home.selected));
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    }

    fn title(&self) -> &str {
        "Home"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_has_correct_title() {
        let view = HomeView;
        assert_eq!(view.title(), "Home");
    }

    #[test]
    fn badges_reflect_fetch_state() {
        assert_eq!(HomeView::badge(None).0, "");
        assert_eq!(HomeView::badge(Some(true)), ("completed", true));
        assert_eq!(HomeView::badge(Some(false)), ("not taken yet", false));
    }
}
