//! Login and signup page.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::state::{AuthField, AuthForm, AuthMode};

/// The authentication page, switching between login and signup forms.
#[derive(Debug, Clone, Default)]
pub struct LoginView;

impl LoginView {
    fn label(field: AuthField) -> &'static str {
        match field {
            AuthField::FullName => "Full name",
            AuthField::Username => "Username",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::Confirm => "Confirm password",
        }
    }

    fn display_value(form: &AuthForm, field: AuthField) -> String {
        let value = form.value(field);
        match field {
            AuthField::Password | AuthField::Confirm => "•".repeat(value.chars().count()),
            _ => value.to_string(),
        }
    }
}

impl ViewRenderer for LoginView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let form = &app.auth;
        let fields = form.mode.fields();

        let heading = match form.mode {
            AuthMode::Login => "Log in to MentalWell",
            AuthMode::Signup => "Create your MentalWell account",
        };
        let switch_hint = match form.mode {
            AuthMode::Login => "No account yet? Ctrl-N to sign up.",
            AuthMode::Signup => "Already registered? Ctrl-N to log in.",
        };

        // Heading, one 3-row box per field, status line, switch hint.
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(3), fields.len()));
        constraints.push(Constraint::Length(2));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default().constraints(constraints).split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                heading,
                app.theme.bold.fg(app.theme.accent),
            ))),
            chunks[0],
        );

        for (index, field) in fields.iter().enumerate() {
            let focused = index == form.focus.min(fields.len() - 1);
            let border = if focused {
                Style::default().fg(app.theme.accent)
            } else {
                Style::default().fg(app.theme.border)
            };
            let mut value = Self::display_value(form, *field);
            if focused && !form.busy {
                value.push('▏');
            }
            let input = Paragraph::new(value)
                .style(Style::default().fg(app.theme.fg))
                .block(
                    Block::default()
                        .title(format!(" {} ", Self::label(*field)))
                        .borders(Borders::ALL)
                        .border_style(border),
                );
            frame.render_widget(input, chunks[index + 1]);
        }

        let status = if form.busy {
            Line::from(Span::styled(
                "Contacting server...",
                Style::default().fg(app.theme.warning),
            ))
        } else if let Some(error) = &form.error {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(app.theme.error),
            ))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(status), chunks[fields.len() + 1]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                switch_hint,
                Style::default().fg(app.theme.muted),
            ))),
            chunks[fields.len() + 2],
        );
    }

    fn title(&self) -> &str {
        "Login"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_view_has_correct_title() {
        let view = LoginView;
        assert_eq!(view.title(), "Login");
    }

    #[test]
    fn passwords_render_masked() {
        let form = AuthForm {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        assert_eq!(LoginView::display_value(&form, AuthField::Password), "•••••••");
    }

    #[test]
    fn plain_fields_render_verbatim() {
        let form = AuthForm {
            email: "a@b.c".to_string(),
            ..Default::default()
        };
        assert_eq!(LoginView::display_value(&form, AuthField::Email), "a@b.c");
    }
}
