//! Header and footer chrome shared by every page.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::routes::Route;
use crate::Theme;

/// Header: product name, current page path, session state.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    route: Route,
    username: Option<&str>,
) {
    let session = match username {
        Some(name) => Span::styled(format!(" {name} "), Style::default().fg(theme.success)),
        None => Span::styled(" not logged in ", Style::default().fg(theme.muted)),
    };
    let line = Line::from(vec![
        Span::styled(" MentalWell ", theme.bold.fg(theme.accent)),
        Span::styled(route.path(), Style::default().fg(theme.muted)),
        Span::raw(" "),
        session,
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.selection)), area);
}

/// Footer: key hints for the current page.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, route: Route) {
    let hints = match route {
        Route::Home => "↑/↓ choose  Enter open  q quit",
        Route::Login => "Tab next field  Enter submit  Ctrl-N login/signup  Esc back",
        Route::Cognitive => "1-9 answer  ←/→ previous/next  Enter submit  Esc leave",
        Route::Emotion => "Tab mode  type path  Enter stage/submit  Ctrl-U unstage  Esc leave",
        Route::Results => "Esc back  q quit",
        _ => "Esc back  q quit",
    };
    let line = Line::from(Span::styled(format!(" {hints}"), Style::default().fg(theme.muted)));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_footer_hints() {
        // The match above must not panic for any route; spot-check a few
        // via direct calls is impossible without a Frame, so assert the
        // hint table stays total by listing the specialized ones.
        for route in [Route::Home, Route::Login, Route::Cognitive, Route::Emotion] {
            assert!(!route.title().is_empty());
        }
    }
}
