//! Static informational pages: about, how it works, contact, legal.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::traits::ViewRenderer;
use crate::App;
use crate::routes::Route;

/// One static page, selected by route.
#[derive(Debug, Clone)]
pub struct InfoView {
    route: Route,
}

impl InfoView {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    fn body(&self) -> &'static str {
        match self.route {
            Route::About => {
                "MentalWell was built around a simple idea: mental wellness is \
easier to care for when you can see it.\n\n\
We pair a structured cognitive questionnaire with facial emotion analysis \
so you get more than a single number. The questionnaire looks at memory, \
attention, and problem solving; the emotion analysis reads the feelings \
you may not notice yourself. Together they form a combined wellness score \
you can track over time.\n\n\
Your assessments belong to you. We never share individual results, and \
you can stop using the service at any point."
            }
            Route::HowItWorks => {
                "1. Create an account and log in.\n\n\
2. Take the cognitive assessment: a short multiple-choice questionnaire, \
one question at a time, with free movement back and forth before you \
submit.\n\n\
3. Run the facial emotion detection: upload a short video (up to 10 MB) \
or a set of photos of your face. The analysis returns a score for each \
detected emotion.\n\n\
4. Open your results: both assessments combine into a single wellness \
score, weighted toward your emotional state, with suggested areas of \
improvement from the questionnaire."
            }
            Route::Contact => {
                "We read every message.\n\n\
Email: support@mentalwell.example\n\
Hours: Monday to Friday, 9:00-17:00\n\n\
For account problems include the email address you signed up with. \
For assessment problems include roughly when you took the test, and \
we will look into it."
            }
            Route::Privacy => {
                "What we collect: your account details (name, username, email) \
and the assessments you choose to take.\n\n\
What we do with it: uploaded videos and photos are processed to produce \
emotion scores and are not retained after analysis. Questionnaire answers \
are stored so your results page can show them back to you.\n\n\
What we never do: sell your data, share individual results with third \
parties, or use your uploads for anything other than your own analysis.\n\n\
You can request deletion of your account and all associated results at \
any time via the contact page."
            }
            Route::Terms => {
                "MentalWell is a self-assessment aid, not a medical service. \
Scores and suggestions are informational and do not constitute a \
diagnosis; if you are concerned about your mental health, talk to a \
qualified professional.\n\n\
You agree to upload only media of yourself and to keep your account \
credentials private. We may suspend accounts that abuse the service.\n\n\
The service is provided as-is. We work to keep it available and accurate \
but do not guarantee either."
            }
            _ => "",
        }
    }
}

impl ViewRenderer for InfoView {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .title(format!(" {} ", self.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = Paragraph::new(self.body())
            .style(Style::default().fg(app.theme.fg))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }

    fn title(&self) -> &str {
        self.route.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_static_page_has_a_body() {
        for route in [
            Route::About,
            Route::HowItWorks,
            Route::Contact,
            Route::Privacy,
            Route::Terms,
        ] {
            assert!(!InfoView::new(route).body().is_empty(), "{route:?}");
        }
    }

    #[test]
    fn title_comes_from_the_route() {
        assert_eq!(InfoView::new(Route::About).title(), Route::About.title());
    }
}
