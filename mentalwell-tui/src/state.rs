//! Per-page UI state that lives outside the core flow machines.

use mentalwell_core::{CognitiveTestResult, EmotionTestResult};

use crate::routes::Route;

/// Which form the auth page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Focusable fields of the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    FullName,
    Username,
    Email,
    Password,
    Confirm,
}

impl AuthMode {
    /// Fields shown for this mode, in focus order.
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Signup => &[
                AuthField::FullName,
                AuthField::Username,
                AuthField::Email,
                AuthField::Password,
                AuthField::Confirm,
            ],
        }
    }
}

/// State of the login/signup page.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Index into `mode.fields()`.
    pub focus: usize,
    pub error: Option<String>,
    /// True while a login/signup request is in flight.
    pub busy: bool,
}

impl AuthForm {
    pub fn focused_field(&self) -> AuthField {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.mode.fields().len();
    }

    pub fn focus_previous(&mut self) {
        let len = self.mode.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Switch between login and signup, keeping typed credentials but
    /// dropping errors and focus.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.focus = 0;
        self.error = None;
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::FullName => &self.full_name,
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Confirm => &self.confirm_password,
        }
    }

    fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::FullName => &mut self.full_name,
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Confirm => &mut self.confirm_password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.busy {
            return;
        }
        let field = self.focused_field();
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        if self.busy {
            return;
        }
        let field = self.focused_field();
        self.value_mut(field).pop();
    }
}

/// State of the results dashboard.
///
/// The page fetches two independent resources; either failure fails the
/// whole page rather than rendering partially.
#[derive(Debug, Clone)]
pub enum ResultsState {
    Loading,
    Ready(Box<ResultsData>),
    Failed(String),
}

/// Everything the results dashboard renders.
#[derive(Debug, Clone)]
pub struct ResultsData {
    pub cognitive: CognitiveTestResult,
    pub emotion: EmotionTestResult,
    pub combined: f64,
}

/// Action behind a home-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Go(Route),
    Logout,
}

/// Home landing-page state: menu cursor plus completion badges.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub selected: usize,
    /// Whether the cognitive test has been completed; `None` until fetched.
    pub cognitive_done: Option<bool>,
    /// Whether an emotion analysis exists; `None` until fetched.
    pub emotion_done: Option<bool>,
}

/// Menu entries for the landing page, varying with login state.
pub fn home_menu(logged_in: bool) -> Vec<(&'static str, MenuAction)> {
    let mut entries = vec![
        ("Cognitive Assessment", MenuAction::Go(Route::Cognitive)),
        ("Facial Emotion Detection", MenuAction::Go(Route::Emotion)),
        ("Assessment Results", MenuAction::Go(Route::Results)),
        ("How It Works", MenuAction::Go(Route::HowItWorks)),
        ("About Us", MenuAction::Go(Route::About)),
        ("Contact Us", MenuAction::Go(Route::Contact)),
        ("Privacy Policy", MenuAction::Go(Route::Privacy)),
        ("Terms of Service", MenuAction::Go(Route::Terms)),
    ];
    if logged_in {
        entries.push(("Log out", MenuAction::Logout));
    } else {
        entries.push(("Log in", MenuAction::Go(Route::Login)));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_mode_has_two_fields() {
        assert_eq!(AuthMode::Login.fields().len(), 2);
        assert_eq!(AuthMode::Signup.fields().len(), 5);
    }

    #[test]
    fn focus_wraps_around() {
        let mut form = AuthForm::default();
        assert_eq!(form.focused_field(), AuthField::Email);
        form.focus_next();
        assert_eq!(form.focused_field(), AuthField::Password);
        form.focus_next();
        assert_eq!(form.focused_field(), AuthField::Email);
        form.focus_previous();
        assert_eq!(form.focused_field(), AuthField::Password);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = AuthForm::default();
        form.push_char('a');
        form.push_char('@');
        form.focus_next();
        form.push_char('p');
        assert_eq!(form.email, "a@");
        assert_eq!(form.password, "p");
        form.backspace();
        assert_eq!(form.password, "");
    }

    #[test]
    fn typing_is_ignored_while_busy() {
        let mut form = AuthForm {
            busy: true,
            ..Default::default()
        };
        form.push_char('x');
        assert_eq!(form.email, "");
    }

    #[test]
    fn toggle_mode_resets_focus_and_error() {
        let mut form = AuthForm {
            focus: 1,
            error: Some("bad".to_string()),
            ..Default::default()
        };
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Signup);
        assert_eq!(form.focus, 0);
        assert!(form.error.is_none());
    }

    #[test]
    fn toggle_mode_keeps_typed_credentials() {
        let mut form = AuthForm::default();
        form.push_char('a');
        form.toggle_mode();
        assert_eq!(form.email, "a");
    }

    #[test]
    fn focus_survives_a_mode_switch_with_fewer_fields() {
        let mut form = AuthForm {
            mode: AuthMode::Signup,
            focus: 4,
            ..Default::default()
        };
        form.mode = AuthMode::Login;
        // Out-of-range focus clamps instead of panicking.
        assert_eq!(form.focused_field(), AuthField::Password);
    }

    #[test]
    fn home_menu_offers_login_when_logged_out() {
        let entries = home_menu(false);
        assert_eq!(entries.last().unwrap().1, MenuAction::Go(Route::Login));
    }

    #[test]
    fn home_menu_offers_logout_when_logged_in() {
        let entries = home_menu(true);
        assert_eq!(entries.last().unwrap().1, MenuAction::Logout);
    }

    #[test]
    fn home_menu_leads_with_the_assessments() {
        let entries = home_menu(false);
        assert_eq!(entries[0].1, MenuAction::Go(Route::Cognitive));
        assert_eq!(entries[1].1, MenuAction::Go(Route::Emotion));
        assert_eq!(entries[2].1, MenuAction::Go(Route::Results));
    }
}
