//! Route table and private-route gating.
//!
//! The route set mirrors the product's page map: public marketing pages,
//! the login page, and three guarded pages (the two assessments and the
//! results dashboard). Navigation to a guarded route while the session
//! guard reports invalid replaces the attempt with the login page; the
//! blocked route is never recorded in history, so "back" can never land on
//! it.

/// Every page the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    HowItWorks,
    Contact,
    Privacy,
    Terms,
    Login,
    Cognitive,
    Emotion,
    Results,
}

impl Route {
    /// URL-style path, kept for log lines and the header breadcrumb.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::HowItWorks => "/how-it-works",
            Route::Contact => "/contact",
            Route::Privacy => "/privacy-policy",
            Route::Terms => "/terms",
            Route::Login => "/login",
            Route::Cognitive => "/cognitive-assessment",
            Route::Emotion => "/emotion-detection",
            Route::Results => "/results",
        }
    }

    /// Page title for the header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "MentalWell",
            Route::About => "About Us",
            Route::HowItWorks => "How It Works",
            Route::Contact => "Contact Us",
            Route::Privacy => "Privacy Policy",
            Route::Terms => "Terms of Service",
            Route::Login => "Login",
            Route::Cognitive => "Cognitive Assessment",
            Route::Emotion => "Facial Emotion Detection",
            Route::Results => "Assessment Results",
        }
    }

    /// Whether the route requires a valid session.
    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Cognitive | Route::Emotion | Route::Results)
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The requested route is now current.
    Moved,
    /// The route was guarded and the session invalid; login is current.
    RedirectedToLogin,
}

/// History-stack router.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    /// A router starting at the landing page.
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Navigate to a route, honoring the private-route guard.
    ///
    /// `session_valid` is the session guard's verdict at the moment of the
    /// attempt. A blocked attempt pushes Login instead of the target: the
    /// guarded route leaves no history entry.
    pub fn navigate(&mut self, route: Route, session_valid: bool) -> NavOutcome {
        if route.is_guarded() && !session_valid {
            self.push(Route::Login);
            return NavOutcome::RedirectedToLogin;
        }
        self.push(route);
        NavOutcome::Moved
    }

    /// Replace the current route without touching history.
    pub fn replace(&mut self, route: Route) {
        self.current = route;
    }

    /// Pop to the previous route; false when already at the root.
    pub fn back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Drop all history and land on a route. Used after flows finish and
    /// after logout.
    pub fn reset_to(&mut self, route: Route) {
        self.history.clear();
        self.current = route;
    }

    fn push(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        self.history.push(std::mem::replace(&mut self.current, route));
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_starts_at_home() {
        let router = Router::new();
        assert_eq!(router.current(), Route::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn public_routes_are_not_guarded() {
        for route in [
            Route::Home,
            Route::About,
            Route::HowItWorks,
            Route::Contact,
            Route::Privacy,
            Route::Terms,
            Route::Login,
        ] {
            assert!(!route.is_guarded(), "{route:?} should be public");
        }
    }

    #[test]
    fn assessment_and_results_routes_are_guarded() {
        assert!(Route::Cognitive.is_guarded());
        assert!(Route::Emotion.is_guarded());
        assert!(Route::Results.is_guarded());
    }

    #[test]
    fn navigation_to_public_route_moves() {
        let mut router = Router::new();
        let outcome = router.navigate(Route::About, false);
        assert_eq!(outcome, NavOutcome::Moved);
        assert_eq!(router.current(), Route::About);
    }

    #[test]
    fn guarded_route_with_valid_session_moves() {
        let mut router = Router::new();
        let outcome = router.navigate(Route::Cognitive, true);
        assert_eq!(outcome, NavOutcome::Moved);
        assert_eq!(router.current(), Route::Cognitive);
    }

    #[test]
    fn guarded_route_without_session_redirects_to_login() {
        let mut router = Router::new();
        let outcome = router.navigate(Route::Results, false);
        assert_eq!(outcome, NavOutcome::RedirectedToLogin);
        assert_eq!(router.current(), Route::Login);
    }

    #[test]
    fn blocked_attempt_leaves_no_history_entry() {
        let mut router = Router::new();
        router.navigate(Route::Results, false);
        assert_eq!(router.current(), Route::Login);

        // Back returns to Home, never to the blocked Results page.
        assert!(router.back());
        assert_eq!(router.current(), Route::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn back_walks_history_in_order() {
        let mut router = Router::new();
        router.navigate(Route::About, false);
        router.navigate(Route::Contact, false);

        assert!(router.back());
        assert_eq!(router.current(), Route::About);
        assert!(router.back());
        assert_eq!(router.current(), Route::Home);
        assert!(!router.back());
    }

    #[test]
    fn navigating_to_the_current_route_is_a_no_op() {
        let mut router = Router::new();
        router.navigate(Route::Home, false);
        assert!(!router.can_go_back());
    }

    #[test]
    fn replace_does_not_touch_history() {
        let mut router = Router::new();
        router.navigate(Route::About, false);
        router.replace(Route::Contact);
        assert_eq!(router.current(), Route::Contact);
        assert!(router.back());
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn reset_to_clears_history() {
        let mut router = Router::new();
        router.navigate(Route::About, false);
        router.navigate(Route::Contact, false);
        router.reset_to(Route::Home);
        assert_eq!(router.current(), Route::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn every_route_has_a_path_and_title() {
        for route in [
            Route::Home,
            Route::About,
            Route::HowItWorks,
            Route::Contact,
            Route::Privacy,
            Route::Terms,
            Route::Login,
            Route::Cognitive,
            Route::Emotion,
            Route::Results,
        ] {
            assert!(route.path().starts_with('/'));
            assert!(!route.title().is_empty());
        }
    }
}
