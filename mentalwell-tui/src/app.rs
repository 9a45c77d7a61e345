//! Main application struct and event loop.
//!
//! All network work happens on spawned tasks that report back over an
//! unbounded channel; the render loop stays synchronous. Each request
//! family carries a generation number so a reply from an abandoned page
//! is dropped instead of mutating state the user has already left.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use mentalwell_core::{
    ApiClient, AssessmentFlow, AssessmentPhase, EmotionScores, Question, SessionStore, SignupForm,
    UploadFlow, UploadMode, UploadPhase, session, score,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    style::Style,
    widgets::Block,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::routes::{NavOutcome, Route, Router};
use crate::state::{AuthForm, AuthMode, HomeState, MenuAction, ResultsData, ResultsState, home_menu};
use crate::views::{
    AssessmentView, EmotionView, HomeView, InfoView, LoginView, ResultsView, ViewRenderer,
};
use crate::widgets::{ToastQueue, render_footer, render_header, render_message_modal, render_results_modal};
use crate::{MwTerminal, Theme, mentalwell_default, restore_terminal, setup_terminal};

/// Completion of a background request, tagged with the generation that
/// started it.
#[derive(Debug)]
pub enum NetEvent {
    Questions {
        generation: u64,
        result: Result<Vec<Question>, String>,
    },
    Submission {
        generation: u64,
        result: Result<(), String>,
    },
    Analysis {
        generation: u64,
        result: Result<EmotionScores, String>,
    },
    ResultsData {
        generation: u64,
        result: Result<Box<ResultsData>, String>,
    },
    Auth {
        generation: u64,
        result: Result<String, String>,
    },
    HomeStatus {
        generation: u64,
        cognitive_done: Option<bool>,
        emotion_done: Option<bool>,
    },
}

/// One counter per request family. A reply whose generation does not
/// match the current counter belongs to a page the user already left.
#[derive(Debug, Default)]
struct Generations {
    questions: u64,
    submission: u64,
    analysis: u64,
    results: u64,
    auth: u64,
    status: u64,
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    pub api: ApiClient,
    pub store: Arc<SessionStore>,
    pub router: Router,
    pub theme: Theme,
    pub running: bool,
    pub toasts: ToastQueue,
    pub assessment: AssessmentFlow,
    pub upload: UploadFlow,
    /// Path being typed on the upload page.
    pub upload_input: String,
    pub auth: AuthForm,
    pub results: ResultsState,
    pub home: HomeState,
    events_tx: mpsc::UnboundedSender<NetEvent>,
    events_rx: mpsc::UnboundedReceiver<NetEvent>,
    generations: Generations,
}

impl App {
    /// Creates a new App around a connected API client.
    pub fn new(api: ApiClient) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let store = api.store().clone();
        let mut app = Self {
            api,
            store,
            router: Router::new(),
            theme: mentalwell_default(),
            running: true,
            toasts: ToastQueue::new(),
            assessment: AssessmentFlow::new(),
            upload: UploadFlow::new(),
            upload_input: String::new(),
            auth: AuthForm::default(),
            results: ResultsState::Loading,
            home: HomeState::default(),
            events_tx,
            events_rx,
            generations: Generations::default(),
        };
        app.refresh_home_status();
        app
    }

    /// Whether the stored session grants access to guarded pages.
    pub fn session_valid(&self) -> bool {
        session::token_is_valid(&self.store)
    }

    /// Navigate to a route, redirecting to login when the session is
    /// missing or expired.
    pub fn navigate(&mut self, route: Route) {
        match self.router.navigate(route, self.session_valid()) {
            NavOutcome::Moved => self.on_enter(route),
            NavOutcome::RedirectedToLogin => {
                debug!(?route, "guarded route blocked, redirecting to login");
                self.toasts.info("Please log in to continue.");
            }
        }
    }

    /// Page-entry side effects: reset page state and kick off fetches.
    fn on_enter(&mut self, route: Route) {
        match route {
            Route::Cognitive => {
                self.assessment = AssessmentFlow::new();
                self.fetch_questions();
            }
            Route::Emotion => {
                self.upload = UploadFlow::new();
                self.upload_input.clear();
            }
            Route::Results => {
                self.results = ResultsState::Loading;
                self.fetch_results();
            }
            Route::Home => self.refresh_home_status(),
            _ => {}
        }
    }

    fn fetch_questions(&mut self) {
        self.generations.questions += 1;
        let generation = self.generations.questions;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.questions().await.map_err(|e| e.to_string());
            let _ = tx.send(NetEvent::Questions { generation, result });
        });
    }

    fn fetch_results(&mut self) {
        self.generations.results += 1;
        let generation = self.generations.results;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            // Both halves of the dashboard or neither.
            let result = tokio::try_join!(api.cognitive_test_data(), api.emotion_test_data())
                .map(|(cognitive, emotion)| {
                    let combined =
                        score::combined_score(cognitive.percentage_score, &emotion.scores);
                    Box::new(ResultsData {
                        cognitive,
                        emotion,
                        combined,
                    })
                })
                .map_err(|e| e.to_string());
            let _ = tx.send(NetEvent::ResultsData { generation, result });
        });
    }

    /// Fetch the landing-page completion badges. Silently skipped when
    /// logged out; badge fetch failures leave the badges blank.
    fn refresh_home_status(&mut self) {
        if !self.session_valid() {
            self.home.cognitive_done = None;
            self.home.emotion_done = None;
            return;
        }
        self.generations.status += 1;
        let generation = self.generations.status;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let (cognitive, emotion) =
                tokio::join!(api.cognitive_status(), api.emotion_status());
            let _ = tx.send(NetEvent::HomeStatus {
                generation,
                cognitive_done: cognitive.ok().map(|s| s.has_completed_test),
                emotion_done: emotion.ok().map(|s| !s.data.is_empty()),
            });
        });
    }

    fn submit_assessment(&mut self) {
        let Some(payload) = self.assessment.begin_submit() else {
            return;
        };
        self.generations.submission += 1;
        let generation = self.generations.submission;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api
                .submit_assessment(&payload)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            let _ = tx.send(NetEvent::Submission { generation, result });
        });
    }

    fn submit_upload(&mut self) {
        let Some(selection) = self.upload.begin_submit() else {
            return;
        };
        self.generations.analysis += 1;
        let generation = self.generations.analysis;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.analyze(&selection).await.map_err(|e| e.to_string());
            let _ = tx.send(NetEvent::Analysis { generation, result });
        });
    }

    fn submit_auth(&mut self) {
        if self.auth.busy {
            return;
        }
        self.generations.auth += 1;
        let generation = self.generations.auth;
        let api = self.api.clone();
        let tx = self.events_tx.clone();
        match self.auth.mode {
            AuthMode::Login => {
                if self.auth.email.is_empty() || self.auth.password.is_empty() {
                    self.auth.error = Some("enter your email and password".to_string());
                    return;
                }
                let email = self.auth.email.clone();
                let password = self.auth.password.clone();
                self.auth.busy = true;
                self.auth.error = None;
                tokio::spawn(async move {
                    let result = api
                        .login(&email, &password)
                        .await
                        .map(|_| email)
                        .map_err(|e| e.to_string());
                    let _ = tx.send(NetEvent::Auth { generation, result });
                });
            }
            AuthMode::Signup => {
                let form = SignupForm {
                    username: self.auth.username.clone(),
                    email: self.auth.email.clone(),
                    password: self.auth.password.clone(),
                    confirm_password: self.auth.confirm_password.clone(),
                    full_name: self.auth.full_name.clone(),
                };
                let request = match form.into_request() {
                    Ok(request) => request,
                    Err(error) => {
                        self.auth.error = Some(error.to_string());
                        return;
                    }
                };
                let email = request.email.clone();
                self.auth.busy = true;
                self.auth.error = None;
                tokio::spawn(async move {
                    let result = api
                        .register(&request)
                        .await
                        .map(|_| email)
                        .map_err(|e| e.to_string());
                    let _ = tx.send(NetEvent::Auth { generation, result });
                });
            }
        }
    }

    fn logout(&mut self) {
        match self.store.logout() {
            Ok(()) => {
                info!("logged out");
                self.toasts.success("Logged out.");
            }
            Err(error) => {
                warn!(%error, "logout failed");
                self.toasts.error(format!("Logout failed: {error}"));
            }
        }
        self.home = HomeState::default();
        self.router.reset_to(Route::Home);
    }

    /// Processes async updates: drains completed requests, ages toasts.
    pub fn tick(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_net_event(event);
        }
        self.toasts.tick();
    }

    fn handle_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Questions { generation, result } => {
                if generation != self.generations.questions {
                    debug!(generation, "dropping stale question fetch");
                    return;
                }
                match result {
                    Ok(questions) => self.assessment.questions_loaded(questions),
                    Err(message) => {
                        self.assessment.load_failed(message.clone());
                        self.toasts.error(format!("Could not load questions: {message}"));
                        self.leave_current_page();
                    }
                }
            }
            NetEvent::Submission { generation, result } => {
                if generation != self.generations.submission {
                    return;
                }
                match result {
                    Ok(()) => self.assessment.submit_succeeded(),
                    Err(message) => {
                        self.assessment.submit_failed(message);
                        if let Some(error) = self.assessment.take_error() {
                            self.toasts.error(format!("Submission failed: {error}"));
                        }
                    }
                }
            }
            NetEvent::Analysis { generation, result } => {
                if generation != self.generations.analysis {
                    return;
                }
                match result {
                    Ok(scores) => self.upload.submit_succeeded(scores),
                    Err(message) => self.upload.submit_failed(message),
                }
            }
            NetEvent::ResultsData { generation, result } => {
                if generation != self.generations.results {
                    return;
                }
                self.results = match result {
                    Ok(data) => ResultsState::Ready(data),
                    Err(message) => ResultsState::Failed(message),
                };
            }
            NetEvent::Auth { generation, result } => {
                if generation != self.generations.auth {
                    return;
                }
                self.auth.busy = false;
                match result {
                    Ok(email) => {
                        info!(%email, "authenticated");
                        self.auth = AuthForm::default();
                        self.toasts.success(format!("Welcome, {email}!"));
                        self.router.reset_to(Route::Home);
                        self.refresh_home_status();
                    }
                    Err(message) => self.auth.error = Some(message),
                }
            }
            NetEvent::HomeStatus {
                generation,
                cognitive_done,
                emotion_done,
            } => {
                if generation != self.generations.status {
                    return;
                }
                self.home.cognitive_done = cognitive_done;
                self.home.emotion_done = emotion_done;
            }
        }
    }

    /// Esc behavior: previous page, or home when there is no history.
    fn leave_current_page(&mut self) {
        if !self.router.back() {
            self.router.reset_to(Route::Home);
        }
    }

    /// Handles a single key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }
        match self.router.current() {
            Route::Home => self.handle_home_key(key),
            Route::Login => self.handle_login_key(key),
            Route::Cognitive => self.handle_cognitive_key(key),
            Route::Emotion => self.handle_emotion_key(key),
            Route::Results => self.handle_results_key(key),
            _ => self.handle_info_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let entries = home_menu(self.store.is_logged_in());
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Up => {
                self.home.selected =
                    (self.home.selected + entries.len() - 1) % entries.len();
            }
            KeyCode::Down => {
                self.home.selected = (self.home.selected + 1) % entries.len();
            }
            KeyCode::Enter => {
                if let Some((_, action)) = entries.get(self.home.selected) {
                    match action {
                        MenuAction::Go(route) => self.navigate(*route),
                        MenuAction::Logout => self.logout(),
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_info_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.leave_current_page(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Esc => self.leave_current_page(),
            KeyCode::Char('r') => {
                self.results = ResultsState::Loading;
                self.fetch_results();
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('n') {
                self.auth.toggle_mode();
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.leave_current_page(),
            KeyCode::Tab => self.auth.focus_next(),
            KeyCode::BackTab => self.auth.focus_previous(),
            KeyCode::Enter => self.submit_auth(),
            KeyCode::Backspace => self.auth.backspace(),
            KeyCode::Char(c) => self.auth.push_char(c),
            _ => {}
        }
    }

    fn handle_cognitive_key(&mut self, key: KeyEvent) {
        if *self.assessment.phase() == AssessmentPhase::Complete {
            // Acknowledging the submission lands back on the landing page.
            if key.code == KeyCode::Enter {
                self.router.reset_to(Route::Home);
                self.refresh_home_status();
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.leave_current_page(),
            KeyCode::Left => self.assessment.previous(),
            KeyCode::Right => self.assessment.next(),
            KeyCode::Enter => {
                if self.assessment.can_submit() {
                    self.submit_assessment();
                }
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(question) = self.assessment.current_question()
                    && let Some(option) = question.options.get(digit as usize - 1)
                {
                    let option = option.clone();
                    self.assessment.select_answer(&option);
                }
            }
            _ => {}
        }
    }

    fn handle_emotion_key(&mut self, key: KeyEvent) {
        match self.upload.phase().clone() {
            UploadPhase::ResultsShown(_) => {
                if key.code == KeyCode::Enter {
                    self.upload.dismiss_results();
                }
            }
            UploadPhase::FinishShown => {
                if key.code == KeyCode::Enter {
                    self.upload.dismiss_finish();
                    self.router.reset_to(Route::Home);
                    self.refresh_home_status();
                }
            }
            UploadPhase::Submitting | UploadPhase::Done => {}
            UploadPhase::Selecting => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if key.code == KeyCode::Char('u') {
                        self.upload.clear_selection();
                        self.upload_input.clear();
                    }
                    return;
                }
                match key.code {
                    KeyCode::Esc => self.leave_current_page(),
                    KeyCode::Tab => {
                        let other = match self.upload.mode() {
                            UploadMode::Video => UploadMode::Images,
                            UploadMode::Images => UploadMode::Video,
                        };
                        self.upload.set_mode(other);
                    }
                    KeyCode::Backspace => {
                        self.upload_input.pop();
                    }
                    KeyCode::Enter => {
                        if self.upload_input.is_empty() {
                            self.submit_upload();
                        } else {
                            let path = std::mem::take(&mut self.upload_input);
                            match self.upload.mode() {
                                UploadMode::Video => self.upload.stage_video(path),
                                UploadMode::Images => self.upload.stage_image(path),
                            }
                        }
                    }
                    KeyCode::Char(c) => self.upload_input.push(c),
                    _ => {}
                }
            }
        }
    }

    /// Renders the full frame: chrome, current page, then overlays.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);

        let chunks = Layout::default()
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let route = self.router.current();
        let username = self.store.username();
        render_header(frame, chunks[0], &self.theme, route, username.as_deref());

        let body = chunks[1].inner(Margin::new(1, 0));
        match route {
            Route::Home => HomeView.render(frame, body, self),
            Route::Login => LoginView.render(frame, body, self),
            Route::Cognitive => AssessmentView.render(frame, body, self),
            Route::Emotion => EmotionView.render(frame, body, self),
            Route::Results => ResultsView.render(frame, body, self),
            other => InfoView::new(other).render(frame, body, self),
        }

        render_footer(frame, chunks[2], &self.theme, route);

        if route == Route::Cognitive && *self.assessment.phase() == AssessmentPhase::Complete {
            render_message_modal(
                frame,
                &self.theme,
                "Assessment Submitted",
                "Your answers have been recorded. Visit your results once both assessments are done.",
            );
        }
        if route == Route::Emotion {
            match self.upload.phase() {
                UploadPhase::ResultsShown(scores) => {
                    render_results_modal(frame, &self.theme, scores);
                }
                UploadPhase::FinishShown => {
                    render_message_modal(
                        frame,
                        &self.theme,
                        "Analysis Complete",
                        "Your emotion analysis has been saved to your results.",
                    );
                }
                _ => {}
            }
        }

        self.toasts.render(frame, &self.theme);
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit. Returns an error if terminal setup fails.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal).await;

        // Always restore terminal, even if event loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// The core event loop. Separated from `run` for testability.
    async fn event_loop(&mut self, terminal: &mut MwTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            // Handle input with timeout for tick
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            self.tick();
        }

        Ok(())
    }
}
