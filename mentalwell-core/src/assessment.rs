//! Cognitive assessment flow.
//!
//! A sequential multi-question wizard expressed as a tagged-union state
//! machine with one transition surface. The UI never mutates the index or
//! answers directly; it calls transitions and renders whatever phase the
//! flow is in, so combinations like "submitting while still editing" are
//! unrepresentable.

use tracing::debug;

use crate::types::{Question, QuestionAnswer};

/// Phase of a single in-progress assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentPhase {
    /// Question set is being fetched.
    Loading,
    /// Questions are loaded; `current` is the index being shown.
    InProgress { current: usize },
    /// Submission request is in flight.
    Submitting,
    /// Submission acknowledged; completion message shown.
    Complete,
    /// The question fetch failed; the page must redirect away.
    Failed { message: String },
}

/// State machine over one assessment session.
///
/// Invariant: once loaded, `answers.len() == questions.len()` and never
/// changes; each slot is either empty (unanswered) or one of that
/// question's option strings.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    phase: AssessmentPhase,
    questions: Vec<Question>,
    answers: Vec<String>,
    /// Transient error from the last failed submit, for the UI to surface
    /// once and discard.
    error: Option<String>,
}

impl AssessmentFlow {
    /// A fresh flow, waiting for the question set.
    pub fn new() -> Self {
        Self {
            phase: AssessmentPhase::Loading,
            questions: Vec::new(),
            answers: Vec::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> &AssessmentPhase {
        &self.phase
    }

    /// Number of questions, zero until loaded.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// How many slots hold an answer.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_empty()).count()
    }

    /// The question currently shown, if the flow is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            AssessmentPhase::InProgress { current } => self.questions.get(current),
            _ => None,
        }
    }

    /// Index of the question currently shown.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            AssessmentPhase::InProgress { current } => Some(current),
            _ => None,
        }
    }

    /// The answer slot for the question currently shown.
    pub fn current_answer(&self) -> Option<&str> {
        let index = self.current_index()?;
        self.answers.get(index).map(String::as_str)
    }

    /// Transition `Loading` -> `InProgress` with a fixed-size answer vector,
    /// one empty slot per question.
    ///
    /// A zero-question set still enters `InProgress`; every navigation
    /// operation then degrades to a no-op rather than crashing.
    pub fn questions_loaded(&mut self, questions: Vec<Question>) {
        if self.phase != AssessmentPhase::Loading {
            return;
        }
        debug!(count = questions.len(), "question set loaded");
        self.answers = vec![String::new(); questions.len()];
        self.questions = questions;
        self.phase = AssessmentPhase::InProgress { current: 0 };
    }

    /// Transition `Loading` -> `Failed`. The caller redirects away rather
    /// than rendering an empty assessment.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        if self.phase != AssessmentPhase::Loading {
            return;
        }
        self.phase = AssessmentPhase::Failed {
            message: message.into(),
        };
    }

    /// Record an answer for the current question.
    ///
    /// Rejected silently unless the flow is in progress and `option` is one
    /// of the current question's allowed option strings.
    pub fn select_answer(&mut self, option: &str) {
        let Some(index) = self.current_index() else {
            return;
        };
        let Some(question) = self.questions.get(index) else {
            return;
        };
        if question.options.iter().any(|o| o == option) {
            self.answers[index] = option.to_string();
        }
    }

    /// Whether "next" may advance: current slot answered and not at the end.
    pub fn can_advance(&self) -> bool {
        match self.phase {
            AssessmentPhase::InProgress { current } => {
                current + 1 < self.questions.len()
                    && self.answers.get(current).is_some_and(|a| !a.is_empty())
            }
            _ => false,
        }
    }

    /// Advance one question. No-op when the current slot is empty or the
    /// flow is at the last index.
    pub fn next(&mut self) {
        if self.can_advance()
            && let AssessmentPhase::InProgress { current } = self.phase
        {
            self.phase = AssessmentPhase::InProgress { current: current + 1 };
        }
    }

    /// Go back one question, floored at zero.
    pub fn previous(&mut self) {
        if let AssessmentPhase::InProgress { current } = self.phase
            && current > 0
        {
            self.phase = AssessmentPhase::InProgress { current: current - 1 };
        }
    }

    /// Whether the flow is at the last question.
    pub fn is_last(&self) -> bool {
        matches!(self.phase, AssessmentPhase::InProgress { current }
            if !self.questions.is_empty() && current == self.questions.len() - 1)
    }

    /// Whether "submit" is reachable: last index with a non-empty slot.
    pub fn can_submit(&self) -> bool {
        self.is_last()
            && self
                .current_answer()
                .is_some_and(|answer| !answer.is_empty())
    }

    /// Transition `InProgress` -> `Submitting` and build the submission
    /// payload. Returns `None` (and stays put) when submit is not reachable.
    pub fn begin_submit(&mut self) -> Option<Vec<QuestionAnswer>> {
        if !self.can_submit() {
            return None;
        }
        let payload = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| QuestionAnswer {
                question_id: question.id,
                question_text: question.text.clone(),
                selected_answer: answer.clone(),
            })
            .collect();
        self.phase = AssessmentPhase::Submitting;
        Some(payload)
    }

    /// Transition `Submitting` -> `Complete`.
    pub fn submit_succeeded(&mut self) {
        if self.phase == AssessmentPhase::Submitting {
            self.phase = AssessmentPhase::Complete;
        }
    }

    /// Transition `Submitting` -> `InProgress` at the last index, answers
    /// intact, with a transient error for the UI to surface.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        if self.phase != AssessmentPhase::Submitting {
            return;
        }
        self.error = Some(message.into());
        self.phase = AssessmentPhase::InProgress {
            current: self.questions.len().saturating_sub(1),
        };
    }

    /// Take the transient error, if one is pending.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}
