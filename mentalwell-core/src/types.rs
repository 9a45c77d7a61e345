//! Wire types for the MentalWell backend API.
//!
//! These mirror the REST payloads one-to-one; everything the server computes
//! (scores, summaries, timestamps) is read-only on the client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single questionnaire item as delivered by `GET /cognitive/questions`.
///
/// Immutable once fetched; owned by the assessment flow for the lifetime of
/// one assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    /// Ordered list of selectable option strings.
    pub options: Vec<String>,
}

/// Envelope for the question-set endpoint.
#[derive(Debug, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// One answered question in the submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question_id: u32,
    pub question_text: String,
    pub selected_answer: String,
}

/// Request body for `POST /cognitive/submit`.
#[derive(Debug, Serialize)]
pub struct SubmitRequest<'a> {
    pub questions_data: &'a [QuestionAnswer],
}

/// Acknowledgment returned by a successful submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionAck {
    #[serde(default)]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /cognitive/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct CognitiveStatus {
    pub has_completed_test: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub total_score: Option<f64>,
}

/// Full cognitive result from `GET /cognitive/test-data`. Backend-computed,
/// displayed verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CognitiveTestResult {
    pub total_score: f64,
    pub percentage_score: f64,
    pub test_summary: String,
    pub areas_of_improvement: Vec<String>,
    /// Per-question detail of the submission being scored.
    #[serde(default)]
    pub question_details: Vec<QuestionAnswer>,
    pub submitted_at: String,
}

/// Mapping from emotion label to a probability-like score in `[0, 1]`.
///
/// A `BTreeMap` keeps chart ordering stable across renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(pub BTreeMap<String, f64>);

impl EmotionScores {
    /// Score for a label, `0.0` when the backend omitted it.
    pub fn get(&self, label: &str) -> f64 {
        self.0.get(label).copied().unwrap_or(0.0)
    }

    pub fn happy(&self) -> f64 {
        self.get("happy")
    }

    pub fn sad(&self) -> f64 {
        self.get("sad")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels and scores in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, score)| (label.as_str(), *score))
    }
}

impl FromIterator<(String, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Envelope for `POST /emotion/analysis`.
#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    pub scores: EmotionScores,
}

/// One stored analysis run, as returned by `GET /emotion/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionRecord {
    pub timestamp: String,
    pub scores: EmotionScores,
    /// Analysis kind: `"video"` or `"images"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub filenames: Vec<String>,
}

/// Response of `GET /emotion/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionStatus {
    pub status: String,
    #[serde(default)]
    pub data: Vec<EmotionRecord>,
}

/// Latest emotion result from `GET /emotion/test-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmotionTestResult {
    pub scores: EmotionScores,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
}

/// Response of `POST /users/login` and `POST /users/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Signup form as entered by the user, before client-side validation.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

impl SignupForm {
    /// Validate the form and convert it into the wire request.
    ///
    /// Mismatched or empty passwords are rejected here and never reach the
    /// network layer.
    pub fn into_request(self) -> Result<SignupRequest> {
        if self.password.is_empty() {
            return Err(Error::Validation("password must not be empty".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(Error::Validation("passwords do not match".to_string()));
        }
        Ok(SignupRequest {
            username: self.username,
            email: self.email,
            password: self.password,
            full_name: self.full_name,
        })
    }
}
