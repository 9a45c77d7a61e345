//! mentalwell-core: client library for the MentalWell assessment service
//!
//! Everything the UI needs, with no UI dependencies:
//!
//! - **Session** - [`SessionStore`] as the single gateway over the persisted
//!   token/email pair, and [`session::token_is_valid`] for gating navigation
//! - **API clients** - [`ApiClient`] with one submodule per backend resource
//!   family (cognitive assessment, emotion analysis, identity)
//! - **Flow state machines** - [`AssessmentFlow`] for the questionnaire
//!   wizard and [`UploadFlow`] for the facial-analysis upload
//! - **Scoring** - [`score::combined_score`] for the results dashboard
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use mentalwell_core::{ApiClient, ClientConfig, SessionStore};
//!
//! # async fn example() -> mentalwell_core::Result<()> {
//! let config = ClientConfig::load()?;
//! let store = Arc::new(SessionStore::open_default()?);
//! let api = ApiClient::new(&config, Arc::clone(&store))?;
//!
//! api.login("sam@example.com", "password").await?;
//! let questions = api.questions().await?;
//! println!("{} questions", questions.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod assessment;
pub mod config;
pub mod error;
pub mod score;
pub mod session;
pub mod types;
pub mod upload;

pub use api::ApiClient;
pub use assessment::{AssessmentFlow, AssessmentPhase};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use session::SessionStore;
pub use types::{
    CognitiveStatus, CognitiveTestResult, EmotionRecord, EmotionScores, EmotionStatus,
    EmotionTestResult, Question, QuestionAnswer, SignupForm, SignupRequest, SubmissionAck,
    TokenResponse,
};
pub use upload::{MAX_VIDEO_BYTES, UploadFlow, UploadMode, UploadPhase, UploadSelection};
