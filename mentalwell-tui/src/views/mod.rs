//! View system for the terminal client.
//!
//! This module provides:
//! - `ViewRenderer` trait for page rendering
//! - One view type per route (home, info pages, login, the two
//!   assessments, results)

mod assessment;
mod emotion;
mod home;
mod info;
mod login;
mod results;
mod traits;

pub use assessment::AssessmentView;
pub use emotion::EmotionView;
pub use home::HomeView;
pub use info::InfoView;
pub use login::LoginView;
pub use results::ResultsView;
pub use traits::ViewRenderer;
