//! Terminal user interface for the MentalWell client.
//!
//! Renders the product's page map (landing, info pages, login, the two
//! assessments, results) in the terminal against the shared client core.

pub mod app;
pub mod routes;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{App, NetEvent};
pub use routes::{NavOutcome, Route, Router};
pub use state::{AuthField, AuthForm, AuthMode, HomeState, MenuAction, ResultsData, ResultsState};
pub use terminal::{MwTerminal, install_panic_hook, leave_tui, restore_terminal, setup_terminal};
pub use theme::{Theme, mentalwell_default};
