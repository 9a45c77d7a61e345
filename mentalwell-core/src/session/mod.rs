//! Session persistence and validity checking.
//!
//! The session is two values: the bearer token issued at login/signup and
//! the email it was issued for. [`SessionStore`] is the only reader and
//! writer of that state; [`guard`] decides whether the stored token still
//! counts as a valid session.

mod guard;
mod store;

pub use guard::{Claims, decode_claims, token_is_valid};
pub use store::{ENV_DATA_DIR, SessionStore};
