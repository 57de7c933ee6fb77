//! rasterkit-session - Named-image session context
//!
//! The orchestration layer: a [`Session`] owns the name-to-image table
//! for one editing session and dispatches the closed [`Operation`]
//! vocabulary against it. Missing names surface as
//! [`SessionError::NotFound`]; engine validation errors pass through
//! typed and nothing is partially applied on failure.

mod error;
pub mod ops;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use ops::{Operation, execute};
pub use session::Session;
