//! User interface and presentation
//!
//! The terminal session, its text formatting, and the JSON transcript
//! written when a session ends. Nothing here makes game decisions; it only
//! renders what the engine's states say.

pub mod presenter;
pub mod session;
pub mod transcript;

pub use presenter::Presenter;
pub use session::{run_session, SessionError};
pub use transcript::Transcript;
