//! Members domain module (accounts and session context).
//!
//! This crate contains business rules for member accounts and the explicit
//! session value the front-end threads through order flows. No IO, no storage.

pub mod member;
pub mod session;

pub use member::Member;
pub use session::{Session, SessionError};
