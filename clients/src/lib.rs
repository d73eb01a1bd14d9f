//! progcalc clients.
//!
//! The front-end half of the calculator: a keypad-style [`session::Session`]
//! that feeds operands and operators to a [`progcalc::Register`], plus the
//! logging setup shared by the binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod logging;
pub mod session;

pub use session::{Action, MemoryOp, Session, SessionError, SessionSnapshot};
