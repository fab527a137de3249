//! Store error guidance and the payloads handlers return.
//!
//! This module follows the Functional Core pattern: the guidance table and
//! diagnostics are pure data, logging happens in the dispatcher.

mod diagnostic;
mod guidance;
mod outcome;

pub use diagnostic::{Diagnostic, UnrecognizedCode};
pub use guidance::StoreErrorCode;
pub use outcome::HandlerOutcome;
