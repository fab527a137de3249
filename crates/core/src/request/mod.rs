//! Inbound request handling: envelope resolution and store input extraction.

mod envelope;
mod error;
mod input;
mod operation;

pub use envelope::{Payload, ENVELOPE_FIELD};
pub use error::{RequestError, Result};
pub use input::{key_from_object, put_item_request};
pub use operation::Operation;
