//! Core types for the partstore record handlers.
//!
//! Everything in this crate is pure: record kinds and their key schemas,
//! request payload resolution, store error guidance, handler outcomes and the
//! [`storage::TableStore`] interface the handlers run against. The binary
//! crate supplies the store backends and the HTTP surface.

pub mod diagnostics;
pub mod records;
pub mod request;
pub mod storage;
