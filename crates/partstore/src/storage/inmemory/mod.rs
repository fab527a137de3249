//! In-memory storage backend for tests and local development.
//!
//! Tables are registered up front with their key schemas and held in a
//! `HashMap` wrapped in `Arc<RwLock<_>>`. Data is not persisted and is lost
//! when the store is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use partstore_core::records::{RecordKind, TableSpec};
//!
//! let store = InMemoryStore::with_tables(RecordKind::all().map(TableSpec::for_kind));
//! ```

mod condition;
mod store;

pub use store::InMemoryStore;
