//! # jyn-store
//!
//! Worksheet persistence and the journal service for jyn.
//!
//! The whole collection lives in one versioned JSON document
//! (`{ "v": 2, "worksheets": [...] }`). Reading upgrades and repairs older
//! or damaged records in place; writing replaces the file atomically.
//! [`JournalService`] applies user actions on top of a [`WorksheetStore`]
//! and answers with the navigation state the user lands on.

mod actions;
pub mod error;
pub mod migrate;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use service::JournalService;
pub use store::{FileStore, MemoryStore, WorksheetStore};
