//! LegalView - document library client for a legal-document assistant.
//!
//! The [`library`] module holds the client state machine that lists,
//! searches, views, downloads and deletes documents in a remote
//! [`store`]. Host capabilities (browser navigation, saving files, user
//! prompts) are injected through the ports in [`library`]; terminal
//! implementations live in [`adapters`]. [`server`] serves a directory
//! under the same HTTP contract the client speaks.

pub mod adapters;
pub mod config;
pub mod library;
pub mod models;
pub mod server;
pub mod store;
pub mod workspace;
