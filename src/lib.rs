//! # Bookstash
//!
//! A single-owner bookmark manager: nested folders, a trash with restore and
//! purge, explicit ordering, and Netscape bookmark file import/export. Usable
//! as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! bookstash = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bookstash::hierarchy::Hierarchy;
//! use bookstash::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/bookstash.db").unwrap();
//! store.initialize().unwrap();
//!
//! let hierarchy = Hierarchy::new(Arc::new(store));
//! let work = hierarchy.create_folder("Work", None).unwrap();
//! let tree = hierarchy.catalog().active_tree().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes CLI module. Disable with `default-features = false`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod query;
pub mod server;
pub mod settings;
pub mod store;
pub mod types;
