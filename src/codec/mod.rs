//! Netscape bookmark file reading and writing.
//!
//! The importer is a line-oriented state machine: every input line is first
//! classified by [`lines::classify`] and then fed to a session that tracks
//! the open folder scopes. Export walks the active tree recursively.

mod export;
mod import;
mod lines;

pub use export::{CONTENT_TYPE, FILE_NAME, export_bookmarks, render_document};
pub use import::{BATCH_SIZE, ImportSummary, MAX_DEPTH, import_bookmarks};
pub use lines::{Line, classify, escape_html, unescape_html};
