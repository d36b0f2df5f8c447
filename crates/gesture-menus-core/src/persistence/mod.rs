//! Menu document persistence.
//!
//! This module provides:
//! - [`MenuLoader`]: parses menu documents, migrating pre-versioning files
//! - XML serialization and saving for [`crate::MenuGraph`]
//! - Atomic file replacement for saves

mod atomic;
mod reader;
mod writer;

pub use atomic::atomic_write_text;
pub use reader::MenuLoader;
