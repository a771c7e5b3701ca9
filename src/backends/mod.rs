//! Backends module - Filesystem access
//!
//! Provides:
//! - scan: Markdown collection with walkdir

pub mod scan;
