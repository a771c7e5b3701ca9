//! Core module - Shared data model and path helpers
//!
//! This module provides:
//! - Collected files, heading links, sections and the error type (model)
//! - Path normalization utilities (paths)

pub mod model;
pub mod paths;
