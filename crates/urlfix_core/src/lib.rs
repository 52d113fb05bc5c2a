//! Core utilities for urlfix tools.
//!
//! This crate provides shared functionality for rewriting front-end sources,
//! including:
//! - The embedded list of files to patch and the default rewrite settings
//! - Loading a replacement file list from a JSON manifest
//! - Resolving the working root the file list is relative to
//! - Syntax checking JS/TS sources with oxc

mod config;
mod constants;
mod parser;

// Re-export public API
pub use config::{read_file_list, resolve_root};
pub use constants::{
    API_BASE_URL, DEFAULT_BASE_URL, DEFAULT_CONFIG_MODULE, DEFAULT_FILES, JS_TS_EXTENSIONS,
    RUNTIME_ENV_VAR,
};
pub use parser::{source_type_for, syntax_errors};
