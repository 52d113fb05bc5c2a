//! Replaces hardcoded API base URLs in front-end sources.
//!
//! Every quoted literal starting with the base URL (`'http://localhost:3001/...'`)
//! becomes a template literal on a shared constant (`` `${API_BASE_URL}/...` ``),
//! and files that do not mention `API_BASE_URL` yet get the matching import
//! after their last import statement. Running it twice changes nothing.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use urlfix_api_base::{Config, print_file_report, print_summary, run_api_base_fix};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/frontend")),
//!     ..Default::default()
//! };
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! let result = run_api_base_fix(cfg.clone(), |report| print_file_report(&mut stdout, report))?;
//! print_summary(&mut stdout, &result, cfg.dry_run)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod fixer;
mod import_path;
mod patcher;
mod reporter;
mod rewrite;
mod types;

// Re-export public API
pub use config::Config;
pub use fixer::run_api_base_fix;
pub use import_path::{import_path_for, import_statement_for};
pub use patcher::patch_file;
pub use reporter::{print_file_report, print_header, print_summary};
pub use rewrite::{Rewrite, Rewriter};
pub use types::{FileReport, FlagReason, FlaggedLiteral, PatchStatus, RunResult};
