use anyhow::{Context, Result};
use log::{debug, trace, warn};
use std::{fs, path::Path};
use urlfix_core::JS_TS_EXTENSIONS;

use crate::{
    config::Config,
    import_path::import_statement_for,
    rewrite::Rewriter,
    types::{FileReport, PatchStatus},
};

/// Rewrites one file in place.
///
/// A missing file is reported as `NotFound`. Read, decode and write failures
/// are returned as errors and abort the run.
pub fn patch_file(
    root: &Path,
    rel_path: &str,
    rewriter: &Rewriter,
    cfg: &Config,
) -> Result<FileReport> {
    let path = root.join(rel_path);
    if !path.exists() {
        debug!("File not found: {}", path.display());
        return Ok(FileReport::new(rel_path, PatchStatus::NotFound));
    }

    trace!("Reading {}", path.display());
    let original =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let import_statement = import_statement_for(rel_path, &cfg.config_module);
    let rewrite = rewriter.rewrite(&original, &import_statement);
    debug!(
        "{}: {} literals rewritten, import inserted: {}, {} flagged",
        rel_path,
        rewrite.literals_rewritten,
        rewrite.import_inserted,
        rewrite.flagged.len()
    );

    for flagged in &rewrite.flagged {
        warn!("{}:{}: left untouched: {}", rel_path, flagged.line, flagged.reason);
    }
    if rewrite.missing_import_anchor && rewrite.literals_rewritten > 0 {
        warn!("{}: no import statement to anchor '{}' after", rel_path, import_statement);
    }

    let mut report = FileReport::new(rel_path, PatchStatus::Unchanged);
    report.flagged = rewrite.flagged;

    if rewrite.content == original {
        return Ok(report);
    }

    if cfg.verify && is_js_ts(&path) {
        let before = urlfix_core::syntax_errors(&path, &original);
        let after = urlfix_core::syntax_errors(&path, &rewrite.content);
        if before.is_empty() && !after.is_empty() {
            warn!("{}: rewrite introduces {} syntax errors, not writing", rel_path, after.len());
            report.status = PatchStatus::Rejected;
            report.syntax_errors = after;
            return Ok(report);
        }
    }

    if cfg.dry_run {
        report.status = PatchStatus::WouldFix;
        return Ok(report);
    }

    fs::write(&path, &rewrite.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    report.status = PatchStatus::Fixed;
    Ok(report)
}

fn is_js_ts(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|ext| JS_TS_EXTENSIONS.contains(&ext))
}
