use anyhow::Result;
use log::{debug, info};
use std::io;

use crate::{
    config::Config,
    patcher::patch_file,
    rewrite::Rewriter,
    types::{FileReport, RunResult},
};

/// Patches every configured file in order.
///
/// `on_file` is called with each report as soon as the file is done, so
/// progress stays visible if a later file aborts the run.
pub fn run_api_base_fix<F>(mut cfg: Config, mut on_file: F) -> Result<RunResult>
where
    F: FnMut(&FileReport) -> io::Result<()>,
{
    info!("Starting API base URL fix");

    // Initialize config (resolve root, load file list)
    cfg.initialize()?;
    let root = cfg.root()?.clone();
    let rewriter = Rewriter::new(&cfg.base_url)?;

    info!("Processing {} files (dry run: {})", cfg.file_list.len(), cfg.dry_run);

    let mut result = RunResult::default();
    for rel_path in &cfg.file_list {
        debug!("Processing: {}", rel_path);
        let report = patch_file(&root, rel_path, &rewriter, &cfg)?;
        on_file(&report)?;
        result.reports.push(report);
    }

    info!(
        "API base URL fix complete. Fixed {}/{} files, {} literals flagged",
        result.fixed_count(),
        result.total(),
        result.flagged_count()
    );
    Ok(result)
}
