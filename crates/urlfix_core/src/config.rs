use anyhow::{Context, Result, anyhow};
use log::{debug, trace};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Accepted manifest layouts: a bare array, or an object with a `files` array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Manifest {
    List(Vec<String>),
    Object { files: Vec<String> },
}

/// Resolve the directory the file list is relative to, defaulting to the current directory
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(r) => {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        }
        None => {
            debug!("No root provided, using current directory");
            let cwd = env::current_dir().context("Failed to read current directory")?;
            cwd.canonicalize().unwrap_or(cwd)
        }
    };

    if !root.is_dir() {
        return Err(anyhow!("Root {} is not a directory", root.display()));
    }
    Ok(root)
}

/// Read the list of files to patch from a JSON manifest
pub fn read_file_list(manifest: &Path) -> Result<Vec<String>> {
    debug!("Reading file list from {}", manifest.display());
    let content = fs::read_to_string(manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;

    let parsed: Manifest = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse {}: expected a JSON array of paths or {{\"files\": [...]}}",
            manifest.display()
        )
    })?;

    let files = match parsed {
        Manifest::List(files) => files,
        Manifest::Object { files } => files,
    };
    for file in &files {
        trace!("Manifest entry: {}", file);
    }

    debug!("Loaded {} files from manifest", files.len());
    Ok(files)
}
