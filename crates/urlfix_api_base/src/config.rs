use anyhow::{Result, anyhow};
use clap::Args;
use log::{debug, info};
use std::path::PathBuf;
use urlfix_core::{DEFAULT_BASE_URL, DEFAULT_CONFIG_MODULE, DEFAULT_FILES};

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Directory the file list is relative to (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// JSON manifest listing the files to patch (defaults to the built-in list)
    #[arg(long)]
    pub files: Option<PathBuf>,

    /// Hardcoded URL prefix to replace
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Module exporting API_BASE_URL, relative to the application root
    #[arg(long, default_value = DEFAULT_CONFIG_MODULE)]
    pub config_module: String,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Refuse to write a rewrite that no longer parses
    #[arg(long)]
    pub verify: bool,

    #[clap(skip)]
    pub file_list: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            files: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            config_module: DEFAULT_CONFIG_MODULE.to_string(),
            dry_run: false,
            verify: false,
            file_list: Vec::new(),
        }
    }
}

impl Config {
    /// Initialize the config by resolving the root directory and loading the file list
    pub fn initialize(&mut self) -> Result<()> {
        let root = urlfix_core::resolve_root(self.root.take())?;
        info!("Using root directory: {}", root.display());

        self.file_list = match &self.files {
            Some(manifest) => urlfix_core::read_file_list(manifest)?,
            None => {
                debug!("Using built-in file list");
                DEFAULT_FILES.iter().map(|f| f.to_string()).collect()
            }
        };
        debug!("{} files to patch", self.file_list.len());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
