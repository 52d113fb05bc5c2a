use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;
use urlfix_api_base::Config;

#[derive(Parser)]
#[command(name = "urlfix")]
#[command(about = "Replace hardcoded API URLs in front-end sources with API_BASE_URL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.config);

    let cfg = cli.config;
    let start = Instant::now();

    urlfix_api_base::print_header(&mut stdout)?;
    let result = urlfix_api_base::run_api_base_fix(cfg.clone(), |report| {
        urlfix_api_base::print_file_report(&mut stdout, report)
    })?;
    urlfix_api_base::print_summary(&mut stdout, &result, cfg.dry_run)?;

    let elapsed_ms = start.elapsed().as_millis();
    info!("Finished in {}ms on {} files", elapsed_ms, result.total());
    stdout.flush()?;

    Ok(())
}
