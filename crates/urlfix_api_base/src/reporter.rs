use std::io::{self, Write};

use colored::Colorize;
use log::{debug, trace};
use urlfix_core::RUNTIME_ENV_VAR;

use crate::types::{FileReport, PatchStatus, RunResult};

pub fn print_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Fixing hardcoded API URLs in frontend files...\n")?;
    writer.flush()
}

/// Print the outcome line for one file, followed by any literals left untouched
pub fn print_file_report<W: Write>(writer: &mut W, report: &FileReport) -> io::Result<()> {
    trace!("Reporting {} as {:?}", report.path, report.status);
    match report.status {
        PatchStatus::Fixed => {
            writeln!(writer, "{} Fixed {}", "✓".green().bold(), report.path)?;
        }
        PatchStatus::WouldFix => {
            writeln!(writer, "{} Would fix {}", "~".yellow().bold(), report.path)?;
        }
        PatchStatus::NotFound => {
            writeln!(writer, "{} File not found: {}", "✗".red().bold(), report.path)?;
        }
        PatchStatus::Unchanged => {
            writeln!(writer, "{} No changes needed for {}", "○".dimmed(), report.path)?;
        }
        PatchStatus::Rejected => {
            writeln!(
                writer,
                "{} Rejected {}: rewrite does not parse",
                "✗".red().bold(),
                report.path
            )?;
            for error in &report.syntax_errors {
                writeln!(writer, "    {}", error.dimmed())?;
            }
        }
    }

    for flagged in &report.flagged {
        writeln!(
            writer,
            "  {} {}:{}: left untouched: {}",
            "⚠".yellow().bold(),
            report.path,
            flagged.line,
            flagged.reason
        )?;
    }

    writer.flush()
}

pub fn print_summary<W: Write>(writer: &mut W, result: &RunResult, dry_run: bool) -> io::Result<()> {
    debug!("Printing summary for {} files", result.total());
    let count = format!("{}/{}", result.fixed_count(), result.total());

    if dry_run {
        writeln!(writer, "\n{} Would fix {} files", "~".yellow().bold(), count.cyan())?;
    } else {
        writeln!(writer, "\n{} Done! Fixed {} files", "✓".green().bold(), count.cyan())?;
        writeln!(writer, "API URL is now controlled by {} environment variable", RUNTIME_ENV_VAR)?;
    }

    let flagged = result.flagged_count();
    if flagged > 0 {
        writeln!(
            writer,
            "{} {} literal(s) left untouched, fix them by hand",
            "⚠".yellow().bold(),
            flagged.to_string().yellow()
        )?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlagReason, FlaggedLiteral};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn report(path: &str, status: PatchStatus) -> FileReport {
        FileReport::new(path, status)
    }

    #[test]
    fn test_file_lines() {
        let out = render(|w| {
            print_file_report(w, &report("app/a.tsx", PatchStatus::Fixed))?;
            print_file_report(w, &report("app/b.tsx", PatchStatus::NotFound))?;
            print_file_report(w, &report("app/c.tsx", PatchStatus::Unchanged))
        });
        assert_eq!(
            out,
            "✓ Fixed app/a.tsx\n✗ File not found: app/b.tsx\n○ No changes needed for app/c.tsx\n"
        );
    }

    #[test]
    fn test_flagged_lines() {
        let mut r = report("app/a.tsx", PatchStatus::Unchanged);
        r.flagged.push(FlaggedLiteral { line: 12, reason: FlagReason::Interpolation });
        let out = render(|w| print_file_report(w, &r));
        assert!(out.contains("⚠ app/a.tsx:12: left untouched: literal contains '${'"));
    }

    #[test]
    fn test_rejected_lists_errors() {
        let mut r = report("app/a.tsx", PatchStatus::Rejected);
        r.syntax_errors.push("Unexpected token".to_string());
        let out = render(|w| print_file_report(w, &r));
        assert!(out.starts_with("✗ Rejected app/a.tsx: rewrite does not parse\n"));
        assert!(out.contains("Unexpected token"));
    }

    #[test]
    fn test_summary() {
        let result = RunResult {
            reports: vec![
                report("app/a.tsx", PatchStatus::Fixed),
                report("app/b.tsx", PatchStatus::NotFound),
            ],
        };
        let out = render(|w| print_summary(w, &result, false));
        assert_eq!(
            out,
            "\n✓ Done! Fixed 1/2 files\nAPI URL is now controlled by NEXT_PUBLIC_API_URL environment variable\n"
        );
    }

    #[test]
    fn test_dry_run_summary() {
        let result = RunResult { reports: vec![report("app/a.tsx", PatchStatus::WouldFix)] };
        let out = render(|w| print_summary(w, &result, true));
        assert_eq!(out, "\n~ Would fix 1/1 files\n");
    }
}
