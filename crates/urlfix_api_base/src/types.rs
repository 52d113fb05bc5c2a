use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    Fixed,
    /// Dry run: the file would have been rewritten
    WouldFix,
    Unchanged,
    NotFound,
    /// The rewrite introduced syntax errors and was not written
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagReason {
    Backtick,
    Interpolation,
    Unterminated,
    /// Another base URL literal sits inside the body
    NestedUrl,
    /// The quote opens no string, it is text of a template literal
    InTemplate,
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagReason::Backtick => write!(f, "literal contains a backtick"),
            FlagReason::Interpolation => write!(f, "literal contains '${{'"),
            FlagReason::Unterminated => write!(f, "no closing quote on the same line"),
            FlagReason::NestedUrl => write!(f, "literal contains another base URL literal"),
            FlagReason::InTemplate => write!(f, "inside a template literal"),
        }
    }
}

/// A base URL literal that was left untouched because its template form would differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedLiteral {
    /// 1-based line in the original file
    pub line: usize,
    pub reason: FlagReason,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub status: PatchStatus,
    pub flagged: Vec<FlaggedLiteral>,
    /// Parse errors of the rewritten text, only filled for `Rejected`
    pub syntax_errors: Vec<String>,
}

impl FileReport {
    pub(crate) fn new(path: &str, status: PatchStatus) -> Self {
        Self { path: path.to_string(), status, flagged: Vec::new(), syntax_errors: Vec::new() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
}

impl RunResult {
    /// Files that were rewritten, or would have been in a dry run
    pub fn fixed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, PatchStatus::Fixed | PatchStatus::WouldFix))
            .count()
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.reports.iter().map(|r| r.flagged.len()).sum()
    }
}
