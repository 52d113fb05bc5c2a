use anyhow::{Result, bail};
use log::{debug, trace};
use regex::Regex;
use std::{ops::Range, sync::LazyLock};
use urlfix_core::API_BASE_URL;

use crate::types::{FlagReason, FlaggedLiteral};

// `import` at the start of a line, an optional clause ending in `from`, then a quoted specifier.
// The clause may span lines (`import {\n  a,\n  b,\n} from 'x'`), side-effect imports have none.
// `import('x')` never matches.
static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\b(?:[^'"`;]*?\bfrom)?[ \t]*['"][^'"\r\n]*['"]"#).unwrap()
});

/// Result of rewriting one file's text
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub content: String,
    pub import_inserted: bool,
    /// The marker was absent but there was no import statement to anchor the new one
    pub missing_import_anchor: bool,
    pub literals_rewritten: usize,
    pub flagged: Vec<FlaggedLiteral>,
}

/// Turns quoted base URL literals into `API_BASE_URL` template literals.
#[derive(Debug, Clone)]
pub struct Rewriter {
    opener: Regex,
}

impl Rewriter {
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            bail!("Base URL must not be empty");
        }
        let opener = Regex::new(&format!(r#"['"]{}"#, regex::escape(base_url)))?;
        debug!("Built literal matcher for {}", base_url);
        Ok(Self { opener })
    }

    /// Rewrites `src`, inserting `import_statement` when `API_BASE_URL` is not mentioned yet.
    ///
    /// The marker is checked on the original text, so a file whose literals get
    /// rewritten in this pass still receives the import.
    pub fn rewrite(&self, src: &str, import_statement: &str) -> Rewrite {
        let needs_import = !src.contains(API_BASE_URL);
        let (content, literals_rewritten, flagged) = self.rewrite_literals(src);

        let (content, import_inserted) = if needs_import {
            match insert_import(&content, import_statement) {
                Some(with_import) => (with_import, true),
                None => (content, false),
            }
        } else {
            trace!("{} already present, skipping import", API_BASE_URL);
            (content, false)
        };

        Rewrite {
            content,
            import_inserted,
            missing_import_anchor: needs_import && !import_inserted,
            literals_rewritten,
            flagged,
        }
    }

    fn rewrite_literals(&self, src: &str) -> (String, usize, Vec<FlaggedLiteral>) {
        let mut out = String::with_capacity(src.len());
        let mut copied = 0;
        // Matches before this offset sit inside a literal that was already handled
        let mut resume = 0;
        let mut rewritten = 0;
        let mut flagged = Vec::new();
        let templates = template_spans(src);

        for m in self.opener.find_iter(src) {
            if m.start() < resume {
                trace!("Skipping nested match at byte {}", m.start());
                continue;
            }

            let quote = char::from(src.as_bytes()[m.start()]);
            let scanned = if in_spans(&templates, m.start()) {
                // A quote inside template text is not a string delimiter
                Err((FlagReason::InTemplate, 0))
            } else {
                scan_literal(&src[m.end()..], quote).and_then(|close_rel| {
                    // A second base URL in the body would become a literal inside the template
                    if self.opener.is_match(&src[m.end()..m.end() + close_rel]) {
                        Err((FlagReason::NestedUrl, close_rel + 1))
                    } else {
                        Ok(close_rel)
                    }
                })
            };

            match scanned {
                Ok(close_rel) => {
                    let close = m.end() + close_rel;
                    trace!("Rewriting literal {}", &src[m.start()..=close]);
                    out.push_str(&src[copied..m.start()]);
                    out.push_str("`${");
                    out.push_str(API_BASE_URL);
                    out.push('}');
                    out.push_str(&src[m.end()..close]);
                    out.push('`');
                    copied = close + 1;
                    resume = close + 1;
                    rewritten += 1;
                }
                Err((reason, end_rel)) => {
                    let line = src[..m.start()].matches('\n').count() + 1;
                    debug!("Leaving literal on line {} untouched: {}", line, reason);
                    flagged.push(FlaggedLiteral { line, reason });
                    resume = m.end() + end_rel;
                }
            }
        }

        out.push_str(&src[copied..]);
        (out, rewritten, flagged)
    }
}

/// Finds the closing `quote` of a literal body, honoring backslash escapes.
///
/// Returns the byte offset of the closing quote, or the reason the literal
/// cannot become a template literal along with the offset scanning stopped at.
fn scan_literal(rest: &str, quote: char) -> Result<usize, (FlagReason, usize)> {
    let mut reason = None;
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return Err((FlagReason::Unterminated, i)),
            '`' => {
                reason.get_or_insert(FlagReason::Backtick);
            }
            '$' if rest[i + 1..].starts_with('{') => {
                reason.get_or_insert(FlagReason::Interpolation);
            }
            c if c == quote => {
                return match reason {
                    Some(r) => Err((r, i + 1)),
                    None => Ok(i),
                };
            }
            _ => {}
        }
    }

    Err((FlagReason::Unterminated, rest.len()))
}

/// Byte ranges of template literal text, excluding `${...}` substitutions.
///
/// Quoted strings and comments are skipped so a backtick inside them does not
/// open a template. Regex literals are not recognized.
fn template_spans(src: &str) -> Vec<Range<usize>> {
    let bytes = src.as_bytes();
    let mut spans = Vec::new();
    // Brace depth at which each open `${` was entered, innermost last
    let mut substitutions: Vec<usize> = Vec::new();
    let mut depth = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' => i = skip_string(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..].iter().position(|&b| b == b'\n').map_or(bytes.len(), |p| i + p);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = src[i + 2..].find("*/").map_or(bytes.len(), |p| i + 2 + p + 2);
            }
            b'`' => i = push_template_text(bytes, i + 1, depth, &mut spans, &mut substitutions),
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' if substitutions.last() == Some(&depth) => {
                substitutions.pop();
                i = push_template_text(bytes, i + 1, depth, &mut spans, &mut substitutions);
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ => i += 1,
        }
    }

    spans
}

/// Records template text starting at `start` and returns where scanning resumes.
fn push_template_text(
    bytes: &[u8],
    start: usize,
    depth: usize,
    spans: &mut Vec<Range<usize>>,
    substitutions: &mut Vec<usize>,
) -> usize {
    let mut j = start;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'`' => {
                spans.push(start..j);
                return j + 1;
            }
            b'$' if bytes.get(j + 1) == Some(&b'{') => {
                spans.push(start..j);
                substitutions.push(depth);
                return j + 2;
            }
            _ => j += 1,
        }
    }
    spans.push(start..bytes.len());
    bytes.len()
}

/// Returns the offset just past a quoted string starting at `start`, or its line end if unterminated.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' => return j,
            b if b == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

fn in_spans(spans: &[Range<usize>], pos: usize) -> bool {
    let idx = spans.partition_point(|r| r.start <= pos);
    idx > 0 && spans[idx - 1].contains(&pos)
}

/// Inserts `statement` on its own line after the last import statement.
///
/// Returns `None` when the source has no import statement.
pub(crate) fn insert_import(src: &str, statement: &str) -> Option<String> {
    let last = IMPORT_REGEX.find_iter(src).last()?;
    let line_end = src[last.end()..].find('\n').map_or(src.len(), |i| last.end() + i);

    // Keep CRLF files consistent
    let (pos, newline) =
        if src[..line_end].ends_with('\r') { (line_end - 1, "\r\n") } else { (line_end, "\n") };
    trace!("Inserting import after '{}'", src[last.start()..pos].trim());

    let mut out = String::with_capacity(src.len() + newline.len() + statement.len());
    out.push_str(&src[..pos]);
    out.push_str(newline);
    out.push_str(statement);
    out.push_str(&src[pos..]);
    Some(out)
}
