use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

/// Parses `src` as the file at `path` would be parsed and returns the syntax errors found.
///
/// An empty vector means the source parsed cleanly.
pub fn syntax_errors(path: &Path, src: &str) -> Vec<String> {
    trace!("Parsing {} for syntax check", path.display());
    let st = source_type_for(path);
    let allocator = Allocator::default();
    let ParserReturn { errors, panicked, .. } = OxcParser::new(&allocator, src, st).parse();

    let mut messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    if panicked && messages.is_empty() {
        messages.push("parser aborted".to_string());
    }

    debug!("Found {} syntax errors in {}", messages.len(), path.display());
    messages
}

pub fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    let st = SourceType::default()
        .with_jsx(matches!(ext, Some("tsx") | Some("jsx") | Some("js")))
        .with_typescript(matches!(ext, Some("ts") | Some("tsx") | Some("mts") | Some("cts")));

    // Front-end sources use import/export, treat everything except CommonJS as ESM
    st.with_module(!matches!(ext, Some("cjs") | Some("cts")))
}
