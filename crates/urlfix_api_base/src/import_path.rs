use log::trace;
use urlfix_core::API_BASE_URL;

/// Computes the import specifier that reaches `module` from `file_path`.
///
/// `file_path` is relative to the project root and its first segment is the
/// application root (`app/`), which is where `module` lives. So a file with
/// `n` separators sits `n - 1` directories below the module's parent:
///
/// - `app/page.tsx` -> `./config/api`
/// - `app/search/page.tsx` -> `../config/api`
/// - `app/users/[id]/page.tsx` -> `../../config/api`
///
/// Paths without any separator are treated like depth zero.
pub fn import_path_for(file_path: &str, module: &str) -> String {
    let separators = file_path.matches('/').count();
    let depth = separators.saturating_sub(1);
    trace!("{} has {} separators, depth {}", file_path, separators, depth);

    if depth == 0 { format!("./{}", module) } else { format!("{}{}", "../".repeat(depth), module) }
}

/// The import line inserted into files that do not reference `API_BASE_URL` yet
pub fn import_statement_for(file_path: &str, module: &str) -> String {
    format!("import {{ {} }} from '{}'", API_BASE_URL, import_path_for(file_path, module))
}
