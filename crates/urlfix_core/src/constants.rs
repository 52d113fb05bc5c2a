//! Constants for the files that get patched and the shape of the rewrite.
//!
//! ## Rewrite Shape
//!
//! A literal such as `'http://localhost:3001/api/posts'` becomes
//! `` `${API_BASE_URL}/api/posts` `` and the file gains
//! `import { API_BASE_URL } from '<DEFAULT_CONFIG_MODULE>'` (relative to the file).

/// Identifier of the shared constant. Its presence in a file means the import is already there.
pub const API_BASE_URL: &str = "API_BASE_URL";

/// Hardcoded base URL that gets replaced
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Module exporting `API_BASE_URL`, relative to the application root (`app/`)
pub const DEFAULT_CONFIG_MODULE: &str = "config/api";

/// Environment variable that controls `API_BASE_URL` at runtime
pub const RUNTIME_ENV_VAR: &str = "NEXT_PUBLIC_API_URL";

/// File extensions for JavaScript/TypeScript files
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

/// Files to patch, relative to the front-end project root
pub const DEFAULT_FILES: &[&str] = &[
    "app/institutions/page.tsx",
    "app/institutions/[slug]/digest/page.tsx",
    "app/institutions/[slug]/admin/page.tsx",
    "app/institutions/[slug]/dashboard/page.tsx",
    "app/institutions/[slug]/benchmarking/page.tsx",
    "app/institutions/[slug]/page.tsx",
    "app/settings/notifications/page.tsx",
    "app/contexts/BrandingContext.tsx",
    "app/explore/page.tsx",
    "app/search/page.tsx",
    "app/dashboard/page.tsx",
    "app/journals/page.tsx",
    "app/journals/[slug]/page.tsx",
    "app/components/ReportButton.tsx",
    "app/components/SearchBar.tsx",
    "app/components/PostComposer.tsx",
    "app/users/[id]/digest/page.tsx",
    "app/users/[id]/page.tsx",
    "app/trending/page.tsx",
    "app/saved-searches/page.tsx",
    "app/onboarding/page.tsx",
    "app/topics/page.tsx",
    "app/topics/[slug]/page.tsx",
    "app/analytics/page.tsx",
    "app/moderation/page.tsx",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_files_count() {
        assert_eq!(DEFAULT_FILES.len(), 25);
    }

    #[test]
    fn test_default_files_are_unique() {
        let unique: HashSet<_> = DEFAULT_FILES.iter().collect();
        assert_eq!(unique.len(), DEFAULT_FILES.len());
    }

    #[test]
    fn test_default_files_live_under_app_root() {
        for file in DEFAULT_FILES {
            assert!(file.starts_with("app/"), "'{}' is not under app/", file);
        }
    }

    #[test]
    fn test_default_files_have_js_ts_extensions() {
        for file in DEFAULT_FILES {
            let ext = file.rsplit('.').next().unwrap();
            assert!(JS_TS_EXTENSIONS.contains(&ext), "'{}' has unexpected extension", file);
        }
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        // Rewritten literals keep their own path, so the prefix must not eat the '/'
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }
}
