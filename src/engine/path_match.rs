//! Glob-based path matching with exclusion handling.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use tracing::error;

use crate::config::SkillRule;

/// `*` and `?` never cross a `/`; `**` spans directories.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Test one glob pattern against a path.
///
/// A pattern without a `/` is matched against the path's basename, so short
/// patterns like `*.test.ts` hit anywhere in the tree. An invalid pattern
/// never matches; it is reported and skipped.
pub(crate) fn pattern_matches(pattern: &str, file_path: &str) -> bool {
    let compiled = match Pattern::new(pattern) {
        Ok(compiled) => compiled,
        Err(err) => {
            error!(pattern, %err, "invalid path pattern");
            return false;
        }
    };

    let candidate = if pattern.contains('/') {
        file_path
    } else {
        Path::new(file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file_path)
    };

    compiled.matches_with(candidate, GLOB_OPTIONS)
}

/// Whether any exclusion pattern rules this path out.
pub(crate) fn is_excluded(file_path: &str, rule: &SkillRule) -> bool {
    rule.exclusions.as_ref().is_some_and(|exclusions| {
        exclusions
            .paths
            .iter()
            .any(|pattern| pattern_matches(pattern, file_path))
    })
}

/// Whether the rule's inclusion patterns cover this path. Exclusions win;
/// inclusion checking stops at the first matching pattern.
pub(crate) fn rule_matches_path(file_path: &str, rule: &SkillRule) -> bool {
    if is_excluded(file_path, rule) {
        return false;
    }
    rule.path_patterns.as_ref().is_some_and(|patterns| {
        patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, file_path))
    })
}
