//! Model name resolution.
//!
//! Maps a `(language, size)` pair onto a catalog of model names. Matching
//! is an explicit two-stage filter over the catalog in its iteration order:
//!
//! 1. full rule: the entry starts with `language` and contains `size`
//!    somewhere after that prefix;
//! 2. prefix rule: the entry merely starts with `language`. This weaker
//!    probe runs only when the full rule matched nothing, and only to pick
//!    which error to report.
//!
//! Caller-supplied codes are compared as literal strings. Nothing in them
//! is ever interpreted as pattern syntax, so a code like `"c."` can only
//! match an entry that literally contains `c.`.

use crate::error::{LemmaError, Result};

/// Resolve `(language, size)` against `models`, returning the first entry
/// satisfying the full rule.
///
/// Both codes are lowercased before matching. Ties break by catalog order:
/// the candidate list is filtered, never re-sorted, so the first full match
/// wins even when a later entry looks more specific. Resolution is
/// therefore only reproducible against a frozen catalog snapshot.
///
/// # Errors
///
/// - [`LemmaError::UnsupportedLanguage`] when no entry starts with
///   `language` (always the case for an empty catalog);
/// - [`LemmaError::UnsupportedModelSize`] when the language prefix matches
///   at least one entry but none of those also contains `size`.
pub fn resolve_model(language: &str, size: &str, models: &[String]) -> Result<String> {
    let language = language.to_lowercase();
    let size = size.to_lowercase();

    if let Some(model) = models.iter().find(|m| matches_full(m, &language, &size)) {
        return Ok(model.clone());
    }

    // No full match. Probe the weaker prefix rule to pick the error kind.
    if models.iter().any(|m| m.starts_with(&language)) {
        Err(LemmaError::UnsupportedModelSize { language, size })
    } else {
        Err(LemmaError::UnsupportedLanguage { language })
    }
}

/// Full rule: anchored language prefix, then the size code anywhere in the
/// remainder.
fn matches_full(model: &str, language: &str, size: &str) -> bool {
    model
        .strip_prefix(language)
        .is_some_and(|rest| rest.contains(size))
}
