//! Token filtering and lemma normalization.
//!
//! The per-token half of lemmatization: decide whether a token survives,
//! then normalize its lemma. Input lowercasing is not here, it belongs to
//! the facade because it has to happen before annotation.

use super::settings::LemmaSettings;
use crate::types::{AnnotatedToken, LemmaEntry, LemmaResult};

/// Reduce annotated tokens to `(original, lemma)` pairs under `settings`.
///
/// Tokens are visited in order and every decision looks only at the
/// current token's own flags, so the reduction is pure: same tokens, same
/// settings, same output. Per token:
///
/// 1. drop it when the non-alpha filter or the stop-word filter applies;
/// 2. truncate the lemma to its first whitespace-separated word when
///    configured; an empty lemma stays empty and the pair is still
///    emitted;
/// 3. lowercase the lemma when configured;
/// 4. emit the `(surface, lemma)` pair.
///
/// Filters only ever drop tokens, so the output never has more entries
/// than `tokens`, and has exactly as many when both filters are off.
pub fn reduce_tokens(tokens: &[AnnotatedToken], settings: LemmaSettings) -> LemmaResult {
    let mut entries = Vec::with_capacity(tokens.len());

    for token in tokens {
        let not_a_word = !token.is_alpha && settings.filter_out_non_alpha;
        let common = token.is_stop && settings.filter_out_common;
        if not_a_word || common {
            continue;
        }

        let mut lemma = token.lemma.as_str();
        if settings.return_just_first_word_of_lemma {
            lemma = lemma.split_whitespace().next().unwrap_or("");
        }

        let lemma = if settings.convert_output_to_lower {
            lemma.to_lowercase()
        } else {
            lemma.to_string()
        };

        entries.push(LemmaEntry::new(token.text.clone(), lemma));
    }

    entries
}
