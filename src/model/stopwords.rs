//! Stopword lexicons for fixture annotation.
//!
//! Real pipelines ship their own stop-word notion inside the trained
//! model. The in-memory fixtures need one too, so their stop flags behave
//! plausibly. Lexicons are built from the `stop_words` lists keyed by the
//! two-letter codes model names start with, or from custom word lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Case-insensitive stop-word membership set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordLexicon {
    words: FxHashSet<String>,
}

impl StopwordLexicon {
    /// Build the lexicon for a two-letter language code.
    ///
    /// Unknown codes yield an empty lexicon. A fixture must not invent
    /// stop words for a language it has no list for.
    pub fn for_language(code: &str) -> Self {
        let words = match code.to_lowercase().as_str() {
            "en" => get(LANGUAGE::English),
            "de" => get(LANGUAGE::German),
            "fr" => get(LANGUAGE::French),
            "es" => get(LANGUAGE::Spanish),
            "it" => get(LANGUAGE::Italian),
            "pt" => get(LANGUAGE::Portuguese),
            "nl" => get(LANGUAGE::Dutch),
            "ru" => get(LANGUAGE::Russian),
            "sv" => get(LANGUAGE::Swedish),
            "nb" => get(LANGUAGE::Norwegian),
            "da" => get(LANGUAGE::Danish),
            "fi" => get(LANGUAGE::Finnish),
            "hu" => get(LANGUAGE::Hungarian),
            "tr" => get(LANGUAGE::Turkish),
            "pl" => get(LANGUAGE::Polish),
            "ar" => get(LANGUAGE::Arabic),
            _ => return Self::default(),
        };
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Build a lexicon from a custom word list.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add a word to the lexicon.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Remove a word from the lexicon.
    pub fn remove(&mut self, word: &str) {
        self.words.remove(&word.to_lowercase());
    }

    /// Whether `word` is a stop word, ignoring case.
    pub fn is_stop(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
