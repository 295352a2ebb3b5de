//! Lemmatization settings.
//!
//! Five independent switches, all off by default. The record is a plain
//! value object: the facade swaps in a whole new record on
//! [`configure`](crate::Lemmatizer::configure) rather than mutating one
//! field at a time, so a settings value in hand always describes a
//! complete configuration.

use serde::{Deserialize, Serialize};

/// Switches controlling token filtering and lemma normalization.
///
/// Any combination is valid. `return_just_first_word_of_lemma` only has a
/// visible effect with annotators that emit multi-word lemmas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaSettings {
    /// Drop tokens whose surface text is not purely alphabetic. This
    /// catches punctuation, numerals and symbols, and also contractions
    /// carrying an apostrophe.
    #[serde(default)]
    pub filter_out_non_alpha: bool,

    /// Drop tokens the annotator marks as stop words.
    #[serde(default)]
    pub filter_out_common: bool,

    /// Lowercase the whole input before annotation. This changes what the
    /// annotator sees and can therefore change the annotations themselves.
    #[serde(default)]
    pub convert_input_to_lower: bool,

    /// Lowercase each surviving lemma on output.
    #[serde(default)]
    pub convert_output_to_lower: bool,

    /// Keep only the first whitespace-separated word of each lemma.
    #[serde(default)]
    pub return_just_first_word_of_lemma: bool,
}

impl LemmaSettings {
    /// All switches off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_out_non_alpha(mut self, on: bool) -> Self {
        self.filter_out_non_alpha = on;
        self
    }

    pub fn with_filter_out_common(mut self, on: bool) -> Self {
        self.filter_out_common = on;
        self
    }

    pub fn with_convert_input_to_lower(mut self, on: bool) -> Self {
        self.convert_input_to_lower = on;
        self
    }

    pub fn with_convert_output_to_lower(mut self, on: bool) -> Self {
        self.convert_output_to_lower = on;
        self
    }

    pub fn with_return_just_first_word_of_lemma(mut self, on: bool) -> Self {
        self.return_just_first_word_of_lemma = on;
        self
    }
}
