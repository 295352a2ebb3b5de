//! Core data types exchanged between the pipeline seam and the
//! filtering stage.
//!
//! [`AnnotatedToken`] is what a loaded pipeline hands over per token;
//! [`LemmaEntry`] is what lemmatization hands back to the caller.

use serde::{Deserialize, Serialize};

/// A single token as annotated by a loaded pipeline.
///
/// The facade never computes these fields itself. They come from the
/// annotator behind [`PipelineHandle`](crate::model::PipelineHandle) and are
/// consumed read-only by [`reduce_tokens`](crate::lemma::reduce_tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface text of the token, exactly as it appeared in the input.
    pub text: String,
    /// Base form assigned by the annotator. May be multi-word for some
    /// languages and models.
    pub lemma: String,
    /// Whether the surface text is purely alphabetic.
    pub is_alpha: bool,
    /// Whether the annotator considers the token a stop word.
    pub is_stop: bool,
}

impl AnnotatedToken {
    /// Create a token with all four annotation fields.
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        is_alpha: bool,
        is_stop: bool,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            is_alpha,
            is_stop,
        }
    }
}

/// One `(original, lemma)` pair surviving the filtering stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaEntry {
    /// Surface text as it appeared in the annotated token.
    pub original: String,
    /// Lemma after the configured transforms.
    pub lemma: String,
}

impl LemmaEntry {
    pub fn new(original: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            lemma: lemma.into(),
        }
    }
}

/// Ordered lemmatization output. Token order is preserved and repeated
/// tokens stay repeated.
pub type LemmaResult = Vec<LemmaEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_construction() {
        let token = AnnotatedToken::new("Cats", "cat", true, false);
        assert_eq!(token.text, "Cats");
        assert_eq!(token.lemma, "cat");
        assert!(token.is_alpha);
        assert!(!token.is_stop);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = LemmaEntry::new("running", "run");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"original":"running","lemma":"run"}"#);

        let back: LemmaEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_token_serde_round_trip() {
        let token = AnnotatedToken::new(",", ",", false, false);
        let json = serde_json::to_string(&token).unwrap();
        let back: AnnotatedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
