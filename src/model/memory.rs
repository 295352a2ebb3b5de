//! In-memory store and pipeline fixtures.
//!
//! The facade is written against the seams in [`traits`](super::traits);
//! this module provides the implementations that need no network and no
//! filesystem: a [`MemoryStore`] serving [`MemoryModel`] fixtures, able to
//! track installs and fail on purpose, and the [`MemoryPipeline`] it loads,
//! annotating from canned token lists or a whitespace fallback.
//!
//! The fallback is a test double, not an annotator. Each whitespace
//! separated chunk becomes one token: the surface text is kept verbatim,
//! the lemma comes from the model's override table (or is the surface
//! unchanged), the alphabetic flag is computed from the chars and the stop
//! flag comes from the model's lexicon.

use rustc_hash::{FxHashMap, FxHashSet};

use super::stopwords::StopwordLexicon;
use super::traits::{ModelCatalog, ModelStore, PipelineHandle};
use crate::error::BoxError;
use crate::types::AnnotatedToken;

/// A named fixture model served by [`MemoryStore`].
///
/// A fresh model derives its stop-word lexicon from the leading language
/// code of its name, the way trained models bundle the lexicon of their
/// language. [`with_stopwords`](Self::with_stopwords) overrides that.
#[derive(Debug, Clone)]
pub struct MemoryModel {
    name: String,
    lemmas: FxHashMap<String, String>,
    annotations: FxHashMap<String, Vec<AnnotatedToken>>,
    stopwords: StopwordLexicon,
    preinstalled: bool,
}

impl MemoryModel {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let code = name.split('_').next().unwrap_or("");
        let stopwords = StopwordLexicon::for_language(code);
        Self {
            name,
            lemmas: FxHashMap::default(),
            annotations: FxHashMap::default(),
            stopwords,
            preinstalled: false,
        }
    }

    /// Map a surface form to a lemma in the fallback annotation mode.
    pub fn with_lemma(mut self, surface: &str, lemma: &str) -> Self {
        self.lemmas.insert(surface.to_string(), lemma.to_string());
        self
    }

    /// Serve exactly `tokens` whenever `text` is annotated.
    ///
    /// The key is compared against the text the pipeline actually
    /// receives, which is the caller's input after any configured input
    /// lowercasing.
    pub fn with_annotation(mut self, text: &str, tokens: Vec<AnnotatedToken>) -> Self {
        self.annotations.insert(text.to_string(), tokens);
        self
    }

    /// Replace the derived stop-word lexicon.
    pub fn with_stopwords(mut self, lexicon: StopwordLexicon) -> Self {
        self.stopwords = lexicon;
        self
    }

    /// Mark the model as already present in local storage.
    pub fn preinstalled(mut self) -> Self {
        self.preinstalled = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory [`ModelStore`] and [`ModelCatalog`] over fixture models.
///
/// Catalog order is insertion order, which makes resolution tie-breaks
/// fully scriptable from a test.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    models: Vec<MemoryModel>,
    installed: FxHashSet<String>,
    install_failures: FxHashMap<String, String>,
    load_failures: FxHashMap<String, String>,
    install_attempts: usize,
    installs_performed: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            installed: FxHashSet::default(),
            install_failures: FxHashMap::default(),
            load_failures: FxHashMap::default(),
            install_attempts: 0,
            installs_performed: 0,
        }
    }

    /// Add a model to the store, appended to the catalog order.
    pub fn with_model(mut self, model: MemoryModel) -> Self {
        if model.preinstalled {
            self.installed.insert(model.name.clone());
        }
        self.models.push(model);
        self
    }

    /// Make installing `model` fail with `message`, simulating a network
    /// or disk problem.
    pub fn fail_install_with(mut self, model: &str, message: &str) -> Self {
        self.install_failures
            .insert(model.to_string(), message.to_string());
        self
    }

    /// Make loading `model` fail with `message`.
    pub fn fail_load_with(mut self, model: &str, message: &str) -> Self {
        self.load_failures
            .insert(model.to_string(), message.to_string());
        self
    }

    /// How many times `install` was called, successful or not.
    pub fn install_attempts(&self) -> usize {
        self.install_attempts
    }

    /// How many installs actually completed.
    pub fn installs_performed(&self) -> usize {
        self.installs_performed
    }

    fn find(&self, name: &str) -> Option<&MemoryModel> {
        self.models.iter().find(|m| m.name == name)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCatalog for MemoryStore {
    fn list(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name.clone()).collect()
    }
}

impl ModelStore for MemoryStore {
    fn is_installed(&self, model: &str) -> bool {
        self.installed.contains(model)
    }

    fn install(&mut self, model: &str) -> Result<(), BoxError> {
        self.install_attempts += 1;
        if let Some(message) = self.install_failures.get(model) {
            return Err(std::io::Error::other(message.clone()).into());
        }
        if self.find(model).is_none() {
            return Err(std::io::Error::other(format!("no package named `{model}`")).into());
        }
        self.installed.insert(model.to_string());
        self.installs_performed += 1;
        Ok(())
    }

    fn load(&self, model: &str) -> Result<Box<dyn PipelineHandle>, BoxError> {
        if let Some(message) = self.load_failures.get(model) {
            return Err(std::io::Error::other(message.clone()).into());
        }
        if !self.installed.contains(model) {
            return Err(std::io::Error::other(format!("model `{model}` is not installed")).into());
        }
        match self.find(model) {
            Some(found) => Ok(Box::new(MemoryPipeline {
                name: found.name.clone(),
                lemmas: found.lemmas.clone(),
                annotations: found.annotations.clone(),
                stopwords: found.stopwords.clone(),
            })),
            None => Err(std::io::Error::other(format!("model `{model}` is not in this store")).into()),
        }
    }
}

/// The loaded handle produced by [`MemoryStore::load`].
#[derive(Debug, Clone)]
pub struct MemoryPipeline {
    name: String,
    lemmas: FxHashMap<String, String>,
    annotations: FxHashMap<String, Vec<AnnotatedToken>>,
    stopwords: StopwordLexicon,
}

impl PipelineHandle for MemoryPipeline {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        if let Some(tokens) = self.annotations.get(text) {
            return tokens.clone();
        }
        text.split_whitespace()
            .map(|chunk| {
                let lemma = self
                    .lemmas
                    .get(chunk)
                    .cloned()
                    .unwrap_or_else(|| chunk.to_string());
                let is_alpha = !chunk.is_empty() && chunk.chars().all(char::is_alphabetic);
                let is_stop = self.stopwords.is_stop(chunk);
                AnnotatedToken::new(chunk, lemma, is_alpha, is_stop)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed_pipeline(store: &mut MemoryStore, model: &str) -> Box<dyn PipelineHandle> {
        store.install(model).unwrap();
        store.load(model).unwrap()
    }

    #[test]
    fn test_catalog_lists_in_insertion_order() {
        let store = MemoryStore::new()
            .with_model(MemoryModel::new("en_core_web_sm"))
            .with_model(MemoryModel::new("en_core_web_lg"))
            .with_model(MemoryModel::new("es_core_news_lg"));

        assert_eq!(
            store.list(),
            vec!["en_core_web_sm", "en_core_web_lg", "es_core_news_lg"]
        );
    }

    #[test]
    fn test_install_then_load_lifecycle() {
        let mut store = MemoryStore::new().with_model(MemoryModel::new("en_core_web_sm"));

        assert!(!store.is_installed("en_core_web_sm"));
        store.install("en_core_web_sm").unwrap();
        assert!(store.is_installed("en_core_web_sm"));
        assert_eq!(store.installs_performed(), 1);

        let pipeline = store.load("en_core_web_sm").unwrap();
        assert_eq!(pipeline.model_name(), "en_core_web_sm");
    }

    #[test]
    fn test_preinstalled_model_needs_no_install() {
        let store = MemoryStore::new().with_model(MemoryModel::new("en_core_web_lg").preinstalled());

        assert!(store.is_installed("en_core_web_lg"));
        assert!(store.load("en_core_web_lg").is_ok());
        assert_eq!(store.installs_performed(), 0);
    }

    #[test]
    fn test_load_before_install_fails() {
        let store = MemoryStore::new().with_model(MemoryModel::new("en_core_web_sm"));
        let err = store.load("en_core_web_sm").err().unwrap();
        assert!(err.to_string().contains("not installed"));
    }

    #[test]
    fn test_install_of_unknown_model_fails() {
        let mut store = MemoryStore::new();
        let err = store.install("xx_missing_lg").unwrap_err();
        assert!(err.to_string().contains("xx_missing_lg"));
        assert_eq!(store.install_attempts(), 1);
        assert_eq!(store.installs_performed(), 0);
    }

    #[test]
    fn test_scripted_install_failure() {
        let mut store = MemoryStore::new()
            .with_model(MemoryModel::new("en_core_web_lg"))
            .fail_install_with("en_core_web_lg", "connection reset by peer");

        let err = store.install("en_core_web_lg").unwrap_err();
        assert!(err.to_string().contains("connection reset"));
        assert!(!store.is_installed("en_core_web_lg"));
    }

    #[test]
    fn test_scripted_load_failure() {
        let mut store = MemoryStore::new()
            .with_model(MemoryModel::new("en_core_web_lg"))
            .fail_load_with("en_core_web_lg", "corrupt archive");

        store.install("en_core_web_lg").unwrap();
        let err = store.load("en_core_web_lg").err().unwrap();
        assert!(err.to_string().contains("corrupt archive"));
    }

    #[test]
    fn test_fallback_annotation_computes_flags() {
        let mut store = MemoryStore::new()
            .with_model(MemoryModel::new("en_core_web_sm").with_lemma("cats", "cat"));
        let pipeline = installed_pipeline(&mut store, "en_core_web_sm");

        let tokens = pipeline.annotate("the cats 42");
        assert_eq!(tokens.len(), 3);

        // "the" sits in the lexicon derived from the "en" name prefix.
        assert!(tokens[0].is_stop);
        assert!(tokens[0].is_alpha);

        assert_eq!(tokens[1].lemma, "cat");
        assert!(!tokens[1].is_stop);

        assert!(!tokens[2].is_alpha);
        assert_eq!(tokens[2].lemma, "42");
    }

    #[test]
    fn test_canned_annotation_wins_over_fallback() {
        let canned = vec![AnnotatedToken::new("n't", "not", false, true)];
        let mut store = MemoryStore::new()
            .with_model(MemoryModel::new("en_core_web_sm").with_annotation("isn't", canned.clone()));
        let pipeline = installed_pipeline(&mut store, "en_core_web_sm");

        assert_eq!(pipeline.annotate("isn't"), canned);
        // Other inputs still take the fallback path.
        assert_eq!(pipeline.annotate("other")[0].text, "other");
    }

    #[test]
    fn test_custom_lexicon_overrides_derived_one() {
        let mut store = MemoryStore::new().with_model(
            MemoryModel::new("en_core_web_sm")
                .with_stopwords(StopwordLexicon::from_words(&["cats"])),
        );
        let pipeline = installed_pipeline(&mut store, "en_core_web_sm");

        let tokens = pipeline.annotate("the cats");
        assert!(!tokens[0].is_stop);
        assert!(tokens[1].is_stop);
    }

    #[test]
    fn test_unknown_language_prefix_has_empty_lexicon() {
        let mut store = MemoryStore::new().with_model(MemoryModel::new("xx_fixture_lg"));
        let pipeline = installed_pipeline(&mut store, "xx_fixture_lg");

        let tokens = pipeline.annotate("the");
        assert!(!tokens[0].is_stop);
    }
}
