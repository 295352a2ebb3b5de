//! Configurable lemmatization over pre-trained NLP pipelines.
//!
//! A [`Lemmatizer`] resolves a trained model from a `(language, size)`
//! pair, has its [`ModelStore`] install and load that model, and reduces
//! annotated text to ordered `(original, lemma)` pairs under five
//! independent [`LemmaSettings`] switches. Model acquisition and
//! annotation sit behind traits, so the same lifecycle runs against the
//! in-memory fixtures here and against a real model distribution in
//! production.
//!
//! # Quick start
//!
//! ```
//! use rapid_lemma::{LemmaSettings, Lemmatizer, MemoryModel, MemoryStore};
//!
//! let store = MemoryStore::new().with_model(
//!     MemoryModel::new("en_core_web_lg")
//!         .with_lemma("cats", "cat")
//!         .preinstalled(),
//! );
//! let catalog = store.clone();
//!
//! let mut lemmatizer = Lemmatizer::with_model(store, &catalog, "en", "lg")?;
//! lemmatizer.configure(LemmaSettings::new().with_convert_output_to_lower(true));
//!
//! let pairs = lemmatizer.lemmatize("Cats cats");
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[1].original, "cats");
//! assert_eq!(pairs[1].lemma, "cat");
//! # Ok::<(), rapid_lemma::LemmaError>(())
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: emit a span per setup stage through the `tracing` crate.

pub mod error;
pub mod lemma;
pub mod lemmatizer;
pub mod model;
pub mod observer;
pub mod spec;
pub mod types;

pub use error::{BoxError, LemmaError, Result};
pub use lemma::{reduce_tokens, LemmaSettings};
pub use lemmatizer::{Lemmatizer, DEFAULT_LANGUAGE, DEFAULT_SIZE};
pub use model::{
    resolve_model, MemoryModel, MemoryPipeline, MemoryStore, ModelCatalog, ModelStore,
    PipelineHandle, StaticCatalog, StopwordLexicon,
};
pub use observer::{
    NoopObserver, SetupObserver, StageClock, StageReport, StageTimingObserver, SETUP_STAGES,
    STAGE_INSTALL, STAGE_LOAD, STAGE_RESOLVE,
};
pub use spec::{LemmatizerSpec, Severity, SpecDiagnostic, SpecReport};
pub use types::{AnnotatedToken, LemmaEntry, LemmaResult};
