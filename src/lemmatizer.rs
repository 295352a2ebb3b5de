//! The lemmatization facade.
//!
//! [`Lemmatizer`] ties the pieces together: resolve a model name from a
//! `(language, size)` pair, have the store install it if it is missing,
//! load it into a pipeline, and reduce annotated text to `(original,
//! lemma)` pairs under the active [`LemmaSettings`]. Construction runs the
//! whole lifecycle, so a value of this type always holds a loaded
//! pipeline.

use rayon::prelude::*;

use crate::error::{LemmaError, Result};
use crate::lemma::{reduce_tokens, LemmaSettings};
use crate::model::{resolve_model, ModelCatalog, ModelStore, PipelineHandle};
use crate::observer::{
    NoopObserver, SetupObserver, StageClock, StageReport, STAGE_INSTALL, STAGE_LOAD, STAGE_RESOLVE,
};
use crate::types::LemmaResult;

/// Language code used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Size code used when the caller does not pick one.
pub const DEFAULT_SIZE: &str = "lg";

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a setup stage (when the `tracing` feature is
/// enabled). Without the feature this expands to nothing.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("setup_stage", stage = $name).entered();
    };
}

// ============================================================================
// Lemmatizer facade
// ============================================================================

/// Configurable lemmatization facade over a store of trained models.
///
/// One instance owns one store and exactly one loaded pipeline. All
/// lemmatization goes through `&self`; switching models or settings takes
/// `&mut self`, which confines mutation to the single owner.
pub struct Lemmatizer<S> {
    store: S,
    model_name: String,
    pipeline: Box<dyn PipelineHandle>,
    settings: LemmaSettings,
}

impl<S: ModelStore> Lemmatizer<S> {
    /// Construct with the default `"en"` / `"lg"` selection.
    pub fn new(store: S, catalog: &impl ModelCatalog) -> Result<Self> {
        Self::with_model(store, catalog, DEFAULT_LANGUAGE, DEFAULT_SIZE)
    }

    /// Construct for a specific `(language, size)` pair.
    ///
    /// Runs the full lifecycle: resolve, install if missing, load. The
    /// install and load calls block and can be slow, so wrap this call in
    /// your own timeout policy if you need one. Settings start at their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Any [`LemmaError`]: the two resolution failures, or a store
    /// failure wrapped with the model name it concerned.
    pub fn with_model(
        store: S,
        catalog: &impl ModelCatalog,
        language: &str,
        size: &str,
    ) -> Result<Self> {
        Self::with_model_observed(store, catalog, language, size, &mut NoopObserver)
    }

    /// Like [`with_model`](Self::with_model), with setup stage callbacks.
    pub fn with_model_observed(
        mut store: S,
        catalog: &impl ModelCatalog,
        language: &str,
        size: &str,
        observer: &mut impl SetupObserver,
    ) -> Result<Self> {
        let (model_name, pipeline) = setup(&mut store, catalog, language, size, observer)?;
        Ok(Self {
            store,
            model_name,
            pipeline,
            settings: LemmaSettings::default(),
        })
    }

    /// Switch to the model resolved from a new `(language, size)` pair.
    ///
    /// A fresh pass through the whole lifecycle. On success the previous
    /// pipeline is dropped and the settings reset to their defaults; on
    /// failure the facade keeps its current model, pipeline and settings
    /// untouched.
    pub fn switch_model(
        &mut self,
        catalog: &impl ModelCatalog,
        language: &str,
        size: &str,
    ) -> Result<()> {
        self.switch_model_observed(catalog, language, size, &mut NoopObserver)
    }

    /// Like [`switch_model`](Self::switch_model), with setup stage
    /// callbacks.
    pub fn switch_model_observed(
        &mut self,
        catalog: &impl ModelCatalog,
        language: &str,
        size: &str,
        observer: &mut impl SetupObserver,
    ) -> Result<()> {
        // Build the replacement completely before touching current state.
        let (model_name, pipeline) = setup(&mut self.store, catalog, language, size, observer)?;
        self.model_name = model_name;
        self.pipeline = pipeline;
        self.settings = LemmaSettings::default();
        Ok(())
    }
}

impl<S> Lemmatizer<S> {
    /// Replace the whole settings record.
    pub fn configure(&mut self, settings: LemmaSettings) {
        self.settings = settings;
    }

    /// The currently active settings.
    pub fn settings(&self) -> LemmaSettings {
        self.settings
    }

    /// Name of the currently loaded model.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The loaded pipeline itself, for annotation beyond lemmatization.
    pub fn pipeline(&self) -> &dyn PipelineHandle {
        self.pipeline.as_ref()
    }

    /// The store this facade was built over.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lemmatize `text` into ordered `(original, lemma)` pairs.
    ///
    /// Never fails. When input lowercasing is on, the pipeline annotates
    /// the lowercased text, so the surfaces in the output are the
    /// lowercased ones; annotations themselves can change too, since the
    /// annotator sees different input.
    pub fn lemmatize(&self, text: &str) -> LemmaResult {
        let tokens = if self.settings.convert_input_to_lower {
            self.pipeline.annotate(&text.to_lowercase())
        } else {
            self.pipeline.annotate(text)
        };
        reduce_tokens(&tokens, self.settings)
    }
}

impl<S: Sync> Lemmatizer<S> {
    /// Lemmatize many texts in parallel, one result per input text, input
    /// order preserved.
    ///
    /// Only shared state is read, which is what makes the parallel borrow
    /// sound; the pipeline is `Send + Sync` by contract.
    pub fn lemmatize_batch(&self, texts: &[&str]) -> Vec<LemmaResult> {
        texts.par_iter().map(|text| self.lemmatize(text)).collect()
    }
}

impl<S> std::fmt::Debug for Lemmatizer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("model_name", &self.model_name)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// setup: the resolve / install / load lifecycle
// ============================================================================

/// Run the full lifecycle against `store`.
fn setup<S: ModelStore>(
    store: &mut S,
    catalog: &impl ModelCatalog,
    language: &str,
    size: &str,
    observer: &mut impl SetupObserver,
) -> Result<(String, Box<dyn PipelineHandle>)> {
    // Stage 1: resolve a model name from the catalog.
    let model_name = {
        trace_stage!(STAGE_RESOLVE);
        observer.on_stage_start(STAGE_RESOLVE);
        let clock = StageClock::start();
        let models = catalog.list();
        let model_name = resolve_model(language, size, &models)?;
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_RESOLVE, &report);
        model_name
    };
    observer.on_resolved(&model_name);

    // Stage 2: install, unless the store already holds the model.
    {
        trace_stage!(STAGE_INSTALL);
        observer.on_stage_start(STAGE_INSTALL);
        if store.is_installed(&model_name) {
            observer.on_stage_end(STAGE_INSTALL, &StageReport::skipped());
        } else {
            let clock = StageClock::start();
            store
                .install(&model_name)
                .map_err(|cause| LemmaError::install(&model_name, cause))?;
            let report = StageReport::new(clock.elapsed());
            observer.on_stage_end(STAGE_INSTALL, &report);
        }
    }

    // Stage 3: load the installed model into a pipeline.
    let pipeline = {
        trace_stage!(STAGE_LOAD);
        observer.on_stage_start(STAGE_LOAD);
        let clock = StageClock::start();
        let pipeline = store
            .load(&model_name)
            .map_err(|cause| LemmaError::load(&model_name, cause))?;
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_LOAD, &report);
        pipeline
    };

    Ok((model_name, pipeline))
}

// ============================================================================
// Tests
// ============================================================================
