//! Collaborator seams for model acquisition and annotation.
//!
//! The facade core never touches the network or the filesystem. It talks
//! to these traits: [`ModelCatalog`] answers which model names are
//! compatible with the installed runtime, [`ModelStore`] owns installation
//! and loading, and [`PipelineHandle`] is the loaded annotator itself.
//! Production implementations wrap a real model distribution; the fixtures
//! in [`memory`](super::memory) cover tests and offline use.

use crate::error::BoxError;
use crate::types::AnnotatedToken;

/// Source of model names compatible with the current runtime.
///
/// # Contract
///
/// - May return an empty list; resolution then fails with
///   `UnsupportedLanguage` for every request.
/// - One returned list is iterated in order and resolution breaks ties by
///   that order. Ordering across calls carries no guarantee, so a caller
///   that needs reproducible resolution must hold a snapshot still (see
///   [`StaticCatalog`]).
/// - Listing must not install or load anything.
pub trait ModelCatalog {
    /// List the compatible model names in this catalog's iteration order.
    fn list(&self) -> Vec<String>;
}

/// A frozen catalog snapshot with a fixed iteration order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    models: Vec<String>,
}

impl StaticCatalog {
    pub fn new(models: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }
}

impl ModelCatalog for StaticCatalog {
    fn list(&self) -> Vec<String> {
        self.models.clone()
    }
}

/// Installation and loading capability for trained models.
///
/// # Contract
///
/// - `install` and `load` block until done or failed; the facade calls
///   them synchronously, so callers wanting a timeout wrap the whole
///   construction call.
/// - Failures are returned, never retried inside the store. The facade
///   attaches the model name and surfaces them as
///   [`InstallFailure`](crate::LemmaError::InstallFailure) and
///   [`LoadFailure`](crate::LemmaError::LoadFailure).
/// - `is_installed` must be cheap; it runs on every setup to decide
///   whether the install stage can be skipped.
pub trait ModelStore {
    /// Whether `model` is already present in local storage.
    fn is_installed(&self, model: &str) -> bool;

    /// Fetch `model` into local storage.
    fn install(&mut self, model: &str) -> Result<(), BoxError>;

    /// Load an installed `model` into a usable pipeline.
    fn load(&self, model: &str) -> Result<Box<dyn PipelineHandle>, BoxError>;
}

/// A loaded, ready-to-annotate pipeline.
///
/// `Send + Sync` is part of the contract so a loaded facade can be shared
/// read-only across threads; all mutation goes through the owning facade.
pub trait PipelineHandle: Send + Sync {
    /// Name of the model this pipeline was loaded from.
    fn model_name(&self) -> &str;

    /// Annotate `text` into an ordered token sequence.
    ///
    /// # Contract
    ///
    /// - Annotation does not fail; a text the model cannot make sense of
    ///   still tokenizes, just with poorer annotations.
    /// - Token order follows surface order in `text`.
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken>;
}
