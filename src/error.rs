//! Error taxonomy for model resolution and loading.
//!
//! Lemmatization itself never fails. Every variant here aborts a
//! construction or model-switch attempt and leaves any existing facade
//! state untouched.

use thiserror::Error;

/// Boxed error carried as the cause of a store failure.
///
/// Store implementations report failures in whatever error type suits them;
/// the facade boxes no context of its own beyond the model name.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LemmaError>;

/// Everything that can go wrong while resolving, installing, or loading a
/// model.
///
/// The two `Unsupported*` variants discriminate the resolution failure: a
/// language nobody publishes models for reads very differently from a size
/// that merely is not published for an otherwise supported language.
#[derive(Debug, Error)]
pub enum LemmaError {
    /// No catalog entry starts with the requested language code.
    #[error("no models available for language `{language}`; expected a lowercase code such as `en` or `de`")]
    UnsupportedLanguage {
        /// The lowercased language code that matched nothing.
        language: String,
    },

    /// The language is supported but no entry also carries the size code.
    #[error("no `{size}` model available for language `{language}`; expected a size code such as `sm`, `md` or `lg`")]
    UnsupportedModelSize {
        /// The lowercased language code, which matched at least one entry.
        language: String,
        /// The lowercased size code that matched none of them.
        size: String,
    },

    /// The store failed to install the resolved model.
    #[error("failed to install model `{model}`")]
    InstallFailure {
        /// The resolved model name the install was attempted for.
        model: String,
        #[source]
        cause: BoxError,
    },

    /// The store failed to load the resolved model into a pipeline.
    #[error("failed to load model `{model}`")]
    LoadFailure {
        /// The resolved model name the load was attempted for.
        model: String,
        #[source]
        cause: BoxError,
    },
}

impl LemmaError {
    /// Wrap a store install failure with the model it concerned.
    pub fn install(model: impl Into<String>, cause: BoxError) -> Self {
        Self::InstallFailure {
            model: model.into(),
            cause,
        }
    }

    /// Wrap a store load failure with the model it concerned.
    pub fn load(model: impl Into<String>, cause: BoxError) -> Self {
        Self::LoadFailure {
            model: model.into(),
            cause,
        }
    }
}
