//! Model selection and acquisition.
//!
//! [`resolve`] maps a `(language, size)` pair onto a catalog of model
//! names, [`traits`] holds the seams the facade talks through, and
//! [`memory`] provides the in-memory implementations used by tests and
//! offline callers.

pub mod memory;
pub mod resolve;
pub mod stopwords;
pub mod traits;

pub use memory::{MemoryModel, MemoryPipeline, MemoryStore};
pub use resolve::resolve_model;
pub use stopwords::StopwordLexicon;
pub use traits::{ModelCatalog, ModelStore, PipelineHandle, StaticCatalog};
