//! Lemma reduction: the settings record and the per-token filtering
//! pipeline that applies it.

pub mod filter;
pub mod settings;

pub use filter::reduce_tokens;
pub use settings::LemmaSettings;
