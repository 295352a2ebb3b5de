//! Declarative lemmatizer configuration.
//!
//! A [`LemmatizerSpec`] is the JSON document an application keeps in its
//! profile storage: which model to select and which switches to run with.
//! [`validate`](LemmatizerSpec::validate) reports every finding instead of
//! stopping at the first; [`build`](LemmatizerSpec::build) runs the facade
//! lifecycle from the spec.
//!
//! Validation is advisory and separate from building on purpose: `build`
//! stays permissive and lets bad codes fail naturally inside resolution,
//! while `validate` flags what a spec author almost certainly did not
//! intend.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "language": "en",
//!   "size": "lg",
//!   "settings": { "filter_out_common": true },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lemma::LemmaSettings;
use crate::lemmatizer::{Lemmatizer, DEFAULT_LANGUAGE, DEFAULT_SIZE};
use crate::model::{ModelCatalog, ModelStore};

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

/// Top-level configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmatizerSpec {
    /// Language code, lowercased at resolution time.
    #[serde(default = "default_language")]
    pub language: String,

    /// Model size code, e.g. `"sm"`, `"md"`, `"lg"`.
    #[serde(default = "default_size")]
    pub size: String,

    /// Filtering and normalization switches.
    #[serde(default)]
    pub settings: LemmaSettings,

    /// When `true`, unrecognized fields validate as errors instead of
    /// warnings.
    #[serde(default)]
    pub strict: bool,

    /// Fields the schema does not recognize, kept for diagnostics.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for LemmatizerSpec {
    fn default() -> Self {
        Self {
            language: default_language(),
            size: default_size(),
            settings: LemmaSettings::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Whether a finding is fatal or advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecDiagnostic {
    pub severity: Severity,
    /// Pointer-style location of the offending field, e.g. `/language`.
    pub path: String,
    pub message: String,
}

impl SpecDiagnostic {
    fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Collected findings from validating one spec.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpecReport {
    pub diagnostics: Vec<SpecDiagnostic>,
}

impl SpecReport {
    pub fn errors(&self) -> impl Iterator<Item = &SpecDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl LemmatizerSpec {
    /// Parse a spec from JSON. Missing fields take their defaults;
    /// unrecognized fields are kept for [`validate`](Self::validate).
    ///
    /// ```
    /// use rapid_lemma::LemmatizerSpec;
    ///
    /// let spec = LemmatizerSpec::from_json(r#"{ "language": "es", "size": "sm" }"#).unwrap();
    /// assert_eq!(spec.language, "es");
    /// assert!(spec.validate().is_valid());
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Run all validation rules, collecting every finding.
    pub fn validate(&self) -> SpecReport {
        let mut report = SpecReport::default();

        check_code(&mut report, "/language", "language", &self.language);
        check_code(&mut report, "/size", "size", &self.size);

        // Sorted so reports are stable regardless of map order.
        let mut unknown: Vec<&String> = self.unknown_fields.keys().collect();
        unknown.sort();
        for field in unknown {
            let diagnostic = if self.strict {
                SpecDiagnostic::error(format!("/{field}"), "unrecognized field")
            } else {
                SpecDiagnostic::warning(format!("/{field}"), "unrecognized field")
            };
            report.diagnostics.push(diagnostic);
        }

        report
    }

    /// Construct a facade per this spec: run the model lifecycle for
    /// `(language, size)`, then apply the settings.
    pub fn build<S: ModelStore>(
        &self,
        store: S,
        catalog: &impl ModelCatalog,
    ) -> Result<Lemmatizer<S>> {
        let mut lemmatizer = Lemmatizer::with_model(store, catalog, &self.language, &self.size)?;
        lemmatizer.configure(self.settings);
        Ok(lemmatizer)
    }
}

fn check_code(report: &mut SpecReport, path: &str, what: &str, code: &str) {
    if code.is_empty() {
        report
            .diagnostics
            .push(SpecDiagnostic::error(path, format!("{what} code is empty")));
    } else if code.chars().any(|c| c.is_uppercase()) {
        report.diagnostics.push(SpecDiagnostic::warning(
            path,
            format!("{what} code `{code}` will be lowercased during resolution"),
        ));
    }
}
