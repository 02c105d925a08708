//! Error types for document generation
//!
//! This module contains the single error type shared by the core and the CLI.

/// Error type for document generation
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// `docsToGenerate` names a category the generator does not know
    #[error("invalid docsToGenerate value `{value}`, please use the following values: {expected}")]
    Configuration {
        /// The rejected value
        value: String,
        /// Comma separated list of accepted values
        expected: String,
    },

    /// A caller-supplied document cannot be used for collision detection
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The schema references a type it does not define
    #[error("schema integrity error: {owner} references undefined type `{missing}`")]
    SchemaIntegrity {
        /// Type or field holding the dangling reference, e.g. `Order.vendor`
        owner: String,
        /// Name of the missing type
        missing: String,
    },

    /// Failed to parse a schema or document
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Source path given to the parser
        path: String,
        /// Parser diagnostics
        message: String,
    },

    /// Failed to read input or write output
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Build a `SchemaIntegrity` error
    pub(crate) fn missing_type(owner: impl Into<String>, missing: impl Into<String>) -> Self {
        GeneratorError::SchemaIntegrity {
            owner: owner.into(),
            missing: missing.into(),
        }
    }
}
