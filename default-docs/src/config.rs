//! Generation run parameters
//!
//! `RawConfig` is what a config file or the command line supplies. It is turned
//! into a `GenerationConfig` by `RawConfig::validate`, which rejects unknown
//! document categories before any generation starts.

use std::fmt;
use std::str::FromStr;

use apollo_compiler::ast::OperationType;
use serde::Deserialize;

use crate::error::GeneratorError;

/// Default `fragmentMinimumFields`
pub const DEFAULT_FRAGMENT_MINIMUM_FIELDS: usize = 3;

/// Default `recursionLimit`
pub const DEFAULT_RECURSION_LIMIT: usize = 1;

/// A category of document the generator can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    /// `<Type>AllFields` fragments
    Fragment,
    /// One query per `Query` root field
    Query,
    /// One mutation per `Mutation` root field
    Mutation,
    /// One subscription per `Subscription` root field
    Subscription,
}

impl DocKind {
    /// All categories, in default emission order
    pub const ALL: [DocKind; 4] = [
        DocKind::Fragment,
        DocKind::Query,
        DocKind::Mutation,
        DocKind::Subscription,
    ];

    /// Name used in `docsToGenerate` and in skip notices
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Fragment => "fragment",
            DocKind::Query => "query",
            DocKind::Mutation => "mutation",
            DocKind::Subscription => "subscription",
        }
    }

    /// The operation type this category generates, `None` for fragments
    pub fn operation_type(&self) -> Option<OperationType> {
        match self {
            DocKind::Fragment => None,
            DocKind::Query => Some(OperationType::Query),
            DocKind::Mutation => Some(OperationType::Mutation),
            DocKind::Subscription => Some(OperationType::Subscription),
        }
    }
}

impl From<OperationType> for DocKind {
    fn from(operation_type: OperationType) -> Self {
        match operation_type {
            OperationType::Query => DocKind::Query,
            OperationType::Mutation => DocKind::Mutation,
            OperationType::Subscription => DocKind::Subscription,
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GeneratorError::Configuration {
                value: s.to_string(),
                expected: DocKind::ALL.map(|kind| kind.as_str()).join(", "),
            })
    }
}

/// Unvalidated run parameters, as read from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    /// Which documents to generate
    pub docs_to_generate: Option<Vec<String>>,
    /// Types with fewer fields than this are always inlined
    pub fragment_minimum_fields: Option<usize>,
    /// Suppress `__typename` selections
    pub skip_typename: Option<bool>,
    /// Re-entries allowed into a type already visited on the current path
    pub recursion_limit: Option<usize>,
    /// Emit schema descriptions as comments
    pub comments_from_descriptions: Option<bool>,
    /// Emit `@deprecated` reasons as comments
    pub deprecated_directive_in_comments: Option<bool>,
}

impl RawConfig {
    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merge(self, other: RawConfig) -> RawConfig {
        RawConfig {
            docs_to_generate: other.docs_to_generate.or(self.docs_to_generate),
            fragment_minimum_fields: other.fragment_minimum_fields.or(self.fragment_minimum_fields),
            skip_typename: other.skip_typename.or(self.skip_typename),
            recursion_limit: other.recursion_limit.or(self.recursion_limit),
            comments_from_descriptions: other
                .comments_from_descriptions
                .or(self.comments_from_descriptions),
            deprecated_directive_in_comments: other
                .deprecated_directive_in_comments
                .or(self.deprecated_directive_in_comments),
        }
    }

    /// Check `docsToGenerate` and fill in defaults
    pub fn validate(self) -> Result<GenerationConfig, GeneratorError> {
        let docs_to_generate = match self.docs_to_generate {
            Some(values) => {
                let mut kinds: Vec<DocKind> = Vec::with_capacity(values.len());
                for value in &values {
                    let kind: DocKind = value.trim().parse()?;
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
                kinds
            }
            None => DocKind::ALL.to_vec(),
        };

        Ok(GenerationConfig {
            docs_to_generate,
            fragment_minimum_fields: self
                .fragment_minimum_fields
                .unwrap_or(DEFAULT_FRAGMENT_MINIMUM_FIELDS),
            skip_typename: self.skip_typename.unwrap_or(false),
            recursion_limit: self.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT),
            comments_from_descriptions: self.comments_from_descriptions.unwrap_or(false),
            deprecated_directive_in_comments: self.deprecated_directive_in_comments.unwrap_or(false),
        })
    }
}

/// Validated run parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Categories to emit, without duplicates
    pub docs_to_generate: Vec<DocKind>,
    /// Object types with fewer declared fields never get an AllFields fragment
    pub fragment_minimum_fields: usize,
    /// When false every selection set ends with `__typename`
    pub skip_typename: bool,
    /// Re-entries allowed into a type already visited on the current path
    pub recursion_limit: usize,
    /// Emit schema descriptions as leading comments
    pub comments_from_descriptions: bool,
    /// Emit `@deprecated` reasons as leading comments
    pub deprecated_directive_in_comments: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            docs_to_generate: DocKind::ALL.to_vec(),
            fragment_minimum_fields: DEFAULT_FRAGMENT_MINIMUM_FIELDS,
            skip_typename: false,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            comments_from_descriptions: false,
            deprecated_directive_in_comments: false,
        }
    }
}

impl GenerationConfig {
    /// Whether `kind` was requested
    pub fn generates(&self, kind: DocKind) -> bool {
        self.docs_to_generate.contains(&kind)
    }

    /// Whether AllFields fragments are part of this run
    pub fn generates_fragments(&self) -> bool {
        self.generates(DocKind::Fragment)
    }
}
