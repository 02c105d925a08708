//! default-docs
//!
//! Generates default GraphQL documents from a schema: one `<Type>AllFields`
//! fragment per sufficiently large object type, and one query, mutation or
//! subscription per root field with every argument hoisted into a variable.
//!
//! ```no_run
//! use apollo_compiler::Schema;
//! use default_docs::{GenerationConfig, generate};
//!
//! let schema = Schema::parse("type Query { version: String }", "schema.graphql").unwrap();
//! let output = generate(&schema, &[], &GenerationConfig::default()).unwrap();
//! assert_eq!(output, "query Version {\n  version\n}\n");
//! ```

#![deny(missing_docs)]

pub mod config;
mod error;
pub mod exclusion;
pub mod expand;
pub mod fragment;
mod generator;
pub mod operation;
pub mod type_graph;

pub use config::{DocKind, GenerationConfig, RawConfig};
pub use error::GeneratorError;
pub use exclusion::ExclusionSet;
pub use generator::generate;
pub use type_graph::TypeGraph;
