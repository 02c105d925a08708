//! Generation entry point
//!
//! Ties the pipeline together: collect the names the caller already defines,
//! index the schema, then emit fragments followed by operations in the
//! requested order.

use apollo_compiler::Schema;
use apollo_compiler::ast::Document;
use tracing::info;

use crate::config::{DocKind, GenerationConfig};
use crate::error::GeneratorError;
use crate::exclusion::ExclusionSet;
use crate::expand::Context;
use crate::fragment::{Fragments, synthesize_fragments};
use crate::operation::assemble_operations;
use crate::type_graph::TypeGraph;

/// Generate the default documents for `schema`
///
/// `documents` are the caller's own documents; any operation or fragment name
/// they define is replaced by a skip notice. Definitions are separated by a
/// blank line and the result ends with a newline, or is empty when nothing
/// was generated. The same inputs always produce byte-identical output.
pub fn generate(
    schema: &Schema,
    documents: &[Document],
    config: &GenerationConfig,
) -> Result<String, GeneratorError> {
    // Collect caller-defined names
    let exclusion = ExclusionSet::collect(documents)?;

    // Index the schema
    let graph = TypeGraph::build(schema)?;

    // Fragments always come first
    let fragments = if config.generates_fragments() {
        synthesize_fragments(&graph, config, &exclusion)?
    } else {
        Fragments::default()
    };
    let fragment_count = fragments.definitions.len();
    let mut definitions = fragments.definitions;
    let ctx = Context::new(&graph, config, &fragments.index);

    // Operations in requested order
    for kind in config.docs_to_generate.iter().copied() {
        if kind == DocKind::Fragment {
            continue;
        }
        definitions.extend(assemble_operations(ctx, &exclusion, kind)?);
    }

    info!(
        fragments = fragment_count,
        operations = definitions.len() - fragment_count,
        "generated default documents"
    );

    if definitions.is_empty() {
        return Ok(String::new());
    }
    let mut output = definitions.join("\n\n");
    output.push('\n');
    Ok(output)
}
