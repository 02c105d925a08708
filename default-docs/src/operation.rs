//! Operation assembly
//!
//! One operation per root field of the query, mutation and subscription
//! types. The operation is named after the field with its first character
//! upper-cased, and declares every variable hoisted from the arguments found
//! while expanding the field.

use tracing::{debug, warn};

use crate::config::DocKind;
use crate::error::GeneratorError;
use crate::exclusion::ExclusionSet;
use crate::expand::{Context, Depth, Expansion, VariableBinding, capitalize, expand_field};
use crate::type_graph::TypeDef;

/// Render every operation of one kind, or a skip notice for those the caller
/// already defines
///
/// Returns nothing for fragments or when the schema has no root type for
/// `kind`.
pub fn assemble_operations(
    ctx: Context<'_, '_>,
    exclusion: &ExclusionSet,
    kind: DocKind,
) -> Result<Vec<String>, GeneratorError> {
    let Some(operation_type) = kind.operation_type() else {
        return Ok(Vec::new());
    };
    let Some(root) = ctx.graph.root_type(operation_type) else {
        debug!(%kind, "schema has no root type, nothing to generate");
        return Ok(Vec::new());
    };
    let Some(TypeDef::Object(root_object)) = ctx.graph.get(root) else {
        return Err(GeneratorError::missing_type(format!("schema {}", kind), root));
    };

    let mut definitions = Vec::new();
    for field in root_object.fields.values() {
        let name = capitalize(&field.name);

        if exclusion.has_operation(operation_type, &name) {
            debug!(%kind, operation = %name, "operation already defined, skipping");
            definitions.push(format!(
                "## Skipped {} {} since it is already defined in provided documents",
                kind, name
            ));
            continue;
        }

        let depth = Depth::default().enter(root);
        let Some(expansion) = expand_field(ctx, root, field, &depth, &[], 1)? else {
            debug!(%kind, operation = %name, "empty selection set, omitting operation");
            continue;
        };

        let variables = operation_variables(ctx, &name, &expansion);
        let declarations = if variables.is_empty() {
            String::new()
        } else {
            let declared: Vec<String> = variables
                .iter()
                .map(|variable| variable.declaration())
                .collect();
            format!("({})", declared.join(", "))
        };

        definitions.push(format!(
            "{} {}{} {{\n{}\n}}",
            kind,
            name,
            declarations,
            expansion.text()
        ));
    }

    debug!(%kind, count = definitions.len(), "assembled operations");
    Ok(definitions)
}

/// Variables of the field itself followed by those of every spread fragment
fn operation_variables(
    ctx: Context<'_, '_>,
    operation: &str,
    expansion: &Expansion,
) -> Vec<VariableBinding> {
    let mut variables = expansion.variables.clone();
    let spread = expansion
        .spreads
        .iter()
        .flat_map(|fragment| ctx.fragments.variables(fragment));

    for variable in spread {
        match variables.iter().find(|known| known.name == variable.name) {
            Some(known) if known.type_string != variable.type_string => {
                warn!(
                    operation,
                    variable = %variable.name,
                    declared = %known.type_string,
                    ignored = %variable.type_string,
                    "variable declared with two types, keeping the first"
                );
            }
            Some(_) => {}
            None => variables.push(variable),
        }
    }
    variables
}
