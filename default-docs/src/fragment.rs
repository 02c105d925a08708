//! AllFields fragment synthesis
//!
//! Every non-root object type with at least `fragmentMinimumFields` declared
//! fields gets one `fragment <Type>AllFields on <Type>` definition, in schema
//! declaration order. Nested object fields inside a fragment body spread the
//! nested type's own fragment when that type qualifies and the spread does
//! not close a cycle between fragments; otherwise the nested type is inlined.
//!
//! Arguments inside a fragment body become variables named after the
//! fragment's type (`stallProduceFirst` for `Stall.produce(first:)`). The
//! `FragmentIndex` keeps them so every operation spreading the fragment,
//! directly or through other fragments, declares them.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::GeneratorError;
use crate::exclusion::ExclusionSet;
use crate::expand::{Context, Depth, VariableBinding, decapitalize, fragment_name, object_selection};
use crate::type_graph::TypeGraph;

/// Whether a type with `field_count` declared fields gets a fragment
pub fn qualifies(config: &GenerationConfig, field_count: usize) -> bool {
    field_count > 0 && field_count >= config.fragment_minimum_fields
}

/// Spreads and variables of every rendered AllFields fragment
#[derive(Debug, Clone, Default)]
pub struct FragmentIndex {
    /// Fragments spread directly by each fragment body
    spreads: IndexMap<String, IndexSet<String>>,
    /// Variables referenced directly by each fragment body
    variables: IndexMap<String, Vec<VariableBinding>>,
}

impl FragmentIndex {
    fn insert(&mut self, name: &str, spreads: Vec<String>, variables: Vec<VariableBinding>) {
        self.spreads.insert(name.to_string(), spreads.into_iter().collect());
        self.variables.insert(name.to_string(), variables);
    }

    /// Whether the fragment `from` spreads `to`, directly or transitively
    ///
    /// A fragment reaches itself.
    pub fn reaches(&self, from: &str, to: &str) -> bool {
        let mut seen = IndexSet::new();
        let mut pending = vec![from];
        while let Some(name) = pending.pop() {
            if name == to {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(spreads) = self.spreads.get(name) {
                pending.extend(spreads.iter().map(String::as_str));
            }
        }
        false
    }

    /// Variables an operation needs to spread `name`, including those of the
    /// fragments it spreads, first occurrence wins
    pub fn variables(&self, name: &str) -> Vec<VariableBinding> {
        let mut seen = IndexSet::new();
        let mut collected: Vec<VariableBinding> = Vec::new();
        self.collect_variables(name, &mut seen, &mut collected);
        collected
    }

    fn collect_variables<'s>(
        &'s self,
        name: &'s str,
        seen: &mut IndexSet<&'s str>,
        collected: &mut Vec<VariableBinding>,
    ) {
        if !seen.insert(name) {
            return;
        }
        for variable in self.variables.get(name).into_iter().flatten() {
            if !collected.iter().any(|known| known.name == variable.name) {
                collected.push(variable.clone());
            }
        }
        for spread in self.spreads.get(name).into_iter().flatten() {
            self.collect_variables(spread, seen, collected);
        }
    }
}

/// Rendered fragments plus what operations need to spread them
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    /// Fragment definitions and skip notices, in schema declaration order
    pub definitions: Vec<String>,
    /// Spreads and variables per rendered fragment
    pub index: FragmentIndex,
}

/// Render every qualifying fragment, or a skip notice for those the caller
/// already defines
pub fn synthesize_fragments(
    graph: &TypeGraph<'_>,
    config: &GenerationConfig,
    exclusion: &ExclusionSet,
) -> Result<Fragments, GeneratorError> {
    let mut fragments = Fragments::default();

    for (type_name, object) in graph.objects() {
        if !qualifies(config, object.fields.len()) {
            continue;
        }
        let name = fragment_name(type_name);

        if exclusion.has_fragment(&name) {
            debug!(fragment = %name, "fragment already defined, skipping");
            fragments.definitions.push(format!(
                "## Skipped fragment {} since it is already defined in provided documents",
                name
            ));
            continue;
        }

        // Spreads are checked against the fragments rendered before this one
        let ctx = Context {
            graph,
            config,
            fragments: &fragments.index,
            fragment_owner: Some(&name),
        };
        let prefix = decapitalize(type_name);
        let depth = Depth::default().enter(type_name);
        let Some(body) = object_selection(ctx, type_name, object, &depth, &[prefix.as_str()], 1)? else {
            debug!(fragment = %name, "no selectable fields, omitting fragment");
            continue;
        };

        let text = format!("fragment {} on {} {{\n{}\n}}", name, type_name, body.text());
        fragments.index.insert(&name, body.spreads, body.variables);
        fragments.definitions.push(text);
    }

    debug!(count = fragments.definitions.len(), "synthesized fragments");
    Ok(fragments)
}
