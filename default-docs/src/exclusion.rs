//! Names already defined by caller-supplied documents
//!
//! Scans parsed documents once and records every query, mutation, subscription
//! and fragment name so the generator can skip definitions that would collide.

use apollo_compiler::ast::{Definition, Document, OperationType};
use indexmap::IndexSet;

use crate::config::DocKind;
use crate::error::GeneratorError;

/// Names defined by the caller, one set per definition kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    /// Query operation names
    pub queries: IndexSet<String>,
    /// Mutation operation names
    pub mutations: IndexSet<String>,
    /// Subscription operation names
    pub subscriptions: IndexSet<String>,
    /// Fragment names
    pub fragments: IndexSet<String>,
}

impl ExclusionSet {
    /// Collect the defined names from every document
    pub fn collect<'a>(
        documents: impl IntoIterator<Item = &'a Document>,
    ) -> Result<ExclusionSet, GeneratorError> {
        let mut names = ExclusionSet::default();

        for document in documents {
            for definition in &document.definitions {
                match definition {
                    Definition::OperationDefinition(operation) => {
                        // Anonymous operations cannot be matched against generated names
                        let name = operation.name.as_ref().ok_or_else(|| {
                            GeneratorError::InvalidDocument(format!(
                                "anonymous {} operation in provided documents",
                                DocKind::from(operation.operation_type)
                            ))
                        })?;
                        names
                            .operations_mut(operation.operation_type)
                            .insert(name.to_string());
                    }
                    Definition::FragmentDefinition(fragment) => {
                        names.fragments.insert(fragment.name.to_string());
                    }
                    // Type system definitions never collide with generated documents
                    _ => {}
                }
            }
        }

        Ok(names)
    }

    /// Operation names of the given kind
    pub fn operations(&self, operation_type: OperationType) -> &IndexSet<String> {
        match operation_type {
            OperationType::Query => &self.queries,
            OperationType::Mutation => &self.mutations,
            OperationType::Subscription => &self.subscriptions,
        }
    }

    fn operations_mut(&mut self, operation_type: OperationType) -> &mut IndexSet<String> {
        match operation_type {
            OperationType::Query => &mut self.queries,
            OperationType::Mutation => &mut self.mutations,
            OperationType::Subscription => &mut self.subscriptions,
        }
    }

    /// Whether an operation with this name is already defined
    pub fn has_operation(&self, operation_type: OperationType, name: &str) -> bool {
        self.operations(operation_type).contains(name)
    }

    /// Whether a fragment with this name is already defined
    pub fn has_fragment(&self, name: &str) -> bool {
        self.fragments.contains(name)
    }
}
