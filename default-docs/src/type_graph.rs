//! Lookup structures over the schema's type graph
//!
//! The `TypeGraph` is built once per generation run. It classifies every
//! user-defined output type, records which object types implement each
//! interface, and resolves the root operation types. Every type reference
//! reachable from an output field is checked while building, so a dangling
//! reference fails the run before any text is produced.

use apollo_compiler::Schema;
use apollo_compiler::ast::{OperationType, Type};
use apollo_compiler::schema::{
    Component, ExtendedType, FieldDefinition, InterfaceType, ObjectType, UnionType,
};
use indexmap::IndexMap;

use crate::error::GeneratorError;

/// An indexed type definition
#[derive(Debug, Clone, Copy)]
pub enum TypeDef<'a> {
    /// Object type
    Object(&'a ObjectType),
    /// Interface type
    Interface(&'a InterfaceType),
    /// Union type
    Union(&'a UnionType),
    /// Scalar type, traversal stops here
    Scalar,
    /// Enum type, traversal stops here
    Enum,
}

impl TypeDef<'_> {
    /// Whether selections stop at this type
    pub fn is_leaf(&self) -> bool {
        matches!(self, TypeDef::Scalar | TypeDef::Enum)
    }
}

/// Read-only view over one schema for the duration of a run
#[derive(Debug)]
pub struct TypeGraph<'a> {
    /// Output types by name, in declaration order
    types: IndexMap<&'a str, TypeDef<'a>>,
    /// Object types implementing each interface, in declaration order
    implementors: IndexMap<&'a str, Vec<&'a str>>,
    /// Root operation type names
    query: Option<&'a str>,
    mutation: Option<&'a str>,
    subscription: Option<&'a str>,
}

impl<'a> TypeGraph<'a> {
    /// Index the schema and verify its output type references
    pub fn build(schema: &'a Schema) -> Result<TypeGraph<'a>, GeneratorError> {
        let mut types = IndexMap::new();
        let mut implementors: IndexMap<&'a str, Vec<&'a str>> = IndexMap::new();

        for (name, ty) in &schema.types {
            let name = name.as_str();
            // Introspection types are never selected by generated documents
            if name.starts_with("__") {
                continue;
            }
            let def = match ty {
                ExtendedType::Object(object) => {
                    for interface in &object.implements_interfaces {
                        implementors
                            .entry(interface.name.as_str())
                            .or_default()
                            .push(name);
                    }
                    TypeDef::Object(object)
                }
                ExtendedType::Interface(interface) => {
                    implementors.entry(name).or_default();
                    TypeDef::Interface(interface)
                }
                ExtendedType::Union(union_) => TypeDef::Union(union_),
                ExtendedType::Scalar(_) => TypeDef::Scalar,
                ExtendedType::Enum(_) => TypeDef::Enum,
                // Input objects only appear in argument positions
                ExtendedType::InputObject(_) => continue,
            };
            types.insert(name, def);
        }

        let graph = TypeGraph {
            types,
            implementors,
            query: schema.root_operation(OperationType::Query).map(|n| n.as_str()),
            mutation: schema.root_operation(OperationType::Mutation).map(|n| n.as_str()),
            subscription: schema
                .root_operation(OperationType::Subscription)
                .map(|n| n.as_str()),
        };
        graph.check_references()?;

        Ok(graph)
    }

    /// Every field type, union member and implemented interface must resolve
    fn check_references(&self) -> Result<(), GeneratorError> {
        for (name, def) in &self.types {
            match def {
                TypeDef::Object(object) => {
                    self.check_fields(name, object.fields.values())?;
                    for interface in &object.implements_interfaces {
                        match self.types.get(interface.name.as_str()) {
                            Some(TypeDef::Interface(_)) => {}
                            _ => {
                                return Err(GeneratorError::missing_type(
                                    *name,
                                    interface.name.as_str(),
                                ));
                            }
                        }
                    }
                }
                TypeDef::Interface(interface) => {
                    self.check_fields(name, interface.fields.values())?;
                }
                TypeDef::Union(union_) => {
                    for member in &union_.members {
                        match self.types.get(member.name.as_str()) {
                            Some(TypeDef::Object(_)) => {}
                            _ => {
                                return Err(GeneratorError::missing_type(
                                    *name,
                                    member.name.as_str(),
                                ));
                            }
                        }
                    }
                }
                TypeDef::Scalar | TypeDef::Enum => {}
            }
        }
        Ok(())
    }

    fn check_fields<'f>(
        &self,
        owner: &str,
        fields: impl Iterator<Item = &'f Component<FieldDefinition>>,
    ) -> Result<(), GeneratorError> {
        for field in fields {
            let base = base_type_name(&field.ty);
            if !self.types.contains_key(base) {
                return Err(GeneratorError::missing_type(
                    format!("{}.{}", owner, field.name),
                    base,
                ));
            }
        }
        Ok(())
    }

    /// Look up an output type by name
    pub fn get(&self, name: &str) -> Option<TypeDef<'a>> {
        self.types.get(name).copied()
    }

    /// Look up the base type of a field, failing on a dangling reference
    pub fn resolve_field_type(
        &self,
        owner: &str,
        field: &FieldDefinition,
    ) -> Result<(&'a str, TypeDef<'a>), GeneratorError> {
        let base = base_type_name(&field.ty);
        self.types
            .get_key_value(base)
            .map(|(name, def)| (*name, *def))
            .ok_or_else(|| GeneratorError::missing_type(format!("{}.{}", owner, field.name), base))
    }

    /// Object types implementing `interface`, in declaration order
    pub fn implementors(&self, interface: &str) -> &[&'a str] {
        self.implementors
            .get(interface)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Name of the root type for an operation kind
    pub fn root_type(&self, operation_type: OperationType) -> Option<&'a str> {
        match operation_type {
            OperationType::Query => self.query,
            OperationType::Mutation => self.mutation,
            OperationType::Subscription => self.subscription,
        }
    }

    /// Whether `name` is bound to a root operation
    pub fn is_root(&self, name: &str) -> bool {
        [self.query, self.mutation, self.subscription].contains(&Some(name))
    }

    /// Non-root object types, in declaration order
    pub fn objects(&self) -> impl Iterator<Item = (&'a str, &'a ObjectType)> + '_ {
        self.types.iter().filter_map(|(name, def)| match def {
            TypeDef::Object(object) if !self.is_root(name) => Some((*name, *object)),
            _ => None,
        })
    }
}

/// Name of the innermost named type, stripping list and non-null wrappers
pub fn base_type_name(ty: &Type) -> &str {
    ty.inner_named_type().as_str()
}
