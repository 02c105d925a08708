//! Field expansion
//!
//! Turns one field definition into indented selection text. Scalars and enums
//! terminate; object types are inlined or replaced by an AllFields fragment
//! spread; interfaces select their own fields followed by one `... on` branch
//! per implementor; unions select one `... on` branch per member. Arguments
//! found on the way become resolver arguments plus variable bindings that the
//! enclosing operation declares.

use std::collections::HashMap;

use apollo_compiler::ast::Type;
use apollo_compiler::schema::{Component, FieldDefinition, InterfaceType, ObjectType, UnionType};
use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::GeneratorError;
use crate::fragment::{self, FragmentIndex};
use crate::type_graph::{TypeDef, TypeGraph};

/// Indentation unit of generated documents
pub const INDENT: &str = "  ";

/// Suffix of synthesized fragment names
pub const FRAGMENT_SUFFIX: &str = "AllFields";

/// Everything a run needs besides per-path state
#[derive(Debug, Clone, Copy)]
pub struct Context<'a, 'r> {
    /// Schema lookups
    pub graph: &'r TypeGraph<'a>,
    /// Validated run parameters
    pub config: &'r GenerationConfig,
    /// AllFields fragments rendered so far
    pub fragments: &'r FragmentIndex,
    /// Fragment whose body is being rendered, `None` inside operations
    pub fragment_owner: Option<&'r str>,
}

impl<'a, 'r> Context<'a, 'r> {
    /// Context for rendering operations against the given fragments
    pub fn new(
        graph: &'r TypeGraph<'a>,
        config: &'r GenerationConfig,
        fragments: &'r FragmentIndex,
    ) -> Self {
        Context {
            graph,
            config,
            fragments,
            fragment_owner: None,
        }
    }
}

/// A variable implied by a field argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    /// Variable name without the `$`
    pub name: String,
    /// Named type with wrappers stripped
    pub base_type: String,
    /// Declared type in GraphQL syntax, e.g. `[OrderItemInput!]!`
    pub type_string: String,
    /// Outermost type is non-null
    pub non_null: bool,
    /// Outermost type (under non-null) is a list
    pub list: bool,
}

impl VariableBinding {
    fn new(name: String, ty: &Type) -> Self {
        VariableBinding {
            name,
            base_type: ty.inner_named_type().to_string(),
            type_string: type_string(ty),
            non_null: matches!(ty, Type::NonNullNamed(_) | Type::NonNullList(_)),
            list: matches!(ty, Type::List(_) | Type::NonNullList(_)),
        }
    }

    /// `$name: Type`
    pub fn declaration(&self) -> String {
        format!("${}: {}", self.name, self.type_string)
    }
}

/// Selection text for one field plus the variables it needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Indented lines, comments included
    pub lines: Vec<String>,
    /// Variables in the order their arguments were encountered
    pub variables: Vec<VariableBinding>,
    /// AllFields fragments spread directly by this selection
    pub spreads: Vec<String>,
}

impl Expansion {
    /// The selection text as one string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn append(&mut self, other: Expansion) {
        self.lines.extend(other.lines);
        self.variables.extend(other.variables);
        self.spreads.extend(other.spreads);
    }
}

/// How often each type was entered along the current path
#[derive(Debug, Clone, Default)]
pub struct Depth<'a> {
    entries: HashMap<&'a str, usize>,
}

impl<'a> Depth<'a> {
    /// Times `type_name` was entered on this path
    pub fn count(&self, type_name: &str) -> usize {
        self.entries.get(type_name).copied().unwrap_or(0)
    }

    /// A copy of this path with `type_name` entered once more
    pub fn enter(&self, type_name: &'a str) -> Depth<'a> {
        let mut next = self.clone();
        *next.entries.entry(type_name).or_insert(0) += 1;
        next
    }
}

/// Name of the AllFields fragment for a type
pub fn fragment_name(type_name: &str) -> String {
    format!("{}{}", type_name, FRAGMENT_SUFFIX)
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Variable name for an argument reached through `path`
///
/// The first segment is kept as-is and every later segment is capitalized,
/// so `["items", "produce"]` plus `first` gives `itemsProduceFirst`.
pub fn variable_name(path: &[&str], argument: &str) -> String {
    let mut segments = path.iter().copied().chain(std::iter::once(argument));
    let mut name = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        name.push_str(&capitalize(segment));
    }
    name
}

/// Rebuild the declared type in GraphQL syntax
pub fn type_string(ty: &Type) -> String {
    match ty {
        Type::Named(name) => name.to_string(),
        Type::NonNullNamed(name) => format!("{}!", name),
        Type::List(inner) => format!("[{}]", type_string(inner)),
        Type::NonNullList(inner) => format!("[{}]!", type_string(inner)),
    }
}

fn pad(indent: usize) -> String {
    INDENT.repeat(indent)
}

/// Expand one field of `owner`
///
/// `path` holds the field names used to prefix this field's argument
/// variables: empty for an operation's root field, and extended by one name
/// per nesting level below it. Returns `None` when the field is pruned by the
/// recursion limit or would have an empty selection set.
pub fn expand_field<'a>(
    ctx: Context<'a, '_>,
    owner: &str,
    field: &FieldDefinition,
    depth: &Depth<'a>,
    path: &[&str],
    indent: usize,
) -> Result<Option<Expansion>, GeneratorError> {
    let (type_name, def) = ctx.graph.resolve_field_type(owner, field)?;

    // Self-reference guard
    if !def.is_leaf() && depth.count(type_name) > ctx.config.recursion_limit {
        debug!(owner, field = %field.name, type_name, "recursion limit reached, pruning field");
        return Ok(None);
    }

    let mut expansion = Expansion {
        lines: field_comments(ctx.config, field, indent),
        ..Default::default()
    };

    // Resolver arguments and the variables they hoist
    let arguments: Vec<String> = field
        .arguments
        .iter()
        .map(|argument| {
            let binding = VariableBinding::new(variable_name(path, &argument.name), &argument.ty);
            let call = format!("{}: ${}", argument.name, binding.name);
            expansion.variables.push(binding);
            call
        })
        .collect();
    let head = if arguments.is_empty() {
        format!("{}{}", pad(indent), field.name)
    } else {
        format!("{}{}({})", pad(indent), field.name, arguments.join(", "))
    };

    let selection = match def {
        TypeDef::Scalar | TypeDef::Enum => None,
        TypeDef::Object(object) => {
            if spreads_fragment(ctx, type_name, object, depth) {
                let name = fragment_name(type_name);
                Some(Expansion {
                    lines: vec![format!("{}...{}", pad(indent + 1), name)],
                    spreads: vec![name],
                    ..Default::default()
                })
            } else {
                object_selection(ctx, type_name, object, &depth.enter(type_name), path, indent + 1)?
            }
        }
        TypeDef::Interface(interface) => {
            interface_selection(ctx, type_name, interface, &depth.enter(type_name), path, indent + 1)?
        }
        TypeDef::Union(union_) => {
            union_selection(ctx, union_, &depth.enter(type_name), path, indent + 1)?
        }
    };

    match selection {
        None if def.is_leaf() => expansion.lines.push(head),
        None => {
            debug!(owner, field = %field.name, type_name, "empty selection set, omitting field");
            return Ok(None);
        }
        Some(selection) => {
            expansion.lines.push(format!("{} {{", head));
            expansion.append(selection);
            expansion.lines.push(format!("{}}}", pad(indent)));
        }
    }

    Ok(Some(expansion))
}

/// Whether an object-typed field is replaced by `...<Type>AllFields`
///
/// Only when fragments are generated in this run, the type is a non-root
/// type large enough to get one, and the type is not already being expanded
/// on this path (a type never spreads its own fragment). Inside a fragment
/// body the spread must also not close a cycle back to that fragment;
/// otherwise the type is inlined under the recursion limit.
fn spreads_fragment(
    ctx: Context<'_, '_>,
    type_name: &str,
    object: &ObjectType,
    depth: &Depth<'_>,
) -> bool {
    if !ctx.config.generates_fragments()
        || ctx.graph.is_root(type_name)
        || !fragment::qualifies(ctx.config, object.fields.len())
        || depth.count(type_name) > 0
    {
        return false;
    }
    match ctx.fragment_owner {
        Some(owner) => !ctx.fragments.reaches(&fragment_name(type_name), owner),
        None => true,
    }
}

/// Every field of an object type, followed by `__typename`
///
/// `depth` must already include `type_name`. Also used for AllFields
/// fragment bodies. Returns `None` when no field survives.
pub fn object_selection<'a>(
    ctx: Context<'a, '_>,
    type_name: &str,
    object: &ObjectType,
    depth: &Depth<'a>,
    path: &[&str],
    indent: usize,
) -> Result<Option<Expansion>, GeneratorError> {
    let mut selection = Expansion::default();
    for field in object.fields.values() {
        let child_path = extend_path(path, &field.name);
        if let Some(child) = expand_field(ctx, type_name, field, depth, &child_path, indent)? {
            selection.append(child);
        }
    }
    if selection.lines.is_empty() {
        return Ok(None);
    }
    if !ctx.config.skip_typename {
        selection.lines.push(format!("{}__typename", pad(indent)));
    }
    Ok(Some(selection))
}

/// Interface fields, `__typename`, then one branch per implementor holding
/// the fields the interface does not declare
fn interface_selection<'a>(
    ctx: Context<'a, '_>,
    type_name: &'a str,
    interface: &'a InterfaceType,
    depth: &Depth<'a>,
    path: &[&str],
    indent: usize,
) -> Result<Option<Expansion>, GeneratorError> {
    let mut selection = Expansion::default();
    for field in interface.fields.values() {
        let child_path = extend_path(path, &field.name);
        if let Some(child) = expand_field(ctx, type_name, field, depth, &child_path, indent)? {
            selection.append(child);
        }
    }
    let has_core_fields = !selection.lines.is_empty();
    if has_core_fields && !ctx.config.skip_typename {
        selection.lines.push(format!("{}__typename", pad(indent)));
    }

    for implementor in ctx.graph.implementors(type_name).iter().copied() {
        let Some(TypeDef::Object(object)) = ctx.graph.get(implementor) else {
            continue;
        };
        let own_fields = object
            .fields
            .values()
            .filter(|field| !interface.fields.contains_key(&field.name));
        if let Some(branch) = branch_selection(ctx, implementor, own_fields, depth, path, indent)? {
            selection.append(branch);
        }
    }

    if selection.lines.is_empty() {
        return Ok(None);
    }
    if !has_core_fields && !ctx.config.skip_typename {
        selection.lines.push(format!("{}__typename", pad(indent)));
    }
    Ok(Some(selection))
}

/// One branch per member, then a single shared `__typename`
fn union_selection<'a>(
    ctx: Context<'a, '_>,
    union_: &'a UnionType,
    depth: &Depth<'a>,
    path: &[&str],
    indent: usize,
) -> Result<Option<Expansion>, GeneratorError> {
    let mut selection = Expansion::default();
    for member in &union_.members {
        let member_name = member.name.as_str();
        let Some(TypeDef::Object(object)) = ctx.graph.get(member_name) else {
            continue;
        };
        let fields = object.fields.values();
        if let Some(branch) = branch_selection(ctx, member_name, fields, depth, path, indent)? {
            selection.append(branch);
        }
    }
    if selection.lines.is_empty() {
        return Ok(None);
    }
    if !ctx.config.skip_typename {
        selection.lines.push(format!("{}__typename", pad(indent)));
    }
    Ok(Some(selection))
}

/// `... on <Type> { … }` over the given fields of an object type
fn branch_selection<'a>(
    ctx: Context<'a, '_>,
    type_name: &'a str,
    fields: impl Iterator<Item = &'a Component<FieldDefinition>>,
    depth: &Depth<'a>,
    path: &[&str],
    indent: usize,
) -> Result<Option<Expansion>, GeneratorError> {
    if depth.count(type_name) > ctx.config.recursion_limit {
        debug!(type_name, "recursion limit reached, pruning branch");
        return Ok(None);
    }
    let depth = depth.enter(type_name);

    // Branch fields carry no comments
    let config = GenerationConfig {
        comments_from_descriptions: false,
        deprecated_directive_in_comments: false,
        ..ctx.config.clone()
    };
    let ctx = Context {
        config: &config,
        ..ctx
    };

    let mut body = Expansion::default();
    for field in fields {
        let child_path = extend_path(path, &field.name);
        if let Some(child) = expand_field(ctx, type_name, field, &depth, &child_path, indent + 1)? {
            body.append(child);
        }
    }
    if body.lines.is_empty() {
        return Ok(None);
    }

    let mut branch = Expansion {
        lines: vec![format!("{}... on {} {{", pad(indent), type_name)],
        ..Default::default()
    };
    branch.append(body);
    branch.lines.push(format!("{}}}", pad(indent)));
    Ok(Some(branch))
}

fn extend_path<'p>(path: &[&'p str], name: &'p str) -> Vec<&'p str> {
    let mut next = path.to_vec();
    next.push(name);
    next
}

/// Leading `#` comments for a field
fn field_comments(config: &GenerationConfig, field: &FieldDefinition, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();

    if config.comments_from_descriptions {
        if let Some(description) = &field.description {
            for line in description.lines() {
                let line = line.trim_end();
                if line.is_empty() {
                    lines.push(format!("{}#", pad(indent)));
                } else {
                    lines.push(format!("{}# {}", pad(indent), line));
                }
            }
        }
    }

    if config.deprecated_directive_in_comments {
        if let Some(deprecated) = field.directives.get("deprecated") {
            let reason = deprecated
                .specified_argument_by_name("reason")
                .and_then(|value| value.as_str());
            match reason {
                Some(reason) => lines.push(format!("{}# @deprecated {}", pad(indent), reason)),
                None => lines.push(format!("{}# @deprecated", pad(indent))),
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocKind;
    use apollo_compiler::Schema;
    use indoc::indoc;

    const SCHEMA: &str = r#"
        interface Produce { id: ID! quantity: Int! }
        type Fruit implements Produce { id: ID! quantity: Int! isSeedless: Boolean }
        type Vegetable implements Produce { id: ID! quantity: Int! isPickled: Boolean }
        union Offer = Discount | Coupon
        type Discount { id: ID! percent: Float! }
        type Coupon { id: ID! amount: Float! }
        type Person { name: String parent: Person }
        type Stall {
          id: ID!
          name: String!
          stallNumber: String!
          produce(first: Int, kinds: [String!]): [Produce!]!
        }
        type Order {
          id: ID!
          vendor: Stall!
          offer: Offer
          "Note left by the buyer"
          note: String @deprecated(reason: "Use notes")
          legacy: String @deprecated
        }
        type Empty
        type Query {
          produce: [Produce!]
          offer: Offer
          person: Person
          orders(vendorId: ID!, limit: Int): [Order!]
          empty: Empty
        }
    "#;

    fn config(docs: &[DocKind]) -> GenerationConfig {
        GenerationConfig {
            docs_to_generate: docs.to_vec(),
            ..Default::default()
        }
    }

    fn expand_root(schema: &Schema, config: &GenerationConfig, field: &str) -> Option<Expansion> {
        let graph = TypeGraph::build(schema).unwrap();
        let fragments = FragmentIndex::default();
        let ctx = Context::new(&graph, config, &fragments);
        let Some(TypeDef::Object(query)) = graph.get("Query") else {
            panic!("Query type missing");
        };
        let field = query.fields.get(field).unwrap();
        let depth = Depth::default().enter("Query");
        expand_field(ctx, "Query", field, &depth, &[], 0).unwrap()
    }

    fn argument_types() -> Schema {
        Schema::parse(
            r#"
            input OrderItemInput { quantity: Int! }
            type Query {
              probe(a: ID, b: ID!, c: [Int], d: [OrderItemInput!]!, e: [[String]!]): Int
            }
            "#,
            "arguments.graphql",
        )
        .unwrap()
    }

    #[test]
    fn test_type_string_round_trip() {
        let schema = argument_types();
        let probe = schema.type_field("Query", "probe").unwrap();
        let rendered: Vec<String> = probe
            .arguments
            .iter()
            .map(|argument| type_string(&argument.ty))
            .collect();
        assert_eq!(
            rendered,
            vec!["ID", "ID!", "[Int]", "[OrderItemInput!]!", "[[String]!]"]
        );
    }

    #[test]
    fn test_variable_binding_shape() {
        let schema = argument_types();
        let probe = schema.type_field("Query", "probe").unwrap();
        let argument = |name: &str| probe.arguments.iter().find(|a| a.name.as_str() == name).unwrap();
        let items = argument("d");
        let binding = VariableBinding::new("items".to_string(), &items.ty);
        assert_eq!(binding.base_type, "OrderItemInput");
        assert!(binding.non_null);
        assert!(binding.list);
        assert_eq!(binding.declaration(), "$items: [OrderItemInput!]!");

        let first = argument("a");
        let binding = VariableBinding::new("first".to_string(), &first.ty);
        assert!(!binding.non_null);
        assert!(!binding.list);
    }

    #[test]
    fn test_variable_name() {
        assert_eq!(variable_name(&[], "vendorId"), "vendorId");
        assert_eq!(variable_name(&["vendor"], "first"), "vendorFirst");
        assert_eq!(variable_name(&["items", "produce"], "first"), "itemsProduceFirst");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("createOrder"), "CreateOrder");
        assert_eq!(capitalize("vendorID"), "VendorID");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_interface_flattening() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let expansion = expand_root(&schema, &config(&[DocKind::Query]), "produce").unwrap();
        assert_eq!(
            expansion.text(),
            indoc! {"
                  produce {
                    id
                    quantity
                    __typename
                    ... on Fruit {
                      isSeedless
                    }
                    ... on Vegetable {
                      isPickled
                    }
                  }"}
        );
    }

    #[test]
    fn test_union_branches_share_one_typename() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let expansion = expand_root(&schema, &config(&[DocKind::Query]), "offer").unwrap();
        assert_eq!(
            expansion.text(),
            indoc! {"
                  offer {
                    ... on Discount {
                      id
                      percent
                    }
                    ... on Coupon {
                      id
                      amount
                    }
                    __typename
                  }"}
        );
    }

    #[test]
    fn test_recursion_limit_bounds_self_reference() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        for limit in 0..4 {
            let config = GenerationConfig {
                docs_to_generate: vec![DocKind::Query],
                recursion_limit: limit,
                skip_typename: true,
                ..Default::default()
            };
            let text = expand_root(&schema, &config, "person").unwrap().text();
            assert_eq!(text.matches("parent {").count(), limit);
        }
    }

    #[test]
    fn test_nested_arguments_are_hoisted() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let config = GenerationConfig {
            docs_to_generate: vec![DocKind::Query],
            skip_typename: true,
            ..Default::default()
        };
        let expansion = expand_root(&schema, &config, "orders").unwrap();
        let declarations: Vec<String> = expansion
            .variables
            .iter()
            .map(VariableBinding::declaration)
            .collect();
        assert_eq!(
            declarations,
            vec![
                "$vendorId: ID!",
                "$limit: Int",
                "$vendorProduceFirst: Int",
                "$vendorProduceKinds: [String!]",
            ]
        );
        assert_eq!(expansion.lines[0], "orders(vendorId: $vendorId, limit: $limit) {");
        assert!(expansion.text().contains(
            "produce(first: $vendorProduceFirst, kinds: $vendorProduceKinds) {"
        ));
    }

    #[test]
    fn test_fragment_spread_only_when_fragments_generated() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();

        let inline = expand_root(&schema, &config(&[DocKind::Query]), "orders").unwrap();
        assert!(!inline.text().contains("...StallAllFields"));
        assert!(inline.text().contains("stallNumber"));

        let spread = expand_root(&schema, &config(&[DocKind::Fragment, DocKind::Query]), "orders")
            .unwrap();
        assert_eq!(
            spread.text(),
            indoc! {"
                  orders(vendorId: $vendorId, limit: $limit) {
                    ...OrderAllFields
                  }"}
        );
        // Fragment variables are resolved by the operation from the spreads
        assert_eq!(spread.variables.len(), 2);
        assert_eq!(spread.spreads, vec!["OrderAllFields"]);
    }

    #[test]
    fn test_small_types_are_inlined_below_threshold() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let config = GenerationConfig {
            fragment_minimum_fields: 6,
            skip_typename: true,
            ..Default::default()
        };
        let text = expand_root(&schema, &config, "orders").unwrap().text();
        assert!(!text.contains("AllFields"));
        assert!(text.contains("stallNumber"));
    }

    #[test]
    fn test_typename_toggle() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let with = expand_root(&schema, &config(&[DocKind::Query]), "orders").unwrap();
        // Order, Stall, Produce and Offer selections
        assert_eq!(with.text().matches("__typename").count(), 4);

        let config = GenerationConfig {
            docs_to_generate: vec![DocKind::Query],
            skip_typename: true,
            ..Default::default()
        };
        let without = expand_root(&schema, &config, "orders").unwrap();
        assert!(!without.text().contains("__typename"));
    }

    #[test]
    fn test_zero_field_type_is_omitted() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        assert!(expand_root(&schema, &config(&[DocKind::Query]), "empty").is_none());
    }

    #[test]
    fn test_comments_from_description_and_deprecation() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let config = GenerationConfig {
            docs_to_generate: vec![DocKind::Query],
            skip_typename: true,
            comments_from_descriptions: true,
            deprecated_directive_in_comments: true,
            ..Default::default()
        };
        let text = expand_root(&schema, &config, "orders").unwrap().text();
        let expected = [
            "  # Note left by the buyer",
            "  # @deprecated Use notes",
            "  note",
            "  # @deprecated",
            "  legacy",
        ]
        .join("\n");
        assert!(text.contains(&expected), "{text}");
    }

    #[test]
    fn test_comments_are_off_by_default() {
        let schema = Schema::parse(SCHEMA, "schema.graphql").unwrap();
        let text = expand_root(&schema, &config(&[DocKind::Query]), "orders").unwrap().text();
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_branch_fields_carry_no_comments() {
        let schema = Schema::parse(
            r#"
            interface Produce { "Identifier" id: ID! }
            type Fruit implements Produce { id: ID! "Has no seeds" isSeedless: Boolean }
            union Offer = Discount
            type Discount { "Percent off" percent: Float @deprecated }
            type Query { produce: Produce offer: Offer }
            "#,
            "schema.graphql",
        )
        .unwrap();
        let config = GenerationConfig {
            docs_to_generate: vec![DocKind::Query],
            skip_typename: true,
            comments_from_descriptions: true,
            deprecated_directive_in_comments: true,
            ..Default::default()
        };

        let offer = expand_root(&schema, &config, "offer").unwrap().text();
        assert_eq!(
            offer,
            indoc! {"
                offer {
                  ... on Discount {
                    percent
                  }
                }"}
        );

        // Interface core fields keep their comments
        let produce = expand_root(&schema, &config, "produce").unwrap().text();
        assert_eq!(
            produce,
            indoc! {"
                produce {
                  # Identifier
                  id
                  ... on Fruit {
                    isSeedless
                  }
                }"}
        );
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("OrderItem"), "orderItem");
        assert_eq!(decapitalize("stall"), "stall");
        assert_eq!(decapitalize(""), "");
    }
}
