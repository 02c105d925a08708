//! default-docs: Generate default GraphQL documents from a schema
//!
//! This tool reads a GraphQL schema and writes:
//! - One `<Type>AllFields` fragment per object type with enough fields
//! - One query, mutation and subscription per root field
//!
//! Operations and fragments already defined in the documents passed as
//! positional arguments are replaced by a skip notice.

use clap::Parser;
use default_docs::RawConfig;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod loader;
mod output;

#[derive(Parser, Debug)]
#[command(name = "default-docs")]
#[command(about = "Generate default GraphQL documents from a schema")]
struct Args {
    /// GraphQL schema file
    #[arg(short, long)]
    schema: PathBuf,

    /// Existing documents whose operation and fragment names are skipped
    documents: Vec<PathBuf>,

    /// Output file, stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documents to generate: fragment, query, mutation, subscription
    #[arg(long, value_delimiter = ',')]
    docs: Option<Vec<String>>,

    /// Object types with fewer fields are always inlined
    #[arg(long)]
    fragment_minimum_fields: Option<usize>,

    /// Do not select `__typename`
    #[arg(long)]
    skip_typename: bool,

    /// Re-entries allowed into a type already on the current path
    #[arg(long)]
    recursion_limit: Option<usize>,

    /// Emit field descriptions as comments
    #[arg(long)]
    comments_from_descriptions: bool,

    /// Emit `@deprecated` reasons as comments
    #[arg(long)]
    deprecated_directive_in_comments: bool,

    /// Log filter, e.g. `debug` or `default_docs=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Config values set on the command line
    fn overrides(&self) -> RawConfig {
        RawConfig {
            docs_to_generate: self.docs.clone(),
            fragment_minimum_fields: self.fragment_minimum_fields,
            skip_typename: self.skip_typename.then_some(true),
            recursion_limit: self.recursion_limit,
            comments_from_descriptions: self.comments_from_descriptions.then_some(true),
            deprecated_directive_in_comments: self.deprecated_directive_in_comments.then_some(true),
        }
    }
}

fn setup_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    // Flags override the config file, which overrides defaults
    let file_config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => RawConfig::default(),
    };
    let config = file_config.merge(args.overrides()).validate()?;

    // Load inputs
    let schema = loader::load_schema(&args.schema)?;
    let documents = loader::load_documents(&args.documents)?;
    debug!(schema = %args.schema.display(), documents = documents.len(), "loaded inputs");

    // Generate documents
    let content = default_docs::generate(&schema, &documents, &config)?;

    // Write output
    output::write_output(args.output.as_deref(), &content)?;

    if let Some(path) = &args.output {
        eprintln!(
            "Generated {} from {} ({} caller documents)",
            path.display(),
            args.schema.display(),
            documents.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use default_docs::DocKind;

    #[test]
    fn test_flags_parse_into_overrides() {
        let args = Args::parse_from([
            "default-docs",
            "--schema",
            "schema.graphql",
            "--docs",
            "query,fragment",
            "--skip-typename",
            "--recursion-limit",
            "2",
            "custom.graphql",
        ]);
        assert_eq!(args.documents, vec![PathBuf::from("custom.graphql")]);

        let overrides = args.overrides();
        assert_eq!(
            overrides.docs_to_generate,
            Some(vec!["query".to_string(), "fragment".to_string()])
        );
        assert_eq!(overrides.skip_typename, Some(true));
        assert_eq!(overrides.recursion_limit, Some(2));
        assert_eq!(overrides.comments_from_descriptions, None);
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = RawConfig {
            docs_to_generate: Some(vec!["mutation".to_string()]),
            fragment_minimum_fields: Some(6),
            skip_typename: Some(true),
            ..Default::default()
        };
        let args = Args::parse_from([
            "default-docs",
            "--schema",
            "schema.graphql",
            "--docs",
            "fragment, query",
        ]);

        let config = file.merge(args.overrides()).validate().unwrap();
        assert_eq!(config.docs_to_generate, vec![DocKind::Fragment, DocKind::Query]);
        assert_eq!(config.fragment_minimum_fields, 6);
        // An absent flag leaves the file value in place
        assert!(config.skip_typename);
    }

    #[test]
    fn test_schema_flag_is_required() {
        assert!(Args::try_parse_from(["default-docs", "custom.graphql"]).is_err());
    }
}
