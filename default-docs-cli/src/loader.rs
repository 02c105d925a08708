//! Input loading
//!
//! Reads the schema, the caller's documents and the optional TOML config file
//! from disk.

use std::path::Path;

use apollo_compiler::Schema;
use apollo_compiler::ast::Document;
use default_docs::{GeneratorError, RawConfig};

/// Parse a schema file
pub fn load_schema(path: &Path) -> Result<Schema, GeneratorError> {
    let source = std::fs::read_to_string(path)?;
    Schema::parse(source, path).map_err(|e| GeneratorError::Parse {
        path: path.display().to_string(),
        message: e.errors.to_string(),
    })
}

/// Parse every caller document, in the order given
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>, GeneratorError> {
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let document = Document::parse(source, path).map_err(|e| GeneratorError::Parse {
            path: path.display().to_string(),
            message: e.errors.to_string(),
        })?;
        documents.push(document);
    }

    Ok(documents)
}

/// Read a TOML config file
pub fn load_config(path: &Path) -> Result<RawConfig, GeneratorError> {
    let source = std::fs::read_to_string(path)?;
    toml::from_str(&source).map_err(|e| GeneratorError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_camel_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default-docs.toml");
        fs::write(
            &path,
            "docsToGenerate = [\"query\", \"fragment\"]\nfragmentMinimumFields = 6\nskipTypename = true\n",
        )
        .unwrap();

        let raw = load_config(&path).unwrap();
        assert_eq!(
            raw.docs_to_generate,
            Some(vec!["query".to_string(), "fragment".to_string()])
        );
        assert_eq!(raw.fragment_minimum_fields, Some(6));
        assert_eq!(raw.skip_typename, Some(true));
        assert_eq!(raw.recursion_limit, None);
    }

    #[test]
    fn test_load_config_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default-docs.toml");
        fs::write(&path, "skipTypeName = true\n").unwrap();
        assert!(matches!(load_config(&path), Err(GeneratorError::Parse { .. })));
    }

    #[test]
    fn test_load_schema_and_documents() {
        let dir = TempDir::new().unwrap();
        let schema_path = dir.path().join("schema.graphql");
        let doc_path = dir.path().join("custom.graphql");
        fs::write(&schema_path, "type Query { version: String }").unwrap();
        fs::write(&doc_path, "query Version { version }").unwrap();

        let schema = load_schema(&schema_path).unwrap();
        assert!(schema.types.contains_key("Query"));

        let documents = load_documents(&[&doc_path]).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].definitions.len(), 1);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let doc_path = dir.path().join("broken.graphql");
        fs::write(&doc_path, "query Broken { version ").unwrap();

        let err = load_documents(&[&doc_path]).unwrap_err();
        assert!(matches!(err, GeneratorError::Parse { ref path, .. } if path.ends_with("broken.graphql")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_schema(&dir.path().join("missing.graphql")).unwrap_err();
        assert!(matches!(err, GeneratorError::Io(_)));
    }
}
