//! Output writing

use std::io::{self, Write};
use std::path::Path;

use default_docs::GeneratorError;

/// Header placed above the generated documents
pub const BANNER: &str = "## \n## This file was generated by default-docs.\n## DO NOT EDIT IT MANUALLY.\n## \n";

/// Banner, a blank line, then the generated text
pub fn render(content: &str) -> String {
    format!("{}\n{}", BANNER, content)
}

/// Write the rendered output to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), GeneratorError> {
    let rendered = render(content);
    match path {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_prepends_banner() {
        let rendered = render("query Version {\n  version\n}\n");
        assert_eq!(
            rendered,
            "## \n## This file was generated by default-docs.\n## DO NOT EDIT IT MANUALLY.\n## \n\nquery Version {\n  version\n}\n"
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("default-docs.graphql");
        write_output(Some(&path), "query Version {\n  version\n}\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(BANNER));
        assert!(written.ends_with("query Version {\n  version\n}\n"));
    }
}
