use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load input text from a file, or from stdin when no path is given.
pub fn load_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_text_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("course.html");
        std::fs::write(&path, "<lang lang=\"en\">Hi</lang>").expect("Failed to write");

        let text = load_text(Some(&path)).expect("Should read");
        assert_eq!(text, "<lang lang=\"en\">Hi</lang>");
    }

    #[test]
    fn test_load_text_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.html");

        let err = load_text(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
