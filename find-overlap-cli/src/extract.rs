//! Loading of input documents page by page.
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

/// Loads the pages of a document.
///
/// A `.pdf` file (case-insensitive) is decoded page by page, and a `.txt` file is read as a
/// single page. Other suffixes are rejected.
pub fn load_pages<P>(path: P) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let suffix = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match suffix.as_deref() {
        Some("pdf") => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
                anyhow!("Failed to extract text from {}: {e}", path.display())
            })?;
            warn_empty_pages(path, &pages);
            Ok(pages)
        }
        Some("txt") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(vec![text])
        }
        _ => bail!(
            "Unsupported file type: {} (expected .pdf or .txt)",
            path.display()
        ),
    }
}

fn warn_empty_pages(path: &Path, pages: &[String]) {
    for (i, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            tracing::warn!(path = %path.display(), page = i + 1, "no text extracted from page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    #[test]
    fn test_text_file() {
        let path = env::temp_dir().join(format!("find-overlap-{}.TXT", std::process::id()));
        fs::write(&path, "First line.\nSecond line.").unwrap();
        let pages = load_pages(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(pages.unwrap(), vec!["First line.\nSecond line.".to_string()]);
    }

    #[test]
    fn test_unsupported_suffix() {
        let e = load_pages("document.docx").unwrap_err();
        assert!(e.to_string().starts_with("Unsupported file type"));
        assert!(load_pages("no_suffix").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_pages("/nonexistent/document.txt").is_err());
        assert!(load_pages("/nonexistent/document.pdf").is_err());
    }

    #[test]
    fn test_broken_pdf() {
        let path = env::temp_dir().join(format!("find-overlap-{}.pdf", std::process::id()));
        fs::write(&path, "not a pdf").unwrap();
        let pages = load_pages(&path);
        fs::remove_file(&path).unwrap();
        assert!(pages.is_err());
    }
}
