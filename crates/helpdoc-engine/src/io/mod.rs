//! Filesystem document source.
//!
//! Help documents live as `.md` files under a docs root; the file stem
//! (relative to the root) is the application identifier that keys the
//! document.

use crate::parsing::blocks::kinds::Heading;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid docs directory: {0}")]
    InvalidDocsDir(String),
}

/// One help document as supplied by the document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDoc {
    /// Optional display title: the first level-1 heading, if any.
    pub title: Option<String>,
    /// The raw Markdown text.
    pub body: String,
}

/// Loads the help document for an application identifier.
pub fn read_doc(app_id: &str, docs_root: &Path) -> Result<HelpDoc, SourceError> {
    let relative = RelativePathBuf::from(format!("{app_id}.md"));
    let absolute = relative.to_path(docs_root);
    if !absolute.exists() {
        return Err(SourceError::NotFound(absolute));
    }
    let body = fs::read_to_string(&absolute)?;
    Ok(HelpDoc {
        title: doc_title(&body),
        body,
    })
}

/// The first level-1 heading's text, used as the document title.
fn doc_title(body: &str) -> Option<String> {
    body.lines().find_map(|line| match Heading::parse(line) {
        Some((1, text)) => Some(text.to_string()),
        _ => None,
    })
}

/// Scans the docs root for markdown files, sorted by path.
pub fn scan_help_docs(docs_root: &Path) -> Result<Vec<PathBuf>, SourceError> {
    if !docs_root.exists() {
        return Err(SourceError::InvalidDocsDir(
            "docs directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(docs_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// The application identifiers available under the docs root, sorted.
pub fn doc_ids(docs_root: &Path) -> Result<Vec<String>, SourceError> {
    let files = scan_help_docs(docs_root)?;
    let ids = files
        .iter()
        .filter_map(|path| path.strip_prefix(docs_root).ok())
        .map(|rel| rel.with_extension("").to_string_lossy().into_owned())
        .collect();
    Ok(ids)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SourceError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }
    Ok(())
}

pub fn validate_docs_dir(path: &Path) -> Result<(), SourceError> {
    if !path.exists() || !path.is_dir() {
        return Err(SourceError::InvalidDocsDir(
            "Directory does not exist".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn docs_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn read_doc_extracts_title_from_first_h1() {
        let dir = docs_dir(&[("pos.md", "intro\n# Point of Sale\ntext")]);
        let doc = read_doc("pos", dir.path()).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Point of Sale"));
        assert!(doc.body.starts_with("intro"));
    }

    #[test]
    fn read_doc_without_h1_has_no_title() {
        let dir = docs_dir(&[("ledger.md", "## Only level two")]);
        let doc = read_doc("ledger", dir.path()).unwrap();
        assert_eq!(doc.title, None);
    }

    #[test]
    fn read_doc_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_doc("absent", dir.path());
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn scan_finds_only_markdown_sorted() {
        let dir = docs_dir(&[
            ("zoo.md", "z"),
            ("accounts.md", "a"),
            ("notes.txt", "skip me"),
        ]);
        let files = scan_help_docs(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["accounts.md", "zoo.md"]);
    }

    #[test]
    fn scan_recurses_into_subdirectories() {
        let dir = docs_dir(&[("top.md", "t"), ("store/checkout.md", "c")]);
        let files = scan_help_docs(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn doc_ids_strip_root_and_extension() {
        let dir = docs_dir(&[("top.md", "t"), ("store/checkout.md", "c")]);
        let ids = doc_ids(dir.path()).unwrap();
        assert!(ids.contains(&"top".to_string()));
        assert!(ids.iter().any(|id| id.ends_with("checkout")));
    }

    #[test]
    fn scan_rejects_missing_root() {
        let result = scan_help_docs(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(SourceError::InvalidDocsDir(_))));
    }

    #[test]
    fn validate_accepts_existing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(validate_docs_dir(dir.path()).is_ok());
    }

    #[test]
    fn validate_rejects_missing_dir() {
        assert!(matches!(
            validate_docs_dir(Path::new("/nonexistent/docs")),
            Err(SourceError::InvalidDocsDir(_))
        ));
    }
}
