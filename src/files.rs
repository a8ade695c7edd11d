//! File collaborator for wordtab
//!
//! Reads files as UTF-8 text for new documents and writes document text back
//! to disk. Only fully decoded text ever reaches the document registry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WordtabError;

/// A file read from disk, ready to become a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

/// Read a whole file and decode it as UTF-8
pub fn read_document(path: &Path) -> Result<OpenedFile, WordtabError> {
    #[cfg(debug_assertions)]
    log::debug!("Reading {:?}", path);

    let bytes = fs::read(path).map_err(|source| WordtabError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| WordtabError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    Ok(OpenedFile {
        name: display_name(path),
        path: path.to_path_buf(),
        text,
    })
}

/// Write `text` to `path`, returning the display name for the tab
pub fn write_document(path: &Path, text: &str) -> Result<String, WordtabError> {
    #[cfg(debug_assertions)]
    log::debug!("Writing {} bytes to {:?}", text.len(), path);

    fs::write(path, text.as_bytes()).map_err(|source| WordtabError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(display_name(path))
}

/// Tab label for a path: its final component, or the whole path if it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Turn prompt input into a path, expanding a leading `~/`
pub fn resolve_input_path(input: &str) -> Result<PathBuf, WordtabError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WordtabError::EmptyPath);
    }

    if trimmed == "~" {
        return Ok(dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")));
    }

    if let Some(rest) = trimmed.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}
