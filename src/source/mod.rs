//! Font source persistence module
//!
//! Reads and writes font sources in their JSON form and derives
//! output paths for generated italics.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{ItalicError, Result};
use crate::models::Font;

/// Load a font source from a JSON file
pub fn load(path: &Path) -> Result<Font> {
    let file = fs::File::open(path).map_err(|e| {
        ItalicError::Font(format!(
            "Cannot read font source '{}': {}",
            path.display(),
            e
        ))
    })?;

    let font: Font = serde_json::from_reader(BufReader::new(file))?;
    if font.masters.is_empty() {
        return Err(ItalicError::Font(format!(
            "Font source '{}' has no masters",
            path.display()
        )));
    }

    Ok(font)
}

/// Save a font source as pretty-printed JSON
pub fn save(font: &Font, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(font)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;
    Ok(())
}

/// Default output path: `<stem>.italic.json` next to the input
pub fn italic_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("font");
    input.with_file_name(format!("{}.italic.json", stem))
}

/// Whether a file looks like a font source this tool writes or reads
pub fn is_source_file(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let is_output = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".italic.json"));
    is_json && !is_output
}
