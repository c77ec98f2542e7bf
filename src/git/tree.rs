use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Regular, non-executable file.
pub const REGULAR_FILE_MODE: &str = "100644";
pub const BLOB_TYPE: &str = "blob";

/// One file of the tree to upload, stored at the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    pub mode: String,
    pub kind: String,
    pub content: String,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        TreeEntry {
            path: path.into(),
            mode: REGULAR_FILE_MODE.to_owned(),
            kind: BLOB_TYPE.to_owned(),
            content: content.into(),
        }
    }

    /// Reads `file` fully. The entry path is the file's base name, so files
    /// sharing a base name from different directories collide.
    pub async fn from_file(file: &Path) -> Result<TreeEntry> {
        let name = file
            .file_name()
            .with_context(|| format!("{} has no file name", file.display()))?;

        let bytes = tokio::fs::read(file)
            .await
            .with_context(|| format!("Cannot read the file {}", file.display()))?;

        // content is uploaded as text, binary files are refused
        let content = String::from_utf8(bytes)
            .with_context(|| format!("{} is not a UTF-8 text file", file.display()))?;

        Ok(TreeEntry::new(name.to_string_lossy(), content))
    }
}

/// Builds one entry per file, in order. The first unreadable file fails the batch.
pub async fn entries_from_files(files: &[PathBuf]) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::with_capacity(files.len());

    for file in files {
        log::info!("file: {}", file.display());
        entries.push(TreeEntry::from_file(file).await?);
    }

    Ok(entries)
}
