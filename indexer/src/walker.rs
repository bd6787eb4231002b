use anyhow::{bail, Context, Result};
use lexis_core::{Document, InvertedIndex, TokenizerOptions};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Log and skip files that cannot be read instead of failing the run.
    pub skip_unreadable: bool,
    pub tokenizer: TokenizerOptions,
}

#[derive(Debug, Default)]
pub struct Collected {
    pub documents: Vec<Document>,
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub indexed: usize,
    pub skipped: Vec<PathBuf>,
}

/// Read a file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Walk `root` recursively and load every regular file as a [`Document`].
///
/// Files are visited sorted by name and numbered from 0 in that order.
pub fn collect_documents(root: &Path, options: &WalkOptions) -> Result<Collected> {
    collect_documents_with(root, options, read_text)
}

/// Like [`collect_documents`], reading each file through `read`.
pub fn collect_documents_with<F>(root: &Path, options: &WalkOptions, mut read: F) -> Result<Collected>
where
    F: FnMut(&Path) -> Result<String>,
{
    if !root.is_dir() {
        bail!("data directory {} does not exist or is not a directory", root.display());
    }

    let mut collected = Collected::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if options.skip_unreadable => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                collected.skipped.push(path);
                continue;
            }
            Err(err) => return Err(err).with_context(|| format!("failed to walk {}", root.display())),
        };
        if !entry.file_type().is_file() { continue; }

        let path = entry.path();
        let text = match read(path).with_context(|| format!("failed to read {}", path.display())) {
            Ok(text) => text,
            Err(err) if options.skip_unreadable => {
                tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "skipping unreadable file");
                collected.skipped.push(path.to_path_buf());
                continue;
            }
            Err(err) => return Err(err),
        };
        let id = collected.documents.len();
        collected.documents.push(Document::new(id, path.display().to_string(), text));
    }
    Ok(collected)
}

/// Load the corpus under `root` and index it in one sequential pass.
pub fn build_index(root: &Path, options: &WalkOptions) -> Result<(InvertedIndex, IndexReport)> {
    let collected = collect_documents(root, options)?;
    Ok(index_documents(collected, options))
}

pub fn index_documents(collected: Collected, options: &WalkOptions) -> (InvertedIndex, IndexReport) {
    let Collected { documents, skipped } = collected;
    let mut index = InvertedIndex::with_options(options.tokenizer);
    let indexed = documents.len();
    for doc in documents {
        tracing::info!(path = %doc.path, id = %doc.id, "indexing");
        index.index_document(doc);
    }
    (index, IndexReport { indexed, skipped })
}
