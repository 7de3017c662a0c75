//! Depth-first traversal of the input tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{GeneratorError, Result};

/// One discovered input file: its directory relative to the input root
/// (raw, unsanitized segments), its name, and its full contents.
///
/// Produced once per regular file and owned by the traversal until the
/// emitters consume it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub relative_dir: Vec<String>,
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Walks an input root in depth-first pre-order with sorted siblings.
///
/// The sort keeps output deterministic across platforms; the depth-first
/// order guarantees a directory's subtree is exhausted before any
/// unrelated branch is entered, which is exactly the contiguity the
/// header synchronizer relies on.
#[derive(Debug)]
pub struct TreeWalker {
    input_root: PathBuf,
}

impl TreeWalker {
    /// Create a walker rooted at `input_root`.
    ///
    /// # Errors
    ///
    /// Fails if the root does not exist or is not a directory.
    pub fn new(input_root: impl Into<PathBuf>) -> Result<Self> {
        let input_root = input_root.into();
        if !input_root.is_dir() {
            return Err(GeneratorError::InputRootNotADirectory { path: input_root });
        }
        Ok(Self { input_root })
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Iterate discovered files in traversal order.
    ///
    /// Each item is either a complete [`FileEntry`] or the error for
    /// that one entry; the caller decides whether a failed entry is
    /// fatal or skippable.
    pub fn entries(&self) -> impl Iterator<Item = Result<FileEntry>> + '_ {
        WalkDir::new(&self.input_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_file() => Some(self.load_entry(entry)),
                Ok(_) => None,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.input_root.clone());
                    Some(Err(GeneratorError::Walk { path, source: e }))
                }
            })
    }

    fn load_entry(&self, entry: walkdir::DirEntry) -> Result<FileEntry> {
        let path = entry.path();
        let contents = std::fs::read(path).map_err(|e| GeneratorError::file_read(path, e))?;

        let relative_dir = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.input_root).ok())
            .map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(FileEntry {
            relative_dir,
            file_name: entry.file_name().to_string_lossy().into_owned(),
            contents,
        })
    }
}
