//! One-pass generation: walk the tree, emit modules, synchronize the
//! aggregate header.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::header::HeaderWriter;
use crate::ident::sanitize_identifier;
use crate::module::render_module;
use crate::namespace::{ArrayDeclaration, NamespacePath};
use crate::walk::{FileEntry, TreeWalker};

/// What a completed run produced.
#[derive(Debug, Default)]
pub struct GenerationSummary {
    /// Module files written.
    pub modules_written: usize,
    /// Input files skipped because they could not be read.
    pub files_skipped: usize,
    /// Total bytes embedded across all modules.
    pub bytes_embedded: u64,
    /// Absolute paths of the written modules, in traversal order.
    pub output_files: Vec<PathBuf>,
    /// Absolute path of the aggregate header.
    pub header_path: PathBuf,
}

/// Drives one full generation run.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Walk the input tree and write one module per file plus the
    /// aggregate header.
    ///
    /// Unreadable input entries are skipped, reported through
    /// `tracing::warn!` and counted in the summary. Name sanitization
    /// failures and output errors abort the run. The header is written
    /// last, since it is only well-formed once the whole traversal has
    /// completed.
    pub fn run(&self) -> Result<GenerationSummary> {
        let root_namespace = sanitize_identifier(&self.config.root_namespace)?;
        let walker = TreeWalker::new(&self.config.input_root)?;
        let mut header = HeaderWriter::new(&root_namespace);
        let mut summary = GenerationSummary::default();

        for entry in walker.entries() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping input entry: {e}");
                    summary.files_skipped += 1;
                    continue;
                }
            };

            summary.bytes_embedded += entry.contents.len() as u64;
            let module_path = self.emit_module(&entry, &root_namespace, &mut header)?;
            summary.modules_written += 1;
            summary.output_files.push(module_path);
        }

        summary.header_path = self.write_header(header)?;
        Ok(summary)
    }

    /// Write one module and feed its declaration to the header writer.
    fn emit_module(
        &self,
        entry: &FileEntry,
        root_namespace: &str,
        header: &mut HeaderWriter,
    ) -> Result<PathBuf> {
        let namespace_path = NamespacePath::from_segments(&entry.relative_dir)?;
        let array_name = sanitize_identifier(&entry.file_name)?;

        let module_text = render_module(
            root_namespace,
            &namespace_path,
            &array_name,
            &entry.contents,
        );

        let module_dir = entry
            .relative_dir
            .iter()
            .fold(self.config.output_root.clone(), |dir, seg| dir.join(seg));
        fs::create_dir_all(&module_dir)
            .map_err(|e| GeneratorError::directory_creation(&module_dir, e))?;

        let module_path = module_dir.join(format!("{}.cpp", entry.file_name));
        fs::write(&module_path, &module_text)
            .map_err(|e| GeneratorError::file_write(&module_path, e))?;
        tracing::debug!("wrote module {}", module_path.display());

        header.declare(&ArrayDeclaration {
            namespace_path,
            array_name,
            length: entry.contents.len(),
        });

        absolute(&module_path)
    }

    fn write_header(&self, header: HeaderWriter) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_root)
            .map_err(|e| GeneratorError::directory_creation(&self.config.output_root, e))?;

        let header_path = self.config.output_root.join(&self.config.header_file_name);
        fs::write(&header_path, header.finish())
            .map_err(|e| GeneratorError::file_write(&header_path, e))?;
        tracing::debug!("wrote header {}", header_path.display());

        absolute(&header_path)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
