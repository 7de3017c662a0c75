//! Run configuration for the generator.

use std::path::PathBuf;

/// Default root namespace wrapping all generated declarations.
pub const DEFAULT_ROOT_NAMESPACE: &str = "Bin";

/// Default file name of the aggregate declaration header.
pub const DEFAULT_HEADER_FILE_NAME: &str = "bin.h";

/// Immutable configuration for one generation run.
///
/// Built once by the caller (typically the CLI) and handed to
/// [`Generator`](crate::Generator); nothing in the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory tree to embed.
    pub input_root: PathBuf,
    /// Directory the generated tree is written under.
    pub output_root: PathBuf,
    /// Root namespace wrapping all generated declarations.
    pub root_namespace: String,
    /// File name of the aggregate header, written at the output root.
    pub header_file_name: String,
}

impl GeneratorConfig {
    /// Configuration with the default namespace and header name.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            header_file_name: DEFAULT_HEADER_FILE_NAME.to_string(),
        }
    }
}
