//! Build-time asset embedding: turn a directory tree into C++ source.
//!
//! binforge walks an input directory, writes one generated `.cpp` module
//! per file embedding that file's bytes as a fixed-size
//! `std::array<uint8_t, N>`, and synthesizes a single aggregate header
//! declaring every array `extern` under nested namespaces that mirror
//! the directory hierarchy.
//!
//! The generated header stays valid regardless of tree depth or width:
//! the [`HeaderWriter`] diffs each declaration's namespace path against
//! the currently open path and emits only the minimal close/open
//! transitions.
//!
//! # Example
//!
//! ```no_run
//! use binforge::{Generator, GeneratorConfig};
//!
//! let mut config = GeneratorConfig::new("assets", "generated");
//! config.root_namespace = "Game".to_string();
//!
//! let summary = Generator::new(config).run()?;
//! println!("embedded {} files", summary.modules_written);
//! # Ok::<(), binforge::GeneratorError>(())
//! ```

mod config;
mod error;
mod generator;
mod header;
mod ident;
mod module;
mod namespace;
mod paths;
mod render;
mod walk;

// Re-export main types
pub use config::{GeneratorConfig, DEFAULT_HEADER_FILE_NAME, DEFAULT_ROOT_NAMESPACE};
pub use error::{GeneratorError, Result};
pub use generator::{GenerationSummary, Generator};
pub use header::HeaderWriter;
pub use ident::sanitize_identifier;
pub use module::{render_module, AUTOGENERATED_MARKER};
pub use namespace::{ArrayDeclaration, NamespacePath};
pub use paths::normalize_path_arg;
pub use render::{render_byte_lines, BYTES_PER_LINE};
pub use walk::{FileEntry, TreeWalker};
