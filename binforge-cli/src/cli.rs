//! Command-line definition for binforge.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "binforge")]
#[command(version)]
#[command(about = "Generate C++ modules embedding a directory tree as byte arrays")]
#[command(long_about = "
binforge walks <INPUT_PATH> and writes one .cpp module per file under
<OUTPUT_PATH>, embedding each file's bytes as a fixed-size std::array,
plus one aggregate header declaring every array extern under namespaces
that mirror the directory hierarchy.
")]
pub struct Cli {
    /// Name of root namespace in output
    #[arg(short = 'n', long, default_value = binforge::DEFAULT_ROOT_NAMESPACE)]
    pub root_namespace: String,

    /// Print absolute paths of output source files, one per line,
    /// e.g. to feed into build systems
    #[arg(short = 'p', long)]
    pub print_output_files: bool,

    /// File name of the aggregate declaration header
    #[arg(long, default_value = binforge::DEFAULT_HEADER_FILE_NAME)]
    pub header_name: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory tree to embed
    pub input_path: Option<String>,

    /// Directory to write generated sources under
    pub output_path: Option<String>,
}
