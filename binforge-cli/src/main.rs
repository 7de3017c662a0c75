use std::process;

mod cli;
mod error;
mod exit_codes;

use clap::{CommandFactory, Parser};

use binforge::{normalize_path_arg, Generator, GeneratorConfig};
use cli::Cli;
use error::{handle_cli_result, CliResult};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are normal exits
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{e}");
                    process::exit(EXIT_SUCCESS);
                }
                _ => {
                    eprintln!("{e}");
                    process::exit(EXIT_ERROR);
                }
            }
        }
    };

    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let (input, output) = match (cli.input_path.as_deref(), cli.output_path.as_deref()) {
        (Some(input), Some(output)) => (input.to_string(), output.to_string()),
        _ => {
            // Fewer than two paths prints usage and exits cleanly
            let mut command = Cli::command();
            if let Err(e) = command.print_help() {
                eprintln!("{e}");
                process::exit(EXIT_ERROR);
            }
            process::exit(EXIT_SUCCESS);
        }
    };

    let exit_code = handle_cli_result(run(&cli, &input, &output));
    process::exit(exit_code);
}

fn run(cli: &Cli, input: &str, output: &str) -> CliResult<i32> {
    let mut config = GeneratorConfig::new(normalize_path_arg(input), normalize_path_arg(output));
    config.root_namespace = cli.root_namespace.clone();
    config.header_file_name = cli.header_name.clone();

    let summary = Generator::new(config).run()?;

    if cli.print_output_files {
        for path in &summary.output_files {
            println!("{}", path.display());
        }
    }

    tracing::info!(
        "embedded {} bytes into {} modules ({} skipped), header at {}",
        summary.bytes_embedded,
        summary.modules_written,
        summary.files_skipped,
        summary.header_path.display()
    );

    if summary.files_skipped > 0 {
        Ok(EXIT_WARNING)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    };

    // Logs go to stderr; stdout is reserved for --print-output-files
    registry()
        .with(EnvFilter::new(log_level.to_string()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
