//! CLI entrypoint for photobridge glue tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use photobridge_core::{LibraryTarget, VersionVerbosity};
use photobridge_ffi::CameraLibraries;
use photobridge_harness::{VersionReport, write_version_script};

/// Glue tooling for the photobridge bindings.
#[derive(Debug, Parser)]
#[command(name = "photobridge-harness")]
#[command(about = "FFI glue tooling for the libgphoto2 bindings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite an exported-symbol list into a linker version-script.
    Generate {
        /// Input file, one exported symbol per line.
        input: PathBuf,
        /// Output path for the version-script fragment.
        output: PathBuf,
    },
    /// Query and print runtime version information from the native libraries.
    Version {
        /// Print the verbose multi-line report instead of the short one.
        #[arg(long)]
        verbose: bool,
        /// Output format: `plain` or `json`.
        #[arg(long, default_value = "plain")]
        format: String,
        /// Explicit path to libgphoto2 (defaults to the system soname).
        #[arg(long)]
        libgphoto2: Option<PathBuf>,
        /// Explicit path to libgphoto2_port (defaults to the system soname).
        #[arg(long)]
        libgphoto2_port: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { input, output } => {
            let count = write_version_script(&input, &output)?;
            eprintln!(
                "Wrote version script for {count} symbols to {}",
                output.display()
            );
        }
        Command::Version {
            verbose,
            format,
            libgphoto2,
            libgphoto2_port,
        } => {
            let verbosity = if verbose {
                VersionVerbosity::Verbose
            } else {
                VersionVerbosity::Short
            };
            let libraries = match (libgphoto2, libgphoto2_port) {
                (None, None) => CameraLibraries::load_default()?,
                (core, port) => {
                    let core = core
                        .unwrap_or_else(|| PathBuf::from(LibraryTarget::CoreLibrary.soname()));
                    let port = port
                        .unwrap_or_else(|| PathBuf::from(LibraryTarget::PortLibrary.soname()));
                    CameraLibraries::load_from(&core, &port)?
                }
            };
            let report = VersionReport::collect(&libraries, verbosity)?;

            match format.as_str() {
                "plain" => print!("{}", report.render_plain()),
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                other => {
                    return Err(format!("Unsupported format '{other}', expected plain|json").into());
                }
            }
        }
    }

    Ok(())
}
