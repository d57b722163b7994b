//! CLI module for inspectorgen
//!
//! ## Commands
//!
//! - `types` - list the types a manifest can resolve
//! - `fields <script>` - show the fields an editor can bind, in declaration order
//! - `generate <script>` - generate an editor and write or append it
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::INSPECTORGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate custom inspector editors from serializable field metadata
#[derive(Parser, Debug)]
#[command(name = "inspectorgen")]
#[command(version = INSPECTORGEN_VERSION)]
#[command(about = "Generate custom inspector editors from serializable field metadata", long_about = None)]
pub struct Cli {
    /// JSON type manifest describing the project's types
    #[arg(long, short = 's', value_name = "FILE", global = true, default_value = "types.json")]
    pub schema: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the types the manifest can resolve
    Types,

    /// Show the fields an editor can bind
    Fields {
        /// Script path, qualified type name or simple type name
        #[arg(value_name = "SCRIPT")]
        script: String,
    },

    /// Generate an editor and write it, appending if the file exists
    Generate {
        /// Script path, qualified type name or simple type name
        #[arg(value_name = "SCRIPT")]
        script: String,
        /// Leave a field out (repeatable)
        #[arg(long, value_name = "FIELD", conflicts_with = "only")]
        skip: Vec<String>,
        /// Bind only these fields (repeatable)
        #[arg(long, value_name = "FIELD")]
        only: Vec<String>,
        /// Declare a typed reference to the inspected object
        #[arg(long)]
        target: bool,
        /// Output path (default: next to the script, named <Type>Editor.cs)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Print the editor instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Indent with this many spaces instead of tabs
        #[arg(long, value_name = "N")]
        indent_spaces: Option<usize>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Types => commands::list_types(&cli.schema),
        Command::Fields { script } => commands::show_fields(&cli.schema, &script),
        Command::Generate {
            script,
            skip,
            only,
            target,
            output,
            stdout,
            indent_spaces,
        } => commands::generate(
            &cli.schema,
            &commands::GenerateOptions {
                script,
                skip,
                only,
                include_target_reference: target,
                output,
                stdout,
                indent_spaces,
            },
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================
