//! JSON:API document CLI
//!
//! Command-line interface for checking member names, linting documents and
//! assembling error documents.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use jsonapi_doc::{
    lint, member_name, ApiDescriptor, Diagnostic, Document, ErrorObject, ErrorObjectBuilder,
    ErrorSource, FileStatus, LintOptions, LintResult, Severity,
};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "jsonapi-doc")]
#[command(about = "Assemble and lint JSON:API documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether names are legal JSON:API member names
    MemberName {
        /// Names to check
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Lint JSON:API or home documents (member names, primary data, links)
    Lint {
        /// File or directory to lint
        path: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// Assemble a document carrying a single error object
    Error {
        /// Unique identifier for this occurrence of the problem
        #[arg(long)]
        id: Option<String>,

        /// Link to further details about this occurrence
        #[arg(long)]
        about: Option<String>,

        /// HTTP status code
        #[arg(long)]
        status: Option<u16>,

        /// Application-specific error code
        #[arg(long)]
        code: Option<String>,

        /// Short summary of the problem
        #[arg(long)]
        title: Option<String>,

        /// Explanation specific to this occurrence
        #[arg(long)]
        detail: Option<String>,

        /// JSON Pointer to the offending part of the request document
        #[arg(long)]
        pointer: Option<String>,

        /// Query parameter that caused the error
        #[arg(long)]
        parameter: Option<String>,

        /// Add a jsonapi member with this version
        #[arg(long = "jsonapi-version")]
        jsonapi_version: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::MemberName { names } => run_member_name(&names),

        Commands::Lint {
            path,
            format,
            strict,
            quiet,
        } => run_lint(&path, format, strict, quiet),

        Commands::Error {
            id,
            about,
            status,
            code,
            title,
            detail,
            pointer,
            parameter,
            jsonapi_version,
            pretty,
        } => {
            let error = ErrorObjectBuilder {
                id,
                about_href: about,
                status: status.map(|s| s.to_string()),
                code,
                title,
                detail,
                source: ErrorSource { pointer, parameter },
                ..Default::default()
            }
            .build();
            run_error(error, jsonapi_version, pretty)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_member_name(names: &[String]) -> Result<(), u8> {
    let mut all_valid = true;
    for name in names {
        let valid = member_name::is_valid(name.as_str());
        all_valid &= valid;
        println!("{}\t{}", if valid { "valid" } else { "invalid" }, name);
    }

    if all_valid {
        Ok(())
    } else {
        Err(1)
    }
}

fn run_error(error: ErrorObject, jsonapi_version: Option<String>, pretty: bool) -> Result<(), u8> {
    let mut builder = Document::for_errors([Some(error)]);
    if let Some(version) = jsonapi_version {
        builder = builder.jsonapi(ApiDescriptor::build(Some(&version), None));
    }

    let doc = builder.build().map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if pretty {
        println!("{}", doc.to_string_pretty());
    } else {
        println!("{}", doc);
    }
    Ok(())
}

fn run_lint(path: &Path, format: ReportFormat, strict: bool, quiet: bool) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = lint(path, &LintOptions::new().strict(strict));
    let passed = result.is_ok() && (!strict || result.warnings == 0);

    match format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(|e| {
                eprintln!("Error serializing output: {}", e);
                2u8
            })?;
            println!("{}", json);
        }
        ReportFormat::Text => print_report(&result, passed, quiet),
    }

    if passed {
        Ok(())
    } else {
        Err(1)
    }
}

/// Human-readable lint report. Quiet mode keeps only failing files and errors.
fn print_report(result: &LintResult, passed: bool, quiet: bool) {
    if !quiet {
        println!("Linting {} ...\n", result.path.display());
    }

    for file in &result.results {
        if quiet && file.status == FileStatus::Ok {
            continue;
        }
        println!("  {} {}", marker(file.status), file.file.display());

        let shown = file
            .diagnostics
            .iter()
            .filter(|d| !quiet || d.severity == Severity::Error);
        for diag in shown {
            println!("    {}", describe(diag));
        }
    }

    println!();
    println!("{}", summary(result, passed));
}

fn paint(color: &str, text: impl Display) -> String {
    format!("{color}{text}{RESET}")
}

fn marker(status: FileStatus) -> String {
    match status {
        FileStatus::Ok => paint(GREEN, "✓"),
        FileStatus::Warning => paint(YELLOW, "⚠"),
        FileStatus::Error => paint(RED, "✗"),
    }
}

fn describe(diag: &Diagnostic) -> String {
    let label = match diag.severity {
        Severity::Error => paint(RED, format_args!("error[{}]", diag.code)),
        Severity::Warning => paint(YELLOW, format_args!("warning[{}]", diag.code)),
    };
    format!("{} at {}: {}", label, diag.path, diag.message)
}

fn summary(result: &LintResult, passed: bool) -> String {
    if passed {
        paint(
            GREEN,
            format_args!("✓ {} files checked, all passed", result.files_checked),
        )
    } else {
        paint(
            RED,
            format_args!(
                "✗ {} files checked: {} passed, {} failed; {} errors, {} warnings",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            ),
        )
    }
}
