//! eafkit: load ELAN annotation files into a validated per-language model.
//!
//! An EAF file from a multilingual transcription corpus holds four tiers per
//! language (transcription, confidence, is-translation, manually-corrected).
//! eafkit parses such a file once, resolves every time slot and annotation
//! reference, and produces an immutable [`eaf::Document`] with one
//! [`eaf::LanguageBundle`] per language plus derived metrics: translation
//! share, speech duration and the original (least-translated) language.
//!
//! # Modules
//!
//! - [`eaf`]: Document model, EAF reader, JSON/CSV export
//! - [`inspect`]: Per-document summary reports
//! - [`discovery`]: Finding EAF files in a corpus directory
//! - [`error`]: Error types for eafkit operations

pub mod discovery;
pub mod eaf;
pub mod error;
pub mod inspect;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use error::EafError;

use eaf::{ClassifyOptions, NoMetadata, DEFAULT_TRANSCRIPTION_TYPE};

/// The eafkit CLI application.
#[derive(Parser)]
#[command(name = "eafkit")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Linguistic type that marks transcription tiers.
    #[arg(
        long,
        global = true,
        env = "EAFKIT_TRANSCRIPTION_TYPE",
        default_value = DEFAULT_TRANSCRIPTION_TYPE
    )]
    transcription_type: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Summarize the languages and metrics of an EAF file.
    Inspect(InspectArgs),
    /// Write the full document model of an EAF file as JSON.
    Export(ExportArgs),
    /// Write the joined per-language view of an EAF file as CSV.
    Join(JoinArgs),
    /// Export every EAF file below a directory as JSON.
    Batch(BatchArgs),
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Input EAF file.
    input: PathBuf,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Input EAF file.
    input: PathBuf,

    /// Output JSON file.
    #[arg(long)]
    out: PathBuf,
}

/// Arguments for the join subcommand.
#[derive(clap::Args)]
struct JoinArgs {
    /// Input EAF file.
    input: PathBuf,

    /// Three-letter language code of the bundle to join.
    #[arg(long)]
    language: String,

    /// Output CSV file (stdout if omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Arguments for the batch subcommand.
#[derive(clap::Args)]
struct BatchArgs {
    /// Corpus directory to search for .eaf files.
    input_dir: PathBuf,

    /// Directory for the JSON outputs (mirrors the corpus layout).
    #[arg(long, env = "EAFKIT_OUT_DIR")]
    out_dir: PathBuf,

    /// First recording month to include (yyyymm).
    #[arg(long, requires = "to")]
    from: Option<u32>,

    /// Last recording month to include (yyyymm).
    #[arg(long, requires = "from")]
    to: Option<u32>,
}

/// Run the eafkit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), EafError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = ClassifyOptions {
        transcription_type: cli.transcription_type,
    };

    match cli.command {
        Some(Commands::Inspect(args)) => run_inspect(args, &opts),
        Some(Commands::Export(args)) => run_export(args, &opts),
        Some(Commands::Join(args)) => run_join(args, &opts),
        Some(Commands::Batch(args)) => run_batch(args, &opts),
        None => {
            // No subcommand: just print help hint and exit successfully
            println!("eafkit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Load ELAN annotation files into a validated per-language model.");
            println!();
            println!("Run 'eafkit --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second initialisation (e.g. when embedded) keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn load(path: &Path, opts: &ClassifyOptions) -> Result<eaf::Document, EafError> {
    eaf::io_eaf_xml::read_eaf_with(path, opts, &NoMetadata)
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs, opts: &ClassifyOptions) -> Result<(), EafError> {
    let document = load(&args.input, opts)?;
    let report = inspect::inspect_document(&document);

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report).map_err(EafError::ReportJson)?;
            println!("{json}");
        }
        "text" => print!("{}", report),
        other => {
            return Err(EafError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    Ok(())
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs, opts: &ClassifyOptions) -> Result<(), EafError> {
    let document = load(&args.input, opts)?;
    eaf::io_json::write_document_json(&args.out, &document)?;
    println!(
        "Exported {} language(s) from {} to {}",
        document.languages().len(),
        args.input.display(),
        args.out.display()
    );
    Ok(())
}

/// Execute the join subcommand.
fn run_join(args: JoinArgs, opts: &ClassifyOptions) -> Result<(), EafError> {
    let document = load(&args.input, opts)?;
    let rows = document.joined(&args.language)?;

    match &args.out {
        Some(path) => eaf::io_csv::write_joined_csv(path, &rows),
        None => {
            let stdout = io::stdout().lock();
            eaf::io_csv::write_joined_csv_to(stdout, &rows, Path::new("<stdout>"))?;
            Ok(())
        }
    }
}

/// Execute the batch subcommand.
///
/// Every file is built independently; a failing file is reported and
/// skipped, and the command fails at the end if any file failed. Outputs
/// mirror the corpus layout, so same-named files in different directories
/// never share an output.
fn run_batch(args: BatchArgs, opts: &ClassifyOptions) -> Result<(), EafError> {
    let range = match (args.from, args.to) {
        (Some(from), Some(to)) => Some(discovery::DateRange::new(from, to)?),
        _ => None,
    };

    let files = discovery::discover_eaf_files(&args.input_dir, range)?;
    fs::create_dir_all(&args.out_dir).map_err(EafError::Io)?;

    let mut failed = 0;
    for path in &files {
        let result = load(path, opts).and_then(|document| {
            let out = batch_output_path(&args.input_dir, &args.out_dir, path);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent).map_err(EafError::Io)?;
            }
            eaf::io_json::write_document_json(&out, &document)
        });

        match result {
            Ok(()) => log::info!("{}: exported", path.display()),
            Err(err) => {
                log::warn!("{}: skipped: {}", path.display(), err);
                failed += 1;
            }
        }
    }

    println!(
        "Processed {} file(s): {} exported, {} failed",
        files.len(),
        files.len() - failed,
        failed
    );

    if failed > 0 {
        Err(EafError::BatchFailed {
            failed,
            total: files.len(),
        })
    } else {
        Ok(())
    }
}

/// `<out_dir>/<path relative to input_dir>` with a `.json` extension.
fn batch_output_path(input_dir: &Path, out_dir: &Path, path: &Path) -> PathBuf {
    let relative = path
        .strip_prefix(input_dir)
        .ok()
        .filter(|rel| rel.file_name().is_some())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(eaf::document_name(path)));
    out_dir.join(relative).with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_outputs_mirror_the_corpus_layout() {
        let input = Path::new("corpus");
        let out = Path::new("out");

        assert_eq!(
            batch_output_path(input, out, Path::new("corpus/a/EP_20190311_0900_x.eaf")),
            PathBuf::from("out/a/EP_20190311_0900_x.json")
        );
        assert_eq!(
            batch_output_path(input, out, Path::new("corpus/EP_20190311_0900_x.eaf")),
            PathBuf::from("out/EP_20190311_0900_x.json")
        );
        assert_ne!(
            batch_output_path(input, out, Path::new("corpus/a/X.eaf")),
            batch_output_path(input, out, Path::new("corpus/b/X.eaf"))
        );
    }
}
