//! undoc CLI - office document and PDF content extraction tool

mod output;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use undoc::{
    DocumentFormat, DocumentProcessor, ExtractionMode, PdfExtractOptions,
};

#[derive(Parser)]
#[command(name = "undoc")]
#[command(version)]
#[command(about = "Extract structured content from office documents and PDFs", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text (and meeting transcripts) from office documents
    Office {
        /// Input document file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Process every supported file in a directory
        #[arg(long, value_name = "DIR", conflicts_with = "input")]
        inbox: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Extract text from a PDF, falling back to page images
    Pdf {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (default: "<stem>_extracted" next to the input)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// What to extract
        #[arg(long, value_enum, default_value = "text")]
        mode: ModeArg,

        /// Always render page images, even when the text is usable
        #[arg(short, long)]
        force_images: bool,

        /// Keep page images in color instead of size-bounded grayscale
        #[arg(long)]
        no_grayscale: bool,

        /// Skip the metadata JSON file
        #[arg(long)]
        no_metadata: bool,

        /// Minimum text length for the document text to count as usable
        #[arg(long, default_value = "200")]
        min_chars: usize,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Text only, with image fallback
    Text,
    /// Page images only
    Images,
    /// Text and page images
    Both,
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => ExtractionMode::Text,
            ModeArg::Images => ExtractionMode::Images,
            ModeArg::Both => ExtractionMode::Both,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Office {
            input,
            inbox,
            output,
        } => match (input, inbox) {
            (Some(input), _) => cmd_office(&input, output.as_deref()),
            (None, Some(inbox)) => cmd_office_batch(&inbox, output.as_deref()),
            (None, None) => {
                println!("{}", "Usage: undoc office <FILE> | --inbox <DIR>".yellow());
                Ok(())
            }
        },
        Commands::Pdf {
            input,
            output_dir,
            mode,
            force_images,
            no_grayscale,
            no_metadata,
            min_chars,
        } => cmd_pdf(
            &input,
            output_dir.as_deref(),
            mode,
            force_images,
            no_grayscale,
            no_metadata,
            min_chars,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn office_output_dir(input: &Path, output: Option<&Path>) -> PathBuf {
    output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.parent().unwrap_or(Path::new(".")).to_path_buf())
}

fn cmd_office(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let processor = DocumentProcessor::with_defaults();
    let output_dir = office_output_dir(input, output);

    match processor.process_file(input)? {
        Some(doc) => {
            let json_path = output::write_office_outputs(&doc, &output_dir)?;
            print_office_summary(&doc);
            println!("{} {}", "Saved to".green(), json_path.display());
            Ok(())
        }
        None => Err(format!("unsupported document format: {}", input.display()).into()),
    }
}

fn cmd_office_batch(inbox: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let processor = DocumentProcessor::with_defaults();
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| inbox.to_path_buf());

    let mut files: Vec<PathBuf> = fs::read_dir(inbox)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && DocumentFormat::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        println!("{}", "No supported documents found".yellow());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut done = 0usize;
    let mut transcripts = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match processor.process_file(file) {
            Ok(Some(doc)) => {
                if let Err(e) = output::write_office_outputs(&doc, &output_dir) {
                    warn!("failed to write outputs for {}: {}", name, e);
                    failed += 1;
                } else {
                    done += 1;
                    if doc.is_transcript {
                        transcripts += 1;
                    }
                }
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                warn!("failed to process {}: {}", name, e);
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{}", "Batch complete".green().bold());
    println!("  {} {} extracted ({} transcripts)", "├─".dimmed(), done, transcripts);
    println!("  {} {} skipped", "├─".dimmed(), skipped);
    println!("  {} {} failed", "└─".dimmed(), failed);

    if failed > 0 {
        Err(format!("{} of {} documents failed", failed, files.len()).into())
    } else {
        Ok(())
    }
}

fn print_office_summary(doc: &undoc::ExtractedDocument) {
    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), doc.source_file);
    println!("{}: {}", "Format".bold(), doc.format);
    println!("{}: {:.1} KB", "Size".bold(), doc.file_size_kb);
    println!(
        "{}: {}",
        "Transcript".bold(),
        if doc.is_transcript { "Yes" } else { "No" }
    );
    if let Some(ref t) = doc.transcript {
        println!("{}: {}", "Messages".bold(), t.summary.total_messages);
        println!("{}: {}", "Participants".bold(), t.summary.participants_count);
        if !t.duration.is_empty() {
            println!("{}: {}", "Duration".bold(), t.duration);
        }
    }
    println!(
        "{}: {} characters",
        "Text".bold(),
        doc.extracted_text.chars().count()
    );
}

#[allow(clippy::too_many_arguments)]
fn cmd_pdf(
    input: &Path,
    output_dir: Option<&Path>,
    mode: ModeArg,
    force_images: bool,
    no_grayscale: bool,
    no_metadata: bool,
    min_chars: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output_dir.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        input
            .parent()
            .unwrap_or(Path::new("."))
            .join(format!("{}_extracted", stem))
    });

    let options = PdfExtractOptions::new()
        .with_mode(mode.into())
        .force_images(force_images)
        .with_grayscale(!no_grayscale)
        .with_min_text_chars(min_chars);

    let mut outcome = undoc::extract_pdf(input, &output_dir, options);
    output::write_pdf_outputs(&mut outcome, &output_dir, !no_metadata)?;

    println!("{}", "PDF Extraction".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), outcome.source_file);
    println!("{}: {}", "Pages".bold(), outcome.total_pages);
    println!("{}: {}", "Mode".bold(), outcome.mode);
    println!(
        "{}: {}",
        "Usable text".bold(),
        if outcome.full_text.is_some() {
            format!("{} characters", outcome.full_text_length)
        } else {
            "No".to_string()
        }
    );
    println!("{}: {}", "Page images".bold(), outcome.image_count());
    println!("{}: {}", "Output".bold(), output_dir.display());

    if outcome.success {
        println!("{}", "Done!".green().bold());
        Ok(())
    } else {
        let reason = outcome
            .error
            .clone()
            .unwrap_or_else(|| "extraction failed".to_string());
        Err(reason.into())
    }
}
