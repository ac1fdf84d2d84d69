use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use sentsplit::discovery::{self, DiscoveryConfig};
use sentsplit::output::{self, OutputFormat};
use sentsplit::{SentenceSplitter, Vocabulary};

#[derive(Parser, Debug)]
#[command(name = "sentsplit")]
#[command(about = "Rule-based English sentence splitter with source-offset annotation")]
#[command(version)]
struct Args {
    /// Input files, or directories searched recursively for *.txt
    inputs: Vec<PathBuf>,

    /// Print annotations to stdout instead of writing sidecar files
    #[arg(long)]
    stdout: bool,

    /// Emit JSON instead of TSV
    #[arg(long)]
    json: bool,

    /// Newline-delimited abbreviation list replacing the built-in set
    #[arg(long)]
    abbreviations: Option<PathBuf>,

    /// Newline-delimited lower-case term list replacing the built-in set
    #[arg(long)]
    lower_case_terms: Option<PathBuf>,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting sentsplit");
    info!(?args, "Parsed CLI arguments");

    if args.inputs.is_empty() {
        bail!("no inputs given; pass one or more files or directories");
    }

    let vocabulary = load_vocabulary(&args).await?;
    let splitter = SentenceSplitter::new(vocabulary);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Tsv
    };

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
    };
    let files = discovery::collect_input_files(&args.inputs, discovery_config).await?;
    if files.is_empty() {
        bail!("no input files found");
    }

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut total_sentences = 0usize;

    for path in &files {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                if args.fail_fast {
                    return Err(e)
                        .with_context(|| format!("failed to read {}", path.display()));
                }
                warn!("skipping unreadable file {}: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };

        let records = splitter.annotate(&text);
        let rendered = output::render_records(&records, &text, format)
            .with_context(|| format!("failed to render annotations for {}", path.display()))?;

        if args.stdout {
            print!("{rendered}");
        } else {
            let annotation_path = output::write_annotation_file(path, &rendered, format)
                .with_context(|| {
                    format!("failed to write annotation file for {}", path.display())
                })?;
            info!(
                "Annotated {}: {} sentences -> {}",
                path.display(),
                records.len(),
                annotation_path.display()
            );
        }

        processed += 1;
        total_sentences += records.len();
    }

    info!(
        "Annotation completed: {} files, {} sentences, {} skipped",
        processed, total_sentences, skipped
    );

    println!("sentsplit v{} - annotation complete", env!("CARGO_PKG_VERSION"));
    println!("  Files processed: {processed}");
    if skipped > 0 {
        println!("  Files skipped: {skipped}");
    }
    println!("  Sentences found: {total_sentences}");

    Ok(())
}

/// Build the vocabulary from CLI overrides, falling back to the built-in
/// sets for whichever list is not supplied.
async fn load_vocabulary(args: &Args) -> Result<Vocabulary> {
    let abbreviations = match &args.abbreviations {
        Some(path) => read_word_list(path).await?,
        None => Vocabulary::default_abbreviations(),
    };
    let lower_case_terms = match &args.lower_case_terms {
        Some(path) => read_word_list(path).await?,
        None => Vocabulary::default_lower_case_terms(),
    };
    Ok(Vocabulary::new(abbreviations, lower_case_terms))
}

async fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words = Vocabulary::parse_word_list(&source);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
