//! Annotation output: TSV/JSON rendering of sentence records and sidecar
//! file management used by the CLI and tests.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::sentence_splitter::SentenceRecord;

/// Output representation for annotation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// A record together with the source text it points at, for JSON output.
#[derive(Debug, Serialize)]
struct AnnotatedSentence<'a> {
    paragraph: usize,
    index: usize,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Generate the sidecar annotation path for a source file:
/// `<stem>_sentences.tsv` / `<stem>_sentences.json` next to the source.
pub fn annotation_file_path(source_path: &Path, format: OutputFormat) -> PathBuf {
    let mut path = source_path.to_path_buf();
    let file_stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    path.set_file_name(format!("{file_stem}_sentences.{}", format.extension()));
    path
}

/// Format one record as a TSV line:
/// `index<TAB>sentence text<TAB>(paragraph,start,end)`.
/// The text column is whitespace-normalized so multi-line sentences stay
/// on one line.
pub fn format_record_line(record: &SentenceRecord, text: &str) -> String {
    format!(
        "{}\t{}\t({},{},{})",
        record.index,
        normalize_whitespace(sentence_text(record, text)),
        record.paragraph,
        record.start,
        record.end
    )
}

/// Render a full record list in the requested format, with a trailing
/// newline.
pub fn render_records(
    records: &[SentenceRecord],
    text: &str,
    format: OutputFormat,
) -> io::Result<String> {
    match format {
        OutputFormat::Tsv => {
            let mut rendered = String::new();
            for record in records {
                rendered.push_str(&format_record_line(record, text));
                rendered.push('\n');
            }
            Ok(rendered)
        }
        OutputFormat::Json => {
            let annotated: Vec<AnnotatedSentence> = records
                .iter()
                .map(|record| AnnotatedSentence {
                    paragraph: record.paragraph,
                    index: record.index,
                    start: record.start,
                    end: record.end,
                    text: sentence_text(record, text),
                })
                .collect();
            let mut rendered = serde_json::to_string_pretty(&annotated)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

/// Write rendered annotation content as a sidecar file next to the
/// source. Content is guaranteed to end with a newline.
pub fn write_annotation_file(
    source_path: &Path,
    content: &str,
    format: OutputFormat,
) -> io::Result<PathBuf> {
    let annotation_path = annotation_file_path(source_path, format);
    if content.ends_with('\n') {
        std::fs::write(&annotation_path, content)?;
    } else {
        std::fs::write(&annotation_path, format!("{content}\n"))?;
    }
    Ok(annotation_path)
}

/// Collapse every whitespace run (including line breaks) to a single
/// space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    result.trim().to_string()
}

/// The source slice a record points at. Offsets are best-effort, so an
/// out-of-range or mid-character range degrades to an empty string
/// rather than panicking.
fn sentence_text<'a>(record: &SentenceRecord, text: &'a str) -> &'a str {
    text.get(record.start..record.end).unwrap_or("")
}
