pub mod discovery;
pub mod output;
pub mod sentence_splitter;

// Re-export main types for convenient access
pub use sentence_splitter::{SentenceRecord, SentenceSplitter, Vocabulary};

// Re-export annotation output utilities
pub use output::{
    annotation_file_path, render_records, write_annotation_file, OutputFormat,
};
