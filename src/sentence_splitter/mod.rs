//! Rule-based sentence splitting with source-offset annotation.
//!
//! The splitter walks the input with the candidate [`scanner`], confirms
//! or rejects each candidate through the ordered [`rules`] cascade, and
//! recovers original-input offsets for the finished sentences with the
//! [`realign`] step. Abbreviations and lower-case terms are configuration
//! data, injected as a [`Vocabulary`] at construction time.

use tracing::debug;

pub mod realign;
pub mod rules;
pub mod scanner;
pub mod vocabulary;

pub use realign::SentenceRecord;
pub use rules::{BoundaryContext, BoundaryDecision};
pub use vocabulary::Vocabulary;

/// Sentence splitter configured with one immutable vocabulary. Logically
/// pure per call: one instance may be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    vocabulary: Vocabulary,
}

impl SentenceSplitter {
    /// Create a splitter with a caller-supplied vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Create a splitter with the built-in abbreviation and lower-case
    /// term sets.
    pub fn with_default_vocabulary() -> Self {
        Self::new(Vocabulary::default())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Segment `text` into trimmed sentence strings, in order.
    ///
    /// Empty input yields an empty list; input without any terminal
    /// punctuation yields exactly one sentence spanning the whole input.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut accumulator = String::new();
        let mut remainder = text;

        while !remainder.is_empty() {
            let Some(candidate) = scanner::next_candidate(remainder) else {
                // Out of candidates: the rest is the tail of the open
                // sentence.
                accumulator.push_str(remainder);
                break;
            };

            accumulator.push_str(candidate.prefix);
            accumulator.push_str(candidate.ending);

            let context = BoundaryContext {
                ending: candidate.ending,
                next_token: candidate.next_token,
            };
            if rules::decide(&context, &self.vocabulary) == BoundaryDecision::Split {
                flush(&mut accumulator, &mut sentences);
            }

            // Rescan from the whitespace onward. On a no-split the next
            // token stays part of the open sentence and returns as prefix
            // material in the following iteration.
            remainder = &remainder[candidate.prefix.len() + candidate.ending.len()..];
        }

        flush(&mut accumulator, &mut sentences);

        debug!(
            sentences = sentences.len(),
            bytes = text.len(),
            "split complete"
        );
        sentences
    }

    /// Segment `text` and locate every sentence in the original input.
    /// This is the entry point downstream consumers rely on for
    /// offset-exact boundaries.
    pub fn annotate(&self, text: &str) -> Vec<SentenceRecord> {
        let sentences = self.split(text);
        realign::realign(text, &sentences)
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::with_default_vocabulary()
    }
}

/// Move the accumulated sentence into the result list, trimmed. A tail
/// that trims to nothing is dropped.
fn flush(accumulator: &mut String, sentences: &mut Vec<String>) {
    let trimmed = accumulator.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    accumulator.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sentences() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("Hello world. This is a test. How are you?");
        assert_eq!(
            sentences,
            vec!["Hello world.", "This is a test.", "How are you?"]
        );
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split("   \n ").is_empty());
        assert!(splitter.annotate("").is_empty());
    }

    #[test]
    fn test_no_terminal_punctuation_yields_one_sentence() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("no punctuation at all");
        assert_eq!(sentences, vec!["no punctuation at all"]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("Dr. Smith arrived.");
        assert_eq!(sentences, vec!["Dr. Smith arrived."]);
    }

    #[test]
    fn test_lower_case_term_forces_split() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("The gene expresses. mRNA was isolated.");
        assert_eq!(
            sentences,
            vec!["The gene expresses.", "mRNA was isolated."]
        );
    }

    #[test]
    fn test_quoted_speech_splits_after_closing_quote() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("He said \"Stop now!\" Then he left.");
        assert_eq!(sentences, vec!["He said \"Stop now!\"", "Then he left."]);
    }

    #[test]
    fn test_lower_case_continuation_does_not_split() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let sentences = splitter.split("Acme Corp. makes widgets.");
        assert_eq!(sentences, vec!["Acme Corp. makes widgets."]);
    }

    #[test]
    fn test_annotate_offsets_match_sentences() {
        let splitter = SentenceSplitter::with_default_vocabulary();
        let text = "Hello world. This is a test.";
        let records = splitter.annotate(text);
        let sentences = splitter.split(text);

        assert_eq!(records.len(), sentences.len());
        for (record, sentence) in records.iter().zip(&sentences) {
            assert_eq!(&text[record.start..record.end], sentence);
        }
    }

    #[test]
    fn test_custom_vocabulary_changes_decisions() {
        let abbreviations = ["Nr.".to_string()].into_iter().collect();
        let terms = std::collections::HashSet::new();
        let splitter = SentenceSplitter::new(Vocabulary::new(abbreviations, terms));

        assert_eq!(
            splitter.split("Nr. 7 was chosen."),
            vec!["Nr. 7 was chosen."]
        );
        // Without its entry, "Dr." now ends a sentence.
        assert_eq!(
            splitter.split("Dr. Smith arrived."),
            vec!["Dr.", "Smith arrived."]
        );
    }
}
