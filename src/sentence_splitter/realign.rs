//! Offset realigner.
//!
//! Maps each segmented sentence back onto byte offsets in the original
//! input. The sentence strings were trimmed (and may in principle have
//! had whitespace altered), so exact substring containment is not
//! assumed: offsets are recovered word by word with a forward-searching
//! cursor. Realignment never fails; when a word cannot be located the
//! cursor advances by the word's length as an estimate, and the branch is
//! logged.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One segmented sentence located in the original input. Offsets are byte
/// offsets forming a `[start, end)` range; `index` counts sentences
/// sequentially across the whole input. `paragraph` is always 0: input is
/// treated as a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub paragraph: usize,
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

/// Compute a record for every sentence, in order. Records come out in the
/// order of the sentences, each search resuming from the previous
/// sentence's end offset.
pub fn realign(text: &str, sentences: &[String]) -> Vec<SentenceRecord> {
    let mut records = Vec::with_capacity(sentences.len());
    let mut previous_end = 0;

    for (index, sentence) in sentences.iter().enumerate() {
        let start = start_of_sentence(sentence, text, previous_end);
        let end = end_of_sentence(sentence, text, start);
        records.push(SentenceRecord {
            paragraph: 0,
            index,
            start,
            end,
        });
        previous_end = end;
    }

    records
}

/// Locate the first word of `sentence` in `text`, searching forward from
/// `previous_end`. Falls back to `previous_end + 1` when the word cannot
/// be found; that offset is an estimate, not a verified position.
fn start_of_sentence(sentence: &str, text: &str, previous_end: usize) -> usize {
    let first_word = sentence.split(' ').next().unwrap_or("");
    let from = clamp_cursor(text, previous_end);

    match text[from..].find(first_word) {
        Some(pos) => from + pos,
        None => {
            debug!(
                word = first_word,
                estimate = previous_end + 1,
                "first word not found in source, estimating start offset"
            );
            previous_end + 1
        }
    }
}

/// Walk each space-delimited word of `sentence` forward through `text`
/// from just before `start`, advancing the cursor to the end of each
/// found occurrence. A word that cannot be found advances the cursor by
/// its own length only; the resulting end offset is then unverified.
fn end_of_sentence(sentence: &str, text: &str, start: usize) -> usize {
    let mut end = start.saturating_sub(1);

    for word in sentence.split(' ') {
        let from = clamp_cursor(text, end);
        match text[from..].find(word) {
            Some(pos) => end = from + pos + word.len(),
            None => {
                debug!(
                    word,
                    estimate = end + word.len(),
                    "word not found during realignment, advancing by word length"
                );
                end += word.len();
            }
        }
    }

    end
}

/// Clamp a cursor derived from offset arithmetic to the text length and
/// floor it to a `char` boundary, so it is always safe to slice from.
fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
