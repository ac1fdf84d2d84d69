//! Boundary candidate scanner.
//!
//! Walks the not-yet-consumed text and decomposes it at the first
//! syntactically plausible sentence end into five contiguous parts:
//! prefix, ending token, inter-boundary whitespace, next token, and the
//! rest. A single deterministic forward pass over character-class
//! predicates; no backtracking machinery.

/// One decomposition of the remaining text. The five parts are contiguous
/// slices of the input: concatenated in order they reconstruct it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Already-scanned text with no boundary relevance, up to the ending
    /// token. May span newlines.
    pub prefix: &'a str,
    /// Non-whitespace run ending in `.`/`!`/`?` plus optional closing
    /// punctuation. Never starts with an excluded leading character.
    pub ending: &'a str,
    /// One or more whitespace characters, possibly spanning lines.
    pub whitespace: &'a str,
    /// The non-whitespace token immediately after the whitespace.
    pub next_token: &'a str,
    /// Everything after the next token; possibly empty.
    pub rest: &'a str,
}

/// Terminal punctuation that can end a sentence.
pub(crate) fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Closing punctuation allowed after the terminal mark.
pub(crate) fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '>')
}

/// Characters an ending token may be built from: non-whitespace, minus the
/// excluded leading set (hyphen, colon, equals, plus, quotes, opening
/// brackets). Excluded characters fall into the prefix instead.
fn is_ending_body(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '-' | ':' | '=' | '+' | '\'' | '"' | '(' | '[' | '{')
}

/// Locate the next candidate boundary in `remainder`, or `None` when no
/// further token can plausibly end a sentence. Pure function; the caller
/// treats a `None` as "all remaining text belongs to the open sentence."
///
/// The prefix is non-greedy: the first token with a valid candidate
/// suffix wins, and within that token the earliest suffix start wins.
pub fn next_candidate(remainder: &str) -> Option<Candidate<'_>> {
    let mut search_from = 0;

    loop {
        let token_start = seek_non_whitespace(remainder, search_from)?;
        let token_end = seek_whitespace_or_end(remainder, token_start);

        // A candidate needs inter-boundary whitespace and a following
        // token; the final token of the input can never be a candidate.
        let next_start = seek_non_whitespace(remainder, token_end)?;

        if let Some(offset) = candidate_suffix_start(&remainder[token_start..token_end]) {
            let ending_start = token_start + offset;
            let next_end = seek_whitespace_or_end(remainder, next_start);
            return Some(Candidate {
                prefix: &remainder[..ending_start],
                ending: &remainder[ending_start..token_end],
                whitespace: &remainder[token_end..next_start],
                next_token: &remainder[next_start..next_end],
                rest: &remainder[next_end..],
            });
        }

        search_from = token_end;
    }
}

/// Byte offset inside `token` where the ending token starts, if the token
/// has a valid candidate suffix: one-or-more body characters, a terminal
/// mark, then zero-or-more closing characters running to the end of the
/// token. Returns the earliest such offset.
fn candidate_suffix_start(token: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    let mut earliest: Option<usize> = None;

    for (pos, &(_, c)) in chars.iter().enumerate() {
        if !is_terminal(c) {
            continue;
        }
        if !chars[pos + 1..].iter().all(|&(_, c)| is_closing(c)) {
            continue;
        }
        // Walk back over the maximal body run preceding the terminal mark.
        let mut run_start = pos;
        while run_start > 0 && is_ending_body(chars[run_start - 1].1) {
            run_start -= 1;
        }
        if run_start == pos {
            continue; // body must be non-empty
        }
        let offset = chars[run_start].0;
        if earliest.map_or(true, |e| offset < e) {
            earliest = Some(offset);
        }
    }

    earliest
}

fn seek_non_whitespace(text: &str, from: usize) -> Option<usize> {
    text[from..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
}

fn seek_whitespace_or_end(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
