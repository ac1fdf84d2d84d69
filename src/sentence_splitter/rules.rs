//! Boundary decision engine.
//!
//! Decides whether a candidate boundary really ends a sentence. The rules
//! live in a priority-ordered table evaluated top to bottom with
//! first-match-wins semantics; forced-split rules outrank suppression
//! rules, and a candidate no rule claims splits by default.

use tracing::trace;

use super::scanner::{is_closing, is_terminal};
use super::vocabulary::Vocabulary;

/// Outcome for one candidate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    Split,
    NoSplit,
}

/// What the ending token and the token after the candidate whitespace
/// look like. The whitespace between them carries no signal of its own.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryContext<'a> {
    pub ending: &'a str,
    pub next_token: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum RuleAction {
    ForceSplit,
    Suppress,
}

struct BoundaryRule {
    name: &'static str,
    action: RuleAction,
    applies: fn(&BoundaryContext, &Vocabulary) -> bool,
}

/// The rule cascade, highest precedence first. Forced splits are checked
/// before any suppression: exclamation/question endings and closed
/// quotations split even when the ending token is a known abbreviation.
static BOUNDARY_RULES: &[BoundaryRule] = &[
    BoundaryRule {
        name: "lower-case-term",
        action: RuleAction::ForceSplit,
        applies: rule_lower_case_term,
    },
    BoundaryRule {
        name: "closed-terminal",
        action: RuleAction::ForceSplit,
        applies: rule_closed_terminal,
    },
    BoundaryRule {
        name: "exclamatory",
        action: RuleAction::ForceSplit,
        applies: rule_exclamatory,
    },
    BoundaryRule {
        name: "tech-coinage",
        action: RuleAction::ForceSplit,
        applies: rule_tech_coinage,
    },
    BoundaryRule {
        name: "lower-case-continuation",
        action: RuleAction::Suppress,
        applies: rule_lower_case_continuation,
    },
    BoundaryRule {
        name: "abbreviation",
        action: RuleAction::Suppress,
        applies: rule_abbreviation,
    },
];

/// Run the cascade for one candidate boundary.
pub fn decide(context: &BoundaryContext, vocabulary: &Vocabulary) -> BoundaryDecision {
    for rule in BOUNDARY_RULES {
        if (rule.applies)(context, vocabulary) {
            trace!(
                rule = rule.name,
                ending = context.ending,
                next = context.next_token,
                "boundary rule matched"
            );
            return match rule.action {
                RuleAction::ForceSplit => BoundaryDecision::Split,
                RuleAction::Suppress => BoundaryDecision::NoSplit,
            };
        }
    }

    trace!(
        ending = context.ending,
        next = context.next_token,
        "no boundary rule matched, default split"
    );
    BoundaryDecision::Split
}

/// The next token is a literal member of the lower-case term set.
fn rule_lower_case_term(context: &BoundaryContext, vocabulary: &Vocabulary) -> bool {
    vocabulary.is_lower_case_term(context.next_token)
}

/// The ending token closes with terminal punctuation followed by at least
/// one closing quote or bracket: a strong split signal that outranks
/// every suppression check.
fn rule_closed_terminal(context: &BoundaryContext, _vocabulary: &Vocabulary) -> bool {
    let stripped = context.ending.trim_end_matches(is_closing);
    stripped.len() < context.ending.len()
        && stripped.chars().count() > 1
        && stripped.chars().last().is_some_and(is_terminal)
}

/// Exclamation and question marks are never abbreviation-suppressed.
fn rule_exclamatory(context: &BoundaryContext, _vocabulary: &Vocabulary) -> bool {
    context.ending.chars().count() > 1 && context.ending.ends_with(['!', '?'])
}

/// "eScience"/"iPhone"-style coinages split regardless of the configured
/// term set: a letter from `e`/`i`/`m`, an upper-case letter, then at
/// least one further letter, and nothing else in the token.
fn rule_tech_coinage(context: &BoundaryContext, _vocabulary: &Vocabulary) -> bool {
    let mut chars = context.next_token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !matches!(first, 'e' | 'i' | 'm') {
        return false;
    }
    let Some(second) = chars.next() else {
        return false;
    };
    if !second.is_uppercase() {
        return false;
    }
    let mut tail_len = 0;
    for c in chars {
        if !c.is_alphabetic() {
            return false;
        }
        tail_len += 1;
    }
    tail_len >= 1
}

/// A period-ended token followed by a lower-case token reads as one
/// continuing sentence.
fn rule_lower_case_continuation(context: &BoundaryContext, _vocabulary: &Vocabulary) -> bool {
    context.ending.chars().count() > 1
        && context.ending.ends_with('.')
        && context
            .next_token
            .chars()
            .next()
            .is_some_and(char::is_lowercase)
}

/// The ending token (verbatim or lower-cased) is a known abbreviation.
fn rule_abbreviation(context: &BoundaryContext, vocabulary: &Vocabulary) -> bool {
    vocabulary.is_abbreviation(context.ending)
}
