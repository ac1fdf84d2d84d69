//! Abbreviation and lower-case-term data consulted by the boundary rules.
//!
//! Both sets are plain string membership tables: they are injected at
//! construction time, immutable for the lifetime of a splitter, and carry
//! no splitting logic of their own.

use std::collections::HashSet;

/// Tokens ending in a period that must not, by themselves, terminate a
/// sentence. Membership is checked on the verbatim ending token and again
/// on its lower-cased form.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // Civilian titles
    "Dr.", "Ph.D.", "Ph.", "Mr.", "Mrs.", "Ms.", "Prof.", "Esq.",
    // Military ranks
    "Maj.", "Gen.", "Adm.", "Lieut.", "Lt.", "Col.", "Sgt.", "Cpl.", "Pte.",
    "Cap.", "Capt.",
    // Political titles
    "Sen.", "Pres.", "Rep.",
    // Religious titles
    "St.", "Rev.",
    // Geographical and addresses
    "Mt.", "Rd.", "Cres.", "Ln.", "Ave.", "Av.", "Bd.", "Blvd.", "Co.", "co.",
    // Commercial
    "Ltd.", "Plc.", "PLC.", "Inc.", "Pty.", "Corp.",
    // Academic
    "et.", "al.", "ed.", "eds.", "Ed.", "Eds.", "Fig.", "fig.", "Ref.", "ref.",
    // General
    "etc.", "usu.", "e.g.", "pp.", "vs.",
    // Measures
    "yr.", "yrs.", "mg.", "kg.", "gr.", "lb.", "lbs.", "oz.", "in.", "mi.",
    "mt.", "mtr.", "ft.", "max.", "min.", "Max.", "Min.", "inc.", "exc.",
    // Single letter initials
    "A.", "B.", "C.", "D.", "E.", "F.", "G.", "H.", "I.", "J.", "K.", "L.",
    "M.", "N.", "O.", "P.", "Q.", "R.", "S.", "T.", "U.", "V.", "W.", "X.",
    "Y.", "Z.",
    "a.", "b.", "c.", "d.", "e.", "f.", "g.", "h.", "i.", "j.", "k.", "l.",
    "m.", "n.", "o.", "p.", "q.", "r.", "s.", "t.", "u.", "v.", "w.", "x.",
    "y.", "z.",
    // Temporal
    "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.", "Sept.",
    "Oct.", "Nov.", "Dec.",
    "Mon.", "Tue.", "Wed.", "Thu.", "Fri.", "Sat.", "Sun.",
];

/// Mixed-case technical terms and enumeration tokens that force a split
/// when they open the following sentence, despite starting lower-case.
pub const DEFAULT_LOWER_CASE_TERMS: &[&str] = &[
    "mRNA", "tRNA", "cDNA",
    "iPad", "iPod", "iPhone", "iCloud", "iMac",
    "eCommerce", "eBusiness", "mCommerce",
    "alpha", "beta", "gamma", "delta",
    "c", "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x",
];

/// Configuration data for one splitter: the abbreviation set and the
/// lower-case term set. Read-only once constructed; swap the whole value
/// to reconfigure.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    abbreviations: HashSet<String>,
    lower_case_terms: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from caller-supplied sets.
    pub fn new(abbreviations: HashSet<String>, lower_case_terms: HashSet<String>) -> Self {
        Self {
            abbreviations,
            lower_case_terms,
        }
    }

    /// The built-in abbreviation set as an owned `HashSet`.
    pub fn default_abbreviations() -> HashSet<String> {
        DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect()
    }

    /// The built-in lower-case term set as an owned `HashSet`.
    pub fn default_lower_case_terms() -> HashSet<String> {
        DEFAULT_LOWER_CASE_TERMS.iter().map(|s| s.to_string()).collect()
    }

    /// Parse a newline-delimited word list. Blank lines and `#` comment
    /// lines are skipped.
    pub fn parse_word_list(source: &str) -> HashSet<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    /// True if `token` is a known abbreviation, checking the verbatim token
    /// and its lower-cased form.
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(token) || self.abbreviations.contains(&token.to_lowercase())
    }

    /// True if `token` is a lower-case term. Exact, case-sensitive match.
    pub fn is_lower_case_term(&self, token: &str) -> bool {
        self.lower_case_terms.contains(token)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            Self::default_abbreviations(),
            Self::default_lower_case_terms(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_abbreviation_membership() {
        let vocabulary = Vocabulary::default();

        for abbr in ["Dr.", "etc.", "U.", "q.", "Sept.", "e.g."] {
            assert!(
                vocabulary.is_abbreviation(abbr),
                "{abbr} should be an abbreviation"
            );
        }
        assert!(!vocabulary.is_abbreviation("arrived."));
        assert!(!vocabulary.is_abbreviation("Hello"));
    }

    #[test]
    fn test_abbreviation_lower_cased_form_also_checked() {
        // "FIG." is not in the set verbatim, but "fig." is.
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_abbreviation("FIG."));
        assert!(vocabulary.is_abbreviation("ETC."));
    }

    #[test]
    fn test_lower_case_terms_are_case_sensitive() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.is_lower_case_term("mRNA"));
        assert!(vocabulary.is_lower_case_term("iv"));
        assert!(!vocabulary.is_lower_case_term("MRNA"));
        assert!(!vocabulary.is_lower_case_term("Mrna"));
    }

    #[test]
    fn test_custom_sets_replace_defaults() {
        let abbreviations = ["abbr.".to_string()].into_iter().collect();
        let terms = ["qPCR".to_string()].into_iter().collect();
        let vocabulary = Vocabulary::new(abbreviations, terms);

        assert!(vocabulary.is_abbreviation("abbr."));
        assert!(!vocabulary.is_abbreviation("Dr."));
        assert!(vocabulary.is_lower_case_term("qPCR"));
        assert!(!vocabulary.is_lower_case_term("mRNA"));
    }

    #[test]
    fn test_parse_word_list() {
        let parsed = Vocabulary::parse_word_list("Dr.\n\n# comment\n  mRNA  \n");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains("Dr."));
        assert!(parsed.contains("mRNA"));
    }
}
