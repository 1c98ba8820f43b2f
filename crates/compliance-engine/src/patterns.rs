//! Regex patterns and lookup tables shared by the validation rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conservative `local@domain.tld` shape, not full RFC 5322
    pub static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Phone formatting characters stripped before the digit check
    pub static ref PHONE_FORMATTING: Regex = Regex::new(r"[\s\-().]").unwrap();

    /// 10-15 digits, optional leading `+`
    pub static ref PHONE_DIGITS: Regex = Regex::new(r"^\+?\d{10,15}$").unwrap();

    /// Anything that is neither a word character nor whitespace
    pub static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Company-name abbreviations accepted in place of the full word
pub const COMPANY_ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("construction", &["const", "constr", "constru"]),
    ("corporation", &["corp", "co"]),
    ("company", &["co", "comp"]),
    ("incorporated", &["inc"]),
    ("limited", &["ltd"]),
    ("builders", &["bldrs", "bldr"]),
    ("development", &["dev", "devel"]),
    ("international", &["intl"]),
    ("associates", &["assoc", "assocs"]),
    ("brothers", &["bros"]),
    ("homes", &["hms"]),
];

/// Abbreviations registered for `word`, empty when none
pub fn abbreviations_for(word: &str) -> &'static [&'static str] {
    COMPANY_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == word)
        .map(|(_, abbreviations)| *abbreviations)
        .unwrap_or(&[])
}
