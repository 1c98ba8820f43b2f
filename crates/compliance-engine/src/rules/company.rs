// Heuristic matching of abbreviated builder company names
use crate::patterns::{abbreviations_for, NON_WORD};

/// Lowercase, trim and strip everything but word characters and whitespace
fn normalize(name: &str) -> String {
    NON_WORD
        .replace_all(name.trim(), "")
        .trim()
        .to_lowercase()
}

/// Candidate token stands for the full-name token: equal, a prefix, or a known abbreviation
fn token_matches(candidate: &str, full: &str) -> bool {
    candidate == full
        || full.starts_with(candidate)
        || abbreviations_for(full)
            .iter()
            .any(|abbreviation| *abbreviation == candidate)
}

/// Whether `candidate_name` reads as an abbreviation of `full_name`.
///
/// Tokens are compared left to right, each candidate token against the next
/// unconsumed full-name token, with no backtracking. A candidate with more
/// tokens than the full name never matches. Extra trailing full-name tokens
/// are allowed ("Lennar" matches "Lennar Corp").
pub fn match_company_abbreviation(full_name: &str, candidate_name: &str) -> bool {
    let full = normalize(full_name);
    let candidate = normalize(candidate_name);
    let full_tokens: Vec<&str> = full.split_whitespace().collect();
    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();

    if full_tokens.is_empty() || candidate_tokens.is_empty() {
        return false;
    }
    if candidate_tokens.len() > full_tokens.len() {
        return false;
    }

    let mut full_index = 0;
    for candidate_token in candidate_tokens {
        let Some(full_token) = full_tokens.get(full_index) else {
            return false;
        };
        let matched = token_matches(candidate_token, full_token);
        // the full-name index advances whether or not this token matched
        full_index += 1;
        if !matched {
            return false;
        }
    }

    true
}
