use std::collections::{BTreeSet, HashMap};

use crate::config::ParserConfig;

/// Longest phrase length considered, in tokens. Catches vocabulary entries
/// like "machine learning" or "github actions".
const MAX_PHRASE_TOKENS: usize = 3;

/// Closed-vocabulary skill matching over the skills bucket plus the full
/// normalized text (skills often appear inline in experience bullets).
///
/// Tokens and 2-3 token phrases are compared case-insensitively against the
/// configured vocabulary; matches come back in canonical casing with no
/// duplicates. A term outside the vocabulary is never inferred, and matching
/// is word-boundary based, not fuzzy.
pub fn extract_skills(
    skills_bucket: &[&str],
    all_lines: &[&str],
    config: &ParserConfig,
) -> BTreeSet<String> {
    let vocabulary: HashMap<String, &str> = config
        .skills
        .iter()
        .map(|canonical| (canonical.to_lowercase(), canonical.as_str()))
        .collect();

    let mut matched = BTreeSet::new();
    for line in skills_bucket.iter().chain(all_lines) {
        let tokens = tokenize(line);
        for width in 1..=MAX_PHRASE_TOKENS {
            for window in tokens.windows(width) {
                if let Some(canonical) = vocabulary.get(&window.join(" ")) {
                    matched.insert(canonical.to_string());
                }
            }
        }
    }
    matched
}

/// Lowercased word tokens. Separators cover the comma/bullet/category
/// formatting seen in skills sections; leading and trailing punctuation is
/// stripped while `+`, `#`, and inner dots survive so entries like "C++",
/// "C#", and "Node.js" stay intact.
fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '(' | ')' | '|' | '•' | '●' | '·' | '&'))
        .map(|token| {
            token
                .trim_matches(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#')))
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}
