use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

// Candidate digit groupings tolerant of space/dot/dash/parenthesis
// separators; validated afterwards by national-number digit count.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\(?\d[\d\s().\-]{5,}\d").unwrap());

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com\S*").unwrap());

static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com\S*").unwrap());

// "City, ST" or "San Francisco, CA" style line.
static LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Za-z]+(?:[ -][A-Z][A-Za-z]+)*),\s*([A-Z]{2})\b").unwrap());

const MAX_NAME_WORDS: usize = 4;
const MIN_NAME_WORDS: usize = 2;

/// Extracts contact fields from the letterhead lines, first match per field.
///
/// Best-effort: a pattern miss leaves the field `None`; nothing is ever
/// fabricated from unrelated text.
pub fn extract_contact(lines: &[&str]) -> ContactInfo {
    let (name, location) = find_name_and_location(lines);
    ContactInfo {
        name,
        email: find_first(lines, &EMAIL_RE),
        phone: find_phone(lines),
        linkedin: find_first(lines, &LINKEDIN_RE).map(trim_url),
        github: find_first(lines, &GITHUB_RE).map(trim_url),
        location,
    }
}

fn find_first(lines: &[&str], re: &Regex) -> Option<String> {
    lines
        .iter()
        .find_map(|line| re.find(line).map(|m| m.as_str().to_string()))
}

fn trim_url(url: String) -> String {
    url.trim_end_matches(['.', ',', ';', ')']).to_string()
}

fn find_phone(lines: &[&str]) -> Option<String> {
    for line in lines {
        for candidate in PHONE_RE.find_iter(line) {
            let digits = candidate.as_str().chars().filter(char::is_ascii_digit).count();
            if (7..=15).contains(&digits) {
                return Some(candidate.as_str().trim().to_string());
            }
        }
    }
    None
}

/// Name heuristic: the first short line with no digits and no email/URL
/// content. A "City, ST" line immediately below it becomes the location;
/// otherwise location stays unset (known limitation of the heuristic).
fn find_name_and_location(lines: &[&str]) -> (Option<String>, Option<String>) {
    for (i, line) in lines.iter().enumerate() {
        if !is_name_candidate(line) {
            continue;
        }
        let location = lines
            .get(i + 1)
            .and_then(|next| LOCATION_RE.find(next))
            .map(|m| m.as_str().to_string());
        return (Some(line.to_string()), location);
    }
    (None, None)
}

fn is_name_candidate(line: &str) -> bool {
    if line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let lower = line.to_lowercase();
    if line.contains('@') || lower.contains("http") || lower.contains("www.") {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words.len()) {
        return false;
    }
    words.iter().all(|w| {
        w.chars().all(|c| c.is_alphabetic() || matches!(c, '.' | ',' | '\'' | '-'))
    })
}
