use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EducationEntry;

// Dotted abbreviations require the first dot, and dotless ones only count
// in uppercase, so prose words like "be" or "ma" never read as degrees.
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\b(?i:bachelor|master|associate|doctorate|ph\.?d|mba|b\.s\.?c?|m\.s\.?c?|b\.a\.?|m\.a\.?|b\.e\.?|m\.e\.?)\b|\b(?:BS|BA|MS|MA|BE|ME|BSc|MSc)\b)",
    )
    .unwrap()
});

// Plausible graduation years.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19[5-9]\d|20[0-2]\d|203[0-5])\b").unwrap());

static GPA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d\.\d{1,2}\b").unwrap());

/// Groups the education bucket into entries and assigns line roles.
///
/// A new entry starts when a degree-keyword line appears while the current
/// entry already holds one. Within an entry the first matching line wins
/// each role; the institution is the first line left without any role.
/// Entries preserve source order; an empty bucket yields no entries.
pub fn extract_education(lines: &[&str]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_has_degree = false;

    for &line in lines {
        let is_degree = DEGREE_RE.is_match(line);
        if is_degree && current_has_degree {
            entries.push(build_entry(&current));
            current.clear();
            current_has_degree = false;
        }
        current.push(line);
        current_has_degree |= is_degree;
    }
    if !current.is_empty() {
        entries.push(build_entry(&current));
    }
    entries
}

fn build_entry(lines: &[&str]) -> EducationEntry {
    let mut assigned = vec![false; lines.len()];
    let mut entry = EducationEntry::default();

    // Order of attempt is the contract: degree, year, gpa, then institution
    // from the first line with no assigned role.
    for (i, line) in lines.iter().enumerate() {
        if DEGREE_RE.is_match(line) {
            entry.degree = Some(line.to_string());
            assigned[i] = true;
            break;
        }
    }
    for (i, line) in lines.iter().enumerate() {
        if let Some(m) = YEAR_RE.find(line) {
            entry.year = Some(m.as_str().to_string());
            assigned[i] = true;
            break;
        }
    }
    'gpa: for (i, line) in lines.iter().enumerate() {
        for m in GPA_RE.find_iter(line) {
            let in_scale = m.as_str().parse::<f64>().map(|v| v <= 5.0).unwrap_or(false);
            if in_scale {
                entry.gpa = Some(m.as_str().to_string());
                assigned[i] = true;
                break 'gpa;
            }
        }
    }
    for (i, line) in lines.iter().enumerate() {
        if !assigned[i] && line.chars().any(char::is_alphabetic) {
            entry.institution = Some(strip_bullet(line));
            break;
        }
    }
    entry
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(['•', '●', '-', '*']).trim().to_string()
}
