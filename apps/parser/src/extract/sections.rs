use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;

/// Fixed internal name for a resume category, decoupled from the many
/// header-string synonyms that may denote it in source documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Contact,
    Education,
    Experience,
    Skills,
    Unclassified,
}

/// One line as assigned by the segmenter. Header lines stay inside their
/// bucket so that every input line lands in exactly one bucket; extractors
/// read the body only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine {
    pub text: String,
    pub header: bool,
}

/// Ordered groups of source lines keyed by canonical section. Built once per
/// parse and discarded after field extraction.
#[derive(Debug, Default)]
pub struct SectionMap {
    buckets: BTreeMap<SectionKey, Vec<SectionLine>>,
}

impl SectionMap {
    fn push(&mut self, key: SectionKey, text: &str, header: bool) {
        self.buckets.entry(key).or_default().push(SectionLine {
            text: text.to_string(),
            header,
        });
    }

    /// Bucket content with header lines filtered out.
    pub fn body(&self, key: SectionKey) -> Vec<&str> {
        self.buckets
            .get(&key)
            .map(|lines| {
                lines
                    .iter()
                    .filter(|l| !l.header)
                    .map(|l| l.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of lines across all buckets, header lines included.
    /// Equals the normalized input line count: segmentation never drops or
    /// duplicates a line.
    pub fn line_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Returns the canonical key when `line` reads as a section header.
///
/// A heading is distinguished from body text by brevity and the absence of
/// sentence punctuation; after case-insensitive normalization (trailing
/// colon stripped) it must equal, start with, or end with one of the
/// configured synonyms. Rule declaration order decides ties.
pub fn header_key(line: &str, config: &ParserConfig) -> Option<SectionKey> {
    if line.len() >= 50 || line.ends_with(['.', '!', '?']) {
        return None;
    }
    let normalized = line.trim_end_matches(':').trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    for rule in &config.sections {
        for synonym in &rule.headers {
            let synonym = synonym.to_lowercase();
            if normalized == synonym
                || normalized.starts_with(&format!("{synonym} "))
                || normalized.ends_with(&format!(" {synonym}"))
            {
                return Some(rule.key);
            }
        }
    }
    None
}

/// Scans normalized lines in order, opening a new active bucket on each
/// header match. Lines before the first header (conventionally the contact
/// letterhead) go to `Unclassified`. Never fails: zero headers yields a
/// single `Unclassified` bucket holding every line.
pub fn segment(lines: &[String], config: &ParserConfig) -> SectionMap {
    let mut map = SectionMap::default();
    let mut active = SectionKey::Unclassified;
    for line in lines {
        match header_key(line, config) {
            Some(key) => {
                active = key;
                map.push(active, line, true);
            }
            None => map.push(active, line, false),
        }
    }
    map
}
