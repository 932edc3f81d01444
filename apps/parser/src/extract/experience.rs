use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExperienceEntry;

const MONTH: &str = "(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

// Two date-like tokens separated by a dash or "to": "Jan 2020 - Present",
// "2016 to 2019", "March 2021 – June 2023".
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    let date = format!(r"(?:{MONTH}\.?\s+)?\d{{4}}");
    Regex::new(&format!(
        r"(?i)\b{date}\s*(?:[-–—]|to)\s*(?:present|current|{date})\b"
    ))
    .unwrap()
});

const MAX_HEADING_WORDS: usize = 6;

/// Groups the experience bucket into entries and assigns line roles.
///
/// A duration line opens a new entry once the current one already has a
/// duration (pulling the short line just above it along as the new title);
/// a title-case line followed by a company-looking line does the same once
/// the current entry has descriptive text. Entries preserve source order,
/// and a block with only descriptive lines is still emitted rather than
/// silently dropping unconventional work history.
pub fn extract_experience(lines: &[&str]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_has_duration = false;

    fn flush(group: &mut Vec<&str>, has_duration: &mut bool, out: &mut Vec<ExperienceEntry>) {
        if let Some(entry) = build_entry(group) {
            out.push(entry);
        }
        group.clear();
        *has_duration = false;
    }

    for (i, &line) in lines.iter().enumerate() {
        if DURATION_RE.is_match(line) {
            if current_has_duration {
                // The short line just above a new date range is the next
                // entry's title, not part of the finished one.
                let carried = if current.last().is_some_and(|l| is_heading_candidate(l)) {
                    current.pop()
                } else {
                    None
                };
                flush(&mut current, &mut current_has_duration, &mut entries);
                if let Some(title) = carried {
                    current.push(title);
                }
            }
            current.push(line);
            current_has_duration = true;
            continue;
        }

        let next_is_company = lines
            .get(i + 1)
            .is_some_and(|next| is_heading_candidate(next) && !DURATION_RE.is_match(next));
        if is_title_case(line) && next_is_company && has_descriptive_text(&current) {
            flush(&mut current, &mut current_has_duration, &mut entries);
        }
        current.push(line);
    }
    if !current.is_empty() {
        flush(&mut current, &mut current_has_duration, &mut entries);
    }
    entries
}

/// Role assignment, in order of attempt: duration pattern, title (inline
/// before the date range, the line above it, or the line below it), company
/// (next short non-bullet line), then everything left joins into the
/// description.
fn build_entry(lines: &[&str]) -> Option<ExperienceEntry> {
    let mut assigned = vec![false; lines.len()];
    let mut entry = ExperienceEntry::default();
    let mut anchor = None;

    for (i, line) in lines.iter().enumerate() {
        if let Some(m) = DURATION_RE.find(line) {
            entry.duration = Some(m.as_str().to_string());
            assigned[i] = true;
            anchor = Some(i);
            let before = line[..m.start()]
                .trim()
                .trim_end_matches(['-', '–', '—', ',', '|'])
                .trim();
            if !before.is_empty() {
                entry.title = Some(before.to_string());
            }
            break;
        }
    }

    if entry.title.is_none() {
        if let Some(d) = anchor {
            if d > 0 && !assigned[d - 1] && is_heading_candidate(lines[d - 1]) {
                entry.title = Some(lines[d - 1].to_string());
                assigned[d - 1] = true;
            } else if lines.get(d + 1).is_some_and(|l| is_heading_candidate(l)) {
                entry.title = Some(lines[d + 1].to_string());
                assigned[d + 1] = true;
                anchor = Some(d + 1);
            }
        } else {
            // No date range anywhere in the block.
            for (i, line) in lines.iter().enumerate() {
                if is_heading_candidate(line) {
                    entry.title = Some(line.to_string());
                    assigned[i] = true;
                    anchor = Some(i);
                    break;
                }
            }
        }
    }

    if let Some(a) = anchor {
        if let Some(next) = lines.get(a + 1) {
            if !assigned[a + 1] && is_heading_candidate(next) {
                entry.company = Some(next.to_string());
                assigned[a + 1] = true;
            }
        }
    }

    let description: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| !assigned[*i])
        .map(|(_, line)| strip_bullet(line))
        .filter(|line| !line.is_empty())
        .collect();
    if !description.is_empty() {
        entry.description = Some(description.join("\n"));
    }

    if entry == ExperienceEntry::default() {
        None
    } else {
        Some(entry)
    }
}

/// Short non-bullet line without sentence punctuation: a plausible title or
/// company heading.
fn is_heading_candidate(line: &str) -> bool {
    !is_bullet(line)
        && !line.ends_with(['.', '!', '?'])
        && line.len() < 60
        && (1..=MAX_HEADING_WORDS).contains(&line.split_whitespace().count())
}

/// True once the block has collected bullet or prose lines, i.e. content
/// that can only be description text.
fn has_descriptive_text(lines: &[&str]) -> bool {
    lines.iter().any(|l| is_bullet(l) || !is_heading_candidate(l))
}

fn is_title_case(line: &str) -> bool {
    is_heading_candidate(line)
        && line
            .split_whitespace()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(['•', '●', '-', '*', '▪'])
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(['•', '●', '-', '*', '▪']).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bucket_yields_no_entries() {
        assert!(extract_experience(&[]).is_empty());
    }

    #[test]
    fn test_duration_and_adjacent_title_share_an_entry() {
        let entries = extract_experience(&[
            "Software Engineer",
            "Jan 2020 - Present",
            "• Built billing services",
        ]);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some("Software Engineer"));
        assert_eq!(entry.duration.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(entry.description.as_deref(), Some("Built billing services"));
    }

    #[test]
    fn test_title_after_duration_line_is_also_adjacent() {
        let entries = extract_experience(&["Jan 2020 - Present", "Software Engineer"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(entries[0].title.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_inline_title_and_duration() {
        let entries = extract_experience(&["Backend Engineer — Mar 2018 – Dec 2019"]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Backend Engineer"));
        assert_eq!(entries[0].duration.as_deref(), Some("Mar 2018 – Dec 2019"));
    }

    #[test]
    fn test_company_follows_title_and_duration() {
        let entries = extract_experience(&[
            "Software Engineer",
            "Jan 2020 - Present",
            "Acme Corp",
            "• Shipped the payments platform",
        ]);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some("Software Engineer"));
        assert_eq!(entry.company.as_deref(), Some("Acme Corp"));
        assert_eq!(
            entry.description.as_deref(),
            Some("Shipped the payments platform")
        );
    }

    #[test]
    fn test_second_date_range_starts_a_new_entry() {
        let entries = extract_experience(&[
            "Senior Engineer",
            "Jan 2020 - Present",
            "• Led migrations",
            "Junior Engineer",
            "Mar 2016 to Dec 2019",
            "• Maintained the monolith",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Senior Engineer"));
        assert_eq!(entries[0].duration.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(entries[1].title.as_deref(), Some("Junior Engineer"));
        assert_eq!(entries[1].duration.as_deref(), Some("Mar 2016 to Dec 2019"));
        assert_eq!(
            entries[1].description.as_deref(),
            Some("Maintained the monolith")
        );
    }

    #[test]
    fn test_undated_block_is_still_emitted() {
        let entries = extract_experience(&[
            "Volunteered as a coding mentor for a local nonprofit, running weekly workshops for beginners.",
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration, None);
        assert!(entries[0]
            .description
            .as_deref()
            .unwrap()
            .contains("coding mentor"));
    }

    #[test]
    fn test_description_preserves_line_order() {
        let entries = extract_experience(&[
            "Engineer",
            "Jan 2020 - Dec 2021",
            "• first",
            "• second",
            "• third",
        ]);
        assert_eq!(entries[0].description.as_deref(), Some("first\nsecond\nthird"));
    }

    #[test]
    fn test_title_case_block_boundary_without_dates() {
        let entries = extract_experience(&[
            "Software Engineer",
            "Acme Corp",
            "Shipped the payments platform and led a team of four engineers onboard",
            "Data Analyst",
            "Globex Inc",
            "Automated the weekly reporting pipeline end to end for the sales org",
        ]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Software Engineer"));
        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[1].title.as_deref(), Some("Data Analyst"));
        assert_eq!(entries[1].company.as_deref(), Some("Globex Inc"));
    }

    #[test]
    fn test_duration_pattern_shapes() {
        for line in [
            "Jan 2020 - Present",
            "January 2020 — December 2022",
            "2016 to 2019",
            "Sept 2021 – May 2023",
        ] {
            assert!(DURATION_RE.is_match(line), "{line:?} should match");
        }
        assert!(!DURATION_RE.is_match("worked for 4 years"));
        assert!(!DURATION_RE.is_match("Built 2020 widgets"));
    }
}
