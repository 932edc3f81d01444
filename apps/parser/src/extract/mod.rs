//! Heuristic extraction pipeline: normalize lines, segment into labeled
//! sections, then pull structured fields out of each bucket.

pub mod contact;
pub mod education;
pub mod experience;
pub mod normalize;
pub mod sections;
pub mod skills;

use crate::config::ParserConfig;
use crate::models::ParsedResume;
use sections::SectionKey;

/// When no contact lines were segmented, the letterhead conventionally sits
/// in the first few lines of the document.
const LETTERHEAD_LINES: usize = 8;

/// Parses raw resume text into a structured record.
///
/// Pure function of the input text and the two configuration tables; no
/// hidden state, so parsing the same text twice yields identical output.
/// Empty or header-free input is not an error: misses leave fields unset
/// and buckets empty.
pub fn parse_resume(text: &str, config: &ParserConfig) -> ParsedResume {
    let lines = normalize::normalize_lines(text);
    let map = sections::segment(&lines, config);

    // The contact block usually precedes any headed section, but some
    // resumes carry an explicit contact header; read both buckets.
    let mut contact_lines = map.body(SectionKey::Unclassified);
    contact_lines.extend(map.body(SectionKey::Contact));
    let all_lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let contact = if contact_lines.is_empty() {
        contact::extract_contact(&all_lines[..all_lines.len().min(LETTERHEAD_LINES)])
    } else {
        contact::extract_contact(&contact_lines)
    };

    ParsedResume {
        contact,
        skills: skills::extract_skills(&map.body(SectionKey::Skills), &all_lines, config),
        education: education::extract_education(&map.body(SectionKey::Education)),
        experience: experience::extract_experience(&map.body(SectionKey::Experience)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "\
Jane Doe
Boston, MA
jane.doe@example.com | (617) 555-0142
linkedin.com/in/janedoe | github.com/janedoe

EDUCATION
Bachelor of Science in Computer Science
State University
2014 - 2018, GPA: 3.8

EXPERIENCE
Software Engineer
Jan 2020 - Present
Acme Corp
\u{2022} Built a billing platform in Python serving 40k daily users
\u{2022} Introduced Docker-based deployments

TECHNICAL SKILLS
Languages: Python, JavaScript, Rust
Tools: Docker, Git
";

    #[test]
    fn test_full_pipeline() {
        let resume = parse_resume(FULL_RESUME, &ParserConfig::default());

        assert_eq!(resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.location.as_deref(), Some("Boston, MA"));
        assert_eq!(resume.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(resume.contact.phone.as_deref(), Some("(617) 555-0142"));
        assert_eq!(resume.contact.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(resume.contact.github.as_deref(), Some("github.com/janedoe"));

        assert_eq!(resume.education.len(), 1);
        let education = &resume.education[0];
        assert_eq!(
            education.degree.as_deref(),
            Some("Bachelor of Science in Computer Science")
        );
        assert_eq!(education.institution.as_deref(), Some("State University"));
        assert_eq!(education.year.as_deref(), Some("2014"));
        assert_eq!(education.gpa.as_deref(), Some("3.8"));

        assert_eq!(resume.experience.len(), 1);
        let experience = &resume.experience[0];
        assert_eq!(experience.title.as_deref(), Some("Software Engineer"));
        assert_eq!(experience.company.as_deref(), Some("Acme Corp"));
        assert_eq!(experience.duration.as_deref(), Some("Jan 2020 - Present"));
        assert!(experience.description.as_deref().unwrap().contains("billing platform"));

        for skill in ["Python", "JavaScript", "Rust", "Docker", "Git"] {
            assert!(resume.skills.contains(skill), "missing skill {skill}");
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let config = ParserConfig::default();
        let first = parse_resume(FULL_RESUME, &config);
        let second = parse_resume(FULL_RESUME, &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let resume = parse_resume("", &ParserConfig::default());
        assert_eq!(resume, ParsedResume::default());
    }

    #[test]
    fn test_whitespace_only_input() {
        let resume = parse_resume(" \n\t\n \u{0c} ", &ParserConfig::default());
        assert_eq!(resume, ParsedResume::default());
    }

    #[test]
    fn test_headerless_text_still_yields_contact() {
        let resume = parse_resume("Jane Doe\njane.doe@example.com\n", &ParserConfig::default());
        assert_eq!(resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert!(resume.education.is_empty());
        assert!(resume.experience.is_empty());
    }

    #[test]
    fn test_explicit_contact_header_feeds_contact_fields() {
        let text = "CONTACT\nJane Doe\njane.doe@example.com\nEDUCATION\nB.S. Physics\nState University";
        let resume = parse_resume(text, &ParserConfig::default());
        assert_eq!(resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].degree.as_deref(), Some("B.S. Physics"));
    }

    #[test]
    fn test_header_first_document_reads_contact_from_leading_lines() {
        // Every line lands in a headed bucket, so contact details are pulled
        // from the leading lines instead.
        let text = "EDUCATION\nState University\njane.doe@example.com\n(617) 555-0142";
        let resume = parse_resume(text, &ParserConfig::default());
        assert_eq!(resume.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(resume.contact.phone.as_deref(), Some("(617) 555-0142"));
    }

    #[test]
    fn test_json_round_trip_of_parsed_output() {
        let resume = parse_resume(FULL_RESUME, &ParserConfig::default());
        let json = serde_json::to_string(&resume).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(resume, back);
    }
}
