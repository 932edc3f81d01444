use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::sections::SectionKey;

/// A canonical section key plus the header strings that denote it in source
/// documents. Declaration order is the tie-break: when a line matches
/// synonyms of two different rules, the earliest rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRule {
    pub key: SectionKey,
    pub headers: Vec<String>,
}

/// The two tunable tables of the extractor: section-header synonyms and the
/// closed skill vocabulary. Everything else is fixed heuristics, so swapping
/// these tables is the whole configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub sections: Vec<SectionRule>,
    /// Known skill strings in their canonical casing. Matching is
    /// case-insensitive; output uses the casing given here.
    pub skills: Vec<String>,
}

impl ParserConfig {
    /// Loads a config from a JSON file with the same shape as the built-in
    /// defaults. The file replaces both tables wholesale.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid parser config in '{}'", path.display()))?;
        if config.sections.is_empty() {
            bail!("config '{}' declares no section rules", path.display());
        }
        Ok(config)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        let rule = |key, headers: &[&str]| SectionRule {
            key,
            headers: headers.iter().map(|h| h.to_string()).collect(),
        };
        ParserConfig {
            sections: vec![
                rule(
                    SectionKey::Contact,
                    &["contact", "contact information", "personal information"],
                ),
                rule(
                    SectionKey::Education,
                    &["education", "academic background", "academic", "qualifications"],
                ),
                rule(
                    SectionKey::Experience,
                    &[
                        "experience",
                        "work experience",
                        "professional experience",
                        "employment",
                        "work history",
                        // Activity and project blocks read like work history,
                        // so they share the experience bucket.
                        "activities",
                        "projects",
                    ],
                ),
                rule(
                    SectionKey::Skills,
                    &[
                        "skills",
                        "technical skills",
                        "core competencies",
                        "expertise",
                        "technologies",
                    ],
                ),
            ],
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Git",
    "CI/CD",
    "Jenkins",
    "GitHub Actions",
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "REST API",
    "GraphQL",
    "Microservices",
    "Agile",
    "Scrum",
    "Jira",
    "Linux",
    "Bash",
    "Shell Scripting",
];
