use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Complete parsed resume. Built once per parse call, immutable afterwards,
/// owned exclusively by the caller.
///
/// Absent optional fields serialize as `null`, never as omitted keys, so
/// downstream consumers always see the same JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

/// Contact block fields. `location` is rarely populated — the heuristic only
/// recognizes a "City, ST" line directly under the name line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
}

/// One education block. Absence of a field means "not found", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub gpa: Option<String>,
}

/// One work-history block. `description` aggregates the remaining lines of
/// the block in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}
