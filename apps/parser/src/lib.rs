//! Heuristic resume field extraction.
//!
//! Takes plain text recovered from a resume document, segments it into
//! labeled sections via configurable header synonyms, and extracts a
//! structured contact/education/experience/skills record. Extraction is
//! best-effort and closed-vocabulary: a pattern miss leaves a field unset,
//! never raises an error, and nothing outside the configured skill
//! vocabulary is ever inferred.

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod source;

pub use config::{ParserConfig, SectionRule};
pub use errors::ExtractError;
pub use extract::parse_resume;
pub use models::{ContactInfo, EducationEntry, ExperienceEntry, ParsedResume};
