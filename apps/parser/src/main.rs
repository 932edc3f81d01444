use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

use resume_extract::{parse_resume, source, ParsedResume, ParserConfig};

/// Extracts contact, education, experience and skill fields from resume
/// documents using keyword heuristics.
#[derive(Debug, Parser)]
#[command(name = "resume-extract", version)]
struct Cli {
    /// Resume file (.pdf or .txt), or a directory to scan recursively.
    path: PathBuf,

    /// JSON file overriding the built-in section synonyms and skill
    /// vocabulary.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// One parsed document, tagged with its source path for batch output.
#[derive(Debug, Serialize)]
struct ParsedDocument {
    file: String,
    resume: ParsedResume,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ParserConfig::from_file(path)?,
        None => ParserConfig::default(),
    };

    let documents = if cli.path.is_dir() {
        parse_directory(&cli.path, &config)
    } else {
        vec![parse_file(&cli.path, &config)?]
    };
    info!("parsed {} document(s)", documents.len());

    let rendered = match cli.format {
        OutputFormat::Json => render_json(&documents)?,
        OutputFormat::Csv => render_csv(&documents)?,
    };
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write output to '{}'", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn parse_file(path: &Path, config: &ParserConfig) -> Result<ParsedDocument> {
    let text = source::read_document(path)
        .with_context(|| format!("could not recover text from '{}'", path.display()))?;
    Ok(ParsedDocument {
        file: path.display().to_string(),
        resume: parse_resume(&text, config),
    })
}

/// Walks a directory for supported files, skipping (with a warning) any
/// document whose text cannot be recovered instead of failing the batch.
fn parse_directory(dir: &Path, config: &ParserConfig) -> Vec<ParsedDocument> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && source::is_supported(e.path()))
    {
        match parse_file(entry.path(), config) {
            Ok(document) => {
                info!("parsed {}", entry.path().display());
                documents.push(document);
            }
            Err(e) => warn!("skipping {}: {e:#}", entry.path().display()),
        }
    }
    documents
}

fn render_json(documents: &[ParsedDocument]) -> Result<String> {
    let json = match documents {
        // Single document: emit the resume object itself for easy piping.
        [only] => serde_json::to_string_pretty(&only.resume)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

/// One summary row per document; multi-valued fields are joined with "; ".
fn render_csv(documents: &[ParsedDocument]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["file", "name", "email", "phone", "skills", "education", "experience"])?;
    for document in documents {
        let resume = &document.resume;
        let skills: Vec<&str> = resume.skills.iter().map(String::as_str).collect();
        let education: Vec<&str> = resume
            .education
            .iter()
            .filter_map(|e| e.degree.as_deref().or(e.institution.as_deref()))
            .collect();
        let experience: Vec<&str> = resume
            .experience
            .iter()
            .filter_map(|e| e.title.as_deref().or(e.company.as_deref()))
            .collect();
        let skills = skills.join("; ");
        let education = education.join("; ");
        let experience = experience.join("; ");
        writer.write_record([
            document.file.as_str(),
            resume.contact.name.as_deref().unwrap_or(""),
            resume.contact.email.as_deref().unwrap_or(""),
            resume.contact.phone.as_deref().unwrap_or(""),
            skills.as_str(),
            education.as_str(),
            experience.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().context("failed to flush csv output")?;
    Ok(String::from_utf8(bytes).context("csv output was not valid utf-8")?)
}
