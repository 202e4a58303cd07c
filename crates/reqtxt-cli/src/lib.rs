//! Command-line front end for the `reqtxt` parser.
//!
//! Reads one or more requirements files (stdin when none are given), parses
//! them with the library, and writes the records as JSON or as canonical
//! requirements text.

pub mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{OutputFormat, ReqtxtConfig};
use reqtxt::{Record, RequirementsParser};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(
    name = "reqtxt",
    version,
    about = "Parse requirements.txt files into typed records"
)]
pub struct Cli {
    /// Requirements files to parse (reads stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Skip strict checks and extract whatever each line provides
    #[arg(long)]
    pub loose: bool,

    /// Enforce strict checks even when the config file enables loose mode
    #[arg(long, conflicts_with = "loose")]
    pub strict: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Group records under the file they came from
    #[arg(long)]
    pub by_file: bool,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the supported option flags and exit
    #[arg(long)]
    pub list_flags: bool,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    loose: bool,
    format: OutputFormat,
    pretty: bool,
    by_file: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &ReqtxtConfig) -> Self {
        Self {
            loose: !cli.strict && (cli.loose || config.loose),
            format: cli.format.unwrap_or(config.format),
            pretty: config.pretty && !cli.compact,
            by_file: cli.by_file,
        }
    }
}

#[derive(Debug, Serialize)]
struct FileRecords<'a> {
    file: &'a str,
    records: &'a [Record],
}

/// Runs the command, reading stdin only when no files are given.
pub fn run(cli: &Cli, mut stdin: impl Read, mut out: impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ReqtxtConfig::load(path)?,
        None => ReqtxtConfig::default(),
    };
    let settings = Settings::resolve(cli, &config);
    tracing::debug!(?settings, files = cli.files.len(), "Resolved settings");

    if cli.list_flags {
        for flag in reqtxt::supported_flags() {
            writeln!(out, "{flag}")?;
        }
        return Ok(());
    }

    let parser = RequirementsParser::with_loose(settings.loose);
    let mut parsed = Vec::with_capacity(cli.files.len().max(1));
    if cli.files.is_empty() {
        let mut content = String::new();
        stdin
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        let records = parser
            .parse_content(&content)
            .context("failed to parse <stdin>")?;
        parsed.push(("<stdin>".to_string(), records));
    } else {
        for path in &cli.files {
            let label = path.display().to_string();
            let records = parser
                .parse_path(path)
                .with_context(|| format!("failed to parse {label}"))?;
            parsed.push((label, records));
        }
    }

    for (file, records) in &parsed {
        tracing::info!(file = %file, records = records.len(), "Parsed requirements");
    }

    match settings.format {
        OutputFormat::Json => write_json(&mut out, &parsed, settings)?,
        OutputFormat::Text => write_text(&mut out, &parsed, settings.by_file)?,
    }

    Ok(())
}

/// Writes one flat array of records, or `[{file, records}]` when grouping by file.
fn write_json(
    out: &mut impl Write,
    parsed: &[(String, Vec<Record>)],
    settings: Settings,
) -> Result<()> {
    if settings.by_file {
        let files: Vec<FileRecords<'_>> = parsed
            .iter()
            .map(|(file, records)| FileRecords {
                file: file.as_str(),
                records: records.as_slice(),
            })
            .collect();
        write_value(out, &files, settings.pretty)?;
    } else {
        let records: Vec<&Record> = parsed.iter().flat_map(|(_, records)| records).collect();
        write_value(out, &records, settings.pretty)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_value(out: &mut impl Write, value: &impl Serialize, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    Ok(())
}

fn write_text(out: &mut impl Write, parsed: &[(String, Vec<Record>)], by_file: bool) -> Result<()> {
    for (file, records) in parsed {
        if by_file {
            writeln!(out, "# {file}")?;
        }
        for record in records {
            writeln!(out, "{record}")?;
        }
    }
    Ok(())
}
