//! requirements.txt line classifier.
//!
//! Each logical line is classified independently: comment, option line, or
//! one of four requirement shapes. Shapes are tried in a fixed order and the
//! first match wins:
//!
//! 1. `name[extras] @ url` (PackageURL)
//! 2. bare URL (URL)
//! 3. `./` or `/` path ending in `.whl` (Path)
//! 4. `name[extras]<constraints>` (Package)
//!
//! In strict mode malformed lines are rejected. In loose mode every check is
//! skipped and fields the grammar could not extract are left unset.

use crate::directives;
use crate::error::{ReqtxtError, Result};
use crate::grammar::{match_package, match_requirement};
use crate::lines::logical_lines;
use crate::types::{CommandLineFlag, Record, Requirement, RequirementSource};
use std::path::Path;

/// Parser for requirements files with a fixed strictness mode.
///
/// # Examples
///
/// ```
/// use reqtxt::parser::RequirementsParser;
///
/// let content = "\
/// -i https://pypi.org/simple
///
/// requests[socks]>=2.28,<3.0; python_version >= \"3.8\"
/// ";
///
/// let records = RequirementsParser::strict().parse_content(content).unwrap();
/// assert_eq!(records.len(), 2);
///
/// let req = records[1].as_requirement().unwrap();
/// assert_eq!(req.package(), Some("requests"));
/// assert_eq!(req.extras(), Some("socks"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementsParser {
    loose: bool,
}

impl RequirementsParser {
    /// Parser that rejects unrecognized flags and malformed requirements.
    pub const fn strict() -> Self {
        Self { loose: false }
    }

    /// Parser that never rejects a line and extracts what it can.
    pub const fn loose() -> Self {
        Self { loose: true }
    }

    pub const fn with_loose(loose: bool) -> Self {
        Self { loose }
    }

    pub const fn is_loose(&self) -> bool {
        self.loose
    }

    /// Classifies a single logical line.
    pub fn parse_line(&self, line: &str) -> Result<Option<Record>> {
        parse_line(line, self.loose)
    }

    /// Parses full file content into records, in line order.
    pub fn parse_content(&self, content: &str) -> Result<Vec<Record>> {
        parse_file(content, self.loose)
    }

    /// Reads a requirements file from disk and parses it.
    ///
    /// Read failures are reported as [`ReqtxtError::Io`].
    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Read requirements file");
        self.parse_content(&content)
    }
}

/// Parses requirements file content into records.
///
/// Continuation lines are joined first. Blank lines and comments produce no
/// record. In strict mode the first rejected line aborts the whole parse and
/// no partial result is returned.
///
/// # Examples
///
/// ```
/// use reqtxt::parser::parse_file;
///
/// let records = parse_file("--pre\nflask==3.0.0\n", false).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(records[0].as_flag().is_some());
///
/// assert!(parse_file("-x\nflask\n", false).is_err());
/// assert_eq!(parse_file("-x\nflask\n", true).unwrap().len(), 2);
/// ```
pub fn parse_file(content: &str, loose: bool) -> Result<Vec<Record>> {
    tracing::debug!(loose, bytes = content.len(), "Parsing requirements file");

    let lines = logical_lines(content);
    let mut records = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line, loose) {
            Ok(Some(record)) => {
                tracing::trace!(logical_line = index + 1, ?record, "Classified line");
                records.push(record);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(logical_line = index + 1, error = %e, "Rejected line");
                return Err(e);
            }
        }
    }

    tracing::debug!(
        lines = lines.len(),
        records = records.len(),
        "Parsed requirements file"
    );

    Ok(records)
}

/// Classifies one logical line.
///
/// Returns `Ok(None)` for comments and blank lines.
///
/// # Examples
///
/// ```
/// use reqtxt::parser::parse_line;
///
/// assert!(parse_line("# comment", false).unwrap().is_none());
///
/// let record = parse_line("-r base.txt", false).unwrap().unwrap();
/// assert_eq!(record.as_flag().unwrap().args, vec!["base.txt"]);
/// ```
pub fn parse_line(line: &str, loose: bool) -> Result<Option<Record>> {
    let content = line.trim_start();
    if content.is_empty() || content.starts_with('#') {
        return Ok(None);
    }

    if line.starts_with('-') {
        return parse_flag(line, loose).map(|flag| Some(Record::CommandLineFlag(flag)));
    }

    parse_requirement(line, loose).map(|req| Some(Record::Requirement(req)))
}

fn parse_flag(line: &str, loose: bool) -> Result<CommandLineFlag> {
    let mut tokens = line.split(' ');
    let flag = tokens.next().unwrap_or_default().to_string();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    match directives::arity(&flag) {
        Some(expected) if expected == args.len() => {}
        Some(expected) if !loose => {
            return Err(ReqtxtError::invalid_flag_arity(flag, expected, args.len()));
        }
        None if !loose => return Err(ReqtxtError::unsupported_flag(flag)),
        expected => {
            tracing::debug!(%flag, ?expected, actual = args.len(), "Keeping unchecked flag");
        }
    }

    Ok(CommandLineFlag { flag, args })
}

fn parse_requirement(line: &str, loose: bool) -> Result<Requirement> {
    let mut segments = line.split(';').map(str::trim);
    let pkg = segments.next().unwrap_or_default();
    let marker_segments: Vec<&str> = segments.collect();

    if marker_segments.len() > 1 {
        if !loose {
            return Err(ReqtxtError::TooManyMarkers {
                requirement: line.trim().to_string(),
                count: marker_segments.len(),
            });
        }
        tracing::debug!(
            dropped = marker_segments.len() - 1,
            "Keeping first marker segment only"
        );
    }

    let markers = marker_segments
        .first()
        .filter(|m| !m.is_empty())
        .map(|m| (*m).to_string());

    Ok(Requirement {
        markers,
        source: classify(pkg, loose)?,
    })
}

fn classify(pkg: &str, loose: bool) -> Result<RequirementSource> {
    let (name, url) = match pkg.split_once('@') {
        Some((name, url)) => (name.trim(), Some(url.trim()).filter(|u| !u.is_empty())),
        None => (pkg, None),
    };

    if let Some(url) = url {
        return package_url(pkg, url, loose);
    }

    if url::Url::parse(name).is_ok() {
        return Ok(RequirementSource::Url {
            url: name.to_string(),
        });
    }

    if is_wheel_path(name) {
        return Ok(RequirementSource::Path {
            path: name.to_string(),
        });
    }

    package(pkg, loose)
}

fn package_url(pkg: &str, url: &str, loose: bool) -> Result<RequirementSource> {
    if !loose && let Err(source) = url::Url::parse(url) {
        return Err(ReqtxtError::InvalidUrl {
            url: url.to_string(),
            source,
        });
    }

    let caps = match_package(pkg);
    if caps.is_none() && !loose {
        return Err(ReqtxtError::invalid_requirement(pkg));
    }

    Ok(RequirementSource::PackageUrl {
        package: caps.as_ref().map(|c| c.name.to_string()),
        extras: caps.and_then(|c| c.extras).map(str::to_string),
        url: url.to_string(),
    })
}

fn package(pkg: &str, loose: bool) -> Result<RequirementSource> {
    let Some(caps) = match_requirement(pkg) else {
        if !loose {
            return Err(ReqtxtError::invalid_requirement(pkg));
        }
        tracing::debug!(requirement = pkg, "Requirement grammar did not match");
        return Ok(RequirementSource::Package {
            package: None,
            extras: None,
            versions: None,
        });
    };

    Ok(RequirementSource::Package {
        package: Some(caps.name.to_string()),
        extras: caps.extras.map(str::to_string),
        versions: caps.version_list(),
    })
}

fn is_wheel_path(name: &str) -> bool {
    name.ends_with(".whl") && (name.starts_with('.') || name.starts_with('/'))
}
