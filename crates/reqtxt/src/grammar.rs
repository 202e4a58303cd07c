//! Extraction grammars for package expressions.
//!
//! Both grammars are anchored at the start of the expression only; trailing
//! text the grammar does not describe is ignored rather than rejected.

use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[A-Za-z_.\-]+)(?:\[(?P<extras>[^\]]*)\])?").unwrap()
});

static REQUIREMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z_.\-]+)(?:\[(?P<extras>[^\]]*)\])?(?P<versions>(?:==|~=|!=|<=|>=|<|>)[^;]*)?",
    )
    .unwrap()
});

/// Named captures from a successful grammar match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCaptures<'a> {
    pub name: &'a str,
    /// Raw text between the brackets, unsplit
    pub extras: Option<&'a str>,
    /// Raw version clause starting with its first operator
    pub versions: Option<&'a str>,
}

impl PackageCaptures<'_> {
    /// Splits the version clause into trimmed constraints.
    pub fn version_list(&self) -> Option<Vec<String>> {
        self.versions
            .map(|clause| clause.split(',').map(|v| v.trim().to_string()).collect())
    }
}

/// Name and optional extras, no version suffix.
///
/// Used for the left-hand side of `name[extras] @ url`.
pub fn match_package(expr: &str) -> Option<PackageCaptures<'_>> {
    let caps = PACKAGE_PATTERN.captures(expr)?;
    Some(PackageCaptures {
        name: caps.name("name")?.as_str(),
        extras: caps.name("extras").map(|m| m.as_str()),
        versions: None,
    })
}

/// Name, optional extras, and an optional version clause.
///
/// # Examples
///
/// ```
/// use reqtxt::grammar::match_requirement;
///
/// let caps = match_requirement("pkg[a,b]>=1.0,<2.0").unwrap();
/// assert_eq!(caps.name, "pkg");
/// assert_eq!(caps.extras, Some("a,b"));
/// assert_eq!(caps.versions, Some(">=1.0,<2.0"));
/// ```
pub fn match_requirement(expr: &str) -> Option<PackageCaptures<'_>> {
    let caps = REQUIREMENT_PATTERN.captures(expr)?;
    Some(PackageCaptures {
        name: caps.name("name")?.as_str(),
        extras: caps.name("extras").map(|m| m.as_str()),
        versions: caps.name("versions").map(|m| m.as_str()),
    })
}
