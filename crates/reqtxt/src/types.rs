use crate::error::{ReqtxtError, Result};
use pep440_rs::VersionSpecifier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One classified line of a requirements file.
///
/// Serialized with a `type` discriminant so downstream consumers can
/// dispatch without matching on Rust enum names.
///
/// # Examples
///
/// ```
/// use reqtxt::types::{CommandLineFlag, Record};
///
/// let record = Record::CommandLineFlag(CommandLineFlag {
///     flag: "--pre".into(),
///     args: vec![],
/// });
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["type"], "CommandLineFlag");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Record {
    /// Option line such as `-i https://pypi.org/simple` or `--pre`
    CommandLineFlag(CommandLineFlag),
    /// Dependency declaration
    Requirement(Requirement),
}

impl Record {
    /// Returns the option payload if this record is a command-line flag.
    pub fn as_flag(&self) -> Option<&CommandLineFlag> {
        match self {
            Self::CommandLineFlag(flag) => Some(flag),
            Self::Requirement(_) => None,
        }
    }

    /// Returns the requirement payload if this record is a dependency.
    pub fn as_requirement(&self) -> Option<&Requirement> {
        match self {
            Self::Requirement(req) => Some(req),
            Self::CommandLineFlag(_) => None,
        }
    }
}

/// Option line: the flag token as written and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLineFlag {
    /// Flag token including leading dashes (e.g., "-i", "--pre")
    pub flag: String,
    /// Arguments following the flag, split on single spaces
    pub args: Vec<String>,
}

/// Dependency declaration with optional environment markers.
///
/// # Examples
///
/// ```
/// use reqtxt::types::{Requirement, RequirementSource};
///
/// let req = Requirement {
///     markers: Some("python_version<\"3.8\"".into()),
///     source: RequirementSource::Path {
///         path: "./dist/pkg-1.0-py3-none-any.whl".into(),
///     },
/// };
///
/// assert_eq!(req.subtype(), "Path");
/// assert!(req.package().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Opaque PEP 508 marker expression following the first `;`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<String>,
    /// Shape of the requirement and the fields valid for that shape
    #[serde(flatten)]
    pub source: RequirementSource,
}

/// The four mutually exclusive requirement shapes.
///
/// `package`, `extras`, and `versions` are optional because lenient parsing
/// leaves them unset when the grammar does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "subtype")]
pub enum RequirementSource {
    /// Package name with optional extras and version constraints
    Package {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        package: Option<String>,
        /// Raw text between `[` and `]`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extras: Option<String>,
        /// Individual constraints such as `>=1.0`, in source order
        #[serde(default, skip_serializing_if = "Option::is_none")]
        versions: Option<Vec<String>>,
    },
    /// `name[extras] @ url`
    #[serde(rename = "PackageURL")]
    PackageUrl {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        package: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extras: Option<String>,
        url: String,
    },
    /// Bare URL
    #[serde(rename = "URL")]
    Url { url: String },
    /// Relative or absolute path to a local wheel
    Path { path: String },
}

impl Requirement {
    /// Subtype discriminant as it appears in serialized output.
    pub fn subtype(&self) -> &'static str {
        match self.source {
            RequirementSource::Package { .. } => "Package",
            RequirementSource::PackageUrl { .. } => "PackageURL",
            RequirementSource::Url { .. } => "URL",
            RequirementSource::Path { .. } => "Path",
        }
    }

    pub fn package(&self) -> Option<&str> {
        match &self.source {
            RequirementSource::Package { package, .. }
            | RequirementSource::PackageUrl { package, .. } => package.as_deref(),
            _ => None,
        }
    }

    pub fn extras(&self) -> Option<&str> {
        match &self.source {
            RequirementSource::Package { extras, .. }
            | RequirementSource::PackageUrl { extras, .. } => extras.as_deref(),
            _ => None,
        }
    }

    pub fn versions(&self) -> Option<&[String]> {
        match &self.source {
            RequirementSource::Package { versions, .. } => versions.as_deref(),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.source {
            RequirementSource::PackageUrl { url, .. } | RequirementSource::Url { url } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match &self.source {
            RequirementSource::Path { path } => Some(path.as_str()),
            _ => None,
        }
    }

    /// Parses the stored version constraints as PEP 440 specifiers.
    ///
    /// Returns an empty list when the requirement has no constraints.
    /// Fails on the first constraint that is not a valid specifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtxt::parser::parse_line;
    ///
    /// let record = parse_line("requests>=2.28,<3.0", false).unwrap().unwrap();
    /// let req = record.as_requirement().unwrap();
    /// let specs = req.version_specifiers().unwrap();
    /// assert_eq!(specs.len(), 2);
    /// ```
    pub fn version_specifiers(&self) -> Result<Vec<VersionSpecifier>> {
        let Some(versions) = self.versions() else {
            return Ok(Vec::new());
        };

        versions
            .iter()
            .map(|spec| {
                VersionSpecifier::from_str(spec)
                    .map_err(|e| ReqtxtError::invalid_version_specifier(spec, e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, versions: &[&str]) -> Requirement {
        Requirement {
            markers: None,
            source: RequirementSource::Package {
                package: Some(name.into()),
                extras: None,
                versions: Some(versions.iter().map(|v| (*v).to_string()).collect()),
            },
        }
    }

    #[test]
    fn test_record_accessors() {
        let flag = Record::CommandLineFlag(CommandLineFlag {
            flag: "-r".into(),
            args: vec!["base.txt".into()],
        });
        assert!(flag.as_flag().is_some());
        assert!(flag.as_requirement().is_none());

        let req = Record::Requirement(package("flask", &[">=3.0"]));
        assert!(req.as_flag().is_none());
        assert_eq!(req.as_requirement().unwrap().package(), Some("flask"));
    }

    #[test]
    fn test_subtype_names() {
        let url = Requirement {
            markers: None,
            source: RequirementSource::Url {
                url: "https://example.com/pkg.whl".into(),
            },
        };
        let package_url = Requirement {
            markers: None,
            source: RequirementSource::PackageUrl {
                package: Some("pkg".into()),
                extras: None,
                url: "https://example.com/pkg.whl".into(),
            },
        };

        assert_eq!(package("pkg", &[]).subtype(), "Package");
        assert_eq!(package_url.subtype(), "PackageURL");
        assert_eq!(url.subtype(), "URL");
        assert_eq!(url.url(), Some("https://example.com/pkg.whl"));
        assert!(url.versions().is_none());
        assert_eq!(package_url.package(), Some("pkg"));
        assert_eq!(package_url.url(), Some("https://example.com/pkg.whl"));
    }

    #[test]
    fn test_serialize_package_omits_absent_fields() {
        let record = Record::Requirement(package("pkg", &["==1.0.0"]));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["type"], "Requirement");
        assert_eq!(json["subtype"], "Package");
        assert_eq!(json["package"], "pkg");
        assert_eq!(json["versions"], serde_json::json!(["==1.0.0"]));
        assert!(json.get("extras").is_none());
        assert!(json.get("markers").is_none());
    }

    #[test]
    fn test_serialize_package_url_tag() {
        let record = Record::Requirement(Requirement {
            markers: Some("sys_platform == 'linux'".into()),
            source: RequirementSource::PackageUrl {
                package: Some("pkg".into()),
                extras: Some("cli".into()),
                url: "https://example.com/pkg.whl".into(),
            },
        });
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["subtype"], "PackageURL");
        assert_eq!(json["extras"], "cli");
        assert_eq!(json["markers"], "sys_platform == 'linux'");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let json = r#"{"type":"Requirement","subtype":"Path","path":"/tmp/pkg.whl"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.as_requirement().unwrap().path(), Some("/tmp/pkg.whl"));
    }

    #[test]
    fn test_version_specifiers() {
        let req = package("requests", &[">=2.28.0", "<3.0"]);
        let specs = req.version_specifiers().unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].to_string(), ">=2.28.0");
    }

    #[test]
    fn test_version_specifiers_empty() {
        let req = Requirement {
            markers: None,
            source: RequirementSource::Package {
                package: Some("requests".into()),
                extras: None,
                versions: None,
            },
        };
        assert!(req.version_specifiers().unwrap().is_empty());
    }

    #[test]
    fn test_version_specifiers_invalid() {
        let req = package("requests", &[">=not a version"]);
        let err = req.version_specifiers().unwrap_err();
        assert!(matches!(err, ReqtxtError::InvalidVersionSpecifier { .. }));
    }
}
