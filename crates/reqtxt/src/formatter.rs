//! Textual reconstruction of parsed records.
//!
//! The output is a canonical requirements line: re-parsing it yields an
//! equivalent record whenever the original fields are unambiguous.

use crate::types::{CommandLineFlag, Record, Requirement, RequirementSource};
use std::fmt;

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLineFlag(flag) => fmt::Display::fmt(flag, f),
            Self::Requirement(req) => fmt::Display::fmt(req, f),
        }
    }
}

impl fmt::Display for CommandLineFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flag)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)?;
        if let Some(markers) = &self.markers {
            write!(f, "; {markers}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RequirementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package {
                package,
                extras,
                versions,
            } => {
                write_name(f, package.as_deref(), extras.as_deref())?;
                if let Some(versions) = versions {
                    f.write_str(&versions.join(","))?;
                }
                Ok(())
            }
            Self::PackageUrl {
                package,
                extras,
                url,
            } => {
                write_name(f, package.as_deref(), extras.as_deref())?;
                write!(f, " @ {url}")
            }
            Self::Url { url } => f.write_str(url),
            Self::Path { path } => f.write_str(path),
        }
    }
}

fn write_name(
    f: &mut fmt::Formatter<'_>,
    package: Option<&str>,
    extras: Option<&str>,
) -> fmt::Result {
    if let Some(package) = package {
        f.write_str(package)?;
    }
    if let Some(extras) = extras {
        write!(f, "[{extras}]")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_line;

    fn reparse(line: &str) {
        let first = parse_line(line, false).unwrap().unwrap();
        let text = first.to_string();
        let second = parse_line(&text, false).unwrap().unwrap();
        assert_eq!(first, second, "{line} -> {text}");
    }

    #[test]
    fn test_format_flag() {
        let record = parse_line("-i https://pypi.org/simple", false).unwrap().unwrap();
        assert_eq!(record.to_string(), "-i https://pypi.org/simple");

        let record = parse_line("--pre", false).unwrap().unwrap();
        assert_eq!(record.to_string(), "--pre");
    }

    #[test]
    fn test_format_package() {
        let record = parse_line("pkg[a,b]>= 1.0 , <2.0 ; os_name == 'nt'", false)
            .unwrap()
            .unwrap();
        assert_eq!(record.to_string(), "pkg[a,b]>= 1.0,<2.0; os_name == 'nt'");

        let record = parse_line("pkg[a,b] >= 1.0 ; os_name == 'nt'", false)
            .unwrap()
            .unwrap();
        assert_eq!(record.to_string(), "pkg[a,b]; os_name == 'nt'");
    }

    #[test]
    fn test_format_package_url() {
        let record = parse_line("pkg[cli]@https://example.com/pkg.whl", false)
            .unwrap()
            .unwrap();
        assert_eq!(record.to_string(), "pkg[cli] @ https://example.com/pkg.whl");
    }

    #[test]
    fn test_reparse_is_stable() {
        for line in [
            "-r base.txt",
            "--no-index",
            "pkg",
            "pkg==1.0.0",
            "pkg[extra1,extra2]>=1.0,<2.0",
            r#"pkg~=1.4; python_version<"3.8""#,
            "pkg @ https://example.com/pkg.whl",
            "pkg[x] @ https://example.com/pkg.whl; sys_platform == 'linux'",
            "https://example.com/pkg.whl",
            "./local/pkg.whl",
            "/abs/pkg.whl ; os_name == 'posix'",
        ] {
            reparse(line);
        }
    }
}
