//! Typed parser for Python `requirements.txt` files.
//!
//! This crate turns requirements file text into a list of typed records so
//! tools can inspect or rewrite dependency declarations without handling the
//! format's quirks themselves.
//!
//! # Features
//!
//! - **Line Assembly**: Backslash continuations are joined into logical lines
//! - **Option Lines**: `-i`, `--extra-index-url`, `-r`, `--pre`, ... checked against a fixed arity table
//! - **Requirement Shapes**: plain packages, `name @ url`, bare URLs, and local wheel paths
//! - **Markers**: Environment markers after `;` are kept as opaque text
//! - **Strict and Loose Modes**: Fail fast on malformed lines, or extract what is there
//!
//! # Architecture
//!
//! - **Lines**: Continuation handling (`lines`)
//! - **Directives**: Static option table (`directives`)
//! - **Grammar**: Name/extras/version-clause extraction (`grammar`)
//! - **Parser**: Line classifier and file driver (`parser`)
//! - **Types**: `Record`, `CommandLineFlag`, `Requirement`, `RequirementSource`
//! - **Error Handling**: Typed errors with `thiserror`
//!
//! # Examples
//!
//! ```
//! use reqtxt::{RequirementSource, parse_file};
//!
//! let content = r#"
//! --index-url https://pypi.org/simple
//! flask[async]>=3.0,<4.0
//! mylib @ https://example.com/mylib-1.0-py3-none-any.whl ; python_version >= "3.10"
//! ./vendor/helper-0.1-py3-none-any.whl
//! "#;
//!
//! let records = parse_file(content, false).unwrap();
//! assert_eq!(records.len(), 4);
//!
//! let flask = records[1].as_requirement().unwrap();
//! assert_eq!(flask.package(), Some("flask"));
//! assert_eq!(flask.versions().unwrap(), &[">=3.0", "<4.0"]);
//!
//! let mylib = records[2].as_requirement().unwrap();
//! assert!(matches!(mylib.source, RequirementSource::PackageUrl { .. }));
//! assert_eq!(mylib.markers.as_deref(), Some(r#"python_version >= "3.10""#));
//! ```

pub mod directives;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod lines;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use directives::supported_flags;
pub use error::{ReqtxtError, Result};
pub use parser::{RequirementsParser, parse_file, parse_line};
pub use types::{CommandLineFlag, Record, Requirement, RequirementSource};
