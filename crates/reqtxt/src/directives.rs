//! Recognized requirements-file options and their argument counts.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A supported option and the exact number of arguments it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Flag token including leading dashes
    pub flag: &'static str,
    /// Required argument count
    pub arity: usize,
}

const fn directive(flag: &'static str, arity: usize) -> Directive {
    Directive { flag, arity }
}

/// All options accepted in strict mode, in declaration order.
pub const DIRECTIVES: &[Directive] = &[
    directive("-i", 1),
    directive("--index-url", 1),
    directive("--extra-index-url", 1),
    directive("--no-index", 0),
    directive("-c", 1),
    directive("--constraint", 1),
    directive("-r", 1),
    directive("--requirement", 1),
    directive("-e", 1),
    directive("--editable", 1),
    directive("-f", 1),
    directive("--find-links", 1),
    directive("--no-binary", 1),
    directive("--only-binary", 1),
    directive("--prefer-binary", 0),
    directive("--require-hashes", 0),
    directive("--pre", 0),
    directive("--trusted-host", 1),
    directive("--use-feature", 1),
];

static ARITIES: Lazy<HashMap<&'static str, usize>> =
    Lazy::new(|| DIRECTIVES.iter().map(|d| (d.flag, d.arity)).collect());

static SUPPORTED_FLAGS: Lazy<Vec<&'static str>> =
    Lazy::new(|| DIRECTIVES.iter().map(|d| d.flag).collect());

/// Returns the declared arity of `flag`, or `None` if it is not recognized.
///
/// # Examples
///
/// ```
/// use reqtxt::directives::arity;
///
/// assert_eq!(arity("--pre"), Some(0));
/// assert_eq!(arity("-i"), Some(1));
/// assert_eq!(arity("-x"), None);
/// ```
pub fn arity(flag: &str) -> Option<usize> {
    ARITIES.get(flag).copied()
}

/// Flag tokens accepted in strict mode, without arities.
pub fn supported_flags() -> &'static [&'static str] {
    &SUPPORTED_FLAGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_flags_match_table() {
        let flags = supported_flags();
        assert_eq!(flags.len(), DIRECTIVES.len());
        assert_eq!(flags[0], "-i");
        assert!(flags.contains(&"--extra-index-url"));
    }

    #[test]
    fn test_flags_are_unique() {
        let flags = supported_flags();
        let unique: std::collections::HashSet<_> = flags.iter().collect();
        assert_eq!(unique.len(), flags.len());
    }

    #[test]
    fn test_short_and_long_forms_agree() {
        for (short, long) in [
            ("-i", "--index-url"),
            ("-c", "--constraint"),
            ("-r", "--requirement"),
            ("-e", "--editable"),
            ("-f", "--find-links"),
        ] {
            assert_eq!(arity(short), arity(long), "{short} vs {long}");
        }
    }

    #[test]
    fn test_arity_is_exact_match() {
        assert_eq!(arity("--no-index"), Some(0));
        assert_eq!(arity("--NO-INDEX"), None);
        assert_eq!(arity("--index-url=https://pypi.org/simple"), None);
    }
}
