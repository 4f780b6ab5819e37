//! Version tags and ordering.
//!
//! Release tags arrive as free-form strings (`v1.2.0`, `skylark-1.2.0`).
//! [`Version::parse`] reduces them to their numeric fields, which then
//! compare as integer tuples rather than as strings.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is not an ASCII digit or a dot.
static NON_VERSION_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("NON_VERSION_CHARS must compile"));

/// A release version as a tuple of numeric fields.
///
/// Ordering is field-by-field numeric comparison with length as the
/// tiebreaker, so `10.0` sorts above `9.2` and `1.2.1` above `1.2`,
/// where a plain string comparison would misorder the former.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(Vec<u64>);

impl Version {
    /// Parse a version from a release tag.
    ///
    /// Everything other than digits and dots is stripped first, then the
    /// remaining dot-separated fields are parsed; empty fields are
    /// skipped. Returns `None` when nothing numeric remains.
    pub fn parse(tag: &str) -> Option<Self> {
        let cleaned = NON_VERSION_CHARS.replace_all(tag, "");
        let fields = cleaned
            .split('.')
            .filter(|field| !field.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
            .ok()?;

        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }

    /// The numeric fields of this version.
    pub fn fields(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_version() {
        assert_eq!(Version::parse("1.2.0").unwrap().fields(), &[1, 2, 0]);
    }

    #[test]
    fn parse_strips_tag_prefix() {
        assert_eq!(Version::parse("v1.2.0").unwrap().fields(), &[1, 2, 0]);
        assert_eq!(Version::parse("skylark-1.2.0").unwrap().fields(), &[1, 2, 0]);
    }

    #[test]
    fn parse_strips_prerelease_suffix() {
        assert_eq!(Version::parse("1.2.0-beta").unwrap().fields(), &[1, 2, 0]);
        assert_eq!(Version::parse("1.2.0-rc.1").unwrap().fields(), &[1, 2, 0, 1]);
    }

    #[test]
    fn parse_skips_empty_fields() {
        assert_eq!(Version::parse("1..2").unwrap().fields(), &[1, 2]);
    }

    #[test]
    fn parse_rejects_non_numeric_tags() {
        assert!(Version::parse("").is_none());
        assert!(Version::parse("latest").is_none());
        assert!(Version::parse("...").is_none());
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        // "10.0" < "9.2" as strings; the tuple ordering gets it right
        assert!(Version::parse("10.0").unwrap() > Version::parse("9.2").unwrap());
        assert!(Version::parse("0.10.0").unwrap() > Version::parse("0.9.9").unwrap());
    }

    #[test]
    fn ordering_major_minor_patch() {
        let parse = |s| Version::parse(s).unwrap();
        assert!(parse("2.0.0") > parse("1.9.9"));
        assert!(parse("1.2.0") > parse("1.1.99"));
        assert!(parse("1.0.5") > parse("1.0.4"));
        assert!(parse("1.0.4") < parse("1.0.5"));
    }

    #[test]
    fn ordering_equal_versions() {
        assert_eq!(Version::parse("1.2.0"), Version::parse("1.2.0"));
        assert!(Version::parse("1.2.0") <= Version::parse("1.2.0"));
    }

    #[test]
    fn longer_version_wins_on_equal_prefix() {
        assert!(Version::parse("1.2.1").unwrap() > Version::parse("1.2").unwrap());
        assert!(Version::parse("1.2.0").unwrap() > Version::parse("1.2").unwrap());
    }

    #[test]
    fn single_field_versions_compare() {
        assert!(Version::parse("2").unwrap() > Version::parse("1").unwrap());
        assert!(Version::parse("10").unwrap() > Version::parse("9").unwrap());
    }

    #[test]
    fn display_joins_fields_with_dots() {
        assert_eq!(Version::parse("v1.2.0").unwrap().to_string(), "1.2.0");
        assert_eq!(Version::parse("7").unwrap().to_string(), "7");
    }
}
