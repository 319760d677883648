//! Regular expression recognizing absolute IRI references.
//!
//! This module is transparently re-exported by its parent module.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Match the scheme of an IRI reference
    /// ([RFC 3986 section 3.1](https://tools.ietf.org/html/rfc3986#section-3.1)),
    /// i.e. match only absolute IRI references.
    ///
    /// This regex only looks at the scheme: it is not meant to validate the rest of the IRI.
    pub(crate) static ref IRI_SCHEME: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap();
}

/// Check whether `txt` is an absolute IRI reference,
/// i.e. whether it starts with a scheme.
///
/// This only checks the structure of `txt`,
/// not that every character is allowed by RFC 3987.
pub fn is_absolute_iri_ref(txt: &str) -> bool {
    IRI_SCHEME.is_match(txt)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/", true; "http")]
    #[test_case("urn:isbn:0451450523", true; "urn")]
    #[test_case("scheme:!$%25&amp;'()*+,-./0123456789:/@ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~?#", true; "all punctuation")]
    #[test_case("tag:", true; "empty path")]
    #[test_case("", false; "empty")]
    #[test_case("s", false; "path only")]
    #[test_case("//a.example/s", false; "network path")]
    #[test_case("#frag", false; "fragment only")]
    #[test_case("?a:b", false; "colon in query")]
    #[test_case("1a:b", false; "scheme starting with digit")]
    #[test_case("a/b:c", false; "colon after slash")]
    #[test_case(":x", false; "empty scheme")]
    fn absolute(txt: &str, expected: bool) {
        assert_eq!(is_absolute_iri_ref(txt), expected);
    }
}
