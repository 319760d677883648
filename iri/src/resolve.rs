//! Implementation of IRI resolution as per
//! [\[RFC 3986\] section 5.2](https://tools.ietf.org/html/rfc3986#section-5.2).
//!
//! This module is based on <https://docs.rs/oxiri/>.
//!
//! Only the caller-supplied base is validated, by [`BaseIri::new`].
//! References are resolved as they are:
//! checking their characters is the job of the syntax they come from.
//!
//! NB: compared to plain strings,
//! [`BaseIri`] is slower to build,
//! because it analyses the internal structure of the IRI,
//! in order to allow for efficient resolution of relative IRIs.

use super::error::InvalidIri;
use super::is_absolute_iri_ref;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

pub use oxiri::Iri as Oxiri;
pub use oxiri::IriParseError;

/// A `BaseIri` is an absolute IRI against which relative IRI references can be resolved.
/// It stores the internal structure of the IRI,
/// to allow for efficient resolution of relative IRIs against itself.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BaseIri(Oxiri<String>);

impl BaseIri {
    /// Creates a new `BaseIri` if `iri` is a valid absolute IRI,
    /// otherwise returns an [`InvalidIri`] error.
    pub fn new<T: Into<String>>(iri: T) -> Result<Self, InvalidIri> {
        let iri = iri.into();
        Oxiri::parse(iri.clone())
            .map(BaseIri)
            .map_err(|_| InvalidIri(iri))
    }

    /// Creates a new `BaseIri` without validating `iri`.
    ///
    /// # Precondition
    /// `iri` must be absolute (i.e. have a scheme).
    pub fn new_unchecked<T: Into<String>>(iri: T) -> Self {
        let iri = iri.into();
        debug_assert!(is_absolute_iri_ref(&iri), "{iri:?} is not absolute");
        BaseIri(Oxiri::parse_unchecked(iri))
    }

    /// Resolves `reference` against this `BaseIri`.
    ///
    /// A reference with a scheme is returned as is.
    pub fn resolve(&self, reference: &str) -> String {
        self.0.resolve_unchecked(reference).into_inner()
    }

    /// Resolves `reference` against this `BaseIri`, and use the result as a new `BaseIri`.
    pub fn join(&self, reference: &str) -> BaseIri {
        BaseIri(self.0.resolve_unchecked(reference))
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the wrapped string, consuming `self`.
    pub fn unwrap(self) -> String {
        self.0.into_inner()
    }
}

impl Borrow<str> for BaseIri {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for BaseIri {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for BaseIri {
    type Target = Oxiri<String>;
    fn deref(&self) -> &Oxiri<String> {
        &self.0
    }
}

impl fmt::Display for BaseIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

//

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::*;
    use test_case::test_case;

    #[test]
    fn resolve_relative() {
        let base = BaseIri::new("http://a/b/c/d;p?q").unwrap();
        for (rel, abs) in RELATIVE_IRIS {
            assert_eq!(&base.resolve(rel), abs, "<{rel}>");
        }
    }

    #[test]
    fn resolve_turtle_cases() {
        for (base, rel, abs) in TURTLE_RESOLUTION {
            let base = BaseIri::new(*base).unwrap();
            assert_eq!(&base.resolve(rel), abs, "<{rel}> against <{base}>");
        }
    }

    #[test]
    fn structure_of_base() {
        let base = BaseIri::new("http://a.example:8080/x/y?z#frag").unwrap();
        assert_eq!(base.scheme(), "http");
        assert_eq!(base.authority(), Some("a.example:8080"));
        assert_eq!(base.path(), "/x/y");
        assert_eq!(base.query(), Some("z"));
        assert_eq!(base.as_str(), "http://a.example:8080/x/y?z#frag");
        assert_eq!(base.to_string(), base.as_str());
    }

    #[test]
    fn join_replaces_base() {
        let base = BaseIri::new("http://a.example/foo/bar").unwrap();
        let base2 = base.join("../baz/");
        assert_eq!(base2.as_str(), "http://a.example/baz/");
        assert_eq!(base2.resolve("qux"), "http://a.example/baz/qux");
        assert_eq!(base2.join("#f").resolve("?q"), "http://a.example/baz/?q");
    }

    #[test]
    fn absolute_reference_is_returned_verbatim() {
        let base = BaseIri::new("http://a.example/").unwrap();
        let iri = "scheme:!$%25&amp;'()*+,-./0123456789:/@ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~?#";
        assert_eq!(base.resolve(iri), iri);
    }

    #[test]
    fn references_are_not_validated() {
        let base = BaseIri::new("http://a.example/").unwrap();
        assert_eq!(base.resolve("a%zz"), "http://a.example/a%zz");
        assert_eq!(base.resolve("caf\u{e9}"), "http://a.example/caf\u{e9}");
    }

    #[test_case("foo"; "relative")]
    #[test_case("http://a.example/ space"; "space")]
    #[test_case(""; "empty")]
    #[test_case("http://[/"; "bad ip literal")]
    fn bad_base(txt: &str) {
        assert_eq!(BaseIri::new(txt), Err(InvalidIri(txt.to_string())));
    }
}
