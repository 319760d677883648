//! Turtle uses prefixes to shorten IRIs.
//! This module provides a wrapper type guaranteeing that a `str` is a valid prefix,
//! i.e. that it matches `PN_PREFIX?` (the empty prefix is valid).
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

lazy_static::lazy_static! {
    /// Match a non-empty prefix.
    pub(crate) static ref PN_PREFIX: Regex = Regex::new(r"(?x)^
        # PN_CHAR_BASE
        [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}]
        (
            # [ PN_CHARS | '.' ]*
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}.-]*
            # PN_CHARS
            [A-Za-z\u{00C0}-\u{00D6}\u{00D8}-\u{00F6}\u{00F8}-\u{02FF}\u{0370}-\u{037D}\u{037F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}-]
        )?
    $").unwrap();
}

/// Check whether a `str` is a valid Turtle prefix (matches `PN_PREFIX?`)
pub fn is_valid_prefix(txt: &str) -> bool {
    txt.is_empty() || PN_PREFIX.is_match(txt)
}

/// A string satisfying the `PN_PREFIX?` rule in Turtle (without the trailing `:`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Prefix(Box<str>);

impl Prefix {
    /// Build new `Prefix` from `prefix`, checking that it is valid.
    pub fn new<T: Into<String>>(prefix: T) -> Result<Self, InvalidPrefix> {
        let prefix = prefix.into();
        if is_valid_prefix(&prefix) {
            Ok(Prefix(prefix.into_boxed_str()))
        } else {
            Err(InvalidPrefix(prefix))
        }
    }

    /// Build new `Prefix` from trusted `prefix`
    pub fn new_unchecked<T: Into<String>>(prefix: T) -> Self {
        Prefix(prefix.into().into_boxed_str())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the wrapped value, consuming `self`.
    pub fn unwrap(self) -> String {
        self.0.into()
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Prefix {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for Prefix {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Prefix {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// This error is raised when trying to parse an invalid prefix.
#[derive(Debug, Error)]
#[error("The given prefix '{0}' does not match PN_PREFIX?")]
pub struct InvalidPrefix(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("a" ; "single letter")]
    #[test_case("foo" ; "multiple letters")]
    #[test_case("a.b" ; "dot in the middle")]
    #[test_case("a-b_c" ; "dash and underscore")]
    #[test_case("\u{00E9}t\u{00E9}" ; "non ascii")]
    fn valid(txt: &str) {
        assert!(is_valid_prefix(txt));
        assert_eq!(Prefix::new(txt).unwrap().as_str(), txt);
    }

    #[test_case("a." ; "trailing dot")]
    #[test_case(".a" ; "leading dot")]
    #[test_case("_a" ; "leading underscore")]
    #[test_case("1a" ; "leading digit")]
    #[test_case("a:b" ; "colon")]
    #[test_case("a b" ; "space")]
    fn invalid(txt: &str) {
        assert!(!is_valid_prefix(txt));
        assert!(Prefix::new(txt).is_err());
    }
}
