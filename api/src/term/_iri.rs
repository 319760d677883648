// this module is transparently re-exported by its parent `term`
use crate::iri::{is_absolute_iri_ref, InvalidIri};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// An absolute IRI, used as a [term](super::Term),
/// as the predicate of a [triple](crate::triple::Triple),
/// or as the datatype of a [literal](super::Literal).
///
/// Only the presence of a scheme is checked;
/// the characters of the IRI are not validated against RFC 3987.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Iri(Box<str>);

impl Iri {
    /// Build a new [`Iri`] from `iri`,
    /// returning an error if it is not absolute.
    pub fn new<T: Into<String>>(iri: T) -> Result<Self, InvalidIri> {
        let iri = iri.into();
        if is_absolute_iri_ref(&iri) {
            Ok(Iri(iri.into_boxed_str()))
        } else {
            Err(InvalidIri(iri))
        }
    }

    /// Build a new [`Iri`] from `iri`, without checking that it is absolute.
    pub fn new_unchecked<T: Into<String>>(iri: T) -> Self {
        let iri = iri.into();
        debug_assert!(is_absolute_iri_ref(&iri), "{iri:?} is not absolute");
        Iri(iri.into_boxed_str())
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

impl Deref for Iri {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}
