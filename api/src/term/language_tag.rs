//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `LANGTAG` rule of [Turtle](https://www.w3.org/TR/turtle/#grammar-production-LANGTAG)
//! (without the leading `@`).

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use thiserror::Error;

lazy_static! {
    static ref LANG_TAG: Regex = Regex::new(r"^[a-zA-Z]+(-[a-zA-Z0-9]+)*$").unwrap();
}

/// This wrapper guarantees that the underlying `str`
/// is a syntactically valid language tag.
///
/// NB: it is more permissive than BCP47,
/// as it does not check that the different subtags are registered (language, country...) codes.
///
/// Language tags are compared case-insensitively,
/// but keep the case they were written with.
///
/// ```
/// # use trine_api::term::LanguageTag;
/// let t1 = LanguageTag::new("en-US").unwrap();
/// let t2 = LanguageTag::new("en-us").unwrap();
/// assert_eq!(t1, t2);
/// assert_eq!(t1.as_str(), "en-US");
/// ```
#[derive(Clone, Debug)]
pub struct LanguageTag(Box<str>);

impl LanguageTag {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a valid language tag.
    pub fn new<T: Into<String>>(tag: T) -> Result<Self, InvalidLanguageTag> {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag.into_boxed_str()))
        } else {
            Err(InvalidLanguageTag(tag))
        }
    }

    /// Build a new [`LanguageTag`] from `tag`, without checking it.
    pub fn new_unchecked<T: Into<String>>(tag: T) -> Self {
        let tag = tag.into();
        debug_assert!(LANG_TAG.is_match(&tag), "{tag:?} is not a language tag");
        LanguageTag(tag.into_boxed_str())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for LanguageTag {}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state)
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Debug, Error)]
#[error("The given language tag '{0}' does not comply with LANGTAG")]
pub struct InvalidLanguageTag(pub String);
