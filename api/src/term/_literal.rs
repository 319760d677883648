// this module is transparently re-exported by its parent `term`
use super::{Iri, LanguageTag};
use crate::ns::{rdf, xsd};
use std::fmt;

/// What completes the lexical form of a [`Literal`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum LiteralKind {
    /// A simple string, whose datatype is implicitly `xsd:string`
    Plain,
    /// A language-tagged string, whose datatype is implicitly `rdf:langString`
    LanguageTagged(LanguageTag),
    /// A literal with an explicit datatype (other than `xsd:string`)
    Typed(Iri),
}

/// An RDF literal: a lexical form,
/// plus either a language tag or a datatype.
///
/// The lexical form is kept as written (after unescaping);
/// no normalization of the value is performed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal {
    lexical: String,
    kind: LiteralKind,
}

impl Literal {
    /// Build a simple literal (datatype `xsd:string`).
    pub fn plain<T: Into<String>>(lexical: T) -> Self {
        Literal {
            lexical: lexical.into(),
            kind: LiteralKind::Plain,
        }
    }

    /// Build a language-tagged literal.
    pub fn lang_tagged<T: Into<String>>(lexical: T, tag: LanguageTag) -> Self {
        Literal {
            lexical: lexical.into(),
            kind: LiteralKind::LanguageTagged(tag),
        }
    }

    /// Build a typed literal.
    ///
    /// NB: an explicit `xsd:string` datatype yields a [plain](LiteralKind::Plain) literal,
    /// as both denote the same RDF term.
    pub fn typed<T: Into<String>>(lexical: T, datatype: Iri) -> Self {
        let kind = if datatype == xsd::string {
            LiteralKind::Plain
        } else {
            LiteralKind::Typed(datatype)
        };
        Literal {
            lexical: lexical.into(),
            kind,
        }
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// What completes the lexical form.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&LanguageTag> {
        match &self.kind {
            LiteralKind::LanguageTagged(tag) => Some(tag),
            _ => None,
        }
    }

    /// The datatype IRI of this literal (explicit or implicit).
    pub fn datatype(&self) -> &str {
        match &self.kind {
            LiteralKind::Plain => xsd::string,
            LiteralKind::LanguageTagged(_) => rdf::langString,
            LiteralKind::Typed(iri) => iri.as_str(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        match &self.kind {
            LiteralKind::Plain => Ok(()),
            LiteralKind::LanguageTagged(tag) => write!(f, "@{tag}"),
            LiteralKind::Typed(iri) => write!(f, "^^{iri}"),
        }
    }
}
