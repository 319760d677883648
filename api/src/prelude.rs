//! General-use types and traits from the trine API.

pub use crate::parser::{Location, TripleParser};
pub use crate::source::{StreamError, TripleSource};
pub use crate::term::{BlankNode, Iri, LanguageTag, Literal, LiteralKind, Term, TermKind};
pub use crate::triple::{Subject, Triple};

pub use trine_iri::resolve::BaseIri;
