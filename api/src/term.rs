//! I define the [`Term`] type, representing an RDF term,
//! as well as the types of its three possible [kinds](TermKind):
//! [`Iri`], [`BlankNode`] and [`Literal`].
//!
//! Terms are plain values:
//! once built, they do not depend on the parser (or any other structure) that built them.
//!
//! # Example
//! ```
//! use trine_api::ns::xsd;
//! use trine_api::term::{Iri, Literal, Term, TermKind};
//!
//! let answer: Term = Literal::typed("42", Iri::new_unchecked(xsd::integer)).into();
//! assert_eq!(answer.kind(), TermKind::Literal);
//! assert_eq!(answer.to_string(), "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>");
//! ```
use std::fmt;

mod _iri;
pub use _iri::*;
mod _literal;
pub use _literal::*;
mod bnode_id;
pub use bnode_id::*;
mod language_tag;
pub use language_tag::*;

/// This type represents the different kinds of RDF terms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Term {
    /// An IRI
    Iri(Iri),
    /// A blank node
    BlankNode(BlankNode),
    /// A literal
    Literal(Literal),
}

impl Term {
    /// Return the kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Return true if this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Return true if this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Return true if this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Return the IRI of this term, if it is an IRI.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Return the blank node of this term, if it is a blank node.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(bn) => Some(bn),
            _ => None,
        }
    }

    /// Return the literal of this term, if it is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

/// Terms are displayed in N-Triples syntax.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "{iri}"),
            Term::BlankNode(bn) => write!(f, "{bn}"),
            Term::Literal(lit) => write!(f, "{lit}"),
        }
    }
}
