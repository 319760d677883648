//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! You can think of a triple as a sentence of the form
//! "subject verb complement"
//! (although the *predicate* is often better expressed as a relationship than a verb).
//! Examples :
//!
//! * John is a person.
//! * John was born in Paris.
//! * John knows Jane.
//! * John's family name is "Doe".
//!
//! In RDF, the subject of a triple is an IRI or a blank node,
//! its predicate is an IRI,
//! and its object can be any [term](crate::term::Term).
//! This is enforced by the types of [`Triple`]'s fields.

use crate::term::{BlankNode, Iri, Term};
use std::collections::HashMap;
use std::fmt;

/// The subject of a [`Triple`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Subject {
    /// An IRI
    Iri(Iri),
    /// A blank node
    BlankNode(BlankNode),
}

impl Subject {
    /// Return the IRI of this subject, if it is an IRI.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Subject::Iri(iri) => Some(iri),
            Subject::BlankNode(_) => None,
        }
    }

    /// Return the blank node of this subject, if it is a blank node.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Subject::Iri(_) => None,
            Subject::BlankNode(bn) => Some(bn),
        }
    }
}

impl From<Iri> for Subject {
    fn from(value: Iri) -> Self {
        Subject::Iri(value)
    }
}

impl From<BlankNode> for Subject {
    fn from(value: BlankNode) -> Self {
        Subject::BlankNode(value)
    }
}

impl From<Subject> for Term {
    fn from(value: Subject) -> Self {
        match value {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::BlankNode(bn) => Term::BlankNode(bn),
        }
    }
}

/// Literals can not be subjects; the failed conversion gives the term back.
impl TryFrom<Term> for Subject {
    type Error = Term;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::Iri(iri) => Ok(Subject::Iri(iri)),
            Term::BlankNode(bn) => Ok(Subject::BlankNode(bn)),
            lit => Err(lit),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Iri(iri) => write!(f, "{iri}"),
            Subject::BlankNode(bn) => write!(f, "{bn}"),
        }
    }
}

/// An RDF triple.
///
/// Triples are displayed as N-Triples statements.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Triple {
    /// The subject of this triple
    pub subject: Subject,
    /// The predicate of this triple
    pub predicate: Iri,
    /// The object of this triple
    pub object: Term,
}

impl Triple {
    /// Build a new triple.
    pub fn new<S, O>(subject: S, predicate: Iri, object: O) -> Self
    where
        S: Into<Subject>,
        O: Into<Term>,
    {
        Triple {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Subject {
        &self.subject
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Iri {
        &self.predicate
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.object
    }

    /// Whether `a` and `b` contain the same triples in the same order,
    /// up to a consistent one-to-one renaming of blank nodes.
    pub fn is_isomorphic_sequence(a: &[Triple], b: &[Triple]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut renaming = BnodeRenaming::default();
        a.iter().zip(b).all(|(ta, tb)| {
            ta.predicate == tb.predicate
                && renaming.subjects_match(&ta.subject, &tb.subject)
                && renaming.terms_match(&ta.object, &tb.object)
        })
    }
}

impl<S, O> From<(S, Iri, O)> for Triple
where
    S: Into<Subject>,
    O: Into<Term>,
{
    fn from((s, p, o): (S, Iri, O)) -> Self {
        Triple::new(s, p, o)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[derive(Default)]
struct BnodeRenaming<'a> {
    forward: HashMap<&'a BlankNode, &'a BlankNode>,
    backward: HashMap<&'a BlankNode, &'a BlankNode>,
}

impl<'a> BnodeRenaming<'a> {
    fn bnodes_match(&mut self, a: &'a BlankNode, b: &'a BlankNode) -> bool {
        let known = (self.forward.get(a).copied(), self.backward.get(b).copied());
        match known {
            (None, None) => {
                self.forward.insert(a, b);
                self.backward.insert(b, a);
                true
            }
            (Some(fa), Some(fb)) => fa == b && fb == a,
            _ => false,
        }
    }

    fn subjects_match(&mut self, a: &'a Subject, b: &'a Subject) -> bool {
        match (a, b) {
            (Subject::Iri(ia), Subject::Iri(ib)) => ia == ib,
            (Subject::BlankNode(ba), Subject::BlankNode(bb)) => self.bnodes_match(ba, bb),
            _ => false,
        }
    }

    fn terms_match(&mut self, a: &'a Term, b: &'a Term) -> bool {
        match (a, b) {
            (Term::BlankNode(ba), Term::BlankNode(bb)) => self.bnodes_match(ba, bb),
            _ => a == b,
        }
    }
}
