//! I define the [`BlankNode`] type and its identity [`BnodeId`].
//!
//! A blank node is identified either by a user-supplied label,
//! which must satisfy the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`),
//! or by a number allocated by the decoder for anonymous nodes.
//! The two spaces never overlap,
//! so a label `b1` in a document never denotes the first allocated node.
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle grammar](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e}+ [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// Check whether `label` satisfies Turtle's `BLANK_NODE_LABEL` rule (without the leading `_:`).
pub fn is_valid_bnode_label(label: &str) -> bool {
    BNODE_ID.is_match(label)
}

/// The identity of a [`BlankNode`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BnodeId {
    /// A label, as written in the document (without the leading `_:`)
    Label(String),
    /// A node allocated by the decoder (for `[]` and collections)
    Generated(usize),
}

/// An RDF blank node.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BlankNode(BnodeId);

impl BlankNode {
    /// Build a blank node with the given label,
    /// returning an error if it does not satisfy `BLANK_NODE_LABEL`.
    pub fn new_labeled<T: Into<String>>(label: T) -> Result<Self, InvalidBnodeId> {
        let label = label.into();
        if is_valid_bnode_label(&label) {
            Ok(BlankNode(BnodeId::Label(label)))
        } else {
            Err(InvalidBnodeId(label))
        }
    }

    /// Build a blank node with the given label, without checking it.
    pub fn new_labeled_unchecked<T: Into<String>>(label: T) -> Self {
        BlankNode(BnodeId::Label(label.into()))
    }

    /// Build the `n`-th blank node allocated by a decoder.
    pub fn generated(n: usize) -> Self {
        BlankNode(BnodeId::Generated(n))
    }

    /// The identity of this blank node.
    pub fn id(&self) -> &BnodeId {
        &self.0
    }

    /// Whether this blank node was allocated by a decoder.
    pub fn is_generated(&self) -> bool {
        matches!(self.0, BnodeId::Generated(_))
    }

    /// This blank node's identity, rendered as a label.
    ///
    /// User labels are returned verbatim,
    /// allocated nodes are rendered as `b<n>`.
    /// NB: distinct blank nodes may therefore have the same label.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.0 {
            BnodeId::Label(label) => Cow::Borrowed(label),
            BnodeId::Generated(n) => Cow::Owned(format!("b{n}")),
        }
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.label())
    }
}

/// This error is raised when trying to build a blank node with an invalid label.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBnodeId(pub String);
