//! I define [`Token`], the unit produced by the [lexer](super::lexer).

use super::Location;
use std::fmt;
use trine_api::term::LanguageTag;

/// A token, with the location of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was read
    pub kind: TokenKind,
    /// Where it was read
    pub location: Location,
}

impl Token {
    /// Build a token
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Token { kind, location }
    }
}

/// The quoting style of a string literal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StringStyle {
    /// `"..."`
    ShortDouble,
    /// `'...'`
    ShortSingle,
    /// `"""..."""`
    LongDouble,
    /// `'''...'''`
    LongSingle,
}

/// The different kinds of [`Token`].
///
/// Textual payloads are already decoded (escapes are replaced),
/// except `%XX` sequences in local names, which are kept as is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// `<...>`, possibly relative
    IriRef(String),
    /// `prefix:` with nothing after the colon
    PnameNs(String),
    /// `prefix:local`
    PnameLn {
        /// The part before the colon
        prefix: String,
        /// The part after the colon
        local: String,
    },
    /// `_:label` (without `_:`)
    BlankNodeLabel(String),
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// A string literal
    String {
        /// The decoded value
        value: String,
        /// How it was quoted
        style: StringStyle,
    },
    /// `@tag` (without `@`)
    LangTag(LanguageTag),
    /// `^^`
    DatatypeMarker,
    /// Integer literal, as written
    Integer(String),
    /// Decimal literal, as written
    Decimal(String),
    /// Double literal, as written
    Double(String),
    /// `true` or `false`
    Boolean(bool),
    /// `a`
    KwA,
    /// `@prefix`
    AtPrefix,
    /// `@base`
    AtBase,
    /// `PREFIX`, in any case
    SparqlPrefix,
    /// `BASE`, in any case
    SparqlBase,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Whether this token ends the input.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        match self {
            IriRef(iri) => write!(f, "IRI <{iri}>"),
            PnameNs(prefix) => write!(f, "prefixed name '{prefix}:'"),
            PnameLn { prefix, local } => write!(f, "prefixed name '{prefix}:{local}'"),
            BlankNodeLabel(label) => write!(f, "blank node '_:{label}'"),
            LBracket => f.write_str("'['"),
            RBracket => f.write_str("']'"),
            LParen => f.write_str("'('"),
            RParen => f.write_str("')'"),
            Dot => f.write_str("'.'"),
            Semicolon => f.write_str("';'"),
            Comma => f.write_str("','"),
            String { value, .. } => write!(f, "string {value:?}"),
            LangTag(tag) => write!(f, "language tag '@{tag}'"),
            DatatypeMarker => f.write_str("'^^'"),
            Integer(n) | Decimal(n) | Double(n) => write!(f, "number {n}"),
            Boolean(b) => write!(f, "boolean {b}"),
            KwA => f.write_str("'a'"),
            AtPrefix => f.write_str("'@prefix'"),
            AtBase => f.write_str("'@base'"),
            SparqlPrefix => f.write_str("'PREFIX'"),
            SparqlBase => f.write_str("'BASE'"),
            Eof => f.write_str("end of input"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
