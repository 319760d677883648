//! I define [`Error`].

use super::Location;
use std::fmt;
use trine_api::parser::WithLocation;

/// Decoding error, capturing the location in the input where the error was encountered.
#[derive(thiserror::Error, Debug)]
#[error("{location}: {kind}")]
pub struct Error {
    kind: ErrorKind,
    location: Location,
}

impl Error {
    /// Construct an [`Error`]
    pub fn new<E: Into<ErrorKind>>(err: E, location: Location) -> Self {
        Error {
            kind: err.into(),
            location,
        }
    }

    /// Return the [kind][`ErrorKind`]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the [kind][`ErrorKind`], consuming `self`.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Return the location in the input.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Return the category of this error.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Whether this is a malformed token.
    pub fn is_lexical(&self) -> bool {
        self.category() == ErrorCategory::Lexical
    }

    /// Whether this is a well-formed token in the wrong place.
    pub fn is_syntactic(&self) -> bool {
        self.category() == ErrorCategory::Syntactic
    }

    /// Display this error with context (typically a file name).
    pub fn in_context(&self, context: &str) -> String {
        format!("{context}:{self}")
    }
}

impl WithLocation for Error {
    fn location(&self) -> Location {
        self.location
    }
}

/// The two families of [`ErrorKind`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    /// A malformed token (bad escape, unterminated literal, illegal character...)
    Lexical,
    /// A sequence of tokens violating the grammar
    Syntactic,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Lexical => f.write_str("lexical error"),
            ErrorCategory::Syntactic => f.write_str("syntax error"),
        }
    }
}

/// Kind of [decoding errors][`Error`]
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    // lexical errors
    /// Space in an IRI reference
    #[error("bad IRI: space")]
    IriSpace,
    /// Malformed numeric escape in an IRI reference
    #[error("bad IRI: bad escape")]
    IriBadEscape,
    /// Escape other than `\u` or `\U` in an IRI reference
    #[error("bad IRI: character escapes not allowed")]
    IriCharEscape,
    /// Character forbidden by the `IRIREF` rule
    #[error("bad IRI: character {0:?} not allowed")]
    IriChar(char),
    /// End of input in an IRI reference
    #[error("bad IRI: unterminated")]
    IriUnterminated,
    /// Invalid escape sequence in a string
    #[error("bad string escape")]
    StringBadEscape,
    /// End of input, or line break, in a short string
    #[error("unterminated string literal")]
    StringUnterminated,
    /// End of input in a long string
    #[error("unterminated long string literal")]
    LongStringUnterminated,
    /// Malformed language tag
    #[error("bad language tag")]
    LangTag,
    /// Malformed numeric literal
    #[error("bad number format")]
    Number,
    /// Prefix ending with a '.'
    #[error("prefix must not end in dot")]
    PrefixEndsInDot,
    /// Local name starting with a '-'
    #[error("local name must not begin with dash")]
    LocalStartsWithDash,
    /// Malformed `%` sequence in a local name
    #[error("bad hex escape in local name")]
    LocalBadHexEscape,
    /// Invalid `\` sequence in a local name
    #[error("bad escape in local name")]
    LocalBadEscape,
    /// Malformed blank node label
    #[error("bad blank node label")]
    BnodeLabel,
    /// Character that can not start any token
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    /// Bare word other than `a`, `true`, `false`, `PREFIX` and `BASE`
    #[error("unknown keyword '{0}'")]
    UnknownKeyword(String),
    /// The input is not valid UTF-8
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // syntactic errors
    /// Statement not terminated by a '.'
    #[error("missing '.'")]
    MissingDot,
    /// Token not allowed at this point
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Description of the token found
        found: String,
        /// Description of what was expected
        expected: &'static str,
    },
    /// Term not allowed as a subject
    #[error("{0} cannot be used as subject")]
    NotASubject(&'static str),
    /// Term not allowed as a predicate
    #[error("{0} cannot be used as predicate")]
    NotAPredicate(&'static str),
    /// `a` used as an object
    #[error("'a' cannot be used as object")]
    AAsObject,
    /// Use of a prefix that was never declared
    #[error("undeclared prefix '{0}:'")]
    UndeclaredPrefix(String),
    /// `@prefix` or `PREFIX` not followed by a prefix name
    #[error("directive missing prefix name")]
    DirectiveMissingPrefix,
    /// `@prefix`, `PREFIX`, `@base` or `BASE` not followed by an IRI
    #[error("directive missing IRI")]
    DirectiveMissingIri,
    /// `@prefix` or `@base` not in lowercase
    #[error("@{0} in wrong case")]
    DirectiveWrongCase(&'static str),
    /// Relative IRI reference while no base IRI is known
    #[error("relative IRI reference without base: <{0}>")]
    RelativeIriWithoutBase(String),
    /// Literal with both a language tag and a datatype
    #[error("literal cannot have both a language tag and a datatype")]
    LangAndDatatype,
    /// Blank node property lists and collections nested too deeply
    #[error("nesting too deep (more than {0} levels)")]
    TooDeep(usize),
}

impl ErrorKind {
    /// Return the category of this kind of error.
    pub fn category(&self) -> ErrorCategory {
        use ErrorKind::*;
        match self {
            IriSpace
            | IriBadEscape
            | IriCharEscape
            | IriChar(_)
            | IriUnterminated
            | StringBadEscape
            | StringUnterminated
            | LongStringUnterminated
            | LangTag
            | Number
            | PrefixEndsInDot
            | LocalStartsWithDash
            | LocalBadHexEscape
            | LocalBadEscape
            | BnodeLabel
            | UnexpectedChar(_)
            | UnknownKeyword(_)
            | InvalidUtf8
            | Io(_) => ErrorCategory::Lexical,
            MissingDot
            | UnexpectedToken { .. }
            | NotASubject(_)
            | NotAPredicate(_)
            | AAsObject
            | UndeclaredPrefix(_)
            | DirectiveMissingPrefix
            | DirectiveMissingIri
            | DirectiveWrongCase(_)
            | RelativeIriWithoutBase(_)
            | LangAndDatatype
            | TooDeep(_) => ErrorCategory::Syntactic,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = Error::new(ErrorKind::IriSpace, Location::new(2, 7, 30));
        assert_eq!(err.to_string(), "2:7: bad IRI: space");
        assert_eq!(err.in_context("doc.ttl"), "doc.ttl:2:7: bad IRI: space");
        let err = Error::new(ErrorKind::DirectiveWrongCase("base"), Location::START);
        assert_eq!(err.to_string(), "1:1: @base in wrong case");
    }

    #[test]
    fn categories() {
        assert!(Error::new(ErrorKind::Number, Location::START).is_lexical());
        assert!(Error::new(ErrorKind::MissingDot, Location::START).is_syntactic());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(ErrorKind::from(io).category(), ErrorCategory::Lexical);
    }
}
