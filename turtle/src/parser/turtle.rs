//! A streaming Turtle parser.
//!
//! Each statement of the document is parsed as a whole,
//! and the triples it produces are queued,
//! then handed out one at a time.
//!
//! # Example
//! ```
//! use trine_api::prelude::*;
//! use trine_turtle::parser::turtle::TurtleParser;
//!
//! let parser = TurtleParser::new()
//!     .with_base("http://example.org/doc")?
//!     .with_prefix("foaf", "http://xmlns.com/foaf/0.1/")?;
//! let mut triples = parser.parse_str("<#me> foaf:name 'Alice' .");
//! let t = triples.decode_next()?.unwrap();
//! assert_eq!(t.s().as_iri().unwrap(), "http://example.org/doc#me");
//! assert_eq!(t.p(), "http://xmlns.com/foaf/0.1/name");
//! assert!(triples.decode_next()?.is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use super::lexer::Lexer;
use super::state::DocumentState;
use super::token::Token;
use super::{Error, Location};
use std::collections::{HashMap, VecDeque};
use std::io::BufRead;
use trine_api::parser::TripleParser;
use trine_api::prefix::{InvalidPrefix, Prefix};
use trine_api::term::Iri;
use trine_api::triple::Triple;
use trine_iri::resolve::BaseIri;
use trine_iri::InvalidIri;

mod _statement;


/// Default value of [`TurtleParser::max_depth`].
///
/// Documents nested this deep can be decoded on a thread with the default stack size,
/// even in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Turtle parser.
///
/// The public fields are the initial state of every document parsed by this parser.
#[derive(Clone, Debug)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<BaseIri>,
    /// Prefixes known before the first directive of the document.
    pub prefixes: HashMap<Prefix, Iri>,
    /// How deeply blank node property lists and collections may be nested.
    pub max_depth: usize,
}

impl Default for TurtleParser {
    fn default() -> Self {
        TurtleParser {
            base: None,
            prefixes: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TurtleParser {
    /// A parser with no base IRI and no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base IRI, which must be a valid absolute IRI.
    pub fn with_base(mut self, base: &str) -> Result<Self, InvalidIri> {
        self.base = Some(BaseIri::new(base)?);
        Ok(self)
    }

    /// Declare `prefix` as a shortcut for `ns`.
    ///
    /// If a base IRI is set, `ns` may be relative, and is resolved against it.
    pub fn with_prefix(mut self, prefix: &str, ns: &str) -> Result<Self, ConfigError> {
        let prefix = Prefix::new(prefix)?;
        let ns = match &self.base {
            Some(base) => Iri::new_unchecked(base.resolve(ns)),
            None => Iri::new(ns)?,
        };
        self.prefixes.insert(prefix, ns);
        Ok(self)
    }

    /// Set [`max_depth`](TurtleParser::max_depth).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl<B: BufRead> TripleParser<B> for TurtleParser {
    type Source = TurtleSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        let mut state = DocumentState::new(self.base.clone());
        for (prefix, ns) in &self.prefixes {
            state.bind_prefix(prefix.as_str().to_string(), ns.as_str().to_string());
        }
        TurtleSource {
            lexer: Lexer::new(data),
            peeked: None,
            state,
            queue: VecDeque::new(),
            max_depth: self.max_depth,
            depth: 0,
            status: Status::Running,
        }
    }
}

trine_api::def_mod_functions_for_bufread_parser!(TurtleParser, TripleParser);

/// Error raised when configuring a [`TurtleParser`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The prefix does not match `PN_PREFIX`
    #[error(transparent)]
    InvalidPrefix(#[from] InvalidPrefix),
    /// The namespace is not an absolute IRI
    #[error(transparent)]
    InvalidIri(#[from] InvalidIri),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Status {
    Running,
    Finished,
    Failed,
}

/// The [`TripleSource`](trine_api::source::TripleSource) returned by [`TurtleParser`].
///
/// After an error, the source is finished:
/// the triples pending from the statement in error are dropped,
/// and no more triple is produced.
#[derive(Debug)]
pub struct TurtleSource<B> {
    lexer: Lexer<B>,
    /// a token read but not consumed yet
    peeked: Option<Token>,
    state: DocumentState,
    /// triples parsed but not handed out yet
    queue: VecDeque<Triple>,
    max_depth: usize,
    depth: usize,
    status: Status,
}

impl<B: BufRead> TurtleSource<B> {
    /// Produce the next triple of the document, or `None` at the end of it.
    pub fn decode_next(&mut self) -> Result<Option<Triple>, Error> {
        loop {
            if let Some(triple) = self.queue.pop_front() {
                log::trace!("emitting {triple}");
                return Ok(Some(triple));
            }
            if self.status != Status::Running {
                return Ok(None);
            }
            match self.statement() {
                Ok(true) => {}
                Ok(false) => self.status = Status::Finished,
                Err(err) => {
                    log::debug!("decoding failed: {err}");
                    self.queue.clear();
                    self.status = Status::Failed;
                    return Err(err);
                }
            }
        }
    }

    /// The base IRI in effect at the current point of the document.
    pub fn base(&self) -> Option<&BaseIri> {
        self.state.base()
    }

    /// The prefixes declared so far, with their namespace.
    pub fn prefixes(&self) -> &HashMap<String, String> {
        self.state.prefixes()
    }

    /// Whether this source will produce no more triples, except those already queued.
    pub fn is_finished(&self) -> bool {
        self.status != Status::Running
    }

    /// Whether this source stopped because of an error.
    pub fn failed(&self) -> bool {
        self.status == Status::Failed
    }

    /// The location of the next unread character.
    pub fn location(&self) -> Location {
        self.lexer.location()
    }
}

impl<B: BufRead> Iterator for TurtleSource<B> {
    type Item = Result<Triple, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode_next().transpose()
    }
}
