//! This crate is part of [trine],
//! a toolkit for decoding [Turtle] documents into RDF triples.
//!
//! It provides functions for recognizing absolute IRIs,
//! as well as for resolving IRI references against a given base IRI.
//!
//! [trine]: https://docs.rs/trine_turtle/latest/trine_turtle/
//! [Turtle]: https://www.w3.org/TR/turtle/

#![deny(missing_docs)]

mod _regex;
pub use self::_regex::*;
pub mod error;
pub use error::InvalidIri;
pub mod resolve;
