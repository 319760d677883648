//! This crate is part of [trine],
//! a toolkit for decoding [Turtle] documents into RDF triples.
//!
//! It defines the data model shared by decoders and their consumers
//! ([terms](term), [triples](triple)),
//! the standard [vocabularies](ns) the decoders need,
//! and the [`TripleSource`](source::TripleSource)
//! and [`TripleParser`](parser::TripleParser) traits.
//!
//! [trine]: https://docs.rs/trine_turtle/latest/trine_turtle/
//! [Turtle]: https://www.w3.org/TR/turtle/

#![deny(missing_docs)]

pub mod ns;
pub mod parser;
pub mod prefix;
pub mod prelude;
pub mod source;
pub mod term;
pub mod triple;

pub use trine_iri as iri;

/// Re-export of the standard error trait,
/// used as a bound throughout this crate.
pub use std::error::Error;
