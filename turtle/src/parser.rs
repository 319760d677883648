//! The Turtle decoder, layered as follows:
//!
//! * [`source`] decodes characters from a byte stream, keeping track of their [location](Location);
//! * [`lexer`] turns characters into [tokens](token::Token);
//! * [`state`] holds the prefixes, base IRI and blank nodes of a document;
//! * [`turtle`] turns tokens into triples.

pub mod lexer;
pub mod source;
pub mod state;
pub mod token;
pub mod turtle;

mod _chars;
mod _error;
pub use _error::*;

pub use trine_api::parser::Location;
