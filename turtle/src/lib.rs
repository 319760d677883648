//! A streaming decoder for the [Turtle] concrete syntax of RDF.
//!
//! The decoder pulls characters from any [`BufRead`](std::io::BufRead),
//! and produces [triples](trine_api::triple::Triple) one at a time.
//!
//! # Example
//! ```
//! use trine_api::prelude::*;
//! use trine_turtle::parser::turtle;
//!
//! let ttl = r#"
//!     @prefix : <http://example.org/> .
//!     :alice :knows [ :name "Bob" ] .
//! "#;
//! let triples: Vec<Triple> = turtle::parse_str(ttl).collect_triples()?;
//! assert_eq!(triples.len(), 2);
//! # Ok::<(), trine_turtle::parser::Error>(())
//! ```
//!
//! [Turtle]: https://www.w3.org/TR/turtle/

pub mod parser;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
