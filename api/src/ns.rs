//! Standard namespaces.
//!
//! This module provides
//! the [`namespace`] macro, for defining static namespaces,
//! and modules corresponding to the namespaces required by Turtle
//! (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use trine_api::ns::{rdf, xsd};
//! use trine_api::term::Iri;
//!
//! assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! let dt = Iri::new_unchecked(xsd::integer);
//! assert!(dt.as_str().ends_with("#integer"));
//! ```

#[macro_use]
mod _macro;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // datatypes
        langString,
        // properties
        first,
        rest,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `xsd:` namespace,
/// restricted to the datatypes produced by Turtle's literal shortcuts.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        decimal,
        double,
        integer,
        string
    );
}
