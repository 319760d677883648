//! I define [`DocumentState`],
//! the mutable context of a decoding session.

use super::ErrorKind;
use std::collections::HashMap;
use trine_api::term::{BlankNode, Iri};
use trine_iri::resolve::BaseIri;
use trine_iri::is_absolute_iri_ref;

/// The prefixes, base IRI and blank nodes known at a given point of a document.
///
/// Methods report failures as bare [`ErrorKind`]s;
/// locating them in the input is the caller's job.
#[derive(Clone, Debug, Default)]
pub struct DocumentState {
    prefixes: HashMap<String, String>,
    base: Option<BaseIri>,
    bnode_counter: usize,
    labels: HashMap<String, BlankNode>,
}

impl DocumentState {
    /// A fresh state, with the given base IRI (if any) and no prefix.
    pub fn new(base: Option<BaseIri>) -> Self {
        DocumentState {
            base,
            ..DocumentState::default()
        }
    }

    /// The base IRI currently in effect.
    pub fn base(&self) -> Option<&BaseIri> {
        self.base.as_ref()
    }

    /// The prefixes currently declared, mapped to their (absolute) namespace.
    pub fn prefixes(&self) -> &HashMap<String, String> {
        &self.prefixes
    }

    /// Resolve `reference` against the current base IRI.
    ///
    /// Without a base IRI, only absolute references are accepted, and kept as is.
    pub fn resolve(&self, reference: &str) -> Result<String, ErrorKind> {
        match &self.base {
            Some(base) => Ok(base.resolve(reference)),
            None if is_absolute_iri_ref(reference) => Ok(reference.to_string()),
            None => Err(ErrorKind::RelativeIriWithoutBase(reference.to_string())),
        }
    }

    /// Resolve `reference` into an [`Iri`].
    pub fn resolve_iri(&self, reference: &str) -> Result<Iri, ErrorKind> {
        self.resolve(reference).map(Iri::new_unchecked)
    }

    /// Replace the base IRI by the resolution of `reference` against the current one.
    pub fn set_base(&mut self, reference: &str) -> Result<(), ErrorKind> {
        let base = match &self.base {
            Some(base) => base.join(reference),
            None if is_absolute_iri_ref(reference) => BaseIri::new_unchecked(reference),
            None => return Err(ErrorKind::RelativeIriWithoutBase(reference.to_string())),
        };
        log::debug!("base IRI set to <{base}>");
        self.base = Some(base);
        Ok(())
    }

    /// Bind `prefix` to the resolution of `reference`.
    ///
    /// A previous binding of `prefix` is replaced.
    pub fn declare_prefix(&mut self, prefix: &str, reference: &str) -> Result<(), ErrorKind> {
        let ns = self.resolve(reference)?;
        match self.prefixes.get(prefix) {
            Some(old) if *old != ns => {
                log::warn!("prefix {prefix}: redeclared (was <{old}>, now <{ns}>)")
            }
            _ => log::debug!("prefix {prefix}: bound to <{ns}>"),
        }
        self.bind_prefix(prefix.to_string(), ns);
        Ok(())
    }

    /// Bind `prefix` to `ns`, which must be absolute.
    pub fn bind_prefix(&mut self, prefix: String, ns: String) {
        debug_assert!(is_absolute_iri_ref(&ns), "{ns:?} is not absolute");
        self.prefixes.insert(prefix, ns);
    }

    /// The IRI denoted by `prefix:local`.
    pub fn expand(&self, prefix: &str, local: &str) -> Result<Iri, ErrorKind> {
        match self.prefixes.get(prefix) {
            Some(ns) => Ok(Iri::new_unchecked(format!("{ns}{local}"))),
            None => Err(ErrorKind::UndeclaredPrefix(prefix.to_string())),
        }
    }

    /// A blank node distinct from all others in this session.
    pub fn fresh_bnode(&mut self) -> BlankNode {
        self.bnode_counter += 1;
        BlankNode::generated(self.bnode_counter)
    }

    /// The blank node denoted by `_:label` in this session.
    pub fn labeled_bnode(&mut self, label: &str) -> BlankNode {
        if let Some(bn) = self.labels.get(label) {
            return bn.clone();
        }
        let bn = BlankNode::new_labeled_unchecked(label);
        self.labels.insert(label.to_string(), bn.clone());
        bn
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn no_base() {
        let state = DocumentState::new(None);
        assert!(state.base().is_none());
        assert_eq!(state.resolve("http://a.example/s").unwrap(), "http://a.example/s");
        assert!(matches!(
            state.resolve("s"),
            Err(ErrorKind::RelativeIriWithoutBase(r)) if r == "s"
        ));
    }

    #[test_case("s", "http://a.example/dir/s" ; "relative")]
    #[test_case("../s", "http://a.example/s" ; "parent")]
    #[test_case("", "http://a.example/dir/doc" ; "empty")]
    #[test_case("#x", "http://a.example/dir/doc#x" ; "fragment")]
    #[test_case("urn:x", "urn:x" ; "absolute")]
    fn with_base(reference: &str, expected: &str) {
        let base = BaseIri::new("http://a.example/dir/doc").unwrap();
        let state = DocumentState::new(Some(base));
        assert_eq!(state.resolve(reference).unwrap(), expected);
    }

    #[test]
    fn set_base() {
        let mut state = DocumentState::new(None);
        assert!(state.set_base("rel/").is_err());
        state.set_base("http://a.example/x/").unwrap();
        state.set_base("y/").unwrap();
        assert_eq!(state.base().unwrap().as_str(), "http://a.example/x/y/");
        assert_eq!(state.resolve("z").unwrap(), "http://a.example/x/y/z");
    }

    #[test]
    fn prefixes() {
        let mut state = DocumentState::new(None);
        assert!(matches!(
            state.expand("ex", "a"),
            Err(ErrorKind::UndeclaredPrefix(p)) if p == "ex"
        ));
        state.declare_prefix("ex", "http://a.example/").unwrap();
        assert_eq!(state.expand("ex", "a").unwrap(), "http://a.example/a");
        state.declare_prefix("ex", "http://b.example/").unwrap();
        assert_eq!(state.expand("ex", "a").unwrap(), "http://b.example/a");
        assert_eq!(state.prefixes().len(), 1);
        assert!(state.declare_prefix("rel", "rel/").is_err());
    }

    #[test]
    fn prefix_resolved_against_base_at_declaration() {
        let mut state = DocumentState::new(None);
        state.set_base("http://a.example/").unwrap();
        state.declare_prefix("", "ns/").unwrap();
        state.set_base("http://b.example/").unwrap();
        assert_eq!(state.expand("", "x").unwrap(), "http://a.example/ns/x");
    }

    #[test]
    fn bnodes() {
        let mut state = DocumentState::new(None);
        let b1 = state.fresh_bnode();
        let b2 = state.fresh_bnode();
        assert_ne!(b1, b2);
        assert_eq!(b1.label(), "b1");
        let x = state.labeled_bnode("x");
        assert_eq!(state.labeled_bnode("x"), x);
        assert_ne!(state.labeled_bnode("b1"), b1);
    }
}
