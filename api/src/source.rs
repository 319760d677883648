//! A source yields [triples](Triple), and may also fail in the process.
//!
//! The [`TripleSource`] trait provides an API similar to (a subset of) the [`Iterator`] API,
//! with methods such as [`for_each_triple`](TripleSource::for_each_triple)
//! and [`try_for_each_triple`](TripleSource::try_for_each_triple).
//!
//! Any iterator yielding [results](std::result::Result) of [`Triple`]
//! implements the [`TripleSource`] trait.

use crate::triple::Triple;
use std::error::Error;

mod _stream_error;
pub use _stream_error::*;

/// A triple source produces [triples](Triple), and may also fail in the process.
///
/// see [module documentation](self) for the common implementors of this trait.
pub trait TripleSource {
    /// The type of errors produced by this source.
    type Error: Error + 'static;

    /// Produce the next triple, if any.
    ///
    /// Return `Ok(None)` if there are no more triples in this source.
    fn next_triple(&mut self) -> Result<Option<Triple>, Self::Error>;

    /// Call f for all triples from this source.
    ///
    /// Return an error if either the source or `f` errs.
    #[inline]
    fn try_for_each_triple<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(Triple) -> Result<(), E>,
        E: Error,
    {
        while let Some(t) = self.next_triple().map_err(SourceError)? {
            f(t).map_err(SinkError)?;
        }
        Ok(())
    }

    /// Call f for all triples from this source.
    ///
    /// Return an error if the source errs.
    #[inline]
    fn for_each_triple<F>(&mut self, mut f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Triple),
    {
        while let Some(t) = self.next_triple()? {
            f(t);
        }
        Ok(())
    }

    /// Collect all triples from this source into a collection.
    ///
    /// Return an error if the source errs.
    /// Triples produced before the error are lost.
    #[inline]
    fn collect_triples<C>(mut self) -> Result<C, Self::Error>
    where
        Self: Sized,
        C: Default + Extend<Triple>,
    {
        let mut c = C::default();
        self.for_each_triple(|t| c.extend(std::iter::once(t)))?;
        Ok(c)
    }
}

impl<I, E> TripleSource for I
where
    I: Iterator<Item = Result<Triple, E>>,
    E: Error + 'static,
{
    type Error = E;

    fn next_triple(&mut self) -> Result<Option<Triple>, Self::Error> {
        self.next().transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{Iri, Literal};
    use std::collections::HashSet;
    use std::fmt;

    #[derive(Debug)]
    struct Oops;
    impl fmt::Display for Oops {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("oops")
        }
    }
    impl Error for Oops {}

    fn triple(o: &str) -> Triple {
        let ex = |txt: &str| Iri::new_unchecked(format!("http://example.org/{txt}"));
        Triple::new(ex("s"), ex("p"), Literal::plain(o))
    }

    #[test]
    fn collect_from_iterator() {
        let v = vec![Ok::<_, Oops>(triple("a")), Ok(triple("b")), Ok(triple("a"))];
        let set: HashSet<Triple> = v.into_iter().collect_triples().unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn source_error_stops_iteration() {
        let v = vec![Ok(triple("a")), Err(Oops), Ok(triple("b"))];
        let mut seen = vec![];
        let res = v.into_iter().for_each_triple(|t| seen.push(t));
        assert!(res.is_err());
        assert_eq!(seen, vec![triple("a")]);
    }

    #[test]
    fn sink_error_is_reported() {
        let v = vec![Ok::<_, Oops>(triple("a")), Ok(triple("b"))];
        let mut src = v.into_iter();
        let res = src.try_for_each_triple(|_| Err(Oops));
        assert!(res.unwrap_err().is_sink_error());
        // the source was not drained
        assert_eq!(src.next_triple().unwrap(), Some(triple("b")));
    }
}
