//! Recursive descent over the [Turtle grammar](https://www.w3.org/TR/turtle/#sec-grammar-grammar).
//!
//! Every triple is pushed to the queue of the [`TurtleSource`] as soon as it is complete.
use super::TurtleSource;
use crate::parser::token::{Token, TokenKind};
use crate::parser::{Error, ErrorKind, Location};
use std::io::BufRead;
use trine_api::ns::{rdf, xsd};
use trine_api::term::{BlankNode, Iri, Literal, Term};
use trine_api::triple::{Subject, Triple};

impl<B: BufRead> TurtleSource<B> {
    /// Parse one directive, or one `triples` production followed by '.'.
    ///
    /// Return `false` if the end of the input was reached instead.
    pub(super) fn statement(&mut self) -> Result<bool, Error> {
        let tok = self.next_token()?;
        log::trace!("statement at {}", tok.location);
        match tok.kind {
            TokenKind::Eof => return Ok(false),
            TokenKind::AtPrefix => {
                self.prefix_directive()?;
                self.expect_dot()?;
            }
            TokenKind::SparqlPrefix => self.prefix_directive()?,
            TokenKind::AtBase => {
                self.base_directive()?;
                self.expect_dot()?;
            }
            TokenKind::SparqlBase => self.base_directive()?,
            TokenKind::LangTag(ref tag) if tag.as_str().eq_ignore_ascii_case("prefix") => {
                return Err(Error::new(
                    ErrorKind::DirectiveWrongCase("prefix"),
                    tok.location,
                ))
            }
            TokenKind::LangTag(ref tag) if tag.as_str().eq_ignore_ascii_case("base") => {
                return Err(Error::new(ErrorKind::DirectiveWrongCase("base"), tok.location))
            }
            _ => self.triples(tok)?,
        }
        Ok(true)
    }

    /// `prefixID` or `sparqlPrefix`, after the keyword
    fn prefix_directive(&mut self) -> Result<(), Error> {
        let tok = self.next_token()?;
        let TokenKind::PnameNs(prefix) = tok.kind else {
            return Err(Error::new(ErrorKind::DirectiveMissingPrefix, tok.location));
        };
        let tok = self.next_token()?;
        let TokenKind::IriRef(reference) = tok.kind else {
            return Err(Error::new(ErrorKind::DirectiveMissingIri, tok.location));
        };
        self.state
            .declare_prefix(&prefix, &reference)
            .map_err(|k| Error::new(k, tok.location))
    }

    /// `base` or `sparqlBase`, after the keyword
    fn base_directive(&mut self) -> Result<(), Error> {
        let tok = self.next_token()?;
        let TokenKind::IriRef(reference) = tok.kind else {
            return Err(Error::new(ErrorKind::DirectiveMissingIri, tok.location));
        };
        self.state
            .set_base(&reference)
            .map_err(|k| Error::new(k, tok.location))
    }

    /// `triples '.'`, starting with `tok`
    fn triples(&mut self, tok: Token) -> Result<(), Error> {
        let subject = if tok.kind == TokenKind::LBracket {
            let bn = self.state.fresh_bnode();
            self.enter(tok.location)?;
            let anon = self.property_list_contents(&bn)?;
            self.leave();
            if !anon && self.peek_token()?.kind == TokenKind::Dot {
                self.next_token()?;
                return Ok(());
            }
            Subject::BlankNode(bn)
        } else {
            self.subject(tok)?
        };
        self.predicate_object_list(&subject)?;
        self.expect_dot()
    }

    fn subject(&mut self, tok: Token) -> Result<Subject, Error> {
        match tok.kind {
            TokenKind::IriRef(_) | TokenKind::PnameNs(_) | TokenKind::PnameLn { .. } => {
                self.iri(tok).map(Subject::Iri)
            }
            TokenKind::BlankNodeLabel(label) => {
                Ok(Subject::BlankNode(self.state.labeled_bnode(&label)))
            }
            TokenKind::LParen => self.collection(tok.location),
            TokenKind::String { .. }
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_) => Err(Error::new(
                ErrorKind::NotASubject("literal"),
                tok.location,
            )),
            TokenKind::Boolean(_) => Err(Error::new(
                ErrorKind::NotASubject("boolean"),
                tok.location,
            )),
            TokenKind::KwA => Err(Error::new(ErrorKind::NotASubject("'a'"), tok.location)),
            _ => Err(unexpected(tok, "a subject")),
        }
    }

    /// `predicateObjectList`
    ///
    /// Redundant ';' are accepted, as well as a ';' just before '.' or ']'.
    fn predicate_object_list(&mut self, subject: &Subject) -> Result<(), Error> {
        loop {
            let predicate = self.verb()?;
            self.object_list(subject, &predicate)?;
            if self.peek_token()?.kind != TokenKind::Semicolon {
                return Ok(());
            }
            while self.peek_token()?.kind == TokenKind::Semicolon {
                self.next_token()?;
            }
            if matches!(
                self.peek_token()?.kind,
                TokenKind::Dot | TokenKind::RBracket
            ) {
                return Ok(());
            }
        }
    }

    fn verb(&mut self) -> Result<Iri, Error> {
        let tok = self.next_token()?;
        match tok.kind {
            TokenKind::KwA => Ok(Iri::new_unchecked(rdf::type_)),
            TokenKind::IriRef(_) | TokenKind::PnameNs(_) | TokenKind::PnameLn { .. } => {
                self.iri(tok)
            }
            TokenKind::String { .. }
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_) => Err(Error::new(
                ErrorKind::NotAPredicate("literal"),
                tok.location,
            )),
            TokenKind::BlankNodeLabel(_) | TokenKind::LBracket => Err(Error::new(
                ErrorKind::NotAPredicate("blank node"),
                tok.location,
            )),
            TokenKind::Boolean(_) => Err(Error::new(
                ErrorKind::NotAPredicate("boolean"),
                tok.location,
            )),
            TokenKind::LParen => Err(Error::new(
                ErrorKind::NotAPredicate("collection"),
                tok.location,
            )),
            _ => Err(unexpected(tok, "a predicate")),
        }
    }

    /// `objectList`
    fn object_list(&mut self, subject: &Subject, predicate: &Iri) -> Result<(), Error> {
        loop {
            self.object(subject, predicate)?;
            if self.peek_token()?.kind != TokenKind::Comma {
                return Ok(());
            }
            self.next_token()?;
        }
    }

    /// `object`, queuing the triple it completes.
    ///
    /// For a blank node property list,
    /// that triple is queued before the ones nested in the list.
    fn object(&mut self, subject: &Subject, predicate: &Iri) -> Result<(), Error> {
        let tok = self.next_token()?;
        if tok.kind == TokenKind::LBracket {
            let bn = self.state.fresh_bnode();
            self.emit(subject.clone(), predicate.clone(), bn.clone());
            self.enter(tok.location)?;
            self.property_list_contents(&bn)?;
            self.leave();
        } else {
            let object = self.term(tok)?;
            self.emit(subject.clone(), predicate.clone(), object);
        }
        Ok(())
    }

    /// A term in object position (or in a collection), starting with `tok`.
    fn term(&mut self, tok: Token) -> Result<Term, Error> {
        match tok.kind {
            TokenKind::IriRef(_) | TokenKind::PnameNs(_) | TokenKind::PnameLn { .. } => {
                self.iri(tok).map(Term::Iri)
            }
            TokenKind::BlankNodeLabel(label) => Ok(self.state.labeled_bnode(&label).into()),
            TokenKind::LBracket => {
                let bn = self.state.fresh_bnode();
                self.enter(tok.location)?;
                self.property_list_contents(&bn)?;
                self.leave();
                Ok(bn.into())
            }
            TokenKind::LParen => self.collection(tok.location).map(Term::from),
            TokenKind::String { value, .. } => self.rdf_literal(value).map(Term::Literal),
            TokenKind::Integer(lex) => Ok(typed(lex, xsd::integer)),
            TokenKind::Decimal(lex) => Ok(typed(lex, xsd::decimal)),
            TokenKind::Double(lex) => Ok(typed(lex, xsd::double)),
            TokenKind::Boolean(b) => Ok(typed(b.to_string(), xsd::boolean)),
            TokenKind::KwA => Err(Error::new(ErrorKind::AAsObject, tok.location)),
            _ => Err(unexpected(tok, "an object")),
        }
    }

    /// The inside of `[ ... ]`, after '[', with `bn` as subject.
    ///
    /// Return whether the list was empty (`ANON`).
    fn property_list_contents(&mut self, bn: &BlankNode) -> Result<bool, Error> {
        if self.peek_token()?.kind == TokenKind::RBracket {
            self.next_token()?;
            return Ok(true);
        }
        self.predicate_object_list(&Subject::BlankNode(bn.clone()))?;
        self.expect(TokenKind::RBracket, "']'")?;
        Ok(false)
    }

    /// The inside of `( ... )`, after '('.
    ///
    /// Each cell is allocated when its item is met;
    /// its `rdf:first` triple follows the triples nested in the item,
    /// and its `rdf:rest` triple is queued when the next cell (or the end) is met.
    fn collection(&mut self, location: Location) -> Result<Subject, Error> {
        self.enter(location)?;
        let mut head: Option<BlankNode> = None;
        let mut last: Option<BlankNode> = None;
        loop {
            let tok = self.next_token()?;
            if tok.kind == TokenKind::RParen {
                break;
            }
            let cell = self.state.fresh_bnode();
            match last.take() {
                Some(prev) => self.emit(prev, Iri::new_unchecked(rdf::rest), cell.clone()),
                None => head = Some(cell.clone()),
            }
            let item = match tok.kind {
                TokenKind::Eof => return Err(unexpected(tok, "')'")),
                _ => self.term(tok)?,
            };
            self.emit(cell.clone(), Iri::new_unchecked(rdf::first), item);
            last = Some(cell);
        }
        if let Some(last) = last {
            self.emit(last, Iri::new_unchecked(rdf::rest), Iri::new_unchecked(rdf::nil));
        }
        self.leave();
        Ok(match head {
            Some(head) => Subject::BlankNode(head),
            None => Subject::Iri(Iri::new_unchecked(rdf::nil)),
        })
    }

    /// The optional language tag or datatype following a string.
    fn rdf_literal(&mut self, value: String) -> Result<Literal, Error> {
        let tok = self.next_token()?;
        let literal = match tok.kind {
            TokenKind::LangTag(tag) => Literal::lang_tagged(value, tag),
            TokenKind::DatatypeMarker => {
                let dt = self.next_token()?;
                let datatype = match dt.kind {
                    TokenKind::IriRef(_) | TokenKind::PnameNs(_) | TokenKind::PnameLn { .. } => {
                        self.iri(dt)?
                    }
                    _ => return Err(unexpected(dt, "a datatype IRI")),
                };
                Literal::typed(value, datatype)
            }
            _ => {
                self.push_back(tok);
                return Ok(Literal::plain(value));
            }
        };
        if matches!(
            self.peek_token()?.kind,
            TokenKind::LangTag(_) | TokenKind::DatatypeMarker
        ) {
            let tok = self.next_token()?;
            return Err(Error::new(ErrorKind::LangAndDatatype, tok.location));
        }
        Ok(literal)
    }

    /// The IRI denoted by an `IRIREF` or a prefixed name.
    fn iri(&mut self, tok: Token) -> Result<Iri, Error> {
        let location = tok.location;
        let res = match tok.kind {
            TokenKind::IriRef(reference) => self.state.resolve_iri(&reference),
            TokenKind::PnameNs(prefix) => self.state.expand(&prefix, ""),
            TokenKind::PnameLn { prefix, local } => self.state.expand(&prefix, &local),
            kind => return Err(unexpected(Token::new(kind, location), "an IRI")),
        };
        res.map_err(|k| Error::new(k, location))
    }

    fn emit<S, O>(&mut self, s: S, p: Iri, o: O)
    where
        S: Into<Subject>,
        O: Into<Term>,
    {
        self.queue.push_back(Triple::new(s, p, o));
    }

    fn enter(&mut self, location: Location) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(ErrorKind::TooDeep(self.max_depth), location));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect_dot(&mut self) -> Result<(), Error> {
        let tok = self.next_token()?;
        if tok.kind != TokenKind::Dot {
            return Err(Error::new(ErrorKind::MissingDot, tok.location));
        }
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), Error> {
        let tok = self.next_token()?;
        if tok.kind != kind {
            return Err(unexpected(tok, expected));
        }
        Ok(())
    }

    // token stream with one token of lookahead

    fn next_token(&mut self) -> Result<Token, Error> {
        match self.peeked.take() {
            Some(tok) => Ok(tok),
            None => self.lexer.next_token(),
        }
    }

    fn peek_token(&mut self) -> Result<&Token, Error> {
        let tok = match self.peeked.take() {
            Some(tok) => tok,
            None => self.lexer.next_token()?,
        };
        Ok(self.peeked.insert(tok))
    }

    fn push_back(&mut self, tok: Token) {
        debug_assert!(self.peeked.is_none());
        self.peeked = Some(tok);
    }
}

fn unexpected(tok: Token, expected: &'static str) -> Error {
    Error::new(
        ErrorKind::UnexpectedToken {
            found: tok.kind.to_string(),
            expected,
        },
        tok.location,
    )
}

fn typed<T: Into<String>>(lex: T, datatype: &str) -> Term {
    Literal::typed(lex, Iri::new_unchecked(datatype)).into()
}
