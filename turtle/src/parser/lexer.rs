//! I define [`Lexer`], which turns a stream of characters into [tokens](Token).

use super::_chars::*;
use super::source::RuneSource;
use super::token::{StringStyle, Token, TokenKind};
use super::{Error, ErrorKind, Location};
use std::io::BufRead;
use trine_api::term::{is_valid_bnode_label, LanguageTag};

/// A pull-based Turtle tokenizer.
///
/// Apart from the position in the input, no state is kept between two calls to
/// [`next_token`](Lexer::next_token).
#[derive(Debug)]
pub struct Lexer<R> {
    src: RuneSource<R>,
}

impl<R: BufRead> Lexer<R> {
    /// Tokenize the content of `reader`.
    pub fn new(reader: R) -> Self {
        Lexer {
            src: RuneSource::new(reader),
        }
    }

    /// The location of the next unread character.
    pub fn location(&self) -> Location {
        self.src.location()
    }

    /// Read the next token.
    ///
    /// At the end of the input, [`TokenKind::Eof`] is returned (repeatedly).
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_blanks()?;
        let start = self.src.location();
        let c = match self.src.peek()? {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof, start)),
        };
        let kind = match c {
            '<' => self.iri_ref()?,
            '"' | '\'' => self.string(c, start)?,
            '@' => self.at_word(start)?,
            '_' if self.src.peek_nth(1)? == Some(':') => self.bnode_label()?,
            '+' | '-' | '0'..='9' => self.number(start)?,
            '.' if matches!(self.src.peek_nth(1)?, Some('0'..='9')) => self.number(start)?,
            ':' => self.name(start)?,
            c if is_pn_chars_base(c) => self.name(start)?,
            '^' => {
                self.src.advance()?;
                if !self.src.advance_if('^')? {
                    return Err(Error::new(ErrorKind::UnexpectedChar('^'), start));
                }
                TokenKind::DatatypeMarker
            }
            _ => {
                self.src.advance()?;
                match c {
                    '.' => TokenKind::Dot,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    _ => return Err(Error::new(ErrorKind::UnexpectedChar(c), start)),
                }
            }
        };
        Ok(Token::new(kind, start))
    }

    fn error<T>(&self, kind: ErrorKind) -> Result<T, Error> {
        Err(Error::new(kind, self.src.location()))
    }

    fn skip_blanks(&mut self) -> Result<(), Error> {
        while let Some(c) = self.src.peek()? {
            if is_ws(c) {
                self.src.advance()?;
            } else if c == '#' {
                while let Some(c) = self.src.advance()? {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    /// `IRIREF`, with its `UCHAR` escapes decoded
    fn iri_ref(&mut self) -> Result<TokenKind, Error> {
        self.src.advance()?;
        let mut iri = String::new();
        loop {
            let loc = self.src.location();
            match self.src.advance()? {
                None => return Err(Error::new(ErrorKind::IriUnterminated, loc)),
                Some('>') => return Ok(TokenKind::IriRef(iri)),
                Some('\\') => {
                    let len = match self.src.advance()? {
                        Some('u') => 4,
                        Some('U') => 8,
                        _ => return Err(Error::new(ErrorKind::IriCharEscape, loc)),
                    };
                    match self.hex_code_point(len)? {
                        Some(c) if is_iri_forbidden(c) || c == '>' || c == '\\' => {
                            return Err(Error::new(ErrorKind::IriChar(c), loc))
                        }
                        Some(c) => iri.push(c),
                        None => return Err(Error::new(ErrorKind::IriBadEscape, loc)),
                    }
                }
                Some(' ') => return Err(Error::new(ErrorKind::IriSpace, loc)),
                Some(c) if is_iri_forbidden(c) => {
                    return Err(Error::new(ErrorKind::IriChar(c), loc))
                }
                Some(c) => iri.push(c),
            }
        }
    }

    /// Read `len` hex digits, and return the corresponding character,
    /// or `None` if the digits are missing or do not denote a Unicode scalar value.
    fn hex_code_point(&mut self, len: usize) -> Result<Option<char>, Error> {
        let mut code = 0;
        for _ in 0..len {
            match self.src.peek()?.and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    self.src.advance()?;
                    code = code * 16 + d;
                }
                None => return Ok(None),
            }
        }
        Ok(char::from_u32(code))
    }

    fn string(&mut self, quote: char, start: Location) -> Result<TokenKind, Error> {
        self.src.advance()?;
        let long = self.src.peek()? == Some(quote) && self.src.peek_nth(1)? == Some(quote);
        let style = match (quote, long) {
            ('"', false) => StringStyle::ShortDouble,
            ('"', true) => StringStyle::LongDouble,
            (_, false) => StringStyle::ShortSingle,
            (_, true) => StringStyle::LongSingle,
        };
        let mut value = String::new();
        if long {
            self.src.advance()?;
            self.src.advance()?;
            loop {
                let loc = self.src.location();
                match self.src.advance()? {
                    None => return Err(Error::new(ErrorKind::LongStringUnterminated, start)),
                    Some(c) if c == quote => {
                        if self.src.peek()? == Some(quote) && self.src.peek_nth(1)? == Some(quote)
                        {
                            self.src.advance()?;
                            self.src.advance()?;
                            break;
                        }
                        value.push(c);
                    }
                    Some('\\') => value.push(self.string_escape(loc)?),
                    Some(c) => value.push(c),
                }
            }
        } else {
            loop {
                let loc = self.src.location();
                match self.src.advance()? {
                    None | Some('\n') | Some('\r') => {
                        return Err(Error::new(ErrorKind::StringUnterminated, start))
                    }
                    Some(c) if c == quote => break,
                    Some('\\') => value.push(self.string_escape(loc)?),
                    Some(c) => value.push(c),
                }
            }
        }
        Ok(TokenKind::String { value, style })
    }

    /// `ECHAR | UCHAR`, the backslash being already consumed
    fn string_escape(&mut self, loc: Location) -> Result<char, Error> {
        let c = match self.src.advance()? {
            Some('t') => '\t',
            Some('b') => '\u{8}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('f') => '\u{c}',
            Some(c @ ('"' | '\'' | '\\')) => c,
            Some(u @ ('u' | 'U')) => {
                let len = if u == 'u' { 4 } else { 8 };
                match self.hex_code_point(len)? {
                    Some(c) => c,
                    None => return Err(Error::new(ErrorKind::StringBadEscape, loc)),
                }
            }
            _ => return Err(Error::new(ErrorKind::StringBadEscape, loc)),
        };
        Ok(c)
    }

    /// `LANGTAG`, `@prefix` or `@base`
    fn at_word(&mut self, start: Location) -> Result<TokenKind, Error> {
        self.src.advance()?;
        let mut word = String::new();
        while let Some(c) = self.src.peek()? {
            if c.is_ascii_alphanumeric() || c == '-' {
                self.src.advance()?;
                word.push(c);
            } else {
                break;
            }
        }
        match word.as_str() {
            "prefix" => Ok(TokenKind::AtPrefix),
            "base" => Ok(TokenKind::AtBase),
            _ => LanguageTag::new(word)
                .map(TokenKind::LangTag)
                .map_err(|_| Error::new(ErrorKind::LangTag, start)),
        }
    }

    /// `BLANK_NODE_LABEL ::= '_:' (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    ///
    /// Trailing dots are left in the input.
    fn bnode_label(&mut self) -> Result<TokenKind, Error> {
        self.src.advance()?;
        self.src.advance()?;
        let at = self.src.location();
        let mut label = String::new();
        loop {
            match self.src.peek()? {
                Some(c) if is_pn_chars(c) => {
                    self.src.advance()?;
                    label.push(c);
                }
                Some('.') => {
                    let dots = self.count_dots()?;
                    match self.src.peek_nth(dots)? {
                        Some(c) if is_pn_chars(c) => self.push_dots(dots, &mut label)?,
                        _ => break,
                    }
                }
                _ => break,
            }
        }
        if !is_valid_bnode_label(&label) {
            return Err(Error::new(ErrorKind::BnodeLabel, at));
        }
        Ok(TokenKind::BlankNodeLabel(label))
    }

    /// Number of consecutive '.' starting at the next character.
    fn count_dots(&mut self) -> Result<usize, Error> {
        let mut n = 0;
        while self.src.peek_nth(n)? == Some('.') {
            n += 1;
        }
        Ok(n)
    }

    fn push_dots(&mut self, n: usize, buf: &mut String) -> Result<(), Error> {
        for _ in 0..n {
            self.src.advance()?;
            buf.push('.');
        }
        Ok(())
    }

    /// `INTEGER`, `DECIMAL` or `DOUBLE`, with an optional sign.
    fn number(&mut self, start: Location) -> Result<TokenKind, Error> {
        let mut txt = String::new();
        if let Some(sign @ ('+' | '-')) = self.src.peek()? {
            self.src.advance()?;
            txt.push(sign);
        }
        let int_digits = self.digits(&mut txt)?;
        let mut fraction = false;
        if self.src.peek()? == Some('.') {
            let after_dot = match self.src.peek_nth(1)? {
                Some('0'..='9') => true,
                Some('e' | 'E') => int_digits > 0 && self.exponent_at(1)?,
                _ => false,
            };
            if after_dot {
                self.src.advance()?;
                txt.push('.');
                self.digits(&mut txt)?;
                fraction = true;
            }
        }
        if int_digits == 0 && !fraction {
            return Err(Error::new(ErrorKind::Number, start));
        }
        if let Some(e @ ('e' | 'E')) = self.src.peek()? {
            self.src.advance()?;
            txt.push(e);
            if let Some(sign @ ('+' | '-')) = self.src.peek()? {
                self.src.advance()?;
                txt.push(sign);
            }
            if self.digits(&mut txt)? == 0 {
                return Err(Error::new(ErrorKind::Number, start));
            }
            return Ok(TokenKind::Double(txt));
        }
        if fraction {
            Ok(TokenKind::Decimal(txt))
        } else {
            Ok(TokenKind::Integer(txt))
        }
    }

    fn digits(&mut self, buf: &mut String) -> Result<usize, Error> {
        let mut n = 0;
        while let Some(d @ '0'..='9') = self.src.peek()? {
            self.src.advance()?;
            buf.push(d);
            n += 1;
        }
        Ok(n)
    }

    /// Whether an exponent with at least one digit starts at the `n`-th next character.
    fn exponent_at(&mut self, n: usize) -> Result<bool, Error> {
        if !matches!(self.src.peek_nth(n)?, Some('e' | 'E')) {
            return Ok(false);
        }
        let digit_at = match self.src.peek_nth(n + 1)? {
            Some('+' | '-') => n + 2,
            _ => n + 1,
        };
        Ok(matches!(self.src.peek_nth(digit_at)?, Some('0'..='9')))
    }

    /// Prefixed name, or bare word.
    fn name(&mut self, start: Location) -> Result<TokenKind, Error> {
        let mut prefix = String::new();
        if let Some(c) = self.src.peek()? {
            if is_pn_chars_base(c) {
                self.src.advance()?;
                prefix.push(c);
                loop {
                    match self.src.peek()? {
                        Some(c) if is_pn_chars(c) => {
                            self.src.advance()?;
                            prefix.push(c);
                        }
                        Some('.') => {
                            let dots = self.count_dots()?;
                            match self.src.peek_nth(dots)? {
                                Some(c) if is_pn_chars(c) => self.push_dots(dots, &mut prefix)?,
                                Some(':') => return self.error(ErrorKind::PrefixEndsInDot),
                                _ => break,
                            }
                        }
                        _ => break,
                    }
                }
            }
        }
        if !self.src.advance_if(':')? {
            return self.keyword(prefix, start);
        }
        let local = self.local_name()?;
        if local.is_empty() {
            Ok(TokenKind::PnameNs(prefix))
        } else {
            Ok(TokenKind::PnameLn { prefix, local })
        }
    }

    fn keyword(&mut self, word: String, start: Location) -> Result<TokenKind, Error> {
        match word.as_str() {
            "a" => Ok(TokenKind::KwA),
            "true" => Ok(TokenKind::Boolean(true)),
            "false" => Ok(TokenKind::Boolean(false)),
            w if w.eq_ignore_ascii_case("prefix") => Ok(TokenKind::SparqlPrefix),
            w if w.eq_ignore_ascii_case("base") => Ok(TokenKind::SparqlBase),
            _ => Err(Error::new(ErrorKind::UnknownKeyword(word), start)),
        }
    }

    /// `PN_LOCAL ::= (PN_CHARS_U | ':' | [0-9] | PLX) ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX))?`
    fn local_name(&mut self) -> Result<String, Error> {
        let mut local = String::new();
        match self.src.peek()? {
            Some(c) if is_pn_chars_u(c) || c == ':' || c.is_ascii_digit() => {
                self.src.advance()?;
                local.push(c);
            }
            Some(c @ ('%' | '\\')) => self.plx(c, &mut local)?,
            Some('-') => return self.error(ErrorKind::LocalStartsWithDash),
            _ => return Ok(local),
        }
        loop {
            match self.src.peek()? {
                Some(c) if is_pn_chars(c) || c == ':' => {
                    self.src.advance()?;
                    local.push(c);
                }
                Some(c @ ('%' | '\\')) => self.plx(c, &mut local)?,
                Some('.') => {
                    let dots = self.count_dots()?;
                    match self.src.peek_nth(dots)? {
                        Some(c) if is_pn_chars(c) || matches!(c, ':' | '%' | '\\') => {
                            self.push_dots(dots, &mut local)?
                        }
                        _ => break,
                    }
                }
                _ => break,
            }
        }
        Ok(local)
    }

    /// `PLX ::= PERCENT | PN_LOCAL_ESC`, starting with `c` (not consumed yet)
    ///
    /// Percent sequences are kept as is, escaped characters are unescaped.
    fn plx(&mut self, c: char, local: &mut String) -> Result<(), Error> {
        let loc = self.src.location();
        self.src.advance()?;
        if c == '%' {
            local.push('%');
            for _ in 0..2 {
                match self.src.peek()? {
                    Some(h) if h.is_ascii_hexdigit() => {
                        self.src.advance()?;
                        local.push(h);
                    }
                    _ => return Err(Error::new(ErrorKind::LocalBadHexEscape, loc)),
                }
            }
        } else {
            match self.src.peek()? {
                Some(e) if is_pn_local_esc(e) => {
                    self.src.advance()?;
                    local.push(e);
                }
                _ => return Err(Error::new(ErrorKind::LocalBadEscape, loc)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;
    use TokenKind::*;

    fn tokens(txt: &str) -> Result<Vec<TokenKind>, Error> {
        let mut lexer = Lexer::new(txt.as_bytes());
        let mut ret = vec![];
        loop {
            let tok = lexer.next_token()?;
            if tok.kind.is_eof() {
                return Ok(ret);
            }
            ret.push(tok.kind);
        }
    }

    fn ln(prefix: &str, local: &str) -> TokenKind {
        PnameLn {
            prefix: prefix.into(),
            local: local.into(),
        }
    }

    fn string(value: &str, style: StringStyle) -> TokenKind {
        String {
            value: value.into(),
            style,
        }
    }

    #[test_case("" => Vec::<TokenKind>::new() ; "empty")]
    #[test_case(" \t\r\n# comment\n" => Vec::<TokenKind>::new() ; "blanks only")]
    #[test_case(". ; , [ ] ( ) ^^" => vec![Dot, Semicolon, Comma, LBracket, RBracket, LParen, RParen, DatatypeMarker] ; "punctuation")]
    #[test_case("a true false" => vec![KwA, Boolean(true), Boolean(false)] ; "keywords")]
    #[test_case("PREFIX prefix Base @prefix @base" => vec![SparqlPrefix, SparqlPrefix, SparqlBase, AtPrefix, AtBase] ; "directives")]
    #[test_case("<s>#c\n<o>" => vec![IriRef("s".into()), IriRef("o".into())] ; "comment between tokens")]
    fn simple_tokens(txt: &str) -> Vec<TokenKind> {
        tokens(txt).unwrap()
    }

    #[test_case("<http://a.example/s>" => "http://a.example/s" ; "absolute")]
    #[test_case("<>" => "" ; "empty")]
    #[test_case("<#frag>" => "#frag" ; "relative")]
    #[test_case(r"<http://a.example/\u00E9>" => "http://a.example/\u{e9}" ; "short escape")]
    #[test_case(r"<http://a.example/\U0001F600>" => "http://a.example/\u{1F600}" ; "long escape")]
    #[test_case("<http://a.example/%20>" => "http://a.example/%20" ; "percent encoding kept")]
    #[test_case("<http://a.example/\u{e9}>" => "http://a.example/\u{e9}" ; "raw non ascii")]
    fn iri(txt: &str) -> std::string::String {
        match tokens(txt).unwrap().pop() {
            Some(IriRef(iri)) => iri,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test_case("ex:foo" => vec![ln("ex", "foo")] ; "simple")]
    #[test_case("ex:" => vec![PnameNs("ex".into())] ; "namespace only")]
    #[test_case(":" => vec![PnameNs("".into())] ; "empty prefix")]
    #[test_case(":a" => vec![ln("", "a")] ; "empty prefix with local")]
    #[test_case("ex.a:b" => vec![ln("ex.a", "b")] ; "dot in prefix")]
    #[test_case(":a.b." => vec![ln("", "a.b"), Dot] ; "trailing dot excluded")]
    #[test_case(":a..b" => vec![ln("", "a..b")] ; "consecutive dots")]
    #[test_case(":1" => vec![ln("", "1")] ; "leading digit")]
    #[test_case(":a:b:" => vec![ln("", "a:b:")] ; "colons")]
    #[test_case(":_a-b" => vec![ln("", "_a-b")] ; "underscore and dash")]
    #[test_case(":a%20b" => vec![ln("", "a%20b")] ; "percent kept")]
    #[test_case(r":a\,b\~" => vec![ln("", "a,b~")] ; "escapes")]
    #[test_case(r":\-a" => vec![ln("", "-a")] ; "escaped leading dash")]
    #[test_case("\u{e9}t\u{e9}:\u{e0}" => vec![ln("\u{e9}t\u{e9}", "\u{e0}")] ; "non ascii")]
    #[test_case(":s :p :o." => vec![ln("", "s"), ln("", "p"), ln("", "o"), Dot] ; "statement")]
    fn prefixed_names(txt: &str) -> Vec<TokenKind> {
        tokens(txt).unwrap()
    }

    #[test_case("_:b1" => vec![BlankNodeLabel("b1".into())] ; "simple")]
    #[test_case("_:1a" => vec![BlankNodeLabel("1a".into())] ; "leading digit")]
    #[test_case("_:a.b." => vec![BlankNodeLabel("a.b".into()), Dot] ; "trailing dot excluded")]
    #[test_case("_:a-\u{b7}" => vec![BlankNodeLabel("a-\u{b7}".into())] ; "pn chars")]
    fn bnode_labels(txt: &str) -> Vec<TokenKind> {
        tokens(txt).unwrap()
    }

    #[test_case("1" => vec![Integer("1".into())] ; "integer")]
    #[test_case("+1 -0" => vec![Integer("+1".into()), Integer("-0".into())] ; "signed integers")]
    #[test_case("1.5" => vec![Decimal("1.5".into())] ; "decimal")]
    #[test_case("-.5" => vec![Decimal("-.5".into())] ; "decimal without integer part")]
    #[test_case("1." => vec![Integer("1".into()), Dot] ; "integer then dot")]
    #[test_case("1e5 1E-5 1.5e+5" => vec![Double("1e5".into()), Double("1E-5".into()), Double("1.5e+5".into())] ; "doubles")]
    #[test_case("1.e0" => vec![Double("1.e0".into())] ; "double with empty fraction")]
    #[test_case(".5e0" => vec![Double(".5e0".into())] ; "double without integer part")]
    #[test_case("007" => vec![Integer("007".into())] ; "leading zeros kept")]
    fn numbers(txt: &str) -> Vec<TokenKind> {
        tokens(txt).unwrap()
    }

    #[test_case(r#""abc""# => vec![string("abc", StringStyle::ShortDouble)] ; "short double")]
    #[test_case("'abc'" => vec![string("abc", StringStyle::ShortSingle)] ; "short single")]
    #[test_case(r#""""#  => vec![string("", StringStyle::ShortDouble)] ; "empty")]
    #[test_case(r#""""""""# => vec![string("", StringStyle::LongDouble)] ; "empty long")]
    #[test_case("\"\"\"a\nb\"\"\"" => vec![string("a\nb", StringStyle::LongDouble)] ; "long with newline")]
    #[test_case("'''a''b'c'''" => vec![string("a''b'c", StringStyle::LongSingle)] ; "long with quotes")]
    #[test_case(r#""""x\"""""# => vec![string("x\"", StringStyle::LongDouble)] ; "long ending with escaped quote")]
    #[test_case(r#""\t\b\n\r\f\"\'\\""# => vec![string("\t\u{8}\n\r\u{c}\"'\\", StringStyle::ShortDouble)] ; "echar")]
    #[test_case(r#""\u00E9\U0001F600""# => vec![string("\u{e9}\u{1F600}", StringStyle::ShortDouble)] ; "uchar")]
    #[test_case(r#"'"'"# => vec![string("\"", StringStyle::ShortSingle)] ; "other quote")]
    fn strings(txt: &str) -> Vec<TokenKind> {
        tokens(txt).unwrap()
    }

    #[test_case("@en" => "en" ; "simple")]
    #[test_case("@en-US" => "en-US" ; "region")]
    #[test_case("@PREFIX" => "PREFIX" ; "uppercase directive")]
    #[test_case("@prefix-x" => "prefix-x" ; "directive prefix")]
    fn lang_tags(txt: &str) -> std::string::String {
        match tokens(txt).unwrap().pop() {
            Some(LangTag(tag)) => tag.as_str().to_string(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test_case("<a b>" => matches ErrorKind::IriSpace ; "iri space")]
    #[test_case(r"<a\u00ZZ>" => matches ErrorKind::IriBadEscape ; "iri bad uchar")]
    #[test_case(r"<a\uD800>" => matches ErrorKind::IriBadEscape ; "iri surrogate")]
    #[test_case(r"<a\n>" => matches ErrorKind::IriCharEscape ; "iri char escape")]
    #[test_case("<a{b>" => matches ErrorKind::IriChar('{') ; "iri curly")]
    #[test_case("<a^b>" => matches ErrorKind::IriChar('^') ; "iri caret")]
    #[test_case("<a\nb>" => matches ErrorKind::IriChar('\n') ; "iri newline")]
    #[test_case(r"<a\u0020>" => matches ErrorKind::IriChar(' ') ; "iri escaped space")]
    #[test_case(r"<a\u003C>" => matches ErrorKind::IriChar('<') ; "iri escaped opening bracket")]
    #[test_case(r"<a\u003E>" => matches ErrorKind::IriChar('>') ; "iri escaped closing bracket")]
    #[test_case("<a" => matches ErrorKind::IriUnterminated ; "iri unterminated")]
    #[test_case(r#""\x""# => matches ErrorKind::StringBadEscape ; "string bad escape")]
    #[test_case(r#""\uD800""# => matches ErrorKind::StringBadEscape ; "string surrogate")]
    #[test_case("\"a\nb\"" => matches ErrorKind::StringUnterminated ; "newline in short string")]
    #[test_case("'abc" => matches ErrorKind::StringUnterminated ; "short unterminated")]
    #[test_case(r#""""abc"# => matches ErrorKind::LongStringUnterminated ; "long unterminated")]
    #[test_case("@1" => matches ErrorKind::LangTag ; "lang tag digit")]
    #[test_case("@en-" => matches ErrorKind::LangTag ; "lang tag trailing dash")]
    #[test_case("@" => matches ErrorKind::LangTag ; "lone at")]
    #[test_case("+" => matches ErrorKind::Number ; "sign only")]
    #[test_case("-e5" => matches ErrorKind::Number ; "sign then exponent")]
    #[test_case("1e" => matches ErrorKind::Number ; "empty exponent")]
    #[test_case("1.5e+" => matches ErrorKind::Number ; "signed empty exponent")]
    #[test_case("ex.:a" => matches ErrorKind::PrefixEndsInDot ; "prefix ends in dot")]
    #[test_case(":-a" => matches ErrorKind::LocalStartsWithDash ; "local starts with dash")]
    #[test_case(":a%2" => matches ErrorKind::LocalBadHexEscape ; "short percent")]
    #[test_case(":a%zz" => matches ErrorKind::LocalBadHexEscape ; "bad percent")]
    #[test_case(r":a\x" => matches ErrorKind::LocalBadEscape ; "bad local escape")]
    #[test_case("_:" => matches ErrorKind::BnodeLabel ; "empty label")]
    #[test_case("_:-a" => matches ErrorKind::BnodeLabel ; "label starts with dash")]
    #[test_case("_:.a" => matches ErrorKind::BnodeLabel ; "label starts with dot")]
    #[test_case("_:\u{b7}a" => matches ErrorKind::BnodeLabel ; "label starts with middle dot")]
    #[test_case("_:\u{300}" => matches ErrorKind::BnodeLabel ; "label starts with combining mark")]
    #[test_case("^" => matches ErrorKind::UnexpectedChar('^') ; "lone caret")]
    #[test_case("{" => matches ErrorKind::UnexpectedChar('{') ; "curly")]
    #[test_case("=" => matches ErrorKind::UnexpectedChar('=') ; "equal")]
    #[test_case("~" => matches ErrorKind::UnexpectedChar('~') ; "tilde")]
    #[test_case("!" => matches ErrorKind::UnexpectedChar('!') ; "bang")]
    #[test_case("_a" => matches ErrorKind::UnexpectedChar('_') ; "underscore")]
    #[test_case("foo" => matches ErrorKind::UnknownKeyword(_) ; "unknown keyword")]
    #[test_case("A" => matches ErrorKind::UnknownKeyword(_) ; "uppercase a")]
    #[test_case("True" => matches ErrorKind::UnknownKeyword(_) ; "capitalized true")]
    fn lexical_errors(txt: &str) -> ErrorKind {
        let err = tokens(txt).unwrap_err();
        assert!(err.is_lexical());
        err.into_kind()
    }

    #[test]
    fn token_locations() -> Result<(), Error> {
        let mut lexer = Lexer::new("<s> :p\n  'o' .\r\n\u{e9}:x".as_bytes());
        let mut locs = vec![];
        loop {
            let tok = lexer.next_token()?;
            locs.push((tok.location.line, tok.location.col, tok.location.offset));
            if tok.kind.is_eof() {
                break;
            }
        }
        assert_eq!(
            locs,
            vec![(1, 1, 0), (1, 5, 4), (2, 3, 9), (2, 7, 13), (3, 1, 16), (3, 4, 20)]
        );
        // Eof is sticky
        assert!(lexer.next_token()?.kind.is_eof());
        Ok(())
    }

    #[test]
    fn bad_bnode_label_location() {
        let err = tokens("<s> <p>\n _:-a .").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::BnodeLabel));
        assert_eq!(err.location(), Location::new(2, 4, 11));
    }

    #[test]
    fn error_location() {
        let err = tokens("<s> <p>\n   <o o> .").unwrap_err();
        assert_eq!(err.location(), Location::new(2, 6, 13));
    }
}
