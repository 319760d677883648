//! I define [`RuneSource`],
//! which decodes UTF-8 characters from a [`BufRead`] on demand.

use super::{Error, ErrorKind, Location};
use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind as IoErrorKind};

/// A stream of characters read from a [`BufRead`],
/// with a bounded lookahead and position tracking.
///
/// `\n`, `\r` and `\r\n` all count as a single line break.
#[derive(Debug)]
pub struct RuneSource<R> {
    reader: R,
    /// decoded but not yet consumed characters, with their location
    lookahead: VecDeque<(char, Location)>,
    /// location of the next character to decode
    read_location: Location,
    after_cr: bool,
}

impl<R: BufRead> RuneSource<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        RuneSource {
            reader,
            lookahead: VecDeque::with_capacity(4),
            read_location: Location::START,
            after_cr: false,
        }
    }

    /// The location of the next character.
    pub fn location(&self) -> Location {
        self.lookahead
            .front()
            .map(|(_, loc)| *loc)
            .unwrap_or(self.read_location)
    }

    /// The next character, without consuming it, or `None` at the end of the input.
    pub fn peek(&mut self) -> Result<Option<char>, Error> {
        self.peek_nth(0)
    }

    /// The `n`-th next character (starting at 0), without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Result<Option<char>, Error> {
        while self.lookahead.len() <= n {
            let loc = self.read_location;
            match self.decode()? {
                Some(c) => self.lookahead.push_back((c, loc)),
                None => return Ok(None),
            }
        }
        Ok(Some(self.lookahead[n].0))
    }

    /// Consume and return the next character, or `None` at the end of the input.
    pub fn advance(&mut self) -> Result<Option<char>, Error> {
        self.peek()?;
        Ok(self.lookahead.pop_front().map(|(c, _)| c))
    }

    /// Consume the next character if it is `c`.
    pub fn advance_if(&mut self, c: char) -> Result<bool, Error> {
        if self.peek()? == Some(c) {
            self.lookahead.pop_front();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn decode(&mut self) -> Result<Option<char>, Error> {
        let loc = self.read_location;
        let first = match self.next_byte().map_err(|e| Error::new(e, loc))? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(Error::new(ErrorKind::InvalidUtf8, loc)),
        };
        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.next_byte().map_err(|e| Error::new(e, loc))? {
                Some(b) => *slot = b,
                None => return Err(Error::new(ErrorKind::InvalidUtf8, loc)),
            }
        }
        let c = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| Error::new(ErrorKind::InvalidUtf8, loc))?;
        self.track(c);
        Ok(Some(c))
    }

    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let b = buf[0];
                    self.reader.consume(1);
                    return Ok(Some(b));
                }
                Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn track(&mut self, c: char) {
        let loc = &mut self.read_location;
        loc.offset += c.len_utf8();
        match c {
            '\n' if self.after_cr => {}
            '\n' | '\r' => {
                loc.line += 1;
                loc.col = 1;
            }
            _ => loc.col += 1,
        }
        self.after_cr = c == '\r';
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars<R: BufRead>(src: &mut RuneSource<R>) -> Result<String, Error> {
        let mut ret = String::new();
        while let Some(c) = src.advance()? {
            ret.push(c);
        }
        Ok(ret)
    }

    #[test]
    fn decodes_multibyte() -> Result<(), Error> {
        let txt = "a\u{e9}\u{20ac}\u{1F600}z";
        let mut src = RuneSource::new(txt.as_bytes());
        assert_eq!(chars(&mut src)?, txt);
        assert_eq!(src.location(), Location::new(1, 6, txt.len()));
        Ok(())
    }

    #[test]
    fn peek_does_not_consume() -> Result<(), Error> {
        let mut src = RuneSource::new("abc".as_bytes());
        assert_eq!(src.peek_nth(2)?, Some('c'));
        assert_eq!(src.peek_nth(3)?, None);
        assert_eq!(src.peek()?, Some('a'));
        assert_eq!(src.location(), Location::START);
        assert!(!src.advance_if('b')?);
        assert!(src.advance_if('a')?);
        assert_eq!(src.location(), Location::new(1, 2, 1));
        assert_eq!(chars(&mut src)?, "bc");
        assert_eq!(src.advance()?, None);
        Ok(())
    }

    #[test]
    fn line_breaks() -> Result<(), Error> {
        let mut src = RuneSource::new("a\nb\r\nc\rd".as_bytes());
        let mut locations = vec![];
        while src.peek()?.is_some() {
            locations.push(src.location());
            src.advance()?;
        }
        let lico: Vec<_> = locations.iter().map(|l| (l.line, l.col)).collect();
        assert_eq!(
            lico,
            vec![
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 2),
                (2, 3),
                (3, 1),
                (3, 2),
                (4, 1)
            ]
        );
        assert_eq!(locations[7].offset, 7);
        Ok(())
    }

    #[test]
    fn invalid_utf8() {
        let bytes: &[u8] = b"ab\xFFc";
        let mut src = RuneSource::new(bytes);
        assert_eq!(src.advance().unwrap(), Some('a'));
        let err = src.peek_nth(1).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidUtf8));
        assert_eq!(err.location(), Location::new(1, 3, 2));
    }

    #[test]
    fn truncated_sequence() {
        let bytes: &[u8] = b"a\xE2\x82";
        let mut src = RuneSource::new(bytes);
        assert_eq!(src.advance().unwrap(), Some('a'));
        assert!(matches!(
            src.advance().unwrap_err().kind(),
            ErrorKind::InvalidUtf8
        ));
    }

    #[test]
    fn sequence_split_across_buffers() -> Result<(), Error> {
        let txt = "\u{e9}t\u{e9}";
        let reader = std::io::BufReader::with_capacity(1, txt.as_bytes());
        let mut src = RuneSource::new(reader);
        assert_eq!(chars(&mut src)?, txt);
        Ok(())
    }
}
