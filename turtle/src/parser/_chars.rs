//! Character class predicates of the Turtle grammar.

/// ```text
/// PN_CHARS_BASE ::= [A-Z] | [a-z] | [#x00C0-#x00D6] | [#x00D8-#x00F6]
///                 | [#x00F8-#x02FF] | [#x0370-#x037D] | [#x037F-#x1FFF]
///                 | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF]
///                 | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD]
///                 | [#x10000-#xEFFFF]
/// ```
pub fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z' |
        'a'..='z' |
        '\u{00C0}'..='\u{00D6}' |
        '\u{00D8}'..='\u{00F6}' |
        '\u{00F8}'..='\u{02FF}' |
        '\u{0370}'..='\u{037D}' |
        '\u{037F}'..='\u{1FFF}' |
        '\u{200C}'..='\u{200D}' |
        '\u{2070}'..='\u{218F}' |
        '\u{2C00}'..='\u{2FEF}' |
        '\u{3001}'..='\u{D7FF}' |
        '\u{F900}'..='\u{FDCF}' |
        '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{EFFFF}'
    )
}

/// `PN_CHARS_U ::= PN_CHARS_BASE | '_'`
pub fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

/// `PN_CHARS ::= PN_CHARS_U | '-' | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040]`
pub fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || c == '\u{00B7}'
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// Characters that may follow a `\` in a local name.
///
/// `PN_LOCAL_ESC ::= '\' ('_' | '~' | '.' | '-' | '!' | '$' | '&' | "'" | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '/' | '?' | '#' | '@' | '%')`
pub fn is_pn_local_esc(c: char) -> bool {
    matches!(
        c,
        '_' | '~'
            | '.'
            | '-'
            | '!'
            | '$'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | ';'
            | '='
            | '/'
            | '?'
            | '#'
            | '@'
            | '%'
    )
}

/// `WS ::= #x20 | #x9 | #xD | #xA`
pub fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters excluded from `IRIREF` (other than `>` and `\`, which are handled separately).
///
/// ```text
/// IRIREF ::= '<' ([^#x00-#x20<>"{}|^`\] | UCHAR)* '>'
/// ```
pub fn is_iri_forbidden(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{20}' | '<' | '"' | '{' | '}' | '|' | '^' | '`')
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case('a', true, true, true)]
    #[test_case('_', false, true, true)]
    #[test_case('-', false, false, true)]
    #[test_case('7', false, false, true)]
    #[test_case('\u{00B7}', false, false, true)]
    #[test_case('\u{00E9}', true, true, true)]
    #[test_case('.', false, false, false)]
    #[test_case(':', false, false, false)]
    #[test_case('~', false, false, false)]
    fn pn_chars(c: char, base: bool, u: bool, chars: bool) {
        assert_eq!(is_pn_chars_base(c), base);
        assert_eq!(is_pn_chars_u(c), u);
        assert_eq!(is_pn_chars(c), chars);
    }

    #[test]
    fn iri_forbidden() {
        for c in [' ', '\n', '\u{0}', '<', '"', '{', '}', '|', '^', '`'] {
            assert!(is_iri_forbidden(c), "{c:?}");
        }
        for c in ['a', '%', '#', '~', '\u{E9}'] {
            assert!(!is_iri_forbidden(c), "{c:?}");
        }
    }
}
