// Lexical primitives — a cursor over the input plus the matchers every
// lexer rule is built from.
//
// Parsers here are ordinary value-returning functions: given a `Cursor`,
// they return `Scanned<T>` — the parsed value and the advanced cursor, or a
// `ParseError` carrying a byte-accurate position. Sequencing is `?`,
// mapping is an expression, and alternation merges failures with
// `ParseError::furthest` so the deepest branch is the one reported.

use regex::Regex;

use crate::error::ParseError;

/// Result of a single parse step: the value plus the cursor after it.
pub(crate) type Scanned<'a, T> = Result<(T, Cursor<'a>), ParseError>;

/// ASCII whitespace as HTML defines it (TAB, LF, FF, CR, SPACE).
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// A position in the input. Copying is free; backtracking is holding on to
/// an earlier cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Byte offset from the start of the input.
    pub(crate) fn pos(&self) -> usize {
        self.offset
    }

    /// The unconsumed remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    pub(crate) fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// A failure at the current position.
    pub(crate) fn fail(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.offset)
    }

    fn advanced(self, bytes: usize) -> Self {
        Self {
            input: self.input,
            offset: self.offset + bytes,
        }
    }

    /// The next character, if any.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume an exact string.
    pub(crate) fn eat(self, s: &str) -> Option<Cursor<'a>> {
        self.rest().starts_with(s).then(|| self.advanced(s.len()))
    }

    /// Consume a string, ASCII case-insensitively. Compared byte-wise, so
    /// a prefix length landing inside a multi-byte character simply fails
    /// to match.
    pub(crate) fn eat_ci(self, s: &str) -> Option<Cursor<'a>> {
        let rest = self.rest().as_bytes();
        if rest.len() >= s.len() && rest[..s.len()].eq_ignore_ascii_case(s.as_bytes()) {
            Some(self.advanced(s.len()))
        } else {
            None
        }
    }

    pub(crate) fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Match an anchored regex at the cursor. Patterns must begin with `^`
    /// so the match cannot float past the current position.
    pub(crate) fn regex(self, re: &Regex) -> Option<(&'a str, Cursor<'a>)> {
        debug_assert!(re.as_str().starts_with('^'), "scan regexes must be anchored");
        let m = re.find(self.rest())?;
        Some((m.as_str(), self.advanced(m.end())))
    }

    /// Longest non-empty run of characters satisfying `pred`.
    pub(crate) fn take_while1(
        self,
        pred: impl Fn(char) -> bool,
    ) -> Option<(&'a str, Cursor<'a>)> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map_or(rest.len(), |(i, _)| i);
        if end == 0 {
            None
        } else {
            Some((&rest[..end], self.advanced(end)))
        }
    }

    /// Skip zero or more ASCII whitespace characters.
    pub(crate) fn whitespace(self) -> Cursor<'a> {
        match self.take_while1(is_whitespace) {
            Some((_, after)) => after,
            None => self,
        }
    }

    /// Skip one or more ASCII whitespace characters.
    pub(crate) fn whitespace1(self) -> Option<Cursor<'a>> {
        self.take_while1(is_whitespace).map(|(_, after)| after)
    }

    /// Succeed only at the end of the input.
    pub(crate) fn expect_end(self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.fail("Expected end of input"))
        }
    }
}

/// Apply `parser` greedily until it fails. Returns the collected values,
/// the cursor after the last success, and the failure that stopped the
/// loop (callers merge it into later failures so alternations still report
/// the deepest position).
pub(crate) fn many<'a, T>(
    mut at: Cursor<'a>,
    mut parser: impl FnMut(Cursor<'a>) -> Scanned<'a, T>,
) -> (Vec<T>, Cursor<'a>, ParseError) {
    let mut items = Vec::new();
    loop {
        match parser(at) {
            Ok((item, after)) => {
                // A parser that consumes nothing would loop forever.
                debug_assert!(after.pos() > at.pos(), "many: parser made no progress");
                items.push(item);
                at = after;
            }
            Err(stopped) => return (items, at, stopped),
        }
    }
}
