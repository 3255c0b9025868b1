//! # Reader
//!
//! The scanning primitive every production in the engine is built on.
//!
//! A [`Reader`] borrows an immutable `&str` and walks it with a [`Cursor`].
//! It never copies the text: everything it returns is a slice of the input.
//!
//! ## Backtracking
//!
//! The reader never rewinds on its own. Callers that read speculatively save
//! [`Reader::cursor`] first and call [`Reader::restore`] when the production
//! fails (see [`attempt`](crate::parsing::readable::attempt)).

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::ReadError;

/// Stateful cursor over a borrowed text.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    s: &'a str,
    cur: Cursor,
}

impl<'a> Reader<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            cur: Cursor::default(),
        }
    }

    /// Returns the current position so it can be restored later.
    pub fn cursor(&self) -> Cursor {
        self.cur
    }

    /// Moves back (or forward) to a previously saved position.
    pub fn restore(&mut self, cursor: Cursor) {
        debug_assert!(cursor.offset() <= self.s.len());
        self.cur = cursor;
    }

    /// Current byte offset into the text.
    pub fn offset(&self) -> usize {
        self.cur.offset()
    }

    pub fn has_remaining(&self) -> bool {
        self.offset() < self.s.len()
    }

    /// The unread part of the text.
    pub fn remaining(&self) -> &'a str {
        &self.s[self.offset()..]
    }

    /// Peeks at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks `n` characters ahead (`peek_nth(0)` is [`peek`](Self::peek)).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes and returns the next character.
    pub fn read_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.advance(c.len_utf8());
        Some(c)
    }

    /// Consumes the next character only if it is `expected`.
    pub fn expect(&mut self, expected: char) -> Result<(), ReadError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c.len_utf8());
                Ok(())
            }
            found => Err(ReadError::UnexpectedCharacter {
                expected,
                found,
                offset: self.offset(),
            }),
        }
    }

    /// Reads everything up to the next `delimiter` and consumes the delimiter.
    ///
    /// The returned slice excludes the delimiter. Fails with
    /// [`ReadError::EndOfInput`] if the delimiter never appears.
    pub fn read_until(&mut self, delimiter: char) -> Result<&'a str, ReadError> {
        let rest = self.remaining();
        let Some(idx) = rest.find(delimiter) else {
            return Err(ReadError::EndOfInput {
                delimiter,
                offset: self.s.len(),
            });
        };
        self.advance(idx + delimiter.len_utf8());
        Ok(&rest[..idx])
    }

    /// Skips whitespace on the current line. Never fails.
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let skipped = rest
            .find(|c: char| !is_same_line_whitespace(c))
            .unwrap_or(rest.len());
        self.advance(skipped);
    }

    /// Reads the rest of the current line and consumes its terminator.
    ///
    /// The returned line excludes the `\n` (and a preceding `\r`). May be
    /// empty. Never fails.
    pub fn read_to_line_end(&mut self) -> &'a str {
        let rest = self.remaining();
        let (line, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.advance(consumed);
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Consumes a maximal run of `c` and returns its length in characters.
    pub fn count_run(&mut self, c: char) -> usize {
        let mut n = 0;
        while self.peek() == Some(c) {
            self.advance(c.len_utf8());
            n += 1;
        }
        n
    }

    fn advance(&mut self, bytes: usize) {
        self.cur = Cursor::at(self.offset() + bytes);
    }
}

fn is_same_line_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}
