//! Character cursor over an in-memory document

/// Position into the source text
///
/// The position is a byte offset that always sits on a char boundary.
/// Offsets passed to [`Cursor::peek`] and [`Cursor::advance`] count chars.
pub(crate) struct Cursor<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a str) -> Self {
        Self { data, pos: 0 }
    }

    /// Character at `position + offset`, or `None` past the end
    pub(crate) fn peek(&self, offset: usize) -> Option<char> {
        self.remaining().chars().nth(offset)
    }

    /// Unconsumed suffix of the document
    pub(crate) fn remaining(&self) -> &'a str {
        &self.data[self.pos..]
    }

    /// Move forward by `n` chars, stopping at end of input
    pub(crate) fn advance(&mut self, n: usize) {
        let rest = self.remaining();
        self.pos += match rest.char_indices().nth(n) {
            Some((idx, _)) => idx,
            None => rest.len(),
        };
    }

    /// Move forward by `n` bytes of the remaining text
    ///
    /// `n` must land on a char boundary of [`Cursor::remaining`].
    pub(crate) fn advance_bytes(&mut self, n: usize) {
        debug_assert!(self.remaining().is_char_boundary(n));
        self.pos += n;
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// True when the cursor sits on `\n` or `\r\n`
    pub(crate) fn at_newline(&self) -> bool {
        let rest = self.remaining();
        rest.starts_with('\n') || rest.starts_with("\r\n")
    }

    /// Consume `ch` if it is the next character
    pub(crate) fn eat(&mut self, ch: char) -> bool {
        if self.remaining().starts_with(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a `\r\n` or `\n` line break
    pub(crate) fn eat_newline(&mut self) -> bool {
        let rest = self.remaining();
        if rest.starts_with("\r\n") {
            self.pos += 2;
            true
        } else if rest.starts_with('\n') {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
