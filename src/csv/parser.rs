//! Cell, row and table scanning
//!
//! Quoting follows RFC 4180 with one tolerance: inside a qualified cell, a
//! qualifier that is neither doubled nor followed by a delimiter, a line
//! break or end of input is kept as literal text. `"s"i"x"` reads as `s"i"x`.

use std::borrow::Cow;

use tracing::debug;

use super::cursor::Cursor;
use super::options::CsvOptions;
use super::scalar::coerce;
use crate::error::{CsvError, Result};
use crate::types::{CellValue, Row};

/// Splits one in-memory document into rows of typed cells
pub(crate) struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    options: CsvOptions,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(data: &'a str, options: CsvOptions) -> Self {
        Self {
            cursor: Cursor::new(data),
            options,
        }
    }

    /// Read every row, applying the strict or lenient width policy
    ///
    /// Reading stops at end of input or at an empty line.
    pub(crate) fn read_table(mut self) -> Result<Vec<Row>> {
        let Some(first) = self.read_row() else {
            return Ok(Vec::new());
        };

        let width = first.len();
        let mut rows = vec![first];

        while self.cursor.eat_newline() {
            let Some(mut row) = self.read_row() else {
                break;
            };

            if self.options.strict {
                if row.len() < width {
                    row.resize(width, CellValue::empty());
                }

                if row.len() != width {
                    debug!(
                        row = rows.len(),
                        expected = width,
                        found = row.len(),
                        "rejecting row with mismatched width"
                    );
                    return Err(CsvError::MalformedData {
                        row: rows.len(),
                        expected: width,
                        found: row.len(),
                    });
                }
            }

            rows.push(row);
        }

        Ok(rows)
    }

    /// Read cells until the next line break, or `None` if there is no row here
    fn read_row(&mut self) -> Option<Row> {
        if self.cursor.is_at_end() || self.cursor.at_newline() {
            return None;
        }

        let mut row = vec![self.read_cell()];
        while self.cursor.eat(self.options.delimiter) {
            row.push(self.read_cell());
        }

        Some(row)
    }

    /// Read one cell, leaving the cursor on the following delimiter or line break
    fn read_cell(&mut self) -> CellValue {
        if self.cursor.is_at_end() || self.cursor.at_newline() {
            return CellValue::empty();
        }

        if self.options.trim {
            self.skip_whitespace();
        }

        let raw: Cow<'a, str> = if self.cursor.peek(0) == Some(self.options.qualifier) {
            Cow::Owned(self.read_qualified())
        } else {
            Cow::Borrowed(self.read_unqualified())
        };

        if self.options.trim {
            coerce(raw.trim_matches(is_whitespace))
        } else {
            coerce(&raw)
        }
    }

    /// Skip leading whitespace, never crossing a delimiter or line break
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.peek(0) {
            if !is_whitespace(c) || c == self.options.delimiter || self.cursor.at_newline() {
                break;
            }
            self.cursor.advance_bytes(c.len_utf8());
        }
    }

    fn read_qualified(&mut self) -> String {
        let qualifier = self.options.qualifier;
        let mut cell = String::new();

        // opening qualifier
        self.cursor.advance(1);

        while let Some(c) = self.cursor.peek(0) {
            self.cursor.advance_bytes(c.len_utf8());

            if c != qualifier {
                cell.push(c);
                continue;
            }

            match self.cursor.peek(0) {
                Some(next) if next == qualifier => {
                    cell.push(qualifier);
                    self.cursor.advance_bytes(next.len_utf8());
                }
                None => break,
                Some(next) if next == self.options.delimiter || self.cursor.at_newline() => break,
                Some(_) => cell.push(qualifier),
            }
        }

        cell
    }

    fn read_unqualified(&mut self) -> &'a str {
        let rest = self.cursor.remaining();
        let delimiter = self.options.delimiter;

        let end = rest
            .char_indices()
            .find(|&(i, c)| {
                c == delimiter || c == '\n' || (c == '\r' && rest[i + 1..].starts_with('\n'))
            })
            .map_or(rest.len(), |(i, _)| i);

        self.cursor.advance_bytes(end);
        &rest[..end]
    }
}

fn is_whitespace(c: char) -> bool {
    // byte-order marks count as whitespace
    c.is_whitespace() || c == '\u{feff}'
}
