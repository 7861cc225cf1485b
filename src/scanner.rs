//! Reclist scanning.
//!
//! This module provides the [`Scanner`], a pull-based reader that turns a
//! character stream into [`Record`]s one at a time.
//!
//! ## Overview
//!
//! Each call to [`Scanner::next_record`] walks through three phases:
//!
//! - **Seeking a header**: lines are read until one holds a valid
//!   `@type=id` header. Blank lines, comments and anything else are skipped.
//! - **Reading fields**: `key: value` pairs are read until the next header or
//!   the end of the input. The next header is left unread.
//! - **Emitting**: a record with at least one field is returned; an empty one
//!   is dropped and the scanner seeks the next header.
//!
//! Malformed text is never an error. Only a fault of the underlying reader,
//! or invalid UTF-8, stops the scanner, and it stays stopped.
//!
//! ## Usage
//!
//! ```rust
//! use reclist::Scanner;
//!
//! let input = "@moon=Titan\n\tradius:\t0.4043\n\tparent: Saturn\n";
//!
//! let mut scanner = Scanner::from_str(input);
//! let titan = scanner.next_record().unwrap().unwrap();
//! assert_eq!(titan.id(), "Titan");
//! assert_eq!(titan.get("parent"), "Saturn");
//!
//! assert!(scanner.next_record().unwrap().is_none());
//! assert!(scanner.err().is_none());
//! ```
//!
//! A scanner is also an iterator of `Result<Record>`:
//!
//! ```rust
//! use reclist::Scanner;
//!
//! let input = "@star=Sun\nmass: 333000\n@moon=Titan\nparent: Saturn\n";
//! let ids: Vec<String> = Scanner::from_str(input)
//!     .map(|rec| rec.unwrap().id().to_string())
//!     .collect();
//! assert_eq!(ids, vec!["Sun", "Titan"]);
//! ```

use crate::format::{
    COMMENT_MARK, ESCAPE, HEADER_MARK, KEY_SEPARATOR, QUOTE, TYPE_SEPARATOR,
};
use crate::fold::{Fold, Gap};
use crate::reader::CharReader;
use crate::{Error, Record, Result};
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, trace, warn};

/// Reads records from a reclist encoded stream.
///
/// Created with [`Scanner::new`] over any reader, [`Scanner::from_buf_read`]
/// over an already buffered one, or [`Scanner::from_str`].
pub struct Scanner<R> {
    cursor: Cursor<R>,
    state: State,
    records: usize,
}

enum State {
    Open,
    Exhausted,
    Failed(Error),
}

/// Steps of a single scan.
enum Phase {
    SeekHeader,
    ReadingFields(Record),
    Emit(Record),
    Eof,
    Fault(Error),
}

impl<R: Read> Scanner<BufReader<R>> {
    /// Creates a scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Scanner::from_buf_read(BufReader::new(reader))
    }

    /// Creates a scanner with an input buffer of `capacity` bytes.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Scanner::from_buf_read(BufReader::with_capacity(capacity, reader))
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Scanner::from_buf_read(input.as_bytes())
    }
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner reading from a buffered reader.
    pub fn from_buf_read(reader: R) -> Self {
        Scanner {
            cursor: Cursor::new(reader),
            state: State::Open,
            records: 0,
        }
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` at the end of the input. A read fault is returned
    /// once; after it, and after the end of the input, every call returns
    /// `Ok(None)` and [`err`](Self::err) tells the two apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails or the input is not
    /// valid UTF-8.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if !matches!(self.state, State::Open) {
            return Ok(None);
        }

        let mut phase = Phase::SeekHeader;
        loop {
            phase = match phase {
                Phase::SeekHeader => match self.cursor.seek_header() {
                    Ok(Some(record)) => Phase::ReadingFields(record),
                    Ok(None) => Phase::Eof,
                    Err(err) => Phase::Fault(err),
                },
                Phase::ReadingFields(mut record) => {
                    self.cursor.read_fields(&mut record);
                    Phase::Emit(record)
                }
                Phase::Emit(record) => {
                    if record.is_empty() {
                        debug!(
                            kind = record.kind(),
                            id = record.id(),
                            line = self.cursor.line(),
                            "discarding record without fields"
                        );
                        Phase::SeekHeader
                    } else {
                        self.records += 1;
                        return Ok(Some(record));
                    }
                }
                Phase::Eof => {
                    debug!(records = self.records, "end of reclist input");
                    self.state = State::Exhausted;
                    return Ok(None);
                }
                Phase::Fault(err) => {
                    warn!(error = %err, "reclist scanner stopped");
                    self.state = State::Failed(err.clone());
                    return Err(err);
                }
            };
        }
    }

    /// Returns the fault that stopped the scanner, if any.
    ///
    /// `None` after the end of the input means all records were read.
    #[must_use]
    pub fn err(&self) -> Option<&Error> {
        match &self.state {
            State::Failed(err) => Some(err),
            State::Open | State::Exhausted => None,
        }
    }

    /// Returns the current input line, starting at 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Returns the number of records returned so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Result of reading a key.
#[derive(Debug, PartialEq, Eq)]
enum Key {
    /// A key terminated by the key separator.
    Field(String),
    /// A line without a key separator.
    Skip,
    /// A header begins; it is left unread.
    NextRecord,
    End,
}

/// Per-scan state: the input and a scratch buffer reused for every token.
struct Cursor<R> {
    input: CharReader<R>,
    scratch: String,
}

impl<R: BufRead> Cursor<R> {
    fn new(reader: R) -> Self {
        Cursor {
            input: CharReader::new(reader),
            scratch: String::with_capacity(256),
        }
    }

    fn line(&self) -> usize {
        self.input.line()
    }

    /// Reads lines until one is a valid header, returning its empty record.
    fn seek_header(&mut self) -> Result<Option<Record>> {
        loop {
            let line = self.input.line();
            if !self.read_line()? {
                return Ok(None);
            }

            let text = self.scratch.trim();
            if text.is_empty() || text.starts_with(COMMENT_MARK) {
                continue;
            }
            let header = match text.strip_prefix(HEADER_MARK) {
                Some(header) => header,
                None => {
                    trace!(line, "skipping line outside of a record");
                    continue;
                }
            };
            match header.find(TYPE_SEPARATOR) {
                Some(at) if at > 0 => {
                    let kind = &header[..at];
                    let id = &header[at + TYPE_SEPARATOR.len_utf8()..];
                    match Record::new(kind, id) {
                        Some(record) => return Ok(Some(record)),
                        None => trace!(line, "skipping header without type or ID"),
                    }
                }
                _ => trace!(line, "skipping header without type"),
            }
        }
    }

    /// Reads one line into the scratch buffer, without its newline.
    ///
    /// Returns `false` at the end of the input. A last line without a newline
    /// is dropped: it can only be a header without fields.
    fn read_line(&mut self) -> Result<bool> {
        self.scratch.clear();
        loop {
            match self.input.read_char()? {
                Some('\n') => return Ok(true),
                Some(ch) => self.scratch.push(ch),
                None => return Ok(false),
            }
        }
    }

    /// Reads fields into `record` until the next header or the end of input.
    fn read_fields(&mut self, record: &mut Record) {
        loop {
            match self.parse_key() {
                Key::Field(key) => {
                    if let Some(value) = self.parse_value() {
                        record.set(&key, &value);
                    }
                }
                Key::Skip => continue,
                Key::NextRecord | Key::End => return,
            }
        }
    }

    fn parse_key(&mut self) -> Key {
        loop {
            let ch = match self.input.next_char() {
                Some(ch) => ch,
                None => return Key::End,
            };
            if ch.is_whitespace() {
                continue;
            }
            if ch == COMMENT_MARK {
                self.skip_line();
                continue;
            }
            self.input.unread(ch);
            if ch == HEADER_MARK {
                return Key::NextRecord;
            }
            break;
        }

        self.scratch.clear();
        let mut space = false;
        loop {
            let ch = match self.input.next_char() {
                Some(ch) => ch,
                None => return Key::End,
            };
            if ch == '\n' {
                return Key::Skip;
            }
            if ch.is_whitespace() {
                space = true;
                continue;
            }
            if ch == KEY_SEPARATOR {
                return Key::Field(self.scratch.clone());
            }
            if space {
                self.scratch.push('-');
                space = false;
            }
            self.scratch.push(ch);
        }
    }

    /// Reads a value. `None` means there is nothing to set.
    fn parse_value(&mut self) -> Option<String> {
        let first = loop {
            match self.input.next_char()? {
                '\n' => return None,
                ch if ch.is_whitespace() => continue,
                ch => break ch,
            }
        };
        if first == QUOTE {
            return Some(self.parse_quoted());
        }

        self.scratch.clear();
        self.scratch.push(first);
        while let Some(ch) = self.input.next_char() {
            if ch == '\n' {
                break;
            }
            self.scratch.push(ch);
        }
        Some(self.scratch.clone())
    }

    /// Reads a quoted value, after its opening quote.
    fn parse_quoted(&mut self) -> String {
        self.scratch.clear();
        let mut fold = Fold::Start;
        while let Some(ch) = self.input.next_char() {
            let ch = match ch {
                '\n' => {
                    fold = fold.newline();
                    continue;
                }
                QUOTE => return self.scratch.clone(),
                ESCAPE => match self.input.next_char() {
                    Some(escaped) => escaped,
                    None => break,
                },
                ch if ch.is_whitespace() => {
                    fold = fold.space();
                    continue;
                }
                ch => ch,
            };

            let (gap, next) = fold.content();
            match gap {
                Gap::None => {}
                Gap::Space => self.scratch.push(' '),
                Gap::Break => self.scratch.push('\n'),
            }
            self.scratch.push(ch);
            fold = next;
        }
        trace!(line = self.input.line(), "quoted value runs to the end of input");
        self.scratch.clone()
    }

    fn skip_line(&mut self) {
        while let Some(ch) = self.input.next_char() {
            if ch == '\n' {
                return;
            }
        }
    }
}
