//! Character-level input for the scanner.
//!
//! [`CharReader`] decodes UTF-8 from a buffered reader one character at a
//! time, folds `\r\n` into `\n`, keeps a single character of pushback and
//! counts lines. A fault of the underlying reader, or invalid UTF-8, is
//! remembered and returned again by every later read.

use crate::{Error, Result};
use std::io::{self, BufRead};

pub(crate) struct CharReader<R> {
    inner: R,
    pushback: Option<char>,
    line: usize,
    fault: Option<Error>,
}

impl<R: BufRead> CharReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        CharReader {
            inner,
            pushback: None,
            line: 1,
            fault: None,
        }
    }

    /// Current line, starting at 1.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Reads the next character. `Ok(None)` is the end of the input.
    pub(crate) fn read_char(&mut self) -> Result<Option<char>> {
        let ch = match self.raw_char()? {
            Some('\r') => match self.raw_char()? {
                Some('\n') => Some('\n'),
                Some(next) => {
                    self.pushback = Some(next);
                    Some('\r')
                }
                None => Some('\r'),
            },
            ch => ch,
        };
        if ch == Some('\n') {
            self.line += 1;
        }
        Ok(ch)
    }

    /// Reads the next character, treating a fault as the end of the input.
    ///
    /// The fault is kept and surfaces on the next [`read_char`](Self::read_char).
    pub(crate) fn next_char(&mut self) -> Option<char> {
        self.read_char().ok().flatten()
    }

    /// Pushes back the character returned by the last read.
    pub(crate) fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "only one character of pushback");
        if ch == '\n' {
            self.line -= 1;
        }
        self.pushback = Some(ch);
    }

    fn raw_char(&mut self) -> Result<Option<char>> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let lead = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(self.fail_encoding(format!("invalid leading byte 0x{:02x}", lead)));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.next_byte()? {
                Some(byte) => *slot = byte,
                None => return Err(self.fail_encoding("input ends inside a character")),
            }
        }
        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(e) => Err(self.fail_encoding(e)),
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        loop {
            let result = match self.inner.fill_buf() {
                Ok(buf) => Ok(buf.first().copied()),
                Err(e) => Err(e),
            };
            match result {
                Ok(Some(byte)) => {
                    self.inner.consume(1);
                    return Ok(Some(byte));
                }
                Ok(None) => return Ok(None),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    let fault = Error::read(self.line, e);
                    self.fault = Some(fault.clone());
                    return Err(fault);
                }
            }
        }
    }

    fn fail_encoding<T: std::fmt::Display>(&mut self, msg: T) -> Error {
        let fault = Error::encoding(self.line, msg);
        self.fault = Some(fault.clone());
        fault
    }
}

/// Length of the UTF-8 sequence starting with `lead`, or 0 if `lead` cannot
/// start one.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}
