//! Reclist writing.
//!
//! This module provides the [`Writer`], which appends records to a byte sink
//! in the layout described in [`format`](crate::format).
//!
//! ## Layout
//!
//! - The header is `@type=id`.
//! - Fields follow sorted by key, one per line, each line indented.
//! - Values without a newline are written as they are.
//! - Values with a newline are quoted. Whitespace runs are written as one
//!   space, quotes and backslashes are escaped, and each newline starts an
//!   indented continuation line. Scanning the output gives back the same
//!   value.
//! - Fields whose key cannot be scanned back are skipped: keys containing
//!   `:` and keys starting with `#` or `@`.
//!
//! ## Usage
//!
//! ```rust
//! use reclist::{Record, Writer};
//!
//! let mut mars = Record::new("planet", "Mars").unwrap();
//! mars.set("gravity", "0.38");
//! mars.set("descrip", "The \"Red Planet\".\nIt has two moons.");
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_record(&mars).unwrap();
//! let out = writer.into_inner().unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "@planet=Mars\n\
//!      \tdescrip: \"The \\\"Red Planet\\\".\n\
//!      \t\tIt has two moons.\"\n\
//!      \tgravity: 0.38\n"
//! );
//! ```

use crate::format::{COMMENT_MARK, ESCAPE, HEADER_MARK, KEY_SEPARATOR, QUOTE, TYPE_SEPARATOR};
use crate::fold::{Fold, Gap};
use crate::{Error, Record, Result, WriterOptions};
use std::io::{BufWriter, Write};
use tracing::warn;

/// Writes records to a reclist encoded sink.
///
/// Output is buffered; call [`flush`](Self::flush) or
/// [`into_inner`](Self::into_inner) when done. The first fault of the sink
/// stops the writer: every later call returns the same error.
pub struct Writer<W: Write> {
    inner: BufWriter<W>,
    options: WriterOptions,
    scratch: String,
    records: usize,
    error: Option<Error>,
}

impl<W: Write> Writer<W> {
    /// Creates a writer with default options.
    pub fn new(inner: W) -> Self {
        Writer::with_options(inner, WriterOptions::default())
    }

    /// Creates a writer with custom options.
    pub fn with_options(inner: W, options: WriterOptions) -> Self {
        Writer {
            inner: BufWriter::with_capacity(options.capacity, inner),
            options,
            scratch: String::with_capacity(256),
            records: 0,
            error: None,
        }
    }

    /// Writes a single record.
    ///
    /// A record without fields, or whose keys cannot be written, is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails, now or on an earlier call.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.scratch.clear();
        if !format_record(record, &self.options, &mut self.scratch) {
            return Ok(());
        }
        if let Err(e) = self.inner.write_all(self.scratch.as_bytes()) {
            return Err(self.fail(e));
        }
        self.records += 1;
        Ok(())
    }

    /// Writes every record of `records`.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`write_record`](Self::write_record).
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Writes any buffered data to the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails, now or on an earlier call.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if let Err(e) = self.inner.flush() {
            return Err(self.fail(e));
        }
        Ok(())
    }

    /// Returns the error that stopped the writer, if any.
    #[must_use]
    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns the number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records
    }

    /// Flushes the writer and returns the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails or the writer was already stopped.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        self.inner.into_inner().map_err(|e| Error::write(e.error()))
    }

    fn fail(&mut self, e: std::io::Error) -> Error {
        let err = Error::write(e);
        warn!(error = %err, records = self.records, "reclist writer stopped");
        self.error = Some(err.clone());
        err
    }
}

/// Appends the text of `record` to `out`.
///
/// Returns `false`, leaving `out` untouched, if the record has no field
/// that can be written.
pub(crate) fn format_record(record: &Record, options: &WriterOptions, out: &mut String) -> bool {
    if record.kind().is_empty() || record.id().is_empty() {
        return false;
    }
    if !record.fields().any(|(key, value)| !value.is_empty() && is_writable_key(key)) {
        return false;
    }

    out.push(HEADER_MARK);
    out.push_str(record.kind());
    out.push(TYPE_SEPARATOR);
    out.push_str(record.id());
    out.push('\n');

    for (key, value) in record.fields() {
        if value.is_empty() || !is_writable_key(key) {
            continue;
        }
        options.indent.push_to(out);
        out.push_str(key);
        out.push(KEY_SEPARATOR);
        if key.len() < options.align_width {
            out.push('\t');
        } else {
            out.push(' ');
        }

        if needs_quotes(value) {
            push_quoted(value, options, out);
        } else {
            out.push_str(value);
        }
        out.push('\n');
    }
    true
}

/// Keys the scanner would split, read as a comment or read as a header.
fn is_writable_key(key: &str) -> bool {
    !key.starts_with(COMMENT_MARK)
        && !key.starts_with(HEADER_MARK)
        && !key.contains(KEY_SEPARATOR)
}

/// A value starting with a quote would scan back as a quoted value.
fn needs_quotes(value: &str) -> bool {
    value.contains('\n') || value.starts_with(QUOTE)
}

fn push_quoted(value: &str, options: &WriterOptions, out: &mut String) {
    out.push(QUOTE);
    let mut fold = Fold::Start;
    for ch in value.chars() {
        if ch == '\n' {
            fold = fold.newline();
            continue;
        }
        if ch.is_whitespace() {
            fold = fold.space();
            continue;
        }

        let (gap, next) = fold.content();
        match gap {
            Gap::None => {}
            Gap::Space => out.push(' '),
            Gap::Break => {
                out.push('\n');
                options.indent.push_to(out);
                options.indent.push_to(out);
            }
        }
        if ch == QUOTE || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
        fold = next;
    }
    out.push(QUOTE);
}
