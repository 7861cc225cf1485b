//! # reclist
//!
//! A reader and writer for reclist, a human-readable, line-oriented record
//! format.
//!
//! ## What is a reclist?
//!
//! A reclist is a UTF-8 text file holding records. Each record has a type
//! and an ID, given by a header line, followed by `key: value` fields. Values
//! spanning several lines are quoted. Comments start with `#`; blank lines
//! and indentation are only there for reading ease.
//!
//! ```text
//! # Solar system objects
//! @star=Sun
//!     radius:  109.3
//!     descrip: "The Sun is the star at the center
//!         of the Solar System."
//!
//! @planet=Mars
//!     gravity: 0.38
//!     descrip: "Mars is often referred as
//!         the \"Red Planet\"."
//! ```
//!
//! See the [`format`] module for the full set of rules.
//!
//! ## Key Features
//!
//! - **Streaming**: [`Scanner`] reads one record at a time from any reader
//! - **Lenient**: malformed headers, keys without values and unterminated
//!   quotes are dropped or tolerated, never reported as errors
//! - **Round-trip**: [`Writer`] output scans back to the same records
//! - **Serde Compatible**: [`Record`] serializes as `{type, id, fields}`
//!
//! ## Quick Start
//!
//! ```rust
//! use reclist::{from_str, to_string};
//!
//! let input = "\
//! @planet=Mars
//!     gravity: 0.38
//!     descrip: \"Mars is often referred as
//!         the \\\"Red Planet\\\".\"
//! ";
//!
//! let records = from_str(input).unwrap();
//! assert_eq!(records[0].id(), "Mars");
//! assert_eq!(
//!     records[0].get("descrip"),
//!     "Mars is often referred as\nthe \"Red Planet\"."
//! );
//!
//! // Write back, then read again
//! let text = to_string(&records);
//! assert_eq!(from_str(&text).unwrap(), records);
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use reclist::{Scanner, Writer};
//!
//! let input = "@moon=Titan\nparent: Saturn\n@moon=Io\nparent: Jupiter\n";
//!
//! let mut writer = Writer::new(Vec::new());
//! for record in Scanner::from_str(input) {
//!     let record = record.unwrap();
//!     if record.get("parent") == "Jupiter" {
//!         writer.write_record(&record).unwrap();
//!     }
//! }
//! let out = writer.into_inner().unwrap();
//! assert_eq!(out, b"@moon=Io\n\tparent: Jupiter\n");
//! ```
//!
//! ## Errors
//!
//! Only faults of the underlying reader or sink, and invalid UTF-8 input,
//! are errors. They stop the scanner or writer for good; see [`Error`].
//!
//! ## Logging
//!
//! The crate reports dropped input and stopped scanners or writers through
//! [`tracing`] events. It never installs a subscriber.

pub mod error;
pub mod format;
mod fold;
pub mod macros;
pub mod map;
pub mod options;
mod reader;
pub mod record;
pub mod scanner;
pub mod writer;

pub use error::{Error, Result};
pub use map::FieldMap;
pub use options::{Indent, WriterOptions};
pub use record::{normalize_id, normalize_name, Record};
pub use scanner::Scanner;
pub use writer::Writer;

use std::io;

/// Reads every record of a string.
///
/// # Examples
///
/// ```rust
/// let records = reclist::from_str("@dwarf=Eris\nfamily: SDO\n").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("family"), "SDO");
/// ```
///
/// # Errors
///
/// A string cannot fail to read, so this only exists for symmetry with
/// [`from_reader`]; it never returns an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Vec<Record>> {
    Scanner::from_str(s).collect()
}

/// Reads every record of a byte slice.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Vec<Record>> {
    Scanner::from_buf_read(v).collect()
}

/// Reads every record of an I/O stream.
///
/// Prefer a [`Scanner`] for large inputs: it holds one record at a time.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let input = Cursor::new(b"@moon=Titan\nparent: Saturn\n".to_vec());
/// let records = reclist::from_reader(input).unwrap();
/// assert_eq!(records[0].get("parent"), "Saturn");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    Scanner::new(reader).collect()
}

/// Writes records to a string with default options.
///
/// Records without fields are skipped.
///
/// # Examples
///
/// ```rust
/// use reclist::{record, to_string};
///
/// let eris = record!("dwarf", "Eris", { "family" => "SDO", "mass" => "0.0028" }).unwrap();
/// assert_eq!(to_string([&eris]), "@dwarf=Eris\n\tfamily: SDO\n\tmass:\t0.0028\n");
/// ```
#[must_use]
pub fn to_string<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    to_string_with_options(records, &WriterOptions::default())
}

/// Writes records to a string with custom options.
#[must_use]
pub fn to_string_with_options<'a, I>(records: I, options: &WriterOptions) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = String::new();
    for record in records {
        writer::format_record(record, options, &mut out);
    }
    out
}

/// Writes records to an I/O sink with default options, then flushes it.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Record>,
{
    to_writer_with_options(writer, records, WriterOptions::default())
}

/// Writes records to an I/O sink with custom options, then flushes it.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<'a, W, I>(writer: W, records: I, options: WriterOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = Writer::with_options(writer, options);
    writer.write_all(records)?;
    writer.flush()
}
