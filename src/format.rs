//! Reclist Format
//!
//! This module documents the reclist text format as implemented by this
//! library, and holds the syntax characters shared by the
//! [`Scanner`](crate::Scanner) and the [`Writer`](crate::Writer).
//!
//! # Overview
//!
//! A reclist is a UTF-8 text file holding a list of records. It is inspired
//! by the record-jar format described by E. Raymond in "The Art of Unix
//! Programming", by the list format of flat text databases such as
//! C. Strozzi's NoSQL, and by BibTeX.
//!
//! # Records
//!
//! Each record starts with a header line made of an at sign, the record type,
//! an equal sign and the record ID:
//!
//! ```text
//! @planet=Mars
//! ```
//!
//! **Rules**:
//! - The type is case-insensitive. It is stored lower-cased, with runs of
//!   whitespace replaced by a single hyphen (`@Gas Giant=X` has type
//!   `gas-giant`).
//! - The ID keeps its case. Runs of whitespace are collapsed to one space.
//! - A header with an empty type or ID (`@=Mars`, `@planet=`) is not a
//!   header. The line is ignored.
//! - A record ends at the next header or at the end of the input. Records
//!   without fields are dropped.
//!
//! # Fields
//!
//! Fields are `key: value` lines:
//!
//! ```text
//!     radius:  0.5320
//!     gravity: 0.38
//! ```
//!
//! **Rules**:
//! - Keys are case-insensitive, stored lower-cased, with runs of whitespace
//!   replaced by a hyphen (`Orbital   Period:` is `orbital-period`).
//! - Leading whitespace before the key and before the value is ignored.
//! - An unquoted value runs to the end of the line and is taken literally,
//!   then trimmed.
//! - A key line without a colon, or a key without a value, is ignored.
//! - Setting the same key twice keeps the last value.
//!
//! # Quoted Values
//!
//! Values that span several lines are enclosed in quotation marks:
//!
//! ```text
//!     descrip: "Mars is often referred as
//!         the \"Red Planet\".
//!
//!         It has two   moons."
//! ```
//!
//! **Rules**:
//! - `\"` is a quotation mark and `\\` a backslash; in general a backslash
//!   keeps the next character literally.
//! - A line break between content reads as a single newline, whatever
//!   indentation or blank lines follow it.
//! - Any other run of whitespace reads as a single space; leading and
//!   trailing whitespace is dropped.
//! - A missing closing quote is tolerated: the value runs to the end of the
//!   input.
//!
//! The value above reads as
//! `Mars is often referred as\nthe "Red Planet".\nIt has two moons.`
//!
//! # Comments and Blank Lines
//!
//! Lines whose first non-blank character is `#` are comments. Comments and
//! blank lines are ignored between records and between fields.
//!
//! # Line Endings
//!
//! Both `\n` and `\r\n` end a line. A lone `\r` is an ordinary character.
//!
//! # Writing
//!
//! The writer emits fields sorted by key, one per line, indented by a tab.
//! Keys shorter than [`ALIGN_WIDTH`] are followed by `:` and a tab, longer
//! keys by `:` and a space. Values containing a newline are quoted; every
//! newline starts a continuation line indented by two tabs, so that
//! scanning the output gives back the same value.
//! Fields whose key contains `:` or starts with `#` or `@` would not scan
//! back, so the writer leaves them out.
//!
//! ```text
//! @planet=Mars
//!     descrip: "Mars is often referred as
//!         the \"Red Planet\".
//!         It has two moons."
//!     gravity: 0.38
//!     radius: 0.5320
//! ```

/// Starts a record header.
pub const HEADER_MARK: char = '@';

/// Separates the record type from the ID in a header.
pub const TYPE_SEPARATOR: char = '=';

/// Separates a key from its value.
pub const KEY_SEPARATOR: char = ':';

/// Starts a comment line.
pub const COMMENT_MARK: char = '#';

/// Encloses a quoted value.
pub const QUOTE: char = '"';

/// Escapes the next character inside a quoted value.
pub const ESCAPE: char = '\\';

/// Keys shorter than this are aligned with a tab after the colon.
pub const ALIGN_WIDTH: usize = 6;
