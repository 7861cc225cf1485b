//! Configuration options for writing reclists.
//!
//! This module provides types to customize the layout of the
//! [`Writer`](crate::Writer) output:
//!
//! - [`WriterOptions`]: Main configuration struct
//! - [`Indent`]: Prefix of field lines
//!
//! The choice between a plain and a quoted value is not configurable: values
//! containing a newline are always quoted.
//!
//! ## Examples
//!
//! ```rust
//! use reclist::{record, to_string_with_options, Indent, WriterOptions};
//!
//! let moon = record!("moon", "Titan", { "parent" => "Saturn" }).unwrap();
//!
//! let options = WriterOptions::new().with_indent(Indent::None);
//! assert_eq!(
//!     to_string_with_options([&moon], &options),
//!     "@moon=Titan\nparent: Saturn\n"
//! );
//! ```

use crate::format::ALIGN_WIDTH;

/// Prefix written before every field line.
///
/// Continuation lines of quoted values get the prefix twice.
///
/// # Examples
///
/// ```rust
/// use reclist::Indent;
///
/// assert_eq!(Indent::Tab.to_string(), "\t");
/// assert_eq!(Indent::Spaces(2).to_string(), "  ");
/// assert_eq!(Indent::None.to_string(), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
    None,
}

impl Indent {
    pub(crate) fn push_to(&self, out: &mut String) {
        match self {
            Indent::Tab => out.push('\t'),
            Indent::Spaces(n) => out.extend(std::iter::repeat(' ').take(*n)),
            Indent::None => {}
        }
    }
}

impl std::fmt::Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        self.push_to(&mut s);
        f.write_str(&s)
    }
}

/// Configuration options for the reclist writer.
///
/// # Examples
///
/// ```rust
/// use reclist::{Indent, WriterOptions};
///
/// // Tab indentation, tab after keys shorter than 6 characters
/// let options = WriterOptions::new();
///
/// let options = WriterOptions::new()
///     .with_indent(Indent::Spaces(4))
///     .with_align_width(8)
///     .with_capacity(64 * 1024);
/// ```
#[derive(Clone, Debug)]
pub struct WriterOptions {
    pub indent: Indent,
    /// Keys shorter than this are followed by `:` and a tab, longer ones by
    /// `:` and a space. Key length is counted in bytes, so a key with
    /// non-ASCII letters counts as longer than its character count.
    pub align_width: usize,
    /// Size of the output buffer in bytes.
    pub capacity: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: Indent::default(),
            align_width: ALIGN_WIDTH,
            capacity: 8 * 1024,
        }
    }
}

impl WriterOptions {
    /// Creates default options (tab indentation, align width 6, 8 KiB buffer).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reclist::{Indent, WriterOptions};
    ///
    /// let options = WriterOptions::new();
    /// assert_eq!(options.indent, Indent::Tab);
    /// assert_eq!(options.align_width, 6);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix of field lines.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the key length, in bytes, below which a tab follows the colon.
    ///
    /// A width of 0 always uses a space.
    #[must_use]
    pub fn with_align_width(mut self, width: usize) -> Self {
        self.align_width = width;
        self
    }

    /// Sets the output buffer size in bytes.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
