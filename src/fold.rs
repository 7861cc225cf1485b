//! Whitespace folding for quoted values.
//!
//! Reading a quoted value collapses its layout: whitespace runs become one
//! space, and line breaks between content become a single newline. Writing
//! does the inverse. Both directions walk the characters through [`Fold`],
//! which decides what gap, if any, goes in front of the next content
//! character.

/// Layout state between two content characters of a quoted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Fold {
    /// Nothing emitted yet. Whitespace and line breaks are dropped.
    Start,
    /// Right after a content character.
    InLine,
    /// Whitespace seen since the last content character.
    PendingSpace,
    /// A line break seen since the last content character.
    AfterBreak,
}

/// What to emit in front of the next content character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Gap {
    None,
    Space,
    Break,
}

impl Fold {
    /// Whitespace other than a line break.
    #[must_use]
    pub(crate) fn space(self) -> Self {
        match self {
            Fold::InLine | Fold::PendingSpace => Fold::PendingSpace,
            state => state,
        }
    }

    /// A line break. Breaks before any content are dropped, and a break
    /// swallows a pending space.
    #[must_use]
    pub(crate) fn newline(self) -> Self {
        match self {
            Fold::Start => Fold::Start,
            _ => Fold::AfterBreak,
        }
    }

    /// A content character: returns the gap to emit before it and the state
    /// after it.
    #[must_use]
    pub(crate) fn content(self) -> (Gap, Self) {
        let gap = match self {
            Fold::Start | Fold::InLine => Gap::None,
            Fold::PendingSpace => Gap::Space,
            Fold::AfterBreak => Gap::Break,
        };
        (gap, Fold::InLine)
    }
}
