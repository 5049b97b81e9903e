//! Error types for cross-reference index construction.

use thiserror::Error;

/// Errors raised while building a [`SymbolReferenceIndex`].
///
/// None of these are transient: every variant signals a contract violation
/// in the upstream parser, and the caller is expected to abort the current
/// file's index build rather than retry.
///
/// [`SymbolReferenceIndex`]: crate::SymbolReferenceIndex
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A reference offset falls inside the declaration span of the symbol
    /// it is being attached to. A symbol cannot reference itself from
    /// within its own declaration.
    #[error("reference at offset {offset} overlaps the symbol declared at [{start}, {end})")]
    OverlappingReference { start: u32, end: u32, offset: u32 },

    /// A declaration span with `end <= start`. Declaration spans are
    /// half-open `[start, end)` and must be non-empty.
    #[error("invalid symbol span [{start}, {end}): declaration end must be greater than start")]
    InvalidSymbolSpan { start: u32, end: u32 },

    /// A reference was registered for a symbol that never went through
    /// symbol registration. Accepting it would emit a record without the
    /// symbol's self-entry, so the call is rejected instead.
    #[error("reference at offset {offset} targets the unregistered symbol declared at [{start}, {end})")]
    UnregisteredSymbol { start: u32, end: u32, offset: u32 },
}
