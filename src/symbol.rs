//! Symbol value type.
//!
//! Symbols are constructed by the parser driving a file's analysis and
//! handed to the [`SymbolReferenceIndex`] fully formed; the index treats
//! them as immutable keys.
//!
//! [`SymbolReferenceIndex`]: crate::SymbolReferenceIndex

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::error::IndexError;

/// A symbol declaration in one source file.
///
/// Carries the half-open declaration span `[start, end)` in character
/// offsets and, optionally, the symbol's fully qualified name. Identity
/// inside the index is the declaration start offset only; the name is
/// carried for diagnostics and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    declaration: TextRange,
    qualified_name: Option<SmolStr>,
}

impl Symbol {
    /// Create a symbol declared at `[start, end)`.
    ///
    /// Fails with [`IndexError::InvalidSymbolSpan`] when the span is empty
    /// or inverted.
    pub fn new(start: u32, end: u32) -> Result<Self, IndexError> {
        if end <= start {
            return Err(IndexError::InvalidSymbolSpan { start, end });
        }
        Ok(Self {
            declaration: TextRange::new(TextSize::new(start), TextSize::new(end)),
            qualified_name: None,
        })
    }

    /// Create a symbol with its fully qualified name.
    pub fn named(
        start: u32,
        end: u32,
        qualified_name: impl Into<SmolStr>,
    ) -> Result<Self, IndexError> {
        let mut symbol = Self::new(start, end)?;
        symbol.qualified_name = Some(qualified_name.into());
        Ok(symbol)
    }

    /// The half-open declaration span `[start, end)`.
    pub fn declaration(&self) -> TextRange {
        self.declaration
    }

    /// Start offset of the declaration.
    pub fn declaration_start(&self) -> TextSize {
        self.declaration.start()
    }

    /// End offset of the declaration (exclusive).
    pub fn declaration_end(&self) -> TextSize {
        self.declaration.end()
    }

    /// Fully qualified name, if the parser supplied one.
    pub fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_span() {
        let symbol = Symbol::new(10, 14).unwrap();
        assert_eq!(u32::from(symbol.declaration_start()), 10);
        assert_eq!(u32::from(symbol.declaration_end()), 14);
        assert_eq!(symbol.qualified_name(), None);
    }

    #[test]
    fn test_empty_span_rejected() {
        assert_eq!(
            Symbol::new(5, 5),
            Err(IndexError::InvalidSymbolSpan { start: 5, end: 5 })
        );
    }

    #[test]
    fn test_inverted_span_rejected() {
        assert_eq!(
            Symbol::new(7, 3),
            Err(IndexError::InvalidSymbolSpan { start: 7, end: 3 })
        );
    }

    #[test]
    fn test_named_symbol() {
        let symbol = Symbol::named(0, 6, "Engine::power").unwrap();
        assert_eq!(symbol.qualified_name(), Some("Engine::power"));
    }
}
