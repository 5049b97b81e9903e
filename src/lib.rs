//! # xref-base
//!
//! Core library for building and serializing symbol cross-reference data
//! for a single source file.
//!
//! A parser walks a file and registers each symbol's declaration span plus
//! every offset where the symbol is referenced; one serialization pass then
//! produces the compact text form consumed by the platform's storage layer
//! (for example `10,14,10,40;` for a symbol declared at `[10,14)` and
//! referenced at offset 40). The library does not parse source text,
//! resolve symbol semantics, or perform I/O.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! index      → SymbolReferenceIndex (ordered accumulation + serialization)
//!   ↓
//! serialize  → text encoding (separator constants, record writer)
//!   ↓
//! symbol     → Symbol value type (validated declaration spans)
//!   ↓
//! error      → IndexError taxonomy
//! ```
//!
//! ## Example
//!
//! ```
//! use xref::SymbolReferenceIndex;
//!
//! # fn main() -> Result<(), xref::IndexError> {
//! let mut index = SymbolReferenceIndex::new();
//! let symbol = index.declare(10, 14)?;
//! index.register_reference(&symbol, 40u32)?;
//! assert_eq!(index.serialize(), "10,14,10,40;");
//! # Ok(())
//! # }
//! ```

/// Error taxonomy for index construction
pub mod error;

/// Ordered cross-reference index, one instance per analyzed file
pub mod index;

/// Text encoding of the index
pub mod serialize;

/// Symbol value type with validated declaration spans
pub mod symbol;

pub use error::IndexError;
pub use index::SymbolReferenceIndex;
pub use serialize::{FIELD_SEPARATOR, SYMBOL_SEPARATOR};
pub use symbol::Symbol;

// Re-export offset types for callers constructing spans
pub use text_size::{TextRange, TextSize};
