//! Ordered cross-reference index for one source file.
//!
//! The index is a write-mostly container: the parser registers each symbol
//! declaration and every offset where the symbol is used, in any order, and
//! a single read-only pass serializes the accumulated data. One instance
//! covers exactly one in-progress file analysis; analyzing files in
//! parallel means one index per file.

use std::collections::BTreeMap;

use text_size::TextSize;
use tracing::{debug, trace};

use crate::error::IndexError;
use crate::serialize;
use crate::symbol::Symbol;

/// Reference data accumulated for one declaration-start slot.
#[derive(Debug, Clone)]
struct ReferenceSet {
    /// Declaration end of the first symbol registered at this start
    /// offset. Later symbols sharing the start merge into the slot and do
    /// not replace it.
    declaration_end: TextSize,
    /// Reference offsets, ascending, duplicates kept.
    references: Vec<TextSize>,
}

/// Symbol cross-reference index for a single source file.
///
/// An ordered multimap from declaration start offset to the reference
/// offsets recorded for that symbol. Keys are ordered and compared by the
/// start offset alone: two distinct symbols declared at the same start
/// offset occupy one slot, and their reference sets merge under the
/// declaration end of whichever was registered first. That merge is part
/// of the serialized format's contract and is preserved deliberately.
///
/// The index is append-only for the duration of one analysis pass; there
/// is no deletion or update surface.
#[derive(Debug, Clone, Default)]
pub struct SymbolReferenceIndex {
    slots: BTreeMap<TextSize, ReferenceSet>,
}

impl SymbolReferenceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a symbol declaration.
    ///
    /// The declaration start is recorded as a self-entry in the symbol's
    /// reference set, so every serialized record carries at least one
    /// reference offset even when the symbol is never used. Registering
    /// the same span twice is not guarded and adds a second self-entry.
    pub fn register_symbol(&mut self, symbol: &Symbol) {
        let start = symbol.declaration_start();
        trace!(
            "[XREF] register_symbol: span={}..{}",
            u32::from(start),
            u32::from(symbol.declaration_end())
        );
        let slot = self.slots.entry(start).or_insert_with(|| ReferenceSet {
            declaration_end: symbol.declaration_end(),
            references: Vec::new(),
        });
        insert_sorted(&mut slot.references, start);
    }

    /// Register a reference occurrence for a previously registered symbol.
    ///
    /// Fails with [`IndexError::OverlappingReference`] when the offset
    /// falls inside the symbol's own declaration span, and with
    /// [`IndexError::UnregisteredSymbol`] when the symbol never went
    /// through [`register_symbol`](Self::register_symbol). Both signal a
    /// bug in the upstream parser and should abort the file's index build.
    pub fn register_reference(
        &mut self,
        symbol: &Symbol,
        offset: impl Into<TextSize>,
    ) -> Result<(), IndexError> {
        let offset = offset.into();
        if symbol.declaration().contains(offset) {
            return Err(IndexError::OverlappingReference {
                start: u32::from(symbol.declaration_start()),
                end: u32::from(symbol.declaration_end()),
                offset: u32::from(offset),
            });
        }
        let Some(slot) = self.slots.get_mut(&symbol.declaration_start()) else {
            return Err(IndexError::UnregisteredSymbol {
                start: u32::from(symbol.declaration_start()),
                end: u32::from(symbol.declaration_end()),
                offset: u32::from(offset),
            });
        };
        trace!(
            "[XREF] register_reference: span={}..{} offset={}",
            u32::from(symbol.declaration_start()),
            u32::from(symbol.declaration_end()),
            u32::from(offset)
        );
        insert_sorted(&mut slot.references, offset);
        Ok(())
    }

    /// Validate a declaration span, register the resulting symbol, and
    /// hand it back for subsequent reference registration.
    pub fn declare(&mut self, start: u32, end: u32) -> Result<Symbol, IndexError> {
        let symbol = Symbol::new(start, end)?;
        self.register_symbol(&symbol);
        Ok(symbol)
    }

    /// Check whether anything has been registered.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of distinct declaration-start slots.
    pub fn symbol_count(&self) -> usize {
        self.slots.len()
    }

    /// Total number of reference entries, self-entries included.
    pub fn reference_count(&self) -> usize {
        self.slots.values().map(|slot| slot.references.len()).sum()
    }

    /// Serialize the index into its compact text form.
    ///
    /// Records are emitted in ascending declaration-start order, each as
    /// `declStart,declEnd,ref,...;` with references ascending. The output
    /// is fully determined by the registrations made so far; serializing
    /// again without intervening writes yields the same string. An empty
    /// index serializes to the empty string.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (&start, slot) in &self.slots {
            serialize::write_record(&mut out, start, slot.declaration_end, &slot.references);
        }
        debug!(
            "[XREF] serialized {} symbol(s), {} byte(s)",
            self.slots.len(),
            out.len()
        );
        out
    }
}

/// Insert keeping ascending order; equal offsets stay adjacent.
fn insert_sorted(references: &mut Vec<TextSize>, offset: TextSize) {
    let at = references.partition_point(|&existing| existing <= offset);
    references.insert(at, offset);
}
