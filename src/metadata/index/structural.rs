use std::collections::HashMap;
use std::hash::Hash;

use crate::metadata::rid::RowId;
use crate::metadata::tables::TableId;
use crate::Result;

/// Two-phase deduplicating row index: identity first, structural key second.
///
/// The symbol graph may hand the writer several distinct objects that denote
/// the same emitted entity (the same external method referenced from two
/// compilation units, say). Emitting one row per *object* would bloat the
/// image and break consumers that expect reference tables to be canonical,
/// so lookup runs in two phases:
///
/// 1. identity (`T`, an arena id) - a plain map hit, covering the common
///    case of the same object referenced repeatedly;
/// 2. structural (`K`, typically built from encoded signature bytes) - only
///    on an identity miss, because building the key is the expensive part.
///
/// A structural hit registers the new object as an alias of the existing
/// row, so the next identity lookup for that object is a phase-1 hit.
pub struct StructuralIndex<T, K> {
    table: TableId,
    instance: HashMap<T, RowId>,
    structural: HashMap<K, RowId>,
    rows: Vec<T>,
}

impl<T: Copy + Eq + Hash, K: Eq + Hash> StructuralIndex<T, K> {
    /// Creates an empty index for `table`.
    #[must_use]
    pub fn new(table: TableId) -> Self {
        StructuralIndex {
            table,
            instance: HashMap::new(),
            structural: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// The table this index populates.
    #[must_use]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Phase-1 lookup only: the row of `item` if this exact object was seen
    /// before (directly or as an alias).
    #[must_use]
    pub fn try_row_of(&self, item: T) -> Option<RowId> {
        self.instance.get(&item).copied()
    }

    /// Returns the row for `item`, building the structural key with
    /// `make_key` only when the identity phase misses.
    ///
    /// # Errors
    /// Propagates the `make_key` failure unchanged; the index is not
    /// modified in that case.
    pub fn get_or_add(&mut self, item: T, make_key: impl FnOnce() -> Result<K>) -> Result<RowId> {
        if let Some(rid) = self.try_row_of(item) {
            return Ok(rid);
        }
        Ok(self.add_with_key(item, make_key()?))
    }

    /// Registers `item` under an already-built structural key.
    ///
    /// Callers that must release borrows between key construction and
    /// insertion (key building may itself register rows in sibling indices)
    /// use this two-step form; [`StructuralIndex::get_or_add`] is the
    /// closed form.
    pub fn add_with_key(&mut self, item: T, key: K) -> RowId {
        if let Some(rid) = self.structural.get(&key) {
            // Alias: same entity, different object.
            let rid = *rid;
            self.instance.insert(item, rid);
            return rid;
        }
        let rid = RowId(self.rows.len() as u32 + 1);
        self.instance.insert(item, rid);
        self.structural.insert(key, rid);
        self.rows.push(item);
        rid
    }

    /// One registered object per emitted row, in row order.
    ///
    /// Aliased objects are not listed; the object that first produced the
    /// row represents it.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of emitted rows (not of registered objects).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing was registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
