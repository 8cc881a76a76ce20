use std::collections::HashMap;
use std::hash::Hash;

use crate::metadata::rid::RowId;
use crate::metadata::tables::TableId;

/// Deduplicating row index over value equality.
///
/// `get_or_add` returns the existing row for a value that was seen before
/// and registers a new row otherwise. The equality policy is the key type's
/// `Eq`/`Hash` implementation; index users pick the policy by picking the
/// key type (an assembly identity, a module name, encoded signature bytes).
/// Rows are stable once assigned; later insertions never renumber earlier
/// ones.
pub struct ReferenceIndex<T> {
    table: TableId,
    index: HashMap<T, RowId>,
    rows: Vec<T>,
}

impl<T: Clone + Eq + Hash> ReferenceIndex<T> {
    /// Creates an empty index for `table`.
    #[must_use]
    pub fn new(table: TableId) -> Self {
        ReferenceIndex {
            table,
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// The table this index populates.
    #[must_use]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Returns the row of an equal previously-added value, or registers
    /// `value` at the next row.
    pub fn get_or_add(&mut self, value: T) -> RowId {
        if let Some(rid) = self.index.get(&value) {
            return *rid;
        }
        let rid = RowId(self.rows.len() as u32 + 1);
        self.index.insert(value.clone(), rid);
        self.rows.push(value);
        rid
    }

    /// Looks up the row of an equal value without inserting.
    #[must_use]
    pub fn try_row_of(&self, value: &T) -> Option<RowId> {
        self.index.get(value).copied()
    }

    /// All registered values, in row order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of distinct registered values.
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
