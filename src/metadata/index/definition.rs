use std::collections::HashMap;
use std::hash::Hash;

use crate::metadata::rid::RowId;
use crate::metadata::tables::TableId;
use crate::{Error, Result};

/// Append-only, insertion-ordered bijection from a definition's identity to
/// its 1-based row number.
///
/// Rows are assigned strictly in first-registration order, starting at 1,
/// and are never reassigned or reused; there is no removal. Registering the
/// same identity twice is a [`crate::Error::DuplicateDefinition`] and leaves
/// the index unchanged, because a second row for one definition would make
/// every later foreign key ambiguous.
///
/// `T` is an identity token (an arena id), not the definition's data.
pub struct DefinitionIndex<T> {
    table: TableId,
    index: HashMap<T, RowId>,
    rows: Vec<T>,
}

impl<T: Copy + Eq + Hash> DefinitionIndex<T> {
    /// Creates an empty index for `table`.
    #[must_use]
    pub fn new(table: TableId) -> Self {
        Self::with_capacity(table, 0)
    }

    /// Creates an empty index pre-sized for `capacity` definitions.
    #[must_use]
    pub fn with_capacity(table: TableId, capacity: usize) -> Self {
        DefinitionIndex {
            table,
            index: HashMap::with_capacity(capacity),
            rows: Vec::with_capacity(capacity),
        }
    }

    /// The table this index populates.
    #[must_use]
    pub fn table(&self) -> TableId {
        self.table
    }

    /// Assigns the next sequential row to `item`.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateDefinition`] if `item` was already
    /// registered. The index is unchanged in that case.
    pub fn add(&mut self, item: T) -> Result<RowId> {
        if self.index.contains_key(&item) {
            return Err(Error::DuplicateDefinition { table: self.table });
        }
        let rid = self.next_row_id();
        self.index.insert(item, rid);
        self.rows.push(item);
        Ok(rid)
    }

    /// The row assigned to `item`, if registered.
    #[must_use]
    pub fn try_row_of(&self, item: T) -> Option<RowId> {
        self.index.get(&item).copied()
    }

    /// The row assigned to `item`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if `item` was never registered,
    /// which indicates a traversal-order violation upstream.
    pub fn row_of(&self, item: T) -> Result<RowId> {
        self.try_row_of(item)
            .ok_or(Error::RowNotFound { table: self.table })
    }

    /// The definition occupying `rid`, if the row exists.
    #[must_use]
    pub fn definition_at(&self, rid: RowId) -> Option<T> {
        if rid.is_none() {
            return None;
        }
        self.rows.get(rid.value() as usize - 1).copied()
    }

    /// All registered definitions, in row order.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The row the next [`DefinitionIndex::add`] would assign.
    ///
    /// Owners snapshot this before registering children to record the start
    /// of their contiguous child block.
    #[must_use]
    pub fn next_row_id(&self) -> RowId {
        RowId(self.rows.len() as u32 + 1)
    }

    /// Number of registered definitions.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::model::TypeDefId;

    #[test]
    fn test_rows_are_sequential_from_one() {
        let mut index = DefinitionIndex::new(TableId::TypeDef);
        for i in 0..5 {
            let rid = index.add(TypeDefId(i)).unwrap();
            assert_eq!(rid, RowId(i + 1));
        }
        for i in 0..5 {
            assert_eq!(index.row_of(TypeDefId(i)).unwrap(), RowId(i + 1));
            assert_eq!(index.rows()[i as usize], TypeDefId(i));
        }
    }

    #[test]
    fn test_duplicate_add_fails_and_leaves_index_unchanged() {
        let mut index = DefinitionIndex::new(TableId::TypeDef);
        index.add(TypeDefId(0)).unwrap();
        index.add(TypeDefId(1)).unwrap();

        let err = index.add(TypeDefId(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateDefinition {
                table: TableId::TypeDef
            }
        ));

        assert_eq!(index.len(), 2);
        assert_eq!(index.row_of(TypeDefId(0)).unwrap(), RowId(1));
        assert_eq!(index.row_of(TypeDefId(1)).unwrap(), RowId(2));
        assert_eq!(index.next_row_id(), RowId(3));
    }

    #[test]
    fn test_row_of_unregistered_is_not_found() {
        let index: DefinitionIndex<TypeDefId> = DefinitionIndex::new(TableId::TypeDef);
        assert!(index.try_row_of(TypeDefId(9)).is_none());
        let err = index.row_of(TypeDefId(9)).unwrap_err();
        assert!(matches!(
            err,
            Error::RowNotFound {
                table: TableId::TypeDef
            }
        ));
    }

    #[test]
    fn test_definition_at_reverse_lookup() {
        let mut index = DefinitionIndex::new(TableId::MethodDef);
        index.add(TypeDefId(10)).unwrap();
        index.add(TypeDefId(20)).unwrap();
        assert_eq!(index.definition_at(RowId(1)), Some(TypeDefId(10)));
        assert_eq!(index.definition_at(RowId(2)), Some(TypeDefId(20)));
        assert_eq!(index.definition_at(RowId(3)), None);
        assert_eq!(index.definition_at(RowId::NONE), None);
    }

    #[test]
    fn test_next_row_id_tracks_additions() {
        let mut index = DefinitionIndex::new(TableId::Field);
        assert_eq!(index.next_row_id(), RowId(1));
        index.add(TypeDefId(0)).unwrap();
        assert_eq!(index.next_row_id(), RowId(2));
    }
}
