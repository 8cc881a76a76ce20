use std::fmt;

/// A 1-based row number within one metadata table.
///
/// Row numbers are the foreign keys of the table set: a row in one table
/// refers to a row in another by its `RowId`. Row 0 never exists; the value
/// is reserved as the conventional "no reference" encoding where the format
/// allows an optional reference, exposed here as [`RowId::NONE`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u32);

impl RowId {
    /// The null row, used where a reference field is optional.
    pub const NONE: RowId = RowId(0);

    /// The first valid row of any table.
    pub const FIRST: RowId = RowId(1);

    /// Creates a row id from a raw 1-based value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        RowId(value)
    }

    /// Returns the raw 1-based value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if this is the null row (value 0).
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// The row immediately after this one.
    #[must_use]
    pub fn next(&self) -> RowId {
        RowId(self.0 + 1)
    }
}

impl From<u32> for RowId {
    fn from(value: u32) -> Self {
        RowId(value)
    }
}

impl From<RowId> for u32 {
    fn from(rid: RowId) -> Self {
        rid.0
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({})", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open `[start, end)` block of rows owned by a single definition.
///
/// Children are registered immediately after their owner and before any
/// subsequent owner, so each owner's children occupy one contiguous block of
/// their table. The block is represented as a value rather than being
/// recomputed from call order: the start is snapshotted when the owner begins
/// registering children, and the end is the next owner's start (or one past
/// the table's last row for the final owner).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OwnershipRange {
    /// First owned row.
    pub start: RowId,
    /// One past the last owned row.
    pub end: RowId,
}

impl OwnershipRange {
    /// Creates a range from its half-open bounds.
    ///
    /// An owner with no children has `start == end`.
    #[must_use]
    pub fn new(start: RowId, end: RowId) -> Self {
        debug_assert!(start.value() >= 1 && start <= end);
        OwnershipRange { start, end }
    }

    /// Number of rows in the block.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.value() - self.start.value()
    }

    /// Returns true if the owner has no rows in the child table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `rid` falls inside the block.
    #[must_use]
    pub fn contains(&self, rid: RowId) -> bool {
        rid >= self.start && rid < self.end
    }

    /// Iterates the rows of the block in order.
    pub fn rows(&self) -> impl Iterator<Item = RowId> {
        (self.start.value()..self.end.value()).map(RowId)
    }
}

impl fmt::Display for OwnershipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_rowid_new() {
        let rid = RowId::new(7);
        assert_eq!(rid.value(), 7);
    }

    #[test]
    fn test_rowid_none() {
        assert!(RowId::NONE.is_none());
        assert!(!RowId::FIRST.is_none());
        assert_eq!(RowId::NONE.value(), 0);
    }

    #[test]
    fn test_rowid_next() {
        assert_eq!(RowId::FIRST.next(), RowId(2));
        assert_eq!(RowId(41).next().value(), 42);
    }

    #[test]
    fn test_rowid_ordering() {
        assert!(RowId(1) < RowId(2));
        assert!(RowId(2) < RowId(100));
    }

    #[test]
    fn test_rowid_conversions() {
        let rid: RowId = 5u32.into();
        assert_eq!(rid, RowId(5));
        let raw: u32 = rid.into();
        assert_eq!(raw, 5);
    }

    #[test]
    fn test_rowid_display() {
        assert_eq!(format!("{}", RowId(3)), "3");
        assert_eq!(format!("{:?}", RowId(3)), "RowId(3)");
    }

    #[test]
    fn test_rowid_hash() {
        let mut map = HashMap::new();
        map.insert(RowId(1), "first");
        map.insert(RowId(2), "second");
        assert_eq!(map.get(&RowId(1)), Some(&"first"));
    }

    #[test]
    fn test_range_len_and_contains() {
        let range = OwnershipRange::new(RowId(3), RowId(6));
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
        assert!(range.contains(RowId(3)));
        assert!(range.contains(RowId(5)));
        assert!(!range.contains(RowId(6)));
        assert!(!range.contains(RowId(2)));
    }

    #[test]
    fn test_range_empty() {
        let range = OwnershipRange::new(RowId(4), RowId(4));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(RowId(4)));
        assert_eq!(range.rows().count(), 0);
    }

    #[test]
    fn test_range_rows_iteration() {
        let range = OwnershipRange::new(RowId(1), RowId(4));
        let rows: Vec<RowId> = range.rows().collect();
        assert_eq!(rows, vec![RowId(1), RowId(2), RowId(3)]);
    }

    #[test]
    fn test_range_display() {
        let range = OwnershipRange::new(RowId(2), RowId(5));
        assert_eq!(format!("{}", range), "[2, 5)");
    }
}
