//! Record repository port
//!
//! Defines read access to a loaded collection of records.

/// Read-only repository of records of type `T`
///
/// Implementations load their records once, up front, and never change
/// them afterwards. The order of [`get_all`](Repository::get_all) is the
/// order of the underlying source.
pub trait Repository<T> {
    /// All records, in source order
    fn get_all(&self) -> &[T];

    /// Number of records
    fn len(&self) -> usize {
        self.get_all().len()
    }

    /// Whether the repository holds no records
    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
