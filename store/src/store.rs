//! The RowStore trait - the only seam between the engine and storage.

use crate::StoreResult;
use cull_core::{Row, RowId, Value};

/// Row-level access to the backing store.
///
/// Implementations are expected to be remote in production (each call is one
/// round trip) and in-memory in tests. The engine drives every read and write
/// through these three operations and nothing else.
pub trait RowStore {
    /// Fetch all rows of `table` whose `field` equals `value`.
    fn rows_where(&self, table: &str, field: &str, value: RowId) -> StoreResult<Vec<Row>>;

    /// Delete the rows of `table` with the given ids, returning how many
    /// existed. Ids with no matching row are ignored.
    fn delete_rows(&mut self, table: &str, ids: &[RowId]) -> StoreResult<u64>;

    /// Set `field` to `value` on every row of `table` whose `where_field`
    /// equals `where_value`, returning the number of rows touched.
    fn update_field(
        &mut self,
        table: &str,
        field: &str,
        value: Value,
        where_field: &str,
        where_value: RowId,
    ) -> StoreResult<u64>;
}
