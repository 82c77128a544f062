use crate::error::StoreError;

/// Get a required column value from a row, returning CorruptRow on failure.
pub fn get<T: rusqlite::types::FromSql>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    table: &'static str,
    column: &'static str,
) -> Result<T, StoreError> {
    row.get(idx).map_err(|e| StoreError::CorruptRow {
        table,
        column,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn get_reads_typed_value() {
        let conn = Connection::open_in_memory().unwrap();
        let value: i64 = conn
            .query_row("SELECT 41 + 1", [], |row| Ok(get(row, 0, "t", "c")))
            .unwrap()
            .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn get_null_into_string_is_corrupt_row() {
        let conn = Connection::open_in_memory().unwrap();
        let result: Result<String, StoreError> = conn
            .query_row("SELECT NULL", [], |row| Ok(get(row, 0, "casts", "name")))
            .unwrap();
        assert!(matches!(
            result,
            Err(StoreError::CorruptRow { table: "casts", column: "name", .. })
        ));
    }
}
