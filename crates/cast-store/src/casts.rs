use async_trait::async_trait;
use tracing::{debug, instrument};

use cast_core::ids::CastId;
use cast_core::models::{CastIn, CastOut};
use cast_core::store::CastStore;

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;
use crate::schema::{CASTS_COLUMNS, CASTS_TABLE};

/// Synchronous repository over the `casts` table.
#[derive(Clone)]
pub struct CastRepo {
    db: Database,
}

impl CastRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert one cast member, returning the id SQLite assigned.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub fn add(&self, payload: &CastIn) -> Result<CastId, StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO casts (name, nationality) VALUES (?1, ?2)",
                rusqlite::params![payload.name, payload.nationality],
            )?;
            let id = CastId::from_raw(conn.last_insert_rowid());
            debug!(cast_id = %id, "cast inserted");
            Ok(id)
        })
    }

    /// Get a cast member by ID. A missing row is `Ok(None)`.
    #[instrument(skip(self), fields(cast_id = %id))]
    pub fn get(&self, id: CastId) -> Result<Option<CastOut>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {CASTS_COLUMNS} FROM casts WHERE id = ?1"))?;
            let mut rows = stmt.query([id.get()])?;
            match rows.next()? {
                Some(row) => row_to_cast(row).map(Some),
                None => Ok(None),
            }
        })
    }

    /// List every cast member in rowid order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<CastOut>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {CASTS_COLUMNS} FROM casts"))?;
            let mut rows = stmt.query([])?;
            let mut results = Vec::new();
            while let Some(row) = rows.next()? {
                results.push(row_to_cast(row)?);
            }
            debug!(count = results.len(), "casts listed");
            Ok(results)
        })
    }
}

fn row_to_cast(row: &rusqlite::Row<'_>) -> Result<CastOut, StoreError> {
    Ok(CastOut {
        id: CastId::from_raw(row_helpers::get(row, 0, CASTS_TABLE, "id")?),
        name: row_helpers::get(row, 1, CASTS_TABLE, "name")?,
        nationality: row_helpers::get(row, 2, CASTS_TABLE, "nationality")?,
    })
}

/// [`CastStore`] backed by SQLite. Each call runs the blocking
/// [`CastRepo`] query on tokio's blocking pool.
#[derive(Clone)]
pub struct SqliteCastStore {
    repo: CastRepo,
}

impl SqliteCastStore {
    pub fn new(db: Database) -> Self {
        Self {
            repo: CastRepo::new(db),
        }
    }

    pub fn repo(&self) -> &CastRepo {
        &self.repo
    }
}

#[async_trait]
impl CastStore for SqliteCastStore {
    type Error = StoreError;

    async fn add_cast(&self, payload: CastIn) -> Result<CastId, StoreError> {
        let repo = self.repo.clone();
        tokio::task::spawn_blocking(move || repo.add(&payload)).await?
    }

    async fn get_cast(&self, id: CastId) -> Result<Option<CastOut>, StoreError> {
        let repo = self.repo.clone();
        tokio::task::spawn_blocking(move || repo.get(id)).await?
    }

    async fn get_all_casts(&self) -> Result<Vec<CastOut>, StoreError> {
        let repo = self.repo.clone();
        tokio::task::spawn_blocking(move || repo.list()).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_repo() -> CastRepo {
        CastRepo::new(Database::in_memory().unwrap())
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let repo = test_repo();
        let first = repo.add(&CastIn::new("Robert De Niro", "American")).unwrap();
        let second = repo.add(&CastIn::new("Sophia Loren", "Italian")).unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn get_returns_inserted_fields() {
        let repo = test_repo();
        let input = CastIn::new("Robert De Niro", "American");
        let id = repo.add(&input).unwrap();
        let fetched = repo.get(id).unwrap().unwrap();
        assert_eq!(fetched, input.with_id(id));
    }

    #[test]
    fn get_nonexistent_is_none() {
        let repo = test_repo();
        assert_eq!(repo.get(CastId::from_raw(99)).unwrap(), None);
    }

    #[test]
    fn list_empty_table() {
        let repo = test_repo();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn list_returns_every_row_in_insert_order() {
        let repo = test_repo();
        let a = repo.add(&CastIn::new("Toshiro Mifune", "Japanese")).unwrap();
        let b = repo.add(&CastIn::new("Liv Ullmann", "Norwegian")).unwrap();
        let ids: Vec<_> = repo.list().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn duplicate_fields_get_distinct_ids() {
        let repo = test_repo();
        let input = CastIn::new("Chris Evans", "American");
        let a = repo.add(&input).unwrap();
        let b = repo.add(&input).unwrap();
        assert_ne!(a, b);
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_row_surfaces_column() {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            // Bypass NOT NULL by rebuilding the table without the constraint.
            conn.execute_batch(
                "DROP TABLE casts;
                 CREATE TABLE casts (id INTEGER PRIMARY KEY, name TEXT, nationality TEXT);
                 INSERT INTO casts (id, name, nationality) VALUES (1, NULL, 'French');",
            )?;
            Ok(())
        })
        .unwrap();
        let repo = CastRepo::new(db);
        let err = repo.get(CastId::from_raw(1)).unwrap_err();
        assert!(matches!(err, StoreError::CorruptRow { table: "casts", column: "name", .. }));
    }

    #[test]
    fn engine_failure_propagates_as_database_error() {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch("DROP TABLE casts;")?;
            Ok(())
        })
        .unwrap();
        let repo = CastRepo::new(db);
        let err = repo.add(&CastIn::new("Robert De Niro", "American")).unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn async_store_round_trip() {
        let store = SqliteCastStore::new(Database::in_memory().unwrap());
        let id = store
            .add_cast(CastIn::new("Robert De Niro", "American"))
            .await
            .unwrap();
        let fetched = store.get_cast(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Robert De Niro");
        assert_eq!(store.get_all_casts().await.unwrap(), vec![fetched]);
    }
}
