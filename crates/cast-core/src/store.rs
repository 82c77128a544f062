use async_trait::async_trait;

use crate::ids::CastId;
use crate::models::{CastIn, CastOut};

/// Data access for the cast table.
///
/// Implementations own no per-call state; absence of a record is `Ok(None)`
/// and every backend failure is surfaced through `Self::Error`.
#[async_trait]
pub trait CastStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert one cast member and return the id the store assigned to it.
    async fn add_cast(&self, payload: CastIn) -> Result<CastId, Self::Error>;

    /// Fetch a single cast member by id.
    async fn get_cast(&self, id: CastId) -> Result<Option<CastOut>, Self::Error>;

    /// Fetch every cast member in the store's natural order.
    async fn get_all_casts(&self) -> Result<Vec<CastOut>, Self::Error>;
}
