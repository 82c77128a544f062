pub mod casts;
pub mod database;
pub mod error;
pub mod row_helpers;
pub mod schema;

pub use casts::{CastRepo, SqliteCastStore};
pub use database::Database;
pub use error::StoreError;
