pub mod ids;
pub mod models;
pub mod store;

pub use ids::CastId;
pub use models::{CastIn, CastOut, CastUpdate};
pub use store::CastStore;
