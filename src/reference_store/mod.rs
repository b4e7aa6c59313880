mod models;
mod schema;
mod store;
mod trait_def;

pub use models::*;
pub use schema::REFERENCE_VERSIONED_SCHEMAS;
pub use store::SqliteReferenceStore;
pub use trait_def::{BrandReferenceFilter, ReferenceAnomaly, ReferenceStore, StyleReferenceScan};
