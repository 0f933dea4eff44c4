//! Props domain: prop inventory with status tracking and media attachments

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Prop, PropMedia, PropStatus};

// Re-export repository types
pub use repository::{repair_orphans, PropMediaRepository, PropRepositories, PropRepository};

// Re-export API types
pub use api::routes;
pub use api::PropsState;
