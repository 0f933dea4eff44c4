//! Team domain: ensemble members with manual ordering

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::TeamMember;

// Re-export repository types
pub use repository::{TeamMemberRepository, TeamRepositories};

// Re-export API types
pub use api::routes;
pub use api::TeamState;
