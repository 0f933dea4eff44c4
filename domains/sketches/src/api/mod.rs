//! API layer for the Sketches domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::SketchesState;
pub use routes::routes;
