//! Sketches domain: ordered sketch list, characters, versioned scripts,
//! media attachments, and prop links

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Character, Script, Sketch, SketchMedia, SketchProp};

// Re-export repository types
pub use repository::{
    cascade_delete_sketch, repair_orphans, CharacterRepository, ScriptRepository,
    SketchMediaRepository, SketchPropRepository, SketchRepositories, SketchRepository,
};

// Re-export API types
pub use api::routes;
pub use api::SketchesState;
