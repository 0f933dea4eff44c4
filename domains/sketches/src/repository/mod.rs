//! Repository implementations for the Sketches domain

pub mod characters;
pub mod cleanup;
pub mod scripts;
pub mod sketch_media;
pub mod sketch_props;
pub mod sketches;

use sqlx::PgPool;

pub use characters::CharacterRepository;
pub use cleanup::{cascade_delete_sketch, repair_orphans};
pub use scripts::ScriptRepository;
pub use sketch_media::SketchMediaRepository;
pub use sketch_props::SketchPropRepository;
pub use sketches::SketchRepository;

/// Combined repository access for the Sketches domain
#[derive(Clone)]
pub struct SketchRepositories {
    pool: PgPool,
    pub sketches: SketchRepository,
    pub characters: CharacterRepository,
    pub scripts: ScriptRepository,
    pub sketch_media: SketchMediaRepository,
    pub sketch_props: SketchPropRepository,
}

impl SketchRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sketches: SketchRepository::new(pool.clone()),
            characters: CharacterRepository::new(pool.clone()),
            scripts: ScriptRepository::new(pool.clone()),
            sketch_media: SketchMediaRepository::new(pool.clone()),
            sketch_props: SketchPropRepository::new(pool.clone()),
            pool,
        }
    }

    /// Raw pool access for maintenance queries
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
