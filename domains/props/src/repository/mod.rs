//! Repository implementations for the Props domain

pub mod cleanup;
pub mod prop_media;
pub mod props;

use sqlx::PgPool;

pub use cleanup::repair_orphans;
pub use prop_media::PropMediaRepository;
pub use props::PropRepository;

/// Combined repository access for the Props domain
#[derive(Clone)]
pub struct PropRepositories {
    pool: PgPool,
    pub props: PropRepository,
    pub prop_media: PropMediaRepository,
}

impl PropRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            props: PropRepository::new(pool.clone()),
            prop_media: PropMediaRepository::new(pool.clone()),
            pool,
        }
    }

    /// Raw pool access for maintenance queries
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}
