//! Repository implementations for the Team domain

pub mod team_members;

use sqlx::PgPool;

pub use team_members::TeamMemberRepository;

/// Combined repository access for the Team domain
#[derive(Clone)]
pub struct TeamRepositories {
    pub team_members: TeamMemberRepository,
}

impl TeamRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            team_members: TeamMemberRepository::new(pool),
        }
    }
}
