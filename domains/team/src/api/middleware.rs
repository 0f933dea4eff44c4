//! Team domain state

use crate::TeamRepositories;

/// Application state for the Team domain
#[derive(Clone)]
pub struct TeamState {
    pub repos: TeamRepositories,
}
