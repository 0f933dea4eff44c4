//! Domain layer for the Team domain

pub mod entities;
