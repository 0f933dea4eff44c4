//! Domain layer for the Sketches domain

pub mod entities;
