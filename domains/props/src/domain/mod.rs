//! Domain layer for the Props domain

pub mod entities;
