//! HTTP handlers for the Sketches domain

pub mod characters;
pub mod scripts;
pub mod sketch_media;
pub mod sketch_props;
pub mod sketches;
