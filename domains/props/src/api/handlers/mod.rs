//! HTTP handlers for the Props domain

pub mod prop_media;
pub mod props;
