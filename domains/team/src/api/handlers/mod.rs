//! HTTP handlers for the Team domain

pub mod team_members;
