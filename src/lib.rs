//! Renderer and static server for the GUS project website.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
