//! Views and askama templates.

pub mod views;
