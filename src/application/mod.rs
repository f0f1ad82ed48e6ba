//! Application services layer.

pub mod chrome;
pub mod error;
pub mod page;
pub mod site;
