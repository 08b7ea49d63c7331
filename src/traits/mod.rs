//! Trait definitions for GitHub entity operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! API differences in the implementations.

mod get;
mod list;

pub use get::Get;
pub use list::List;
