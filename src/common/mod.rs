//! Common types, traits, and error definitions for grid_search_planner
//!
//! This module provides the grid coordinate model, the collaborator
//! interfaces the search core talks to, and the crate error type.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
