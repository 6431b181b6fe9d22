//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod selection_change;
pub mod submit_form;
pub(crate) mod shared;
