//! Domain layer for trellis
//!
//! This crate contains the component tree, selection state, and the
//! check-group logic that keeps both sides of a group in step. It has
//! no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-sided groups
//!
//! A check group has a model side (the selected domain values) and a
//! wire side (the opaque tokens of its checked boxes):
//!
//! - **Projection** (model → wire): render time, selected values become
//!   a token list
//! - **Resolution** (wire → model): submit time, tokens become values
//!   again, all-or-nothing
//!
//! ## Tree order
//!
//! Components live in a [`ComponentTree`](component::ComponentTree)
//! whose child order is attach order. Projection and tie-breaking both
//! follow that order, so the wire format is deterministic.

pub mod component;
pub mod config;
pub mod error;
pub mod group;
pub mod markup;
pub mod selection;

// Re-export commonly used types
pub use component::{
    CheckGroupNode, CheckNode, Component, ComponentId, ComponentPath, ComponentTree, NodeKind,
    PATH_SEPARATOR, TreeError, Visit, WireToken,
};
pub use config::OutputFormat;
pub use error::GroupError;
pub use group::{
    SubmittedTokens, VALUE_SEPARATOR, clean_group_tag, commit_selection, duplicate_tokens,
    projected_wire_value, resolve_submitted, selected_values,
};
pub use markup::Tag;
pub use selection::SelectionModel;
