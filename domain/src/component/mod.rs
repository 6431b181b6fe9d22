//! Component tree primitives — ids, paths, nodes, and traversal.
//!
//! A [`ComponentTree`] holds every component of one server-rendered
//! page as an id-keyed arena. Nodes come in four kinds (container,
//! form, check group, check); the grouping logic in
//! [`crate::group`] builds on the traversal and lookup operations
//! defined here.

pub mod id;
pub mod node;
pub mod tree;
pub mod visit;

pub use id::{ComponentId, ComponentPath, PATH_SEPARATOR};
pub use node::{CheckGroupNode, CheckNode, Component, NodeKind, WireToken};
pub use tree::{ComponentTree, TreeError};
pub use visit::Visit;
