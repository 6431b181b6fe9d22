//! Domain error types

use crate::component::ComponentId;
use thiserror::Error;

/// Errors raised by group operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// A submitted wire token matched no check under the group. The
    /// whole submission is rejected; the model stays untouched.
    #[error(
        "submitted value [{}] for check group [{path}] contains an illegal token [{token}] which does not point to any check",
        .submitted.join(", ")
    )]
    UnresolvedToken {
        /// Every token in the submission, in wire order.
        submitted: Vec<String>,
        /// Full path of the group that rejected the submission.
        path: String,
        /// The first token that failed to resolve.
        token: String,
    },

    #[error("Component not found: {0}")]
    MissingComponent(ComponentId),

    #[error("Component [{path}] is not a check group")]
    NotAGroup { path: String },

    #[error("Component [{path}] is not a form")]
    NotAForm { path: String },
}

impl GroupError {
    /// Check if this error rejects a submission over an unknown token
    pub fn is_unresolved_token(&self) -> bool {
        matches!(self, GroupError::UnresolvedToken { .. })
    }
}
