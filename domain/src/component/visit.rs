//! Early-exit control for tree traversals.

/// Outcome of one visitor step.
///
/// Returning `Stop` short-circuits the traversal and hands the carried
/// value back to the caller; `Continue` moves on to the next node in
/// depth-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<R> {
    Continue,
    Stop(R),
}

impl<R> Visit<R> {
    pub fn is_stop(&self) -> bool {
        matches!(self, Visit::Stop(_))
    }

    pub fn into_result(self) -> Option<R> {
        match self {
            Visit::Continue => None,
            Visit::Stop(value) => Some(value),
        }
    }
}
