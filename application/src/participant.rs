//! Submit participants — deferred work scheduled into a form's submit
//! phase.
//!
//! A selection change inside a form does not touch the model right
//! away. Instead a participant is queued on the request cycle and runs
//! when the form's submit phase executes, so the change lands at a
//! well-defined point of the form lifecycle.

use crate::config::ProcessingOptions;
use crate::ports::SelectionObserver;
use crate::request::FormRequest;
use crate::use_cases::shared;
use trellis_domain::{ComponentId, ComponentTree, GroupError};

/// Everything a participant may touch while the submit phase runs.
pub struct SubmitContext<'a, T> {
    pub tree: &'a mut ComponentTree<T>,
    pub request: &'a FormRequest,
    pub observer: &'a dyn SelectionObserver<T>,
    pub options: &'a ProcessingOptions,
}

/// Contract for one unit of deferred submit work.
///
/// The submit phase calls `on_submit` for every drained participant in
/// registration order, then `on_after_submit` once all submits ran. If
/// the phase fails, participants whose `on_submit` has not completed
/// get `on_error` instead.
pub trait SubmitParticipant<T> {
    fn on_submit(&mut self, ctx: &mut SubmitContext<'_, T>) -> Result<(), GroupError>;

    /// Called when the submit phase fails before or during this
    /// participant's `on_submit`.
    fn on_error(&mut self, _ctx: &mut SubmitContext<'_, T>) {}

    /// Called after every participant's `on_submit` succeeded.
    fn on_after_submit(&mut self, _ctx: &mut SubmitContext<'_, T>) {}

    /// Whether the form should still run its default processing walk
    /// for this submission. Participants representing a lone selection
    /// change decline, so only their own group is touched.
    fn wants_default_processing(&self) -> bool {
        true
    }
}

/// The participant queued for a check group's deferred selection change.
///
/// Its `on_submit` is the same resolve → commit → notify sequence the
/// immediate dispatch path runs; `wants_default_processing` is false so
/// the rest of the form is left alone.
pub struct GroupSubmitParticipant {
    group: ComponentId,
}

impl GroupSubmitParticipant {
    pub fn new(group: ComponentId) -> Self {
        Self { group }
    }

    pub fn group(&self) -> ComponentId {
        self.group
    }
}

impl<T: Clone + PartialEq> SubmitParticipant<T> for GroupSubmitParticipant {
    fn on_submit(&mut self, ctx: &mut SubmitContext<'_, T>) -> Result<(), GroupError> {
        shared::apply_submitted_selection(
            ctx.tree,
            ctx.request,
            self.group,
            Some(ctx.observer),
            ctx.options,
        )?;
        Ok(())
    }

    fn wants_default_processing(&self) -> bool {
        false
    }
}
