//! Form submit use case
//!
//! Runs the submit phase for one form: the default processing walk
//! (every check group in the form's subtree committed from the
//! request), then the participants queued on the cycle. Participants
//! representing a deferred selection change decline default processing,
//! reducing the phase to exactly their own group.

use crate::config::ProcessingOptions;
use crate::cycle::RequestCycle;
use crate::participant::{SubmitContext, SubmitParticipant};
use crate::ports::SelectionObserver;
use crate::request::FormRequest;
use crate::use_cases::shared;
use serde::Serialize;
use tracing::{debug, info};
use trellis_domain::{ComponentId, ComponentTree, GroupError, Visit};

/// Summary of one executed submit phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReport {
    /// The form whose submit phase ran.
    pub form: ComponentId,
    /// Groups committed by the default processing walk, in document
    /// order. Empty when every participant declined the walk.
    pub defaulted_groups: Vec<ComponentId>,
    /// How many queued participants executed.
    pub participants_run: usize,
}

/// Execute the submit phase for `form_id`.
///
/// Default processing runs for a plain submission (no queued
/// participants) and whenever at least one participant asks for it; it
/// is skipped only when every participant declines. Participants then
/// run in registration order — `on_submit` each, then
/// `on_after_submit` each. The queue is drained up front, so a second
/// call without re-registering finds no participants.
///
/// On a resolution failure the phase stops: participants that have not
/// completed `on_submit` get `on_error`, and the error propagates.
pub fn submit<T: Clone + PartialEq>(
    tree: &mut ComponentTree<T>,
    cycle: &mut RequestCycle<T>,
    form_id: ComponentId,
    observer: &dyn SelectionObserver<T>,
    options: &ProcessingOptions,
) -> Result<SubmitReport, GroupError> {
    let form = tree
        .get(form_id)
        .ok_or(GroupError::MissingComponent(form_id))?;
    if !form.is_form() {
        return Err(GroupError::NotAForm {
            path: shared::path_of(tree, form_id),
        });
    }

    let mut participants = cycle.drain_for(form_id);
    let run_defaults = participants.is_empty()
        || participants
            .iter()
            .any(|participant| participant.wants_default_processing());

    let mut defaulted_groups = Vec::new();
    if run_defaults {
        for group_id in groups_in_form(tree, form_id) {
            match shared::apply_submitted_selection(tree, cycle.request(), group_id, None, options)
            {
                Ok(_) => defaulted_groups.push(group_id),
                Err(error) => {
                    fail_participants(&mut participants, tree, cycle.request(), observer, options);
                    return Err(error);
                }
            }
        }
    } else {
        debug!(
            "Skipping default processing for {}: every participant declined",
            shared::path_of(tree, form_id)
        );
    }

    let mut ctx = SubmitContext {
        tree: &mut *tree,
        request: cycle.request(),
        observer,
        options,
    };
    for index in 0..participants.len() {
        if let Err(error) = participants[index].on_submit(&mut ctx) {
            for participant in participants[index..].iter_mut() {
                participant.on_error(&mut ctx);
            }
            return Err(error);
        }
    }
    for participant in participants.iter_mut() {
        participant.on_after_submit(&mut ctx);
    }

    info!(
        "Form {} submitted: {} group(s) via default processing, {} participant(s)",
        shared::path_of(tree, form_id),
        defaulted_groups.len(),
        participants.len()
    );
    Ok(SubmitReport {
        form: form_id,
        defaulted_groups,
        participants_run: participants.len(),
    })
}

/// Check groups in the form's subtree, document order.
fn groups_in_form<T>(tree: &ComponentTree<T>, form_id: ComponentId) -> Vec<ComponentId> {
    let mut groups = Vec::new();
    tree.visit::<()>(form_id, |id, component| {
        if component.as_group().is_some() {
            groups.push(id);
        }
        Visit::Continue
    });
    groups
}

fn fail_participants<T: Clone + PartialEq>(
    participants: &mut [Box<dyn SubmitParticipant<T>>],
    tree: &mut ComponentTree<T>,
    request: &FormRequest,
    observer: &dyn SelectionObserver<T>,
    options: &ProcessingOptions,
) {
    let mut ctx = SubmitContext {
        tree,
        request,
        observer,
        options,
    };
    for participant in participants.iter_mut() {
        participant.on_error(&mut ctx);
    }
}
