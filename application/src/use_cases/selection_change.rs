//! Selection-change dispatch use case
//!
//! Entry point for a check group's "selection changed" round-trip. The
//! outcome depends on where the group sits: outside any form the change
//! is applied on the spot; inside a form it is deferred into the form's
//! submit phase via a queued participant, so the change lands exactly
//! once and at the right point of the form lifecycle.

use crate::config::ProcessingOptions;
use crate::cycle::RequestCycle;
use crate::participant::GroupSubmitParticipant;
use crate::ports::SelectionObserver;
use crate::use_cases::shared;
use serde::Serialize;
use tracing::{debug, info};
use trellis_domain::{ComponentId, ComponentTree, GroupError};

/// How a selection-change request was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DispatchOutcome {
    /// No enclosing form: resolved, committed, and notified immediately.
    Applied,
    /// Enclosing form found: a participant was queued on the cycle and
    /// the model was left untouched for now.
    Deferred { form: ComponentId },
}

/// Dispatch a selection-change request for `group_id`.
///
/// The immediate path runs resolve → commit → notify against the
/// cycle's request. The deferred path only queues a
/// [`GroupSubmitParticipant`]; nothing happens until
/// [`submit`](crate::use_cases::submit_form::submit) runs for the form.
pub fn dispatch<T: Clone + PartialEq>(
    tree: &mut ComponentTree<T>,
    cycle: &mut RequestCycle<T>,
    group_id: ComponentId,
    observer: &dyn SelectionObserver<T>,
    options: &ProcessingOptions,
) -> Result<DispatchOutcome, GroupError> {
    require_group(tree, group_id)?;

    match tree.enclosing_form(group_id) {
        Some(form) => {
            cycle.register_participant(form, Box::new(GroupSubmitParticipant::new(group_id)));
            debug!(
                "Deferred selection change for {} into form {}",
                shared::path_of(tree, group_id),
                shared::path_of(tree, form)
            );
            Ok(DispatchOutcome::Deferred { form })
        }
        None => {
            let committed = shared::apply_submitted_selection(
                tree,
                cycle.request(),
                group_id,
                Some(observer),
                options,
            )?;
            info!(
                "Applied selection change for {}: {} value(s) selected",
                shared::path_of(tree, group_id),
                committed.len()
            );
            Ok(DispatchOutcome::Applied)
        }
    }
}

/// Whether the page holding this group may be rendered stateless.
///
/// A group that round-trips every selection change needs the server to
/// keep per-request state, so the hint is `false`; otherwise the
/// component default (`true`) stands.
pub fn stateless_hint<T>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<bool, GroupError> {
    Ok(require_group(tree, group_id)?.stateless_hint(true))
}

fn require_group<T>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<&trellis_domain::CheckGroupNode<T>, GroupError> {
    let component = tree
        .get(group_id)
        .ok_or(GroupError::MissingComponent(group_id))?;
    component.as_group().ok_or_else(|| GroupError::NotAGroup {
        path: shared::path_of(tree, group_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoSelectionObserver;
    use crate::request::FormRequest;
    use std::sync::Mutex;
    use trellis_domain::{Component, selected_values};

    struct Recording {
        events: Mutex<Vec<(ComponentId, Vec<&'static str>)>>,
    }

    impl Recording {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn count(&self) -> usize {
            self.events.lock().unwrap().len()
        }
    }

    impl SelectionObserver<&'static str> for Recording {
        fn selection_changed(&self, group: ComponentId, selection: &[&'static str]) {
            self.events
                .lock()
                .unwrap()
                .push((group, selection.to_vec()));
        }
    }

    /// Free-standing group, no form anywhere above it.
    fn bare_tree() -> (ComponentTree<&'static str>, ComponentId) {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let group = tree.attach(page, Component::check_group("toppings")).unwrap();
        tree.attach(group, Component::check("mushroom", "mushroom"))
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();
        (tree, group)
    }

    /// Group nested inside a form.
    fn form_tree() -> (ComponentTree<&'static str>, ComponentId, ComponentId) {
        let mut tree = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let form = tree.attach(page, Component::form("order")).unwrap();
        let group = tree.attach(form, Component::check_group("toppings")).unwrap();
        tree.attach(group, Component::check("mushroom", "mushroom"))
            .unwrap();
        tree.attach(group, Component::check("olive", "olive")).unwrap();
        (tree, form, group)
    }

    #[test]
    fn test_dispatch_without_form_applies_immediately() {
        let (mut tree, group) = bare_tree();
        let mut cycle = RequestCycle::new(FormRequest::new().with_param("toppings", "check0"));
        let observer = Recording::new();

        let outcome = dispatch(
            &mut tree,
            &mut cycle,
            group,
            &observer,
            &ProcessingOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome, DispatchOutcome::Applied);
        assert_eq!(selected_values(&tree, group).unwrap(), vec!["mushroom"]);
        assert_eq!(
            observer.events.into_inner().unwrap(),
            vec![(group, vec!["mushroom"])]
        );
    }

    #[test]
    fn test_dispatch_inside_form_defers() {
        let (mut tree, form, group) = form_tree();
        let mut cycle =
            RequestCycle::new(FormRequest::new().with_param("order:toppings", "check0"));
        let observer = Recording::new();

        let outcome = dispatch(
            &mut tree,
            &mut cycle,
            group,
            &observer,
            &ProcessingOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome, DispatchOutcome::Deferred { form });
        // Model untouched and nobody notified until the form submits.
        assert!(selected_values(&tree, group).unwrap().is_empty());
        assert_eq!(observer.count(), 0);
        assert_eq!(cycle.pending_count(form), 1);
    }

    #[test]
    fn test_dispatch_unresolved_token_propagates() {
        let (mut tree, group) = bare_tree();
        let mut cycle = RequestCycle::new(FormRequest::new().with_param("toppings", "bogus"));

        let err = dispatch(
            &mut tree,
            &mut cycle,
            group,
            &NoSelectionObserver,
            &ProcessingOptions::default(),
        )
        .unwrap_err();

        assert!(err.is_unresolved_token());
        assert!(selected_values(&tree, group).unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_absent_parameter_clears_selection() {
        let (mut tree, group) = bare_tree();
        trellis_domain::commit_selection(&mut tree, group, vec!["olive"]).unwrap();

        let mut cycle = RequestCycle::new(FormRequest::new());
        let observer = Recording::new();
        dispatch(
            &mut tree,
            &mut cycle,
            group,
            &observer,
            &ProcessingOptions::default(),
        )
        .unwrap();

        assert!(selected_values(&tree, group).unwrap().is_empty());
        let expected: Vec<(ComponentId, Vec<&'static str>)> = vec![(group, Vec::new())];
        assert_eq!(observer.events.into_inner().unwrap(), expected);
    }

    #[test]
    fn test_dispatch_rejects_non_group() {
        let mut tree: ComponentTree<&str> = ComponentTree::new();
        let page = tree.attach_root(Component::container("page"));
        let mut cycle = RequestCycle::new(FormRequest::new());

        let err = dispatch(
            &mut tree,
            &mut cycle,
            page,
            &NoSelectionObserver,
            &ProcessingOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GroupError::NotAGroup {
                path: "page".to_string()
            }
        );
    }

    #[test]
    fn test_stateless_hint_follows_group_flag() {
        let (tree, group) = bare_tree();
        assert!(stateless_hint(&tree, group).unwrap());

        let mut tree = ComponentTree::new();
        let group = tree.attach_root(
            Component::<&str>::check_group("toppings").with_change_notifications(),
        );
        assert!(!stateless_hint(&tree, group).unwrap());
    }
}
