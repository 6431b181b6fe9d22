//! Per-request state.

use crate::participant::SubmitParticipant;
use crate::request::FormRequest;
use std::collections::HashMap;
use trellis_domain::ComponentId;

/// State scoped to one request: the decoded parameters plus the
/// participants queued for each form's submit phase.
///
/// The cycle is dropped when the request finishes; a participant that
/// never ran (its form never submitted) is simply discarded with it.
pub struct RequestCycle<T> {
    request: FormRequest,
    pending: HashMap<ComponentId, Vec<Box<dyn SubmitParticipant<T>>>>,
}

impl<T> RequestCycle<T> {
    pub fn new(request: FormRequest) -> Self {
        Self {
            request,
            pending: HashMap::new(),
        }
    }

    pub fn request(&self) -> &FormRequest {
        &self.request
    }

    /// Queue a participant for `form`'s submit phase. Registration
    /// order is execution order.
    pub fn register_participant(
        &mut self,
        form: ComponentId,
        participant: Box<dyn SubmitParticipant<T>>,
    ) {
        self.pending.entry(form).or_default().push(participant);
    }

    pub fn pending_count(&self, form: ComponentId) -> usize {
        self.pending.get(&form).map_or(0, Vec::len)
    }

    pub fn has_pending(&self, form: ComponentId) -> bool {
        self.pending_count(form) > 0
    }

    /// Take every participant queued for `form`, leaving its queue
    /// empty. Calling twice yields an empty vec the second time.
    pub fn drain_for(&mut self, form: ComponentId) -> Vec<Box<dyn SubmitParticipant<T>>> {
        self.pending.remove(&form).unwrap_or_default()
    }
}

impl<T> std::fmt::Debug for RequestCycle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCycle")
            .field("request", &self.request)
            .field(
                "pending",
                &self
                    .pending
                    .iter()
                    .map(|(form, queue)| (*form, queue.len()))
                    .collect::<HashMap<_, _>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::SubmitContext;
    use trellis_domain::GroupError;

    struct Inert;

    impl SubmitParticipant<&'static str> for Inert {
        fn on_submit(&mut self, _ctx: &mut SubmitContext<'_, &'static str>) -> Result<(), GroupError> {
            Ok(())
        }
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let mut cycle: RequestCycle<&str> = RequestCycle::new(FormRequest::new());
        cycle.register_participant(ComponentId(1), Box::new(Inert));
        cycle.register_participant(ComponentId(1), Box::new(Inert));
        assert_eq!(cycle.pending_count(ComponentId(1)), 2);

        assert_eq!(cycle.drain_for(ComponentId(1)).len(), 2);
        assert!(!cycle.has_pending(ComponentId(1)));
        assert!(cycle.drain_for(ComponentId(1)).is_empty());
    }

    #[test]
    fn test_queues_are_keyed_by_form() {
        let mut cycle: RequestCycle<&str> = RequestCycle::new(FormRequest::new());
        cycle.register_participant(ComponentId(1), Box::new(Inert));

        assert!(cycle.has_pending(ComponentId(1)));
        assert!(!cycle.has_pending(ComponentId(2)));
        assert!(cycle.drain_for(ComponentId(2)).is_empty());
        assert_eq!(cycle.pending_count(ComponentId(1)), 1);
    }
}
