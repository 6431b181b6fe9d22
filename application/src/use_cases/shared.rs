//! Shared plumbing for the dispatch and submit use cases.

use crate::config::ProcessingOptions;
use crate::ports::SelectionObserver;
use crate::request::FormRequest;
use tracing::{debug, warn};
use trellis_domain::{
    ComponentId, ComponentTree, GroupError, commit_selection, duplicate_tokens, resolve_submitted,
    selected_values,
};

/// Resolve the request's payload for one group, commit it, and — on the
/// listener path — notify the observer with the committed selection.
///
/// Passing `None` for the observer is the default-processing variant:
/// same resolve and commit, no notification.
pub(crate) fn apply_submitted_selection<T: Clone + PartialEq>(
    tree: &mut ComponentTree<T>,
    request: &FormRequest,
    group_id: ComponentId,
    observer: Option<&dyn SelectionObserver<T>>,
    options: &ProcessingOptions,
) -> Result<Vec<T>, GroupError> {
    if options.detect_duplicate_tokens {
        for token in duplicate_tokens(tree, group_id)? {
            warn!(
                "Duplicate wire token '{}' under group {}",
                token,
                path_of(tree, group_id)
            );
        }
    }

    let input_name = tree
        .input_name(group_id)
        .ok_or(GroupError::MissingComponent(group_id))?;
    let submitted = request.tokens_for(&input_name);
    debug!(
        "Resolving {} submitted token(s) for '{}'",
        submitted.present_tokens().count(),
        input_name
    );

    let selection = resolve_submitted(tree, group_id, &submitted)?;
    commit_selection(tree, group_id, selection)?;
    let committed = selected_values(tree, group_id)?;

    if let Some(observer) = observer {
        observer.selection_changed(group_id, &committed);
    }
    Ok(committed)
}

/// Display-friendly path, falling back to the raw id for dangling ids.
pub(crate) fn path_of<T>(tree: &ComponentTree<T>, id: ComponentId) -> String {
    tree.path(id)
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| id.to_string())
}
