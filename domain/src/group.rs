//! Check group operations — projection, resolution, commit, tag cleanup.
//!
//! A check group never carries its own wire value. Its state lives in
//! two places that these operations keep in step:
//!
//! - **Model side**: the [`SelectionModel`](crate::selection::SelectionModel)
//!   of selected domain values, owned by the group node.
//! - **Wire side**: the tokens of the checked boxes, submitted as a
//!   list (or joined with [`VALUE_SEPARATOR`] when flattened into a
//!   single raw value).
//!
//! [`projected_wire_value`] maps model → wire for rendering;
//! [`resolve_submitted`] maps wire → model on submission. Resolution is
//! all-or-nothing: one unknown token rejects the whole submission and
//! leaves the model untouched.

use crate::component::{ComponentId, ComponentTree, Visit};
use crate::error::GroupError;
use crate::markup::Tag;
use serde::{Deserialize, Serialize};

/// Separator used when the selected tokens are flattened into a single
/// raw wire value.
pub const VALUE_SEPARATOR: char = ';';

// =============================================================================
// SubmittedTokens
// =============================================================================

/// The raw wire payload for one group in one request.
///
/// Distinguishes a parameter that was never sent (`absent` — the
/// browser omits unchecked boxes entirely) from one sent with no
/// usable entries. Both resolve to an empty selection; the distinction
/// is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmittedTokens {
    entries: Option<Vec<Option<String>>>,
}

impl SubmittedTokens {
    /// The parameter was not present in the request at all.
    pub fn absent() -> Self {
        Self { entries: None }
    }

    /// A submission where every entry carries a token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: Some(tokens.into_iter().map(|token| Some(token.into())).collect()),
        }
    }

    /// A submission with possibly-missing entries, as decoded from the
    /// request.
    pub fn from_entries(entries: Vec<Option<String>>) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    /// Split a flattened raw value back into tokens. An empty string
    /// yields a present-but-empty submission.
    pub fn from_wire_value(value: &str) -> Self {
        if value.is_empty() {
            return Self {
                entries: Some(Vec::new()),
            };
        }
        Self::from_tokens(value.split(VALUE_SEPARATOR))
    }

    pub fn is_absent(&self) -> bool {
        self.entries.is_none()
    }

    /// Tokens that actually carry a value, in wire order.
    pub fn present_tokens(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flatten()
            .filter_map(|entry| entry.as_deref())
    }
}

// =============================================================================
// Model → wire
// =============================================================================

/// Project the group's current selection onto the wire: the tokens of
/// every selected check under the group, in tree order, joined with
/// [`VALUE_SEPARATOR`]. An empty selection projects to `""`.
pub fn projected_wire_value<T: PartialEq>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<String, GroupError> {
    let group = require_group(tree, group_id)?;
    let mut wire_value = String::new();
    tree.visit_checks::<()>(group_id, |_, check| {
        if let Some(token) = check.token() {
            if group.model().is_selected(check.value()) {
                if !wire_value.is_empty() {
                    wire_value.push(VALUE_SEPARATOR);
                }
                wire_value.push_str(token.as_str());
            }
        }
        Visit::Continue
    });
    Ok(wire_value)
}

// =============================================================================
// Wire → model
// =============================================================================

/// Resolve a submission against the checks under the group.
///
/// An absent or empty submission resolves to an empty selection (the
/// browser omits unchecked boxes, so "nothing arrived" means "nothing
/// selected"). Entries without a token are skipped. Each token must
/// match, byte for byte, the token of some check below the group; the
/// first match in tree order wins. One unknown token fails the whole
/// submission with [`GroupError::UnresolvedToken`].
///
/// Resolution never touches the model — pair with [`commit_selection`].
pub fn resolve_submitted<T: Clone + PartialEq>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
    submitted: &SubmittedTokens,
) -> Result<Vec<T>, GroupError> {
    require_group(tree, group_id)?;
    let mut selection = Vec::new();
    for token in submitted.present_tokens() {
        let resolved = tree.visit_checks(group_id, |_, check| {
            match check.token() {
                Some(candidate) if candidate.as_str() == token => {
                    Visit::Stop(check.value().clone())
                }
                _ => Visit::Continue,
            }
        });
        match resolved {
            Some(value) => selection.push(value),
            None => {
                return Err(GroupError::UnresolvedToken {
                    submitted: submitted.present_tokens().map(str::to_string).collect(),
                    path: path_of(tree, group_id),
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(selection)
}

/// Replace the group's selection with already-resolved values.
pub fn commit_selection<T>(
    tree: &mut ComponentTree<T>,
    group_id: ComponentId,
    values: Vec<T>,
) -> Result<(), GroupError> {
    let path = path_of(tree, group_id);
    let component = tree
        .get_mut(group_id)
        .ok_or(GroupError::MissingComponent(group_id))?;
    let group = component
        .as_group_mut()
        .ok_or(GroupError::NotAGroup { path })?;
    group.model_mut().commit(values);
    Ok(())
}

/// Snapshot of the group's current selection.
pub fn selected_values<T: Clone>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<Vec<T>, GroupError> {
    let group = require_group(tree, group_id)?;
    Ok(group.model().selected().to_vec())
}

// =============================================================================
// Tag cleanup
// =============================================================================

/// Strip the form-control attributes from a group's own tag. The group
/// itself never submits a value; `name` and `disabled` belong to the
/// individual check inputs, and a stray `disabled` on the wrapper tag
/// is not valid markup.
pub fn clean_group_tag(tag: &mut Tag) {
    tag.remove("disabled");
    tag.remove("name");
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Tokens claimed by more than one check under the group, sorted.
///
/// Resolution still works with duplicates (first match in tree order
/// wins), but a duplicate usually means two checks were attached with
/// the same explicit token by mistake.
pub fn duplicate_tokens<T>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<Vec<String>, GroupError> {
    require_group(tree, group_id)?;
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    tree.visit_checks::<()>(group_id, |_, check| {
        if let Some(token) = check.token() {
            *counts.entry(token.as_str().to_string()).or_default() += 1;
        }
        Visit::Continue
    });
    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(token, _)| token)
        .collect();
    duplicates.sort();
    Ok(duplicates)
}

fn require_group<T>(
    tree: &ComponentTree<T>,
    group_id: ComponentId,
) -> Result<&crate::component::CheckGroupNode<T>, GroupError> {
    let component = tree
        .get(group_id)
        .ok_or(GroupError::MissingComponent(group_id))?;
    component.as_group().ok_or_else(|| GroupError::NotAGroup {
        path: path_of(tree, group_id),
    })
}

fn path_of<T>(tree: &ComponentTree<T>, id: ComponentId) -> String {
    tree.path(id)
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| id.to_string())
}
