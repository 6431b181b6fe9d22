//! Component node kinds
//!
//! The tree stores a closed set of node kinds. Capabilities are exposed
//! through accessor methods (`as_check`, `as_group`, ...) rather than
//! downcasting, so traversals can filter by capability explicitly.

use crate::selection::SelectionModel;
use serde::{Deserialize, Serialize};

/// Stable opaque string identifying one Check on the wire.
///
/// Tokens are compared byte-for-byte and case-sensitively during
/// resolution. A token must not contain the reserved value separator
/// (`;`) — that constraint is inherited from the wire format and is not
/// separately validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireToken(String);

impl WireToken {
    /// Create a token from an explicit string.
    ///
    /// # Panics
    /// Panics if the token is empty.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        assert!(!token.is_empty(), "wire token cannot be empty");
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WireToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WireToken {
    fn from(s: &str) -> Self {
        WireToken::new(s)
    }
}

impl From<String> for WireToken {
    fn from(s: String) -> Self {
        WireToken::new(s)
    }
}

/// A single checkbox choice carrying a domain value.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckNode<T> {
    value: T,
    token: Option<WireToken>,
}

impl<T> CheckNode<T> {
    /// The domain value this check contributes when selected.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The wire token, assigned by the tree at attach time when not set
    /// explicitly. `None` only for a node that was never attached.
    pub fn token(&self) -> Option<&WireToken> {
        self.token.as_ref()
    }

    pub(crate) fn assign_token_if_absent(&mut self, token: WireToken) {
        if self.token.is_none() {
            self.token = Some(token);
        }
    }
}

/// Collection-valued grouping component for Check descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckGroupNode<T> {
    model: SelectionModel<T>,
    render_body_only: bool,
    wants_change_notifications: bool,
}

impl<T> CheckGroupNode<T> {
    /// The backing selection model. Always present — the node owns the
    /// collection cell for as long as it is attached.
    pub fn model(&self) -> &SelectionModel<T> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SelectionModel<T> {
        &mut self.model
    }

    /// Whether the group emits only its body, suppressing its own tag.
    /// Defaults to true.
    pub fn render_body_only(&self) -> bool {
        self.render_body_only
    }

    /// Whether each selection change should round-trip immediately and
    /// notify the observer. Defaults to false — selection then only
    /// reaches the model on form submit.
    pub fn wants_change_notifications(&self) -> bool {
        self.wants_change_notifications
    }

    /// A group that round-trips every selection change cannot be
    /// rendered stateless; otherwise the caller's default applies.
    pub fn stateless_hint(&self, default_hint: bool) -> bool {
        if self.wants_change_notifications {
            return false;
        }
        default_hint
    }
}

/// The closed set of node kinds the tree can store.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<T> {
    /// Plain markup container with no form behavior.
    Container,
    /// Submit scope boundary. Deferred submit participants registered
    /// against a form execute during its submit phase.
    Form,
    /// Collection-valued grouping component (see [`CheckGroupNode`]).
    CheckGroup(CheckGroupNode<T>),
    /// A single checkbox choice (see [`CheckNode`]).
    Check(CheckNode<T>),
}

/// A node in the component tree: a markup id plus a kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Component<T> {
    name: String,
    kind: NodeKind<T>,
    enabled: bool,
}

impl<T> Component<T> {
    fn new(name: impl Into<String>, kind: NodeKind<T>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "component name cannot be empty");
        assert!(
            !name.contains(super::id::PATH_SEPARATOR),
            "component name cannot contain the path separator"
        );
        Self {
            name,
            kind,
            enabled: true,
        }
    }

    /// Plain markup container.
    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Container)
    }

    /// Form node — the submit scope boundary for its subtree.
    pub fn form(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Form)
    }

    /// Check group with an initially empty selection.
    pub fn check_group(name: impl Into<String>) -> Self {
        Self::check_group_with(name, Vec::new())
    }

    /// Check group pre-populated with an initial selection.
    pub fn check_group_with(name: impl Into<String>, initial: Vec<T>) -> Self {
        Self::new(
            name,
            NodeKind::CheckGroup(CheckGroupNode {
                model: SelectionModel::from_values(initial),
                render_body_only: true,
                wants_change_notifications: false,
            }),
        )
    }

    /// Check choice; its wire token is assigned by the tree at attach.
    pub fn check(name: impl Into<String>, value: T) -> Self {
        Self::new(
            name,
            NodeKind::Check(CheckNode {
                value,
                token: None,
            }),
        )
    }

    /// Check choice with an explicit wire token.
    pub fn check_with_token(name: impl Into<String>, value: T, token: impl Into<WireToken>) -> Self {
        Self::new(
            name,
            NodeKind::Check(CheckNode {
                value,
                token: Some(token.into()),
            }),
        )
    }

    /// Re-enable or suppress the group's own tag (groups emit body-only
    /// by default). No effect on other kinds.
    pub fn with_render_body_only(mut self, body_only: bool) -> Self {
        if let NodeKind::CheckGroup(group) = &mut self.kind {
            group.render_body_only = body_only;
        }
        self
    }

    /// Opt a group into immediate change round-trips. No effect on
    /// other kinds.
    pub fn with_change_notifications(mut self) -> Self {
        if let NodeKind::CheckGroup(group) = &mut self.kind {
            group.wants_change_notifications = true;
        }
        self
    }

    /// Mark the component disabled for rendering purposes.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The markup id of this component (one path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut NodeKind<T> {
        &mut self.kind
    }

    pub fn is_form(&self) -> bool {
        matches!(self.kind, NodeKind::Form)
    }

    /// Choice capability: present iff this node is a Check.
    pub fn as_check(&self) -> Option<&CheckNode<T>> {
        match &self.kind {
            NodeKind::Check(check) => Some(check),
            _ => None,
        }
    }

    /// Group capability: present iff this node is a CheckGroup.
    pub fn as_group(&self) -> Option<&CheckGroupNode<T>> {
        match &self.kind {
            NodeKind::CheckGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut CheckGroupNode<T>> {
        match &mut self.kind {
            NodeKind::CheckGroup(group) => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_token_display() {
        assert_eq!(WireToken::new("check3").to_string(), "check3");
    }

    #[test]
    #[should_panic]
    fn test_empty_wire_token_panics() {
        WireToken::new("");
    }

    #[test]
    fn test_check_without_token() {
        let component = Component::check("mushroom", "mushroom");
        let check = component.as_check().expect("check capability");
        assert!(check.token().is_none());
        assert_eq!(*check.value(), "mushroom");
    }

    #[test]
    fn test_check_with_explicit_token() {
        let component = Component::check_with_token("olive", "olive", "olv");
        let check = component.as_check().expect("check capability");
        assert_eq!(check.token().map(WireToken::as_str), Some("olv"));
    }

    #[test]
    fn test_capability_accessors() {
        let group: Component<String> = Component::check_group("toppings");
        assert!(group.as_group().is_some());
        assert!(group.as_check().is_none());
        assert!(!group.is_form());

        let form: Component<String> = Component::form("order");
        assert!(form.is_form());
        assert!(form.as_group().is_none());
    }

    #[test]
    fn test_group_renders_body_only_by_default() {
        let group: Component<String> = Component::check_group("toppings");
        assert!(group.as_group().unwrap().render_body_only());

        let tagged = Component::<String>::check_group("toppings").with_render_body_only(false);
        assert!(!tagged.as_group().unwrap().render_body_only());
    }

    #[test]
    fn test_change_notifications_default_off() {
        let group: Component<String> = Component::check_group("toppings");
        assert!(!group.as_group().unwrap().wants_change_notifications());

        let notifying = Component::<String>::check_group("toppings").with_change_notifications();
        assert!(notifying.as_group().unwrap().wants_change_notifications());
    }

    #[test]
    fn test_stateless_hint() {
        let quiet: Component<String> = Component::check_group("toppings");
        assert!(quiet.as_group().unwrap().stateless_hint(true));
        assert!(!quiet.as_group().unwrap().stateless_hint(false));

        let notifying = Component::<String>::check_group("toppings").with_change_notifications();
        assert!(!notifying.as_group().unwrap().stateless_hint(true));
    }

    #[test]
    #[should_panic]
    fn test_name_with_separator_panics() {
        Component::<String>::container("a:b");
    }

    #[test]
    fn test_disabled_component() {
        let check = Component::check("anchovy", "anchovy").disabled();
        assert!(!check.is_enabled());
    }
}
