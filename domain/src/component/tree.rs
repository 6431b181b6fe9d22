//! Component tree — arena of nodes with automatic id and token allocation.

use super::id::{ComponentId, ComponentPath, PATH_SEPARATOR};
use super::node::{CheckNode, Component, WireToken};
use super::visit::Visit;
use std::collections::HashMap;

/// Error returned when attaching a component fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Parent component not found.
    ParentNotFound(ComponentId),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::ParentNotFound(parent_id) => {
                write!(f, "Parent component not found: {}", parent_id)
            }
        }
    }
}

impl std::error::Error for TreeError {}

// =============================================================================
// ComponentTree
// =============================================================================

/// Arena-backed component hierarchy.
///
/// Child order is attach order and traversals follow it, so rendering
/// and check enumeration are deterministic. Checks attached without an
/// explicit wire token get one allocated here (`check0`, `check1`, ...);
/// tokens are unique per tree, not per group.
#[derive(Debug, Clone)]
pub struct ComponentTree<T> {
    nodes: HashMap<ComponentId, Component<T>>,
    children: HashMap<ComponentId, Vec<ComponentId>>,
    parents: HashMap<ComponentId, ComponentId>,
    next_id: usize,
    next_token: usize,
}

impl<T> Default for ComponentTree<T> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            children: HashMap::new(),
            parents: HashMap::new(),
            next_id: 0,
            next_token: 0,
        }
    }
}

impl<T> ComponentTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component with no parent.
    pub fn attach_root(&mut self, component: Component<T>) -> ComponentId {
        let id = self.allocate_id();
        self.insert_node(id, component);
        id
    }

    /// Attach a component under `parent_id`.
    pub fn attach(
        &mut self,
        parent_id: ComponentId,
        component: Component<T>,
    ) -> Result<ComponentId, TreeError> {
        if !self.nodes.contains_key(&parent_id) {
            return Err(TreeError::ParentNotFound(parent_id));
        }
        let id = self.allocate_id();
        self.insert_node(id, component);
        self.parents.insert(id, parent_id);
        self.children.entry(parent_id).or_default().push(id);
        Ok(id)
    }

    /// Get a reference to a component by id.
    pub fn get(&self, id: ComponentId) -> Option<&Component<T>> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component<T>> {
        self.nodes.get_mut(&id)
    }

    /// Get the parent id for a component.
    pub fn parent_of(&self, id: ComponentId) -> Option<ComponentId> {
        self.parents.get(&id).copied()
    }

    /// Get the child ids for a component, in attach order.
    pub fn children_of(&self, id: ComponentId) -> Option<&[ComponentId]> {
        self.children.get(&id).map(|children| children.as_slice())
    }

    /// Full path from the root to this component, separator-joined.
    pub fn path(&self, id: ComponentId) -> Option<ComponentPath> {
        let mut segments = vec![self.nodes.get(&id)?.name().to_string()];
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            if let Some(node) = self.nodes.get(&parent) {
                segments.push(node.name().to_string());
            }
            current = parent;
        }
        segments.reverse();
        Some(ComponentPath::from_segments(&segments))
    }

    /// The name a component submits under: its path minus the root
    /// segment. A root component submits under its own name.
    pub fn input_name(&self, id: ComponentId) -> Option<String> {
        let path = self.path(id)?;
        let mut segments = path.segments();
        let first = segments.next()?;
        let rest: Vec<&str> = segments.collect();
        if rest.is_empty() {
            Some(first.to_string())
        } else {
            Some(rest.join(&PATH_SEPARATOR.to_string()))
        }
    }

    /// Nearest enclosing Form, walking toward the root. `None` when the
    /// component sits outside any form.
    pub fn enclosing_form(&self, id: ComponentId) -> Option<ComponentId> {
        self.find_ancestor(id, |component| component.is_form())
    }

    /// Nearest enclosing CheckGroup, walking toward the root.
    pub fn enclosing_group(&self, id: ComponentId) -> Option<ComponentId> {
        self.find_ancestor(id, |component| component.as_group().is_some())
    }

    /// Ids of every component below `id`, pre-order, excluding `id`.
    pub fn descendants(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut found = Vec::new();
        self.visit::<()>(id, |child_id, _| {
            found.push(child_id);
            Visit::Continue
        });
        found
    }

    /// Depth-first walk of the subtree below `root_id` (excluding the
    /// root itself), stopping early when the visitor returns
    /// [`Visit::Stop`].
    pub fn visit<R>(
        &self,
        root_id: ComponentId,
        mut visitor: impl FnMut(ComponentId, &Component<T>) -> Visit<R>,
    ) -> Option<R> {
        let mut stack: Vec<ComponentId> = Vec::new();
        self.push_children(root_id, &mut stack);
        while let Some(id) = stack.pop() {
            let component = match self.nodes.get(&id) {
                Some(component) => component,
                None => continue,
            };
            if let Visit::Stop(value) = visitor(id, component) {
                return Some(value);
            }
            self.push_children(id, &mut stack);
        }
        None
    }

    /// [`visit`](Self::visit) narrowed to Check nodes.
    pub fn visit_checks<R>(
        &self,
        root_id: ComponentId,
        mut visitor: impl FnMut(ComponentId, &CheckNode<T>) -> Visit<R>,
    ) -> Option<R> {
        self.visit(root_id, |id, component| match component.as_check() {
            Some(check) => visitor(id, check),
            None => Visit::Continue,
        })
    }

    fn allocate_id(&mut self) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        id
    }

    fn allocate_token(&mut self) -> WireToken {
        let token = WireToken::new(format!("check{}", self.next_token));
        self.next_token += 1;
        token
    }

    fn insert_node(&mut self, id: ComponentId, mut component: Component<T>) {
        if let super::node::NodeKind::Check(check) = component.kind_mut() {
            if check.token().is_none() {
                let token = self.allocate_token();
                check.assign_token_if_absent(token);
            }
        }
        self.nodes.insert(id, component);
        self.children.entry(id).or_default();
    }

    fn find_ancestor(
        &self,
        id: ComponentId,
        predicate: impl Fn(&Component<T>) -> bool,
    ) -> Option<ComponentId> {
        let mut current = self.parent_of(id)?;
        loop {
            if let Some(component) = self.nodes.get(&current) {
                if predicate(component) {
                    return Some(current);
                }
            }
            current = self.parent_of(current)?;
        }
    }

    fn push_children(&self, id: ComponentId, stack: &mut Vec<ComponentId>) {
        if let Some(children) = self.children.get(&id) {
            for child in children.iter().rev() {
                stack.push(*child);
            }
        }
    }
}
