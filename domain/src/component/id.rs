//! Component identity types

use serde::{Deserialize, Serialize};

/// Separator between path segments in a [`ComponentPath`].
pub const PATH_SEPARATOR: char = ':';

/// Unique identifier for a component within one tree instance.
///
/// Ids are allocated by the tree at attach time and are never reused
/// for the lifetime of that tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "component-{}", self.0)
    }
}

/// Markup-id path of a component from its tree root, colon-joined
/// (e.g. `page:order:toppings`).
///
/// Paths identify a component position for error reporting and as the
/// base of wire parameter names. They are derived from the tree at call
/// time, never stored on the component itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentPath(String);

impl ComponentPath {
    /// Build a path from root-to-component name segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            if !path.is_empty() {
                path.push(PATH_SEPARATOR);
            }
            path.push_str(segment.as_ref());
        }
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the name segments from root to component.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
    }
}

impl std::fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_display() {
        assert_eq!(format!("{}", ComponentId(7)), "component-7");
    }

    #[test]
    fn test_path_from_segments() {
        let path = ComponentPath::from_segments(["page", "order", "toppings"]);
        assert_eq!(path.as_str(), "page:order:toppings");
    }

    #[test]
    fn test_path_segments_roundtrip() {
        let path = ComponentPath::from("page:order:toppings");
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["page", "order", "toppings"]);
    }

    #[test]
    fn test_empty_path() {
        let path = ComponentPath::default();
        assert!(path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn test_component_id_serde_roundtrip() {
        let id = ComponentId(42);
        let json = serde_json::to_string(&id).unwrap();
        let back: ComponentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
