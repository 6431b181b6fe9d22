//! Minimal markup tag model.
//!
//! Just enough of an HTML tag to carry attribute rewrites between the
//! grouping logic and the renderer: a name plus ordered attributes.
//! Attribute names compare ASCII case-insensitively, as in HTML.

use serde::{Deserialize, Serialize};

/// An element tag with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing an existing one in place so the
    /// original attribute order survives rewrites.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => self.attributes[index].1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Remove an attribute, returning its previous value if present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.position(name)?;
        Some(self.attributes.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|index| self.attributes[index].1.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut tag = Tag::new("span");
        tag.set("class", "group");
        assert_eq!(tag.get("class"), Some("group"));
        assert!(tag.has("class"));
        assert!(!tag.has("id"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut tag = Tag::new("input")
            .with_attribute("type", "checkbox")
            .with_attribute("name", "order:toppings");
        tag.set("type", "hidden");

        let attributes: Vec<(&str, &str)> = tag.attributes().collect();
        assert_eq!(
            attributes,
            vec![("type", "hidden"), ("name", "order:toppings")]
        );
    }

    #[test]
    fn test_remove_returns_old_value() {
        let mut tag = Tag::new("input").with_attribute("disabled", "disabled");
        assert_eq!(tag.remove("disabled"), Some("disabled".to_string()));
        assert_eq!(tag.remove("disabled"), None);
    }

    #[test]
    fn test_attribute_names_are_case_insensitive() {
        let mut tag = Tag::new("input").with_attribute("Name", "order:toppings");
        assert_eq!(tag.get("name"), Some("order:toppings"));
        assert_eq!(tag.remove("NAME"), Some("order:toppings".to_string()));
        assert!(!tag.has("name"));
    }
}
