//! Selection state owned by a check group.

use serde::{Deserialize, Serialize};

/// The collection of currently selected values for one group.
///
/// Commits happen in place (clear + extend) so the model cell keeps its
/// identity across request cycles; only the contents change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionModel<T> {
    values: Vec<T>,
}

impl<T> SelectionModel<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Currently selected values, in commit order.
    pub fn selected(&self) -> &[T] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Replace the selection with `values`. An empty vec deselects all.
    pub fn commit(&mut self, values: Vec<T>) {
        self.values.clear();
        self.values.extend(values);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: PartialEq> SelectionModel<T> {
    pub fn is_selected(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl<T> Default for SelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_empty() {
        let model: SelectionModel<String> = SelectionModel::new();
        assert!(model.is_empty());
        assert_eq!(model.len(), 0);
    }

    #[test]
    fn test_commit_replaces_selection() {
        let mut model = SelectionModel::from_values(vec!["a", "b"]);
        model.commit(vec!["c"]);
        assert_eq!(model.selected(), &["c"]);
    }

    #[test]
    fn test_commit_empty_deselects_all() {
        let mut model = SelectionModel::from_values(vec![1, 2, 3]);
        model.commit(Vec::new());
        assert!(model.is_empty());
    }

    #[test]
    fn test_is_selected() {
        let model = SelectionModel::from_values(vec!["olive", "mushroom"]);
        assert!(model.is_selected(&"olive"));
        assert!(!model.is_selected(&"anchovy"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let model = SelectionModel::from_values(vec!["a", "b"]);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let back: SelectionModel<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.selected(), &["a".to_string(), "b".to_string()]);
    }
}
