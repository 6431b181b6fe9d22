//! Decoded form-submission parameters.

use serde::{Deserialize, Serialize};
use trellis_domain::SubmittedTokens;

/// The parameters of one form submission, in arrival order.
///
/// A multi-valued parameter (the normal shape for a check group — one
/// occurrence per checked box) keeps one entry per occurrence. The
/// struct is transport-agnostic; the query-string adapter in the
/// infrastructure layer produces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRequest {
    params: Vec<(String, String)>,
}

impl FormRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_param`](Self::add_param).
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_param(name, value);
        self
    }

    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// All values submitted under `name`, in arrival order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(param, _)| param == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// The wire payload for one input name. A name that never occurs in
    /// the request yields an absent submission — for a check group that
    /// means "nothing selected", since browsers omit unchecked boxes.
    pub fn tokens_for(&self, name: &str) -> SubmittedTokens {
        let values = self.values(name);
        if values.is_empty() {
            return SubmittedTokens::absent();
        }
        SubmittedTokens::from_tokens(values)
    }

    /// Every parameter pair, in arrival order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
