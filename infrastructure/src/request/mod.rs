//! Transport adapters that turn raw submissions into application types.

mod query;

pub use query::parse_query;
