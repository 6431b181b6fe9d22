//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts presentation-layer adapters implement.

pub mod selection_observer;

pub use selection_observer::{NoSelectionObserver, SelectionObserver};
