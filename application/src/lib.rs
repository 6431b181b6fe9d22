//! Application layer for trellis
//!
//! This crate contains the use cases driving a check group through a
//! request (selection-change dispatch and the form submit phase), the
//! ports the presentation layer plugs into, and the per-request cycle
//! state. It depends only on the domain layer.

pub mod config;
pub mod cycle;
pub mod participant;
pub mod ports;
pub mod request;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProcessingOptions;
pub use cycle::RequestCycle;
pub use participant::{GroupSubmitParticipant, SubmitContext, SubmitParticipant};
pub use ports::{NoSelectionObserver, SelectionObserver};
pub use request::FormRequest;
pub use use_cases::selection_change::{DispatchOutcome, dispatch, stateless_hint};
pub use use_cases::submit_form::{SubmitReport, submit};
