//! Presentation-side implementations of the application's observer port.

mod console;

pub use console::ConsoleObserver;
