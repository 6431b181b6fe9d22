//! Console implementation of the selection observer port.

use colored::Colorize;
use std::fmt::Display;
use trellis_application::SelectionObserver;
use trellis_domain::ComponentId;

/// Prints each committed selection change to the terminal.
pub struct ConsoleObserver;

impl<T: Display> SelectionObserver<T> for ConsoleObserver {
    fn selection_changed(&self, group: ComponentId, selection: &[T]) {
        let values: Vec<String> = selection.iter().map(T::to_string).collect();
        if values.is_empty() {
            println!(
                "{} {} {}",
                "->".cyan(),
                group.to_string().bold(),
                "selection cleared".dimmed()
            );
        } else {
            println!(
                "{} {} {}",
                "->".cyan(),
                group.to_string().bold(),
                values.join(", ").green()
            );
        }
    }
}
