//! Console output formatter for demo run summaries

use colored::Colorize;
use serde::Serialize;
use trellis_domain::OutputFormat;

/// Everything one demo run produced, ready for display.
///
/// Paths and values arrive pre-stringified so the formatter needs no
/// tree access; the binary builds this from the tree it owns.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Rendered markup for the whole page.
    pub markup: String,
    /// One entry per check group in the tree, in document order.
    pub groups: Vec<GroupSummary>,
    /// What the submission did, when one was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionSummary>,
}

/// State of one check group after the run.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub path: String,
    pub wire_value: String,
    pub selected: Vec<String>,
    pub stateless: bool,
}

/// How a submission travelled through the pipeline.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionSummary {
    /// Listener path, no enclosing form: applied on the spot.
    Applied { group: String },
    /// Listener path with an enclosing form: deferred, then executed in
    /// the form's submit phase.
    Deferred {
        group: String,
        form: String,
        participants_run: usize,
    },
    /// Plain full-form submission.
    FormSubmitted {
        form: String,
        defaulted_groups: Vec<String>,
        participants_run: usize,
    },
}

/// Formats run summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format for the requested output mode.
    pub fn render(summary: &RunSummary, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(summary),
            OutputFormat::Markup => Self::format_markup_only(summary),
            OutputFormat::Json => Self::format_json(summary),
        }
    }

    /// Format the complete run: markup, group states, submission.
    pub fn format(summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Trellis Check Groups"));
        output.push('\n');

        output.push_str(&Self::section_header("Markup"));
        output.push('\n');
        output.push_str(&summary.markup);

        output.push_str(&Self::section_header("Groups"));
        for group in &summary.groups {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {} ──", group.path).yellow().bold()
            ));
            output.push_str(&format!(
                "  {} \"{}\"\n",
                "wire value:".cyan(),
                group.wire_value
            ));
            if group.selected.is_empty() {
                output.push_str(&format!("  {} {}\n", "selected:".cyan(), "(none)".dimmed()));
            } else {
                output.push_str(&format!(
                    "  {} {}\n",
                    "selected:".cyan(),
                    group.selected.join(", ").green()
                ));
            }
            output.push_str(&format!("  {} {}\n", "stateless:".cyan(), group.stateless));
        }

        if let Some(submission) = &summary.submission {
            output.push_str(&Self::section_header("Submission"));
            output.push('\n');
            output.push_str(&Self::submission_line(submission));
            output.push('\n');
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(summary: &RunSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// Markup only — clean enough to pipe into a file.
    pub fn format_markup_only(summary: &RunSummary) -> String {
        summary.markup.clone()
    }

    fn submission_line(submission: &SubmissionSummary) -> String {
        match submission {
            SubmissionSummary::Applied { group } => format!(
                "{} selection applied immediately to {}",
                "->".green(),
                group.bold()
            ),
            SubmissionSummary::Deferred {
                group,
                form,
                participants_run,
            } => format!(
                "{} change on {} deferred to form {}; participants run: {}",
                "->".yellow(),
                group.bold(),
                form.bold(),
                participants_run
            ),
            SubmissionSummary::FormSubmitted {
                form,
                defaulted_groups,
                participants_run,
            } => format!(
                "{} form {} submitted; groups committed by default processing: [{}]; participants run: {}",
                "->".green(),
                form.bold(),
                defaulted_groups.join(", "),
                participants_run
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_shape() {
        let summary = RunSummary {
            markup: "<div/>\n".to_string(),
            groups: vec![GroupSummary {
                path: "page:order:toppings".to_string(),
                wire_value: "check0".to_string(),
                selected: vec!["mushroom".to_string()],
                stateless: true,
            }],
            submission: Some(SubmissionSummary::Applied {
                group: "page:toppings".to_string(),
            }),
        };

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&summary)).unwrap();
        assert_eq!(json["groups"][0]["wire_value"], "check0");
        assert_eq!(json["submission"]["kind"], "applied");
    }

    #[test]
    fn test_submission_omitted_from_json_when_absent() {
        let summary = RunSummary {
            markup: String::new(),
            groups: vec![],
            submission: None,
        };
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&summary)).unwrap();
        assert!(json.get("submission").is_none());
    }
}
