//! CLI entrypoint for trellis
//!
//! This is the main binary that wires together all layers: it builds
//! the demo page, runs the requested submission through the
//! application use cases, and prints the rendered result.

mod demo;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trellis_application::{
    DispatchOutcome, FormRequest, ProcessingOptions, RequestCycle, dispatch, stateless_hint,
    submit,
};
use trellis_domain::{ComponentId, ComponentTree, projected_wire_value, selected_values};
use trellis_infrastructure::{ConfigLoader, FileConfig, parse_query};
use trellis_presentation::{
    Cli, ConsoleFormatter, ConsoleObserver, GroupSummary, MarkupWriter, RenderOptions, RunSummary,
    SubmissionSummary,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting trellis");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let issues = config.validate();
    for issue in &issues {
        warn!("config: {}", issue.message);
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration; fix the reported issues and re-run");
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let demo::DemoPage {
        mut tree,
        page,
        form,
        toppings,
        favorites,
    } = demo::build_page()?;

    let options = if cli.detect_duplicates || config.processing.detect_duplicate_tokens {
        ProcessingOptions::with_duplicate_detection()
    } else {
        ProcessingOptions::default()
    };

    // Assemble the submitted request, if the invocation carries one
    let request = assemble_request(&cli, &tree, toppings)?;

    // Run the submission through the pipeline
    let observer = ConsoleObserver;
    let mut submission = None;

    if let Some(request) = request {
        let mut cycle = RequestCycle::new(request);

        match &cli.listener {
            Some(listener) => {
                let group_id = resolve_listener(&tree, listener, &[toppings, favorites])?;
                match dispatch(&mut tree, &mut cycle, group_id, &observer, &options)? {
                    DispatchOutcome::Applied => {
                        submission = Some(SubmissionSummary::Applied {
                            group: path_string(&tree, group_id),
                        });
                    }
                    DispatchOutcome::Deferred { form: deferred } => {
                        let report = submit(&mut tree, &mut cycle, deferred, &observer, &options)?;
                        submission = Some(SubmissionSummary::Deferred {
                            group: path_string(&tree, group_id),
                            form: path_string(&tree, deferred),
                            participants_run: report.participants_run,
                        });
                    }
                }
            }
            None => {
                let report = submit(&mut tree, &mut cycle, form, &observer, &options)?;
                submission = Some(SubmissionSummary::FormSubmitted {
                    form: path_string(&tree, report.form),
                    defaulted_groups: report
                        .defaulted_groups
                        .iter()
                        .map(|id| path_string(&tree, *id))
                        .collect(),
                    participants_run: report.participants_run,
                });
            }
        }
    }

    // Render the resulting page and report per-group state
    let writer = MarkupWriter::new(RenderOptions {
        indent: config.render.indent,
        listener_url: config.render.listener_url.clone(),
    });
    let markup = writer.render(&tree, page)?;

    let mut groups = Vec::new();
    for group_id in [toppings, favorites] {
        groups.push(GroupSummary {
            path: path_string(&tree, group_id),
            wire_value: projected_wire_value(&tree, group_id)?,
            selected: selected_values(&tree, group_id)?
                .into_iter()
                .map(str::to_string)
                .collect(),
            stateless: stateless_hint(&tree, group_id)?,
        });
    }

    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let summary = RunSummary {
        markup,
        groups,
        submission,
    };
    println!("{}", ConsoleFormatter::render(&summary, format));

    Ok(())
}

/// Build the request this invocation carries, if any.
///
/// A query string and `--submit` tokens are mutually exclusive; bare
/// tokens land under the toppings group's input name. A `--listener`
/// with neither yields an empty request: unchecked boxes never reach
/// the wire, so no parameters is a valid all-unchecked submission.
fn assemble_request(
    cli: &Cli,
    tree: &ComponentTree<&'static str>,
    toppings: ComponentId,
) -> Result<Option<FormRequest>> {
    if let Some(query) = &cli.query {
        if !cli.submit.is_empty() {
            bail!("Pass either a query string or --submit tokens, not both");
        }
        return Ok(Some(parse_query(query)));
    }
    if !cli.submit.is_empty() {
        let name = tree
            .input_name(toppings)
            .ok_or_else(|| anyhow!("demo tree is missing the toppings group"))?;
        let mut request = FormRequest::new();
        for token in &cli.submit {
            request.add_param(name.clone(), token);
        }
        return Ok(Some(request));
    }
    if cli.listener.is_some() {
        return Ok(Some(FormRequest::new()));
    }
    Ok(None)
}

/// Map a `--listener` path onto one of the demo's check groups.
fn resolve_listener(
    tree: &ComponentTree<&'static str>,
    listener: &str,
    groups: &[ComponentId],
) -> Result<ComponentId> {
    let mut known = Vec::new();
    for id in groups {
        let path = path_string(tree, *id);
        if path == listener {
            return Ok(*id);
        }
        known.push(path);
    }
    bail!(
        "No check group at \"{}\"; the demo page has: {}",
        listener,
        known.join(", ")
    );
}

fn path_string(tree: &ComponentTree<&'static str>, id: ComponentId) -> String {
    tree.path(id)
        .map(|path| path.to_string())
        .unwrap_or_default()
}
