//! List command - show cached tasks matching a selector

use super::{format_age, format_labels};
use crate::cli::args::ListArgs;
use crate::config::{Config, OutputFormat};
use crate::error::ListerResult;
use crate::labels::Selector;
use crate::lister::TaskLister;
use crate::resource::{Resource, Task};
use crate::ui::{self, UiContext};
use chrono::Utc;
use console::style;
use std::sync::Arc;

/// Execute the list command
pub fn execute(args: ListArgs, tasks: &TaskLister, config: &Config) -> ListerResult<()> {
    let selector = match args.selector.as_deref() {
        Some(raw) => raw.parse::<Selector>()?,
        None => Selector::everything(),
    };

    let (mut found, scope) = if args.all_namespaces {
        (tasks.list(&selector)?, "in any namespace".to_string())
    } else {
        let namespace = args
            .namespace
            .unwrap_or_else(|| config.lister.default_namespace.clone());
        let scope = format!("in namespace {:?}", namespace);
        (tasks.for_namespace(namespace).list(&selector)?, scope)
    };
    found.sort_by(|a, b| (a.namespace(), a.name()).cmp(&(b.namespace(), b.name())));

    let format = args.format.unwrap_or(config.lister.output);

    if found.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::empty(&ctx, "tasks", &scope);
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_table(&found),
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Plain => print_plain(&found),
    }

    Ok(())
}

fn print_table(tasks: &[Arc<Task>]) {
    let ctx = UiContext::detect();
    ui::heading(&ctx, "Tasks");

    println!(
        "{:<16} {:<28} {:<6} {:<8} {}",
        style("NAMESPACE").bold(),
        style("NAME").bold(),
        style("STEPS").bold(),
        style("AGE").bold(),
        style("LABELS").bold()
    );
    println!("{}", "-".repeat(80));

    let now = Utc::now();
    for task in tasks {
        let namespace = if task.namespace().is_empty() {
            style("<cluster>").dim().to_string()
        } else {
            task.namespace().to_string()
        };

        println!(
            "{:<16} {:<28} {:<6} {:<8} {}",
            namespace,
            task.name(),
            task.spec.steps.len(),
            format_age(task.metadata.creation_timestamp, now),
            format_labels(task.labels())
        );
    }

    ui::total(&ctx, tasks.len(), "task");
}

fn print_json(tasks: &[Arc<Task>]) -> ListerResult<()> {
    let items: Vec<&Task> = tasks.iter().map(|t| t.as_ref()).collect();
    let json = serde_json::to_string_pretty(&items)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(tasks: &[Arc<Task>]) {
    for task in tasks {
        println!("{}/{}", task.namespace(), task.name());
    }
}
