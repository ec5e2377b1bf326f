//! Get command - show one cached task

use super::{format_age, format_labels};
use crate::cache::split_key;
use crate::cli::args::GetArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{ListerError, ListerResult};
use crate::lister::TaskLister;
use crate::resource::{Resource, Task};
use crate::ui::{self, UiContext};
use chrono::Utc;

/// Execute the get command
///
/// Accepts a bare name or `namespace/name`.
pub fn execute(args: GetArgs, tasks: &TaskLister, config: &Config) -> ListerResult<()> {
    let (namespace, name) = resolve(&args, config)?;
    let task = tasks.for_namespace(namespace).get(&name)?;

    match args.format.unwrap_or(config.lister.output) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(task.as_ref())?),
        OutputFormat::Plain => println!("{}/{}", task.namespace(), task.name()),
        OutputFormat::Table => print_detail(&task),
    }

    Ok(())
}

/// Work out which namespace and name the user asked for
fn resolve(args: &GetArgs, config: &Config) -> ListerResult<(String, String)> {
    let (key_namespace, name) = split_key(&args.name)?;

    let namespace = match (key_namespace, args.namespace.as_deref()) {
        (Some(from_key), Some(flag)) if from_key != flag => {
            return Err(ListerError::User(format!(
                "Namespace {:?} in {:?} conflicts with --namespace {:?}",
                from_key, args.name, flag
            )));
        }
        (Some(from_key), _) => from_key.to_string(),
        (None, Some(flag)) => flag.to_string(),
        (None, None) => config.lister.default_namespace.clone(),
    };

    Ok((namespace, name.to_string()))
}

fn print_detail(task: &Task) {
    let ctx = UiContext::detect();
    ui::heading(&ctx, &format!("Task {}", task.name()));

    ui::field(&ctx, "namespace", task.namespace());
    ui::field(&ctx, "name", task.name());
    ui::field(&ctx, "apiVersion", &<Task as Resource>::api_version());
    if let Some(uid) = task.metadata.uid {
        ui::field(&ctx, "uid", &uid.to_string());
    }
    ui::field(
        &ctx,
        "age",
        &format_age(task.metadata.creation_timestamp, Utc::now()),
    );
    ui::field(&ctx, "labels", &format_labels(task.labels()));
    if let Some(ref description) = task.spec.description {
        ui::field(&ctx, "description", description);
    }

    for step in &task.spec.steps {
        ui::field(&ctx, &format!("step {}", step.name), &step.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, namespace: Option<&str>) -> GetArgs {
        GetArgs {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            format: None,
        }
    }

    #[test]
    fn bare_name_uses_default_namespace() {
        let config = Config::default();
        let (ns, name) = resolve(&args("build", None), &config).unwrap();
        assert_eq!(ns, config.lister.default_namespace);
        assert_eq!(name, "build");
    }

    #[test]
    fn flag_namespace_applies_to_bare_name() {
        let (ns, name) = resolve(&args("build", Some("ci")), &Config::default()).unwrap();
        assert_eq!((ns.as_str(), name.as_str()), ("ci", "build"));
    }

    #[test]
    fn key_form_sets_namespace() {
        let (ns, name) = resolve(&args("ci/build", None), &Config::default()).unwrap();
        assert_eq!((ns.as_str(), name.as_str()), ("ci", "build"));

        let (ns, _) = resolve(&args("ci/build", Some("ci")), &Config::default()).unwrap();
        assert_eq!(ns, "ci");
    }

    #[test]
    fn conflicting_namespaces_rejected() {
        let err = resolve(&args("ci/build", Some("prod")), &Config::default()).unwrap_err();
        assert!(matches!(err, ListerError::User(_)));
    }

    #[test]
    fn malformed_key_rejected() {
        let err = resolve(&args("a/b/c", None), &Config::default()).unwrap_err();
        assert!(matches!(err, ListerError::InvalidKey { .. }));
    }
}
