//! Integration tests for Lister

use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "apiVersion": "v1",
  "kind": "List",
  "items": [
    {
      "apiVersion": "tekton.dev/v1alpha1",
      "kind": "Task",
      "metadata": { "name": "build", "namespace": "ci", "labels": { "app": "web", "tier": "front" } },
      "spec": { "steps": [ { "name": "compile", "image": "rust:1.82" } ] }
    },
    {
      "apiVersion": "tekton.dev/v1alpha1",
      "kind": "Task",
      "metadata": { "name": "deploy", "namespace": "ci", "labels": { "app": "db" } }
    },
    {
      "apiVersion": "tekton.dev/v1alpha1",
      "kind": "Task",
      "metadata": { "name": "build", "namespace": "prod", "labels": { "app": "web" } }
    }
  ]
}"#;

/// Temp dir holding a snapshot and a (missing) config path
fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("tasks.json");
    std::fs::write(&snapshot, SNAPSHOT).unwrap();
    let config = temp.path().join("config.toml");
    (temp, snapshot, config)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

mod cli_tests {
    use super::*;
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn lister(config: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("lister");
        cmd.env_remove("LISTER_SNAPSHOT")
            .env_remove("RUST_LOG")
            .args(["--config", path_arg(config)]);
        cmd
    }

    #[test]
    fn help_displays() {
        let (_temp, _, config) = fixture();
        lister(&config)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("query a local snapshot"));
    }

    #[test]
    fn version_displays() {
        let (_temp, _, config) = fixture();
        lister(&config)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("lister"));
    }

    #[test]
    fn list_default_namespace_is_empty() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "--snapshot", path_arg(&snapshot), "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn list_namespace_plain() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "-n", "ci", "--snapshot", path_arg(&snapshot), "-f", "plain"])
            .assert()
            .success()
            .stdout("ci/build\nci/deploy\n");
    }

    #[test]
    fn list_all_namespaces_with_selector() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "-A", "-l", "app=web", "-f", "plain"])
            .env("LISTER_SNAPSHOT", path_arg(&snapshot))
            .assert()
            .success()
            .stdout("ci/build\nprod/build\n");
    }

    #[test]
    fn list_table_empty_names_scope() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "-n", "qa", "--snapshot", path_arg(&snapshot), "-f", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No tasks found in namespace \"qa\""));
    }

    #[test]
    fn invalid_snapshot_names_bad_item() {
        let (temp, _, config) = fixture();
        let broken = temp.path().join("broken.json");
        std::fs::write(
            &broken,
            r#"[{"metadata": {"name": "ok", "namespace": "ci"}}, {"metadata": {"namespace": "ci"}}]"#,
        )
        .unwrap();
        lister(&config)
            .args(["list", "-A", "--snapshot", path_arg(&broken)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("item 1"))
            .stderr(predicate::str::contains("missing field `name`"));
    }

    #[test]
    fn list_table() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "-A", "--snapshot", path_arg(&snapshot), "-f", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("NAMESPACE"))
            .stdout(predicate::str::contains("3 task(s)"));
    }

    #[test]
    fn list_invalid_selector() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["list", "-A", "-l", "app in (web", "--snapshot", path_arg(&snapshot)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid label selector"));
    }

    #[test]
    fn list_without_snapshot() {
        let (_temp, _, config) = fixture();
        lister(&config)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No snapshot configured"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn get_by_key() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["get", "prod/build", "--snapshot", path_arg(&snapshot), "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"namespace\": \"prod\""));
    }

    #[test]
    fn get_missing_task() {
        let (_temp, snapshot, config) = fixture();
        lister(&config)
            .args(["get", "missing", "-n", "ci", "--snapshot", path_arg(&snapshot)])
            .assert()
            .failure()
            .stderr(predicate::str::contains("task.tekton.dev \"missing\" not found"));
    }

    #[test]
    fn snapshot_namespace_index_can_be_disabled() {
        let (_temp, snapshot, config) = fixture();
        std::fs::write(&config, "[cache]\nnamespace_index = false\n").unwrap();
        lister(&config)
            .args(["list", "-n", "prod", "--snapshot", path_arg(&snapshot), "-f", "plain"])
            .assert()
            .success()
            .stdout("prod/build\n");
    }

    #[test]
    fn config_default_namespace_and_snapshot() {
        let (_temp, snapshot, config) = fixture();
        std::fs::write(
            &config,
            format!(
                "[lister]\ndefault_namespace = \"ci\"\noutput = \"plain\"\n\n[cache]\nsnapshot = {:?}\n",
                path_arg(&snapshot)
            ),
        )
        .unwrap();
        lister(&config)
            .args(["get", "deploy"])
            .assert()
            .success()
            .stdout("ci/deploy\n");
    }

    #[test]
    fn config_path() {
        let (_temp, _, config) = fixture();
        lister(&config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let (_temp, _, config) = fixture();
        lister(&config)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("[cache]"));
    }

    #[test]
    fn config_init_writes_file() {
        let (_temp, _, config) = fixture();
        lister(&config).args(["config", "init"]).assert().success();
        assert!(config.exists());
    }
}

mod lister_tests {
    use super::*;
    use lister::resource::Task;
    use lister::{IndexError, Indexer, Lister, ListerError, Resource, Selector, Store};
    use std::sync::Arc;

    fn seeded() -> (TempDir, Lister<Task>) {
        let (temp, snapshot, _) = fixture();
        let store = Store::<Task>::new();
        let count = lister::snapshot::load_into(&store, &snapshot).unwrap();
        assert_eq!(count, 3);
        (temp, Lister::new(Arc::new(store)))
    }

    fn names(tasks: &[Arc<Task>]) -> Vec<String> {
        let mut keys: Vec<String> = tasks
            .iter()
            .map(|t| format!("{}/{}", t.namespace(), t.name()))
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn global_and_scoped_views() {
        let (_temp, tasks) = seeded();

        let all = tasks.list(&Selector::everything()).unwrap();
        assert_eq!(names(&all), ["ci/build", "ci/deploy", "prod/build"]);

        let web: Selector = "app=web".parse().unwrap();
        let ci = tasks.for_namespace("ci");
        assert_eq!(names(&ci.list(&web).unwrap()), ["ci/build"]);

        let prod_build = tasks.for_namespace("prod").get("build").unwrap();
        assert_eq!(prod_build.namespace(), "prod");
    }

    #[test]
    fn get_missing_reports_bare_name() {
        let (_temp, tasks) = seeded();
        let err = tasks.for_namespace("prod").get("deploy").unwrap_err();
        match err {
            ListerError::NotFound { resource, name } => {
                assert_eq!(resource.resource, "task");
                assert_eq!(name, "deploy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    struct Unavailable;

    impl Indexer<Task> for Unavailable {
        fn get_by_key(&self, _key: &str) -> Result<Option<Arc<Task>>, IndexError> {
            Err(IndexError::Internal("cache unavailable".to_string()))
        }

        fn for_each(&self, _visit: &mut dyn FnMut(&Arc<Task>)) -> Result<(), IndexError> {
            Err(IndexError::Internal("cache unavailable".to_string()))
        }
    }

    #[test]
    fn indexer_failures_pass_through() {
        let tasks = Lister::<Task>::new(Arc::new(Unavailable));
        let expected = IndexError::Internal("cache unavailable".to_string());

        match tasks.list(&Selector::everything()) {
            Err(ListerError::Index(e)) => assert_eq!(e, expected),
            other => panic!("unexpected result: {other:?}"),
        }
        match tasks.for_namespace("ci").list(&Selector::everything()) {
            Err(ListerError::Index(e)) => assert_eq!(e, expected),
            other => panic!("unexpected result: {other:?}"),
        }
        match tasks.for_namespace("ci").get("build") {
            Err(ListerError::Index(e)) => assert_eq!(e, expected),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let store = Arc::new(Store::<Task>::new());
        for i in 0..50 {
            store.add(Task::new("ci", format!("task-{i}")).with_label("app", "web"));
        }
        let tasks = Lister::new(store.clone());
        let web: Selector = "app=web".parse().unwrap();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let tasks = tasks.clone();
                let web = web.clone();
                s.spawn(move || {
                    for _ in 0..100 {
                        let listed = tasks.for_namespace("ci").list(&web).unwrap();
                        assert!(listed.len() >= 50);
                        assert!(listed.iter().all(|t| t.namespace() == "ci"));
                        tasks.for_namespace("ci").get("task-0").unwrap();
                    }
                });
            }

            s.spawn(|| {
                for i in 50..150 {
                    store.add(Task::new("ci", format!("task-{i}")).with_label("app", "web"));
                }
            });
        });

        assert_eq!(tasks.list(&Selector::everything()).unwrap().len(), 150);
    }
}

mod properties {
    use lister::resource::Task;
    use lister::{Lister, Resource, Selector, Store};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn arb_task() -> impl Strategy<Value = Task> {
        (
            prop::sample::select(vec!["", "ci", "prod", "dev"]),
            "[a-z][a-z0-9-]{0,8}",
            prop::collection::btree_map(
                prop::sample::select(vec!["app", "tier", "env"]),
                prop::sample::select(vec!["web", "db", "front"]),
                0..3,
            ),
        )
            .prop_map(|(ns, name, labels)| {
                labels
                    .into_iter()
                    .fold(Task::new(ns, name), |t, (k, v)| t.with_label(k, v))
            })
    }

    fn lister_over(tasks: &[Task]) -> Lister<Task> {
        let store = Store::<Task>::new();
        for task in tasks {
            store.add(task.clone());
        }
        Lister::new(Arc::new(store))
    }

    fn keys(tasks: &[Arc<Task>]) -> Vec<String> {
        let mut keys: Vec<String> = tasks
            .iter()
            .map(|t| format!("{}/{}", t.namespace(), t.name()))
            .collect();
        keys.sort();
        keys
    }

    proptest! {
        #[test]
        fn get_returns_last_stored(tasks in prop::collection::vec(arb_task(), 0..20)) {
            let lister = lister_over(&tasks);
            for task in &tasks {
                let got = lister.for_namespace(task.namespace()).get(task.name()).unwrap();
                prop_assert_eq!(got.namespace(), task.namespace());
                prop_assert_eq!(got.name(), task.name());
            }
        }

        #[test]
        fn namespace_list_is_exact_partition(
            tasks in prop::collection::vec(arb_task(), 0..20),
            ns in prop::sample::select(vec!["", "ci", "prod", "dev", "other"]),
        ) {
            let lister = lister_over(&tasks);
            let all = lister.list(&Selector::everything()).unwrap();
            let scoped = lister.for_namespace(ns).list(&Selector::everything()).unwrap();

            let expected: Vec<Arc<Task>> =
                all.iter().filter(|t| t.namespace() == ns).cloned().collect();
            prop_assert_eq!(keys(&scoped), keys(&expected));
        }

        #[test]
        fn filtered_list_is_matching_subset(
            tasks in prop::collection::vec(arb_task(), 0..20),
            raw in prop::sample::select(vec!["app=web", "tier!=db", "env", "!env", "app in (web,db)"]),
        ) {
            let lister = lister_over(&tasks);
            let selector: Selector = raw.parse().unwrap();
            let all = lister.list(&Selector::everything()).unwrap();
            let filtered = lister.list(&selector).unwrap();

            let expected: Vec<Arc<Task>> =
                all.iter().filter(|t| selector.matches(t.labels())).cloned().collect();
            prop_assert_eq!(keys(&filtered), keys(&expected));
        }

        #[test]
        fn global_list_is_deduplicated_inserted_set(
            tasks in prop::collection::vec(arb_task(), 0..20),
        ) {
            let lister = lister_over(&tasks);
            let listed = keys(&lister.list(&Selector::everything()).unwrap());

            let mut inserted: Vec<String> = tasks
                .iter()
                .map(|t| format!("{}/{}", t.namespace(), t.name()))
                .collect();
            inserted.sort();
            inserted.dedup();
            prop_assert_eq!(listed, inserted);
        }

        #[test]
        fn repeated_reads_agree(tasks in prop::collection::vec(arb_task(), 0..20)) {
            let lister = lister_over(&tasks);
            let first = lister.list(&Selector::everything()).unwrap();
            let second = lister.list(&Selector::everything()).unwrap();
            prop_assert_eq!(keys(&first), keys(&second));
        }
    }
}
