//! Integration tests for the cascade against a real directory tree
//!
//! The fixture layout mirrors a typical host:
//!
//! ```text
//! application/   highest precedence
//! modules/auth/  module with init.js
//! modules/stats/ module without init script
//! system/        fallback
//! public/        document root
//! ```

mod common;

use cascade_fs::cascade::Cascade;
use cascade_fs::config;
use cascade_fs::loader::ContentLoader;
use cascade_fs::modules::ModuleSelection;
use cascade_fs::resolver::{MergeableCategories, Resolution};
use common::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn example() -> TestFixture {
    TestFixture::new()
        .with_module("auth")
        .with_module("stats")
        .with_file("modules/auth/init.js", "global.testModuleInitialized = true;")
        .with_file("application/config/db.js", "app")
        .with_file("modules/auth/config/db.js", "auth")
        .with_file("system/config/db.js", "system")
        .with_file("application/views/template.js", "app")
        .with_file("system/views/template.js", "system")
        .with_file("modules/stats/views/chart.js", "stats")
        .with_file("system/classes/model/user.js", "model user")
        .with_file("application/media/css/style.css", "body {}")
}

/// Records every init script handed to it.
fn recording_initializer(
    calls: &Arc<Mutex<Vec<String>>>,
) -> impl FnMut(&str, &Path) -> cascade_fs::error::Result<()> + Send + 'static {
    let sink = Arc::clone(calls);
    move |module: &str, _script: &Path| {
        sink.lock().unwrap().push(module.to_string());
        Ok(())
    }
}

#[test]
fn test_initialize_sets_require_paths() {
    let fixture = example();
    let cascade = fixture.cascade();

    assert_eq!(
        cascade.roots().as_slice(),
        &[fixture.join("application"), fixture.join("system")]
    );
}

#[test]
fn test_modules_do_nothing_without_a_list() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    cascade
        .activate_modules(&ModuleSelection::Scalar("auth".to_string()))
        .unwrap();

    assert_eq!(
        cascade.roots().as_slice(),
        &[fixture.join("application"), fixture.join("system")]
    );
}

#[test]
fn test_modules_are_added_to_the_require_path() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    cascade.activate(&["auth", "stats"]).unwrap();

    assert_eq!(
        cascade.roots().as_slice(),
        &[
            fixture.join("application"),
            fixture.join("modules/auth"),
            fixture.join("modules/stats"),
            fixture.join("system"),
        ]
    );
}

#[test]
fn test_empty_module_list_keeps_the_require_path() {
    let fixture = example();
    let mut cascade = fixture.cascade();
    cascade.activate(&["auth", "stats"]).unwrap();
    let before = cascade.roots().clone();

    cascade.activate_modules(&ModuleSelection::List(vec![])).unwrap();

    assert_eq!(cascade.roots(), &before);
    assert_eq!(before.len(), 4);
}

#[test]
fn test_module_init_script_runs() {
    let fixture = example();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut cascade = fixture
        .cascade()
        .with_initializer(recording_initializer(&calls));

    cascade.activate(&["auth", "stats"]).unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["auth".to_string()]);
}

#[test]
fn test_missing_module_is_silently_omitted() {
    let fixture = example();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut cascade = fixture
        .cascade()
        .with_initializer(recording_initializer(&calls));

    cascade.activate(&["ghost"]).unwrap();

    assert_eq!(
        cascade.roots().as_slice(),
        &[fixture.join("application"), fixture.join("system")]
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_find_returns_not_found_for_unknown_file() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    assert_eq!(cascade.find("hello", "world"), Resolution::NotFound);
}

#[test]
fn test_application_overrides_system() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    assert_eq!(
        cascade.find("views", "template"),
        Resolution::Found(fixture.join("application/views/template.js"))
    );
}

#[test]
fn test_module_files_are_found_once_active() {
    let fixture = example();
    let mut cascade = fixture.cascade();
    cascade.activate(&["auth", "stats"]).unwrap();

    assert_eq!(
        cascade.find("views", "chart"),
        Resolution::Found(fixture.join("modules/stats/views/chart.js"))
    );
}

#[test]
fn test_config_merge_order_is_lowest_precedence_first() {
    let fixture = example();
    let mut cascade = fixture.cascade();
    cascade.activate(&["auth", "stats"]).unwrap();

    assert_eq!(
        cascade.find("config", "db"),
        Resolution::List(vec![
            fixture.join("system/config/db.js"),
            fixture.join("modules/auth/config/db.js"),
            fixture.join("application/config/db.js"),
        ])
    );
}

#[test]
fn test_merging_in_list_order_lets_application_win() {
    let fixture = example();
    let mut cascade = fixture.cascade();
    cascade.activate(&["auth"]).unwrap();

    let merged = cascade
        .find("config", "db")
        .into_paths()
        .iter()
        .map(|path| std::fs::read_to_string(path).unwrap())
        .last();

    assert_eq!(merged.as_deref(), Some("app"));
}

#[test]
fn test_second_lookup_does_not_probe() {
    let fixture = example();
    let probe = CountingProbe::new();
    let mut cascade = fixture.cascade().with_probe(probe.clone());

    let first = cascade.find("views", "template");
    let after_first = probe.count();
    let second = cascade.find("views", "template");

    assert_eq!(first, second);
    assert!(after_first > 0);
    assert_eq!(probe.count(), after_first);
}

#[test]
fn test_cached_miss_survives_file_creation() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    assert_eq!(cascade.find("config", "missing"), Resolution::List(vec![]));
    fixture.write("application/config/missing.js", "late");
    assert_eq!(cascade.find("config", "missing"), Resolution::List(vec![]));

    cascade.reset_cache();
    assert_eq!(
        cascade.find("config", "missing"),
        Resolution::List(vec![fixture.join("application/config/missing.js")])
    );
}

#[test]
fn test_load_by_name_maps_first_delimiter_only() {
    let fixture = example().with_file("application/classes/my/class_name.js", "my class");
    let mut cascade = fixture.cascade();

    assert_eq!(
        cascade.find_class("My_Class_Name"),
        Resolution::Found(fixture.join("application/classes/my/class_name.js"))
    );
    assert_eq!(
        cascade
            .load_by_name("My_Class_Name", &mut ContentLoader)
            .unwrap()
            .as_deref(),
        Some("my class")
    );
}

#[test]
fn test_load_by_name_miss_is_none() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    assert!(cascade
        .load_by_name("Model_Missing", &mut ContentLoader)
        .unwrap()
        .is_none());
    assert_eq!(
        cascade
            .load_by_name("Model_User", &mut ContentLoader)
            .unwrap()
            .as_deref(),
        Some("model user")
    );
}

#[test]
fn test_explicit_extension_and_force_list() {
    let fixture = example();
    let mut cascade = fixture.cascade();

    assert_eq!(
        cascade.find_resource("media", "css/style", "css", false),
        Resolution::Found(fixture.join("application/media/css/style.css"))
    );
    assert_eq!(
        cascade.find_resource("views", "template", "js", true),
        Resolution::List(vec![
            fixture.join("system/views/template.js"),
            fixture.join("application/views/template.js"),
        ])
    );
}

#[test]
fn test_custom_mergeable_set() {
    let fixture = example();
    let mut cascade = fixture
        .cascade()
        .with_mergeable(MergeableCategories::new(["views"]));

    assert_eq!(cascade.find("views", "template").paths().len(), 2);
    assert_eq!(
        cascade.find("config", "db"),
        Resolution::Found(fixture.join("application/config/db.js"))
    );
}

#[test]
fn test_cascade_from_config_file() {
    let fixture = example().with_config(configs::WITH_MODULES);
    let config = config::from_file(fixture.config_path()).unwrap();

    let mut cascade = Cascade::from_config(&config);
    cascade.activate_modules(&config.modules).unwrap();

    assert_eq!(cascade.roots().len(), 4);
    assert_eq!(cascade.doc_root(), fixture.join("public"));
    assert_eq!(
        cascade.find("views", "chart").path(),
        Some(fixture.join("modules/stats/views/chart.js").as_path())
    );
}

#[test]
fn test_config_file_with_scalar_modules_keeps_base_roots() {
    let fixture = example().with_config(configs::SCALAR_MODULES);
    let config = config::from_file(fixture.config_path()).unwrap();

    let mut cascade = Cascade::from_config(&config);
    cascade.activate_modules(&config.modules).unwrap();

    let roots: Vec<PathBuf> = cascade.roots().iter().cloned().collect();
    assert_eq!(roots, vec![fixture.join("application"), fixture.join("system")]);
}
