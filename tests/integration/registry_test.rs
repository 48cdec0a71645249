//! Integration tests for plugin registration and lifecycle dispatch.

mod helpers;

use std::sync::Arc;

use helpers::{Controller, Editor, RecordingPlugin, call_log, calls, registry};
use stack_core::error::{AppError, ErrorKind};
use stack_plugin::prelude::*;

fn isolate() -> PluginConfig {
    PluginConfig {
        dispatch_policy: DispatchPolicy::Isolate,
        ..PluginConfig::default()
    }
}

#[test]
fn test_mount_runs_in_registration_order() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log).boxed(),
            RecordingPlugin::new("b", &log).boxed(),
            RecordingPlugin::new("c", &log).boxed(),
        ],
        PluginConfig::default(),
    );

    registry
        .handle_mount(Editor::new(1), Arc::new(Controller::default()))
        .expect("mount");

    let mounts: Vec<String> = calls(&log)
        .into_iter()
        .filter(|entry| entry.ends_with(":on_mount"))
        .collect();
    assert_eq!(mounts, vec!["a:on_mount", "b:on_mount", "c:on_mount"]);
    assert_eq!(registry.plugin_ids(), vec!["a", "b", "c"]);
}

#[test]
fn test_duplicate_id_keeps_original() {
    let first_log = call_log();
    let second_log = call_log();
    let mut registry = registry(
        vec![RecordingPlugin::new("linter", &first_log).boxed()],
        PluginConfig::default(),
    );

    let inserted = registry
        .register(RecordingPlugin::new("linter", &second_log).boxed())
        .expect("register");
    assert!(!inserted);
    assert_eq!(registry.len(), 1);
    assert!(calls(&second_log).is_empty());

    registry.handle_change("let x = 1;").expect("change");
    assert_eq!(calls(&first_log), vec!["linter:initialize", "linter:on_change"]);
    assert!(calls(&second_log).is_empty());
}

#[test]
fn test_dispose_clears_and_registry_is_reusable() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log).boxed(),
            RecordingPlugin::new("b", &log).boxed(),
        ],
        PluginConfig::default(),
    );

    let report = registry.dispose().expect("dispose");
    assert_eq!(report.visited, 2);
    assert!(registry.is_empty());
    assert_eq!(
        calls(&log)[2..],
        ["a:dispose".to_string(), "b:dispose".to_string()]
    );

    let inserted = registry
        .register(RecordingPlugin::new("a", &log).boxed())
        .expect("register after dispose");
    assert!(inserted);
    assert_eq!(registry.plugin_ids(), vec!["a"]);
}

#[test]
fn test_mount_hooks_grouped_per_plugin() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("p", &log).boxed(),
            RecordingPlugin::new("q", &log).boxed(),
        ],
        PluginConfig::default(),
    );
    let editor = Editor::new(7);

    registry
        .handle_mount(editor.clone(), Arc::new(Controller::default()))
        .expect("mount");

    let mount_calls: Vec<String> = calls(&log)
        .into_iter()
        .filter(|entry| !entry.ends_with(":initialize"))
        .collect();
    assert_eq!(
        mount_calls,
        vec![
            "p:on_mount",
            "p:contribute_commands",
            "p:contribute_language",
            "p:contribute_theme",
            "q:on_mount",
            "q:contribute_commands",
            "q:contribute_language",
            "q:contribute_theme",
        ]
    );
    assert_eq!(
        *editor.commands.lock().expect("commands"),
        vec!["p.run", "q.run"]
    );
    assert_eq!(registry.host().map(|host| host.id), Some(7));
}

#[test]
fn test_before_mount_change_and_validate_reach_all_plugins() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log).boxed(),
            RecordingPlugin::new("b", &log).boxed(),
        ],
        PluginConfig::default(),
    );

    registry.handle_before_mount().expect("before mount");
    registry.handle_change("{}").expect("change");
    let markers = vec![Marker::error("Unexpected end of JSON", 1, 2, 3).with_source("json")];
    let report = registry.handle_validation(&markers).expect("validate");
    assert_eq!(report.hook, Hook::OnValidate);
    assert!(report.is_clean());

    let entries: Vec<String> = calls(&log)
        .into_iter()
        .filter(|entry| !entry.ends_with(":initialize"))
        .collect();
    assert_eq!(
        entries,
        vec![
            "a:on_before_mount",
            "b:on_before_mount",
            "a:on_change",
            "b:on_change",
            "a:on_validate",
            "b:on_validate",
        ]
    );
}

#[test]
fn test_reregister_moves_plugin_to_end() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log).boxed(),
            RecordingPlugin::new("b", &log).boxed(),
            RecordingPlugin::new("c", &log).boxed(),
        ],
        PluginConfig::default(),
    );

    assert!(registry.unregister("a").expect("unregister"));
    assert!(registry.register(RecordingPlugin::new("a", &log).boxed()).expect("register"));

    assert_eq!(registry.plugin_ids(), vec!["b", "c", "a"]);
    assert!(calls(&log).contains(&"a:dispose".to_string()));
}

#[test]
fn test_fail_fast_aborts_remaining_plugins() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log).boxed(),
            RecordingPlugin::new("b", &log)
                .failing_on(Hook::OnChange)
                .boxed(),
            RecordingPlugin::new("c", &log).boxed(),
        ],
        PluginConfig::default(),
    );

    let err = registry.handle_change("oops").unwrap_err();
    assert_eq!(
        err,
        PluginError::Hook {
            plugin_id: "b".to_string(),
            hook: Hook::OnChange,
            message: "on_change exploded".to_string(),
        }
    );
    let log = calls(&log);
    assert!(log.contains(&"b:on_change".to_string()));
    assert!(!log.contains(&"c:on_change".to_string()));

    let app_err: AppError = err.into();
    assert_eq!(app_err.kind, ErrorKind::Plugin);
}

#[test]
fn test_isolate_continues_after_failure() {
    let log = call_log();
    let mut registry = registry(
        vec![
            RecordingPlugin::new("a", &log)
                .failing_on(Hook::ContributeCommands)
                .boxed(),
            RecordingPlugin::new("b", &log).boxed(),
        ],
        isolate(),
    );

    let report = registry
        .handle_mount(Editor::new(1), Arc::new(Controller::default()))
        .expect("mount");

    assert_eq!(report.visited, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].plugin_id(), "a");

    let log = calls(&log);
    assert!(!log.contains(&"a:contribute_language".to_string()));
    assert!(log.contains(&"b:contribute_theme".to_string()));
}

#[test]
fn test_partial_plugins_via_closures() {
    let log = call_log();
    let themes_seen = log.clone();
    let theme_plugin: BoxedPlugin<Editor, Controller> = Box::new(
        ClosurePlugin::<Editor, Controller>::new("dark", "Dark Theme").contribute_theme(
            move |controller: &Controller| {
                controller
                    .themes
                    .lock()
                    .map_err(|e| e.to_string())?
                    .push("dark".to_string());
                themes_seen
                    .lock()
                    .map_err(|e| e.to_string())?
                    .push("dark:contribute_theme".to_string());
                Ok(())
            },
        ),
    );

    let mut registry = registry(
        vec![theme_plugin, RecordingPlugin::new("b", &log).boxed()],
        PluginConfig::default(),
    );
    let controller = Arc::new(Controller::default());

    registry
        .handle_mount(Editor::new(1), controller.clone())
        .expect("mount");

    assert_eq!(*controller.themes.lock().expect("themes"), vec!["dark"]);
    assert!(Arc::ptr_eq(registry.controller(), &controller));
    assert_eq!(
        calls(&log),
        vec![
            "b:initialize",
            "dark:contribute_theme",
            "b:on_mount",
            "b:contribute_commands",
            "b:contribute_language",
            "b:contribute_theme",
        ]
    );
}
