use super::*;

use std::{
    collections::HashMap,
    env,
    sync::atomic::{AtomicU32, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static TEMP_SEQ: AtomicU32 = AtomicU32::new(0);

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(contents: &str) -> (PathBuf, PathBuf) {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let temp_root = env::temp_dir().join(format!("tasklist_config_test_{suffix}_{seq}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("tasklist.toml");
    fs::write(&path, contents).expect("write config");
    (temp_root, path)
}

fn args_for(path: &Path, extra: &[&str]) -> Args {
    let mut argv = vec!["tasklist".to_string(), "--config".to_string(), path.display().to_string()];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::parse_from(argv)
}

#[test]
fn missing_file_yields_defaults_without_warnings() {
    let args = Args {
        config: Some(env::temp_dir().join("tasklist_config_test_does_not_exist.toml")),
        ..Args::default()
    };
    let loaded = load_settings_with_env(&args, no_env);
    assert_eq!(loaded.settings, Settings::default());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn file_values_override_defaults() {
    let (temp_root, path) = temp_config(
        r#"
window_title = "Groceries"
window_width = 400.0
initial_filter = "pending"
log_filter = "debug"
"#,
    );

    let loaded = load_settings_with_env(&args_for(&path, &[]), no_env);
    assert_eq!(loaded.settings.window_title, "Groceries");
    assert_eq!(loaded.settings.window_width, 400.0);
    assert_eq!(loaded.settings.window_height, Settings::default().window_height);
    assert_eq!(loaded.settings.initial_filter, TaskFilter::Pending);
    assert_eq!(loaded.settings.log_filter, "debug");
    assert!(loaded.warnings.is_empty());

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn env_overrides_file_and_flags_override_env() {
    let (temp_root, path) = temp_config("initial_filter = \"todo\"\nlog_filter = \"warn\"\n");
    let vars: HashMap<&str, &str> = HashMap::from([
        ("TASKLIST__INITIAL_FILTER", "completed"),
        ("TASKLIST__LOG_FILTER", "trace"),
        ("TASKLIST__WINDOW_TITLE", "From env"),
    ]);
    let env_lookup = |name: &str| vars.get(name).map(|v| v.to_string());

    let loaded = load_settings_with_env(&args_for(&path, &[]), env_lookup);
    assert_eq!(loaded.settings.initial_filter, TaskFilter::Completed);
    assert_eq!(loaded.settings.log_filter, "trace");
    assert_eq!(loaded.settings.window_title, "From env");

    let loaded = load_settings_with_env(
        &args_for(&path, &["--filter", "pending", "--log-filter", "info"]),
        env_lookup,
    );
    assert_eq!(loaded.settings.initial_filter, TaskFilter::Pending);
    assert_eq!(loaded.settings.log_filter, "info");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn unknown_filter_is_rejected_with_warning() {
    let (temp_root, path) = temp_config("initial_filter = \"todo\"\n");

    let loaded = load_settings_with_env(&args_for(&path, &["--filter", "archived"]), no_env);
    assert_eq!(loaded.settings.initial_filter, TaskFilter::Todo);
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("archived"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn invalid_file_falls_back_to_defaults_with_warning() {
    let (temp_root, path) = temp_config("window_width = \"wide\"\n");

    let loaded = load_settings_with_env(&args_for(&path, &[]), no_env);
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.warnings.len(), 1);
    assert!(loaded.warnings[0].contains("invalid settings file"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn non_positive_window_size_is_ignored() {
    let (temp_root, path) = temp_config("window_height = -10.0\n");

    let loaded = load_settings_with_env(&args_for(&path, &[]), no_env);
    assert_eq!(loaded.settings.window_height, Settings::default().window_height);
    assert_eq!(loaded.warnings.len(), 1);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn blank_values_do_not_override() {
    let loaded = load_settings_with_env(
        &Args {
            config: Some(env::temp_dir().join("tasklist_config_test_absent.toml")),
            filter: Some("   ".into()),
            log_filter: Some(String::new()),
        },
        |_| Some(" ".to_string()),
    );
    assert_eq!(loaded.settings, Settings::default());
}
