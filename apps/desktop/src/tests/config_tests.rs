use super::{load_settings_with, Settings, SETTINGS_FILE};

use std::{
    collections::HashMap,
    env, fs,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_backend_without_timeout() {
    let settings = Settings::default();
    assert_eq!(
        settings.server_url().expect("url").as_str(),
        "http://127.0.0.1:5000/"
    );
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings.apply_file("server_url = \"http://tasks.local:8080/api\"\nrequest_timeout_secs = 15\n");
    assert_eq!(settings.server_url, "http://tasks.local:8080/api");
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
}

#[test]
fn unparseable_file_is_ignored() {
    let mut settings = Settings::default();
    settings.apply_file("server_url = [not toml");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_env() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[
        ("TASKDESK_SERVER_URL", "http://plain:1"),
        ("APP__SERVER_URL", "http://prefixed:2"),
        ("APP__REQUEST_TIMEOUT_SECS", "30"),
    ]));
    assert_eq!(settings.server_url, "http://prefixed:2");
    assert_eq!(settings.request_timeout_secs, Some(30));
}

#[test]
fn bad_timeout_env_is_ignored() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[("APP__REQUEST_TIMEOUT_SECS", "soon")]));
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn invalid_server_url_is_reported() {
    let settings = Settings {
        server_url: "not a url".into(),
        request_timeout_secs: None,
    };
    let err = settings.server_url().expect_err("must fail");
    assert!(err.to_string().contains("not a url"), "{err}");
}

fn temp_settings_dir(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("taskdesk_{tag}_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    fs::write(temp_root.join(SETTINGS_FILE), contents).expect("write settings");
    temp_root
}

#[test]
fn env_overrides_file_and_file_fills_the_rest() {
    let temp_root = temp_settings_dir(
        "layering",
        "server_url = \"http://file\"\nrequest_timeout_secs = 7\n",
    );

    let settings =
        load_settings_with(&temp_root, env_from(&[("APP__SERVER_URL", "http://env")]));
    assert_eq!(settings.server_url, "http://env");
    assert_eq!(settings.request_timeout_secs, Some(7));

    let settings = load_settings_with(&temp_root, env_from(&[]));
    assert_eq!(settings.server_url, "http://file");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let temp_root = temp_settings_dir("missing", "");
    fs::remove_file(temp_root.join(SETTINGS_FILE)).expect("remove settings");

    let settings = load_settings_with(&temp_root, env_from(&[]));
    assert_eq!(settings, Settings::default());

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn server_url_flag_beats_env_and_file() {
    let temp_root = temp_settings_dir("flag", "server_url = \"http://file\"\n");

    let mut settings =
        load_settings_with(&temp_root, env_from(&[("APP__SERVER_URL", "http://env")]));
    settings.override_server_url(Some("http://flag".into()));
    assert_eq!(settings.server_url, "http://flag");

    settings.override_server_url(None);
    assert_eq!(settings.server_url, "http://flag");

    let mut settings =
        load_settings_with(&temp_root, env_from(&[("APP__SERVER_URL", "http://env")]));
    settings.override_server_url(None);
    assert_eq!(settings.server_url, "http://env");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn settings_file_is_read_from_directory() {
    let temp_root = temp_settings_dir("read", "request_timeout_secs = 7\n");

    let settings = load_settings_with(&temp_root, env_from(&[]));
    assert_eq!(settings.request_timeout_secs, Some(7));
    assert_eq!(settings.server_url, Settings::default().server_url);

    fs::remove_dir_all(temp_root).expect("cleanup");
}
