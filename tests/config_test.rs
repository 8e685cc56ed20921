#[path = "common/mod.rs"]
mod common;

use common::MarqueeTest;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_empty() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("not configured"));
}

#[test]
fn test_config_set_get_unset_base_url() {
    let marquee = MarqueeTest::new();

    marquee.run_success(&["config", "set", "base_url", "https://api.example.com/api"]);
    let value = marquee.run_success(&["config", "get", "base_url"]);
    assert_eq!(value.trim(), "https://api.example.com/api");

    let content = fs::read_to_string(marquee.config_dir.path().join("config.yaml")).unwrap();
    assert!(content.contains("https://api.example.com/api"));

    marquee.run_success(&["config", "unset", "base_url"]);
    let output = marquee.run_json(&["config", "get", "base_url"]);
    assert_eq!(output["key"], "base_url");
    assert!(output["value"].is_null());
}

#[test]
fn test_config_show_json() {
    let marquee = MarqueeTest::new();
    marquee.run_success(&["config", "set", "base_url", "http://localhost.test:3000/api"]);
    marquee.sign_in();

    let output = marquee.run_json(&["config", "show"]);
    assert_eq!(output["base_url"], "http://localhost.test:3000/api");
    assert_eq!(output["base_url_from_env"], false);
    assert_eq!(output["user"]["name"], "Dana");
    assert_eq!(output["user"]["email"], "dana@example.com");
    assert!(output["config_file"].as_str().unwrap().ends_with("config.yaml"));
}

#[test]
fn test_config_unknown_key() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "theme", "dark"]);
    assert!(stderr.contains("unknown config key 'theme'"), "{stderr}");
    assert!(stderr.contains("base_url, user.name, user.email, user.photo"));
}

#[test]
fn test_config_underscore_key_suggests_dot_notation() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "user_email", "dana@example.com"]);
    assert!(stderr.contains("'user.email'"), "{stderr}");
    assert!(!marquee.config_dir.path().join("config.yaml").exists());
}

#[test]
fn test_config_rejects_non_http_base_url() {
    let marquee = MarqueeTest::new();

    let stderr = marquee.run_failure(&["config", "set", "base_url", "ftp://example.com"]);
    assert!(stderr.contains("base URL must use http or https"), "{stderr}");

    let stderr = marquee.run_failure(&["config", "set", "base_url", "not a url"]);
    assert!(stderr.contains("error"), "{stderr}");
}

#[test]
fn test_unset_last_user_field_drops_profile() {
    let marquee = MarqueeTest::new();
    marquee.run_success(&["config", "set", "user.email", "dana@example.com"]);
    marquee.run_success(&["config", "unset", "user.email"]);

    let output = marquee.run_json(&["config", "show"]);
    assert!(output["user"].is_null());
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_whoami_signed_in() {
    let marquee = MarqueeTest::new();
    marquee.sign_in();

    let output = marquee.run_json(&["whoami"]);
    assert_eq!(output["signed_in"], true);
    assert_eq!(output["name"], "Dana");
    assert_eq!(output["email"], "dana@example.com");

    let text = marquee.run_success(&["whoami"]);
    assert!(text.contains("Dana"));
    assert!(text.contains("<dana@example.com>"));
}

#[test]
fn test_whoami_not_signed_in() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_json(&["whoami"]);
    assert_eq!(output["signed_in"], false);
    assert!(output["email"].is_null());

    let text = marquee.run_success(&["whoami"]);
    assert!(text.contains("Not signed in"));
}

#[test]
fn test_name_without_email_is_not_signed_in() {
    let marquee = MarqueeTest::new();
    marquee.run_success(&["config", "set", "user.name", "Dana"]);

    let output = marquee.run_json(&["whoami"]);
    assert_eq!(output["signed_in"], false);
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let marquee = MarqueeTest::new();

    let output = marquee.run_success(&["completions", "bash"]);
    assert!(output.contains("marquee"));
    assert!(output.contains("browse"));
}
