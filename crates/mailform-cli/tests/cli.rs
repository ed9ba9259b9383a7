use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

const VALID_FORM: [&str; 10] = [
    "--name",
    "Jo",
    "--email",
    "jo@x.com",
    "--phone",
    "",
    "--subject",
    "General",
    "--message",
    "1234567890",
];

fn run_raw(config_home: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("mailform")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = run_raw(config_home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_json_expecting(config_home: &Path, args: &[&str], code: i32) -> Value {
    let output = run_raw(config_home, &[&["--json"][..], args].concat());
    assert_eq!(output.status.code(), Some(code), "unexpected status: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn check_field_reports_first_failing_rule() {
    let temp = TempDir::new().expect("temp dir");

    let output = run_raw(temp.path(), &["check-field", "name", "J"]);
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "name: Name must be at least 2 characters");

    let stdout = run_cmd(temp.path(), &["check-field", "email", "a@b.co"]);
    assert_eq!(stdout.trim(), "email: ok");

    let value = run_json_expecting(temp.path(), &["check-field", "email"], 3);
    assert_eq!(value["field"], "email");
    assert_eq!(value["valid"], false);
    assert_eq!(value["message"], "Email is required");
}

#[test]
fn check_field_rejects_unknown_field() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(temp.path(), &["check-field", "website", "x"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("unknown form field: website"));
}

#[test]
fn check_lists_every_error() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json_expecting(
        temp.path(),
        &["check", "--email", "abc", "--message", "short"],
        3,
    );
    assert_eq!(value["valid"], false);
    let errors = value["errors"].as_object().expect("errors object");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors["name"], "Name is required");
    assert_eq!(errors["email"], "Please enter a valid email address");
    assert_eq!(errors["subject"], "Please select a subject");
    assert_eq!(errors["message"], "Message must be at least 10 characters");

    let stdout = run_cmd(temp.path(), &[&["check"][..], &VALID_FORM[..]].concat());
    assert_eq!(stdout.trim(), "ok");
}

#[test]
fn compose_prints_mailto_link() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json_expecting(temp.path(), &[&["compose"][..], &VALID_FORM[..]].concat(), 0);
    let mailto = value["mailto"].as_str().expect("mailto");
    assert!(mailto.starts_with("mailto:info@taxproconsultants.ca?subject=General&body="));
    assert!(mailto.contains("Phone%3A%20Not%20provided"));
    assert!(mailto.ends_with("Message%3A%0A1234567890"));
    assert!(value["message"]
        .as_str()
        .expect("message")
        .starts_with("Thank you for contacting us!"));
}

#[test]
fn compose_refuses_invalid_form() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(
        temp.path(),
        &["compose", "--name", "Jo", "--email", "jo@x", "--subject", "General"],
    );
    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(!stdout.contains("mailto:"));
    assert!(stdout.contains("email: Please enter a valid email address"));
    assert!(stdout.contains("message: Message is required"));
}

#[test]
fn compose_reads_json_input_with_flag_overrides() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("form.json");
    fs::write(
        &input,
        r#"{"name":"  Ada  ","email":"ada@example.com","subject":"Tax & Accounting","message":"Please call me back."}"#,
    )
    .expect("write form");

    let stdout = run_cmd(
        temp.path(),
        &[
            "compose",
            "--input",
            input.to_str().expect("input path"),
            "--phone",
            "+1 555 0100",
        ],
    );
    let mailto = stdout.trim();
    assert!(mailto.contains("subject=Tax%20%26%20Accounting&"));
    assert!(mailto.contains("Name%3A%20Ada%0A"));
    assert!(mailto.contains("Phone%3A%20%2B1%20555%200100"));
}

#[test]
fn compose_uses_configured_recipient() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("mailform");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "[contact]\nrecipient = \"office@example.org\"\nphone_placeholder = \"none given\"\n",
    )
    .expect("write config");

    let stdout = run_cmd(temp.path(), &[&["compose"][..], &VALID_FORM[..]].concat());
    assert!(stdout.starts_with("mailto:office@example.org?"));
    assert!(stdout.contains("Phone%3A%20none%20given"));
}

#[test]
fn missing_explicit_config_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.toml");
    let output = run_raw(
        temp.path(),
        &["--config", missing.to_str().expect("path"), "check-field", "name", "Jo"],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_input_file_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("form.json");
    let output = run_raw(
        temp.path(),
        &["check", "--input", missing.to_str().expect("path")],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn compose_reads_form_from_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("mailform")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--json", "compose", "--input", "-"])
        .write_stdin(
            r#"{"name":"Jo","email":"jo@x.com","subject":"General","message":" 1234567890 "}"#,
        )
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    let mailto = value["mailto"].as_str().expect("mailto");
    assert!(mailto.contains("Phone%3A%20Not%20provided"));
    assert!(mailto.ends_with("Message%3A%0A1234567890"));
}

#[test]
fn check_rejects_malformed_stdin_document() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("mailform")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["check", "--input", "-"])
        .write_stdin("not json")
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn completions_emit_script() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["completions", "bash"]);
    assert!(stdout.contains("mailform"));

    let out = temp.path().join("mailform.fish");
    run_cmd(
        temp.path(),
        &["completions", "fish", "--out", out.to_str().expect("out path")],
    );
    let script = fs::read_to_string(&out).expect("read completions");
    assert!(script.contains("compose"));
}
