use crate::harness::TestContext;
use predicates::prelude::*;

const WIDGET_MOUNT: &str = "app.use(\"/api/Widget\", require(\"./routes/Widget\"));";

#[test]
fn skip_existing_policy_does_not_repeat_mounts() {
    let ctx = TestContext::new();
    ctx.write_config("[entry_point]\nmount_policy = \"skip-existing\"\n");

    ctx.generate("Widget", &["color"]);
    ctx.generate_cmd("Widget", &["color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⏭️  Skipped index.js (Widget already mounted)"));

    assert_eq!(ctx.read("index.js").matches(WIDGET_MOUNT).count(), 1);
}

#[test]
fn server_and_environment_settings_reach_generated_files() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[server]
port = 4000
cors_origins = ["http://localhost:3000"]

[environment]
database_uri = "mongodb://db:27017/widgets"
"#,
    );

    ctx.generate("Widget", &["color"]);

    let index = ctx.read("index.js");
    assert!(index.contains("const PORT = process.env.PORT || 4000;"));
    assert!(index.contains("\"http://localhost:3000\","));
    assert!(ctx.read("Dockerfile").contains("EXPOSE 4000"));
    assert!(ctx.read(".env").starts_with("MONGO_URI=mongodb://db:27017/widgets\n"));
}

#[test]
fn after_persist_issuance_changes_register_flow() {
    let ctx = TestContext::new();
    ctx.write_config("[auth]\ntoken_issuance = \"after-persist\"\n");

    ctx.generate("Widget", &["color"]);

    assert!(ctx.read("controllers/auth.js").contains("signToken(registered, \"3m\")"));
}

#[test]
fn invalid_config_aborts_before_writing() {
    let ctx = TestContext::new();
    ctx.write_config("[server]\nport = 0\n");

    ctx.generate_cmd("Widget", &["color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));

    assert_eq!(ctx.entries(), vec!["crudgen.toml".to_string()]);
}

#[test]
fn unknown_config_key_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("[server]\nhost = \"0.0.0.0\"\n");

    ctx.generate_cmd("Widget", &["color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    let config = ctx.outside().join("shared.toml");
    std::fs::write(&config, "[server]\nport = 5050\n").unwrap();

    ctx.generate_cmd("Widget", &["color"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(ctx.read("Dockerfile").contains("EXPOSE 5050"));
    assert!(!ctx.path("crudgen.toml").exists());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.generate_cmd("Widget", &["color"])
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));

    assert!(ctx.entries().is_empty());
}
