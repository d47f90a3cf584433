use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn preview_prints_mount_line() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preview", "mount", "--name", "Widget", "--field", "color"])
        .assert()
        .success()
        .stdout("app.use(\"/api/Widget\", require(\"./routes/Widget\"));\n");
}

#[test]
fn preview_renders_schema_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["p", "schema", "-n", "Widget", "-f", "color", "-f", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("const WidgetSchema = new mongoose.Schema("))
        .stdout(predicate::str::contains("Please provide weight"));

    assert!(ctx.entries().is_empty());
}

#[test]
fn preview_uses_project_config() {
    let ctx = TestContext::new();
    ctx.write_config("[server]\nport = 4100\n");

    ctx.cli()
        .args(["preview", "entry-point", "--name", "Widget", "--field", "color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("process.env.PORT || 4100;"))
        .stdout(predicate::str::contains("app.use(\"/api\", require(\"./routes/auth\"));"));
}

#[test]
fn preview_rejects_unknown_artifact() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preview", "controller", "--name", "Widget", "--field", "color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown artifact 'controller'"));
}

#[test]
fn preview_requires_a_field() {
    let ctx = TestContext::new();

    ctx.cli().args(["preview", "schema", "--name", "Widget"]).assert().failure();
}
