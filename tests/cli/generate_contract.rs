use crate::harness::TestContext;
use crate::harness::test_context::WIDGET_ARTIFACTS;
use predicates::prelude::*;

const WIDGET_MOUNT: &str = "app.use(\"/api/Widget\", require(\"./routes/Widget\"));";

#[test]
fn generate_creates_every_artifact() {
    let ctx = TestContext::new();

    ctx.generate_cmd("Widget", &["color", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created models/Widget.js"))
        .stdout(predicate::str::contains("✅ Scaffolded Widget (14 created, 0 skipped)"));

    for artifact in WIDGET_ARTIFACTS {
        assert!(ctx.path(artifact).is_file(), "{} should exist", artifact);
    }
    for dir in ["config", "controllers", "middleware", "models", "routes"] {
        assert!(ctx.path(dir).is_dir(), "{} should exist", dir);
    }

    let schema = ctx.read("models/Widget.js");
    assert!(schema.contains("required: [true, \"Please provide color\"]"));
    assert!(schema.contains("required: [true, \"Please provide weight\"]"));
    assert!(schema.find("color: {").unwrap() < schema.find("weight: {").unwrap());
}

#[test]
fn generate_alias_is_accepted() {
    let ctx = TestContext::new();
    ctx.cli().args(["g", "-n", "Widget", "-f", "color"]).assert().success();
    assert!(ctx.path("routes/Widget.js").is_file());
}

#[test]
fn rerun_skips_files_and_appends_mount() {
    let ctx = TestContext::new();
    ctx.generate("Widget", &["color", "weight"]);
    let schema = ctx.read("models/Widget.js");

    ctx.generate_cmd("Widget", &["size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⏭️  Skipped models/Widget.js (already exists)"))
        .stdout(predicate::str::contains("➕ Appended Widget mount to index.js"))
        .stdout(predicate::str::contains("✅ Created").not());

    assert_eq!(ctx.read("models/Widget.js"), schema);
    assert_eq!(ctx.read("index.js").matches(WIDGET_MOUNT).count(), 2);
}

#[test]
fn second_resource_is_mounted_exactly_once() {
    let ctx = TestContext::new();
    ctx.generate("Widget", &["color", "weight"]);
    let before = ctx.read("index.js");

    ctx.generate("Gadget", &["size"]);
    let after = ctx.read("index.js");

    assert!(after.starts_with(&before));
    assert_eq!(&after[before.len()..], "app.use(\"/api/Gadget\", require(\"./routes/Gadget\"));\n");
    assert!(ctx.path("models/Gadget.js").is_file());
    assert!(ctx.read("models/Widget.js").contains("Please provide color"));
}

#[test]
fn handwritten_entry_point_is_appended_to() {
    let ctx = TestContext::new();
    ctx.write("index.js", "const app = require(\"express\")();");

    ctx.generate("Widget", &["color"]);

    assert_eq!(ctx.read("index.js"), format!("const app = require(\"express\")();\n{}\n", WIDGET_MOUNT));
}

#[test]
fn existing_files_are_never_overwritten() {
    let ctx = TestContext::new();
    ctx.write("models/Widget.js", "// hand-tuned schema\n");
    ctx.write(".env", "MONGO_URI=mongodb://prod\n");

    ctx.generate_cmd("Widget", &["color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⏭️  Skipped .env (already exists)"));

    assert_eq!(ctx.read("models/Widget.js"), "// hand-tuned schema\n");
    assert_eq!(ctx.read(".env"), "MONGO_URI=mongodb://prod\n");
    assert!(ctx.path("controllers/Widget.js").is_file());
}

#[test]
fn invalid_resource_name_writes_nothing() {
    let ctx = TestContext::new();

    ctx.generate_cmd("../Widget", &["color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resource name '../Widget'"));

    assert!(ctx.entries().is_empty());
}

#[test]
fn reserved_and_auth_resource_names_write_nothing() {
    let ctx = TestContext::new();

    for name in ["delete", "mongoose", "auth", "User"] {
        ctx.generate_cmd(name, &["color"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("Invalid resource name '{}'", name)));
    }

    assert!(ctx.entries().is_empty());
}

#[test]
fn invalid_field_name_writes_nothing() {
    let ctx = TestContext::new();

    ctx.generate_cmd("Widget", &["color", "weight kg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid field name 'weight kg'"));

    assert!(ctx.entries().is_empty());
}

#[test]
fn failed_artifact_sets_exit_code_but_others_are_written() {
    let ctx = TestContext::new();
    // A plain file where the routes directory should be.
    ctx.write("routes", "not a directory");

    ctx.generate_cmd("Widget", &["color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Failed routes/auth.js"))
        .stdout(predicate::str::contains("❌ Failed routes/Widget.js"))
        .stdout(predicate::str::contains("❌ Scaffolded Widget with 2 failed artifact(s)"));

    assert!(ctx.path("models/Widget.js").is_file());
    assert!(ctx.path("controllers/Widget.js").is_file());
    assert!(ctx.path("index.js").is_file());
    assert!(ctx.path(".gitignore").is_file());
}

#[test]
fn dir_option_targets_another_directory() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.outside())
        .args(["generate", "--name", "Widget", "--field", "color", "--dir", "work"])
        .assert()
        .success();

    assert!(ctx.path("models/Widget.js").is_file());
    assert!(!ctx.outside().join("models").exists());
}

#[test]
fn no_staging_files_are_left_behind() {
    let ctx = TestContext::new();
    ctx.generate("Widget", &["color"]);

    for dir in ["", "config", "controllers", "models", "routes"] {
        let leftovers: Vec<String> = std::fs::read_dir(ctx.path(dir))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "staging files left in '{}': {:?}", dir, leftovers);
    }
}
