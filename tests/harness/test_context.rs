//! Shared testing harness for `crudgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every file a fresh `generate` run for `Widget` creates.
pub(crate) const WIDGET_ARTIFACTS: [&str; 14] = [
    "config/mongoose.js",
    "models/auth.js",
    "controllers/auth.js",
    "routes/auth.js",
    "models/Widget.js",
    "controllers/Widget.js",
    "routes/Widget.js",
    "index.js",
    "package.json",
    ".env",
    "Dockerfile",
    ".dockerignore",
    "docker-compose.yml",
    ".gitignore",
];

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory above the project, for invocations that pass `--dir`.
    pub(crate) fn outside(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `crudgen` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `crudgen` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("crudgen").expect("Failed to locate crudgen binary");
        cmd.current_dir(dir.as_ref()).env_remove("CRUDGEN_LOG");
        cmd
    }

    /// Run `crudgen generate` non-interactively and assert success.
    pub(crate) fn generate(&self, name: &str, fields: &[&str]) {
        self.generate_cmd(name, fields).assert().success();
    }

    /// Build a non-interactive `crudgen generate` command.
    pub(crate) fn generate_cmd(&self, name: &str, fields: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args(["generate", "--name", name]);
        for field in fields {
            cmd.args(["--field", field]);
        }
        cmd
    }

    /// Absolute path of a project-relative path.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Read a project file.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    /// Write a project file, creating parent directories.
    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write project file");
    }

    /// Write `crudgen.toml` into the project.
    pub(crate) fn write_config(&self, content: &str) {
        self.write("crudgen.toml", content);
    }

    /// Names of the entries directly inside the project directory, sorted.
    pub(crate) fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
