//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test site context
///
/// Creates a temporary base directory for a run and provides utilities for
/// setting up a scripted board tool and inspecting the published files.
pub struct TestSite {
    /// Temporary base directory
    pub dir: TempDir,
}

impl TestSite {
    /// Create a new test site in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the base directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test site
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test site
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test site
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run boardmeta in the test site without any inherited tool override
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_boardmeta"));
        cmd.current_dir(self.path());
        cmd.env_remove("ARDUINO_CLI_CMD");
        cmd.env_remove("BOARDMETA_LIBRARIES_URL");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd.output().expect("Failed to execute boardmeta")
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// Scripted stand-in for `arduino-cli`
///
/// Answers `board listall --json` with `fixtures/listall.json` and
/// `board details --json -b FQBN` with `fixtures/<sanitized FQBN>.json`.
/// A `.fail` fixture makes the detail call print it to stderr and exit 2;
/// `listall.exit` makes the listing fail with that exit code, after printing
/// any listing fixture.
#[cfg(unix)]
pub struct FakeBoardTool {
    /// Directory holding the fixtures
    pub fixtures: PathBuf,
}

#[cfg(unix)]
impl FakeBoardTool {
    /// Install the script at `relative_path` inside the test site
    pub fn install(site: &TestSite, relative_path: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let fixtures = site.path().join("fixtures");
        std::fs::create_dir_all(&fixtures).expect("Failed to create fixtures directory");

        let script = format!(
            r#"#!/bin/sh
dir='{fixtures}'
case "$2" in
  listall)
    if [ -f "$dir/listall.exit" ]; then
      [ -f "$dir/listall.json" ] && cat "$dir/listall.json"
      echo "listing broke" >&2
      exit "$(cat "$dir/listall.exit")"
    fi
    cat "$dir/listall.json"
    ;;
  details)
    name=$(printf '%s' "$5" | tr -c 'A-Za-z0-9._-' '_')
    if [ -f "$dir/$name.fail" ]; then
      cat "$dir/$name.fail" >&2
      exit 2
    fi
    cat "$dir/$name.json"
    ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 64
    ;;
esac
"#,
            fixtures = fixtures.display()
        );

        let path = site.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create script directory");
        }
        std::fs::write(&path, script).expect("Failed to write fake board tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake board tool executable");

        Self { fixtures }
    }

    /// Set the listing output
    pub fn listing(&self, body: &str) -> &Self {
        std::fs::write(self.fixtures.join("listall.json"), body).expect("Failed to write listing");
        self
    }

    /// Make the listing fail with `code`
    pub fn listing_fails(&self, code: i32) -> &Self {
        std::fs::write(self.fixtures.join("listall.exit"), code.to_string())
            .expect("Failed to write listing exit code");
        self
    }

    /// Set the detail output for `fqbn`
    pub fn detail(&self, fqbn: &str, body: &str) -> &Self {
        std::fs::write(self.fixtures.join(format!("{}.json", sanitize(fqbn))), body)
            .expect("Failed to write detail");
        self
    }

    /// Make the detail call for `fqbn` fail with `stderr`
    pub fn detail_fails(&self, fqbn: &str, stderr: &str) -> &Self {
        std::fs::write(self.fixtures.join(format!("{}.fail", sanitize(fqbn))), stderr)
            .expect("Failed to write detail failure");
        self
    }
}

fn sanitize(fqbn: &str) -> String {
    fqbn.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Detail document for a board with an explicit package URL
pub const BOARD1_DETAIL: &str = r#"{"name":"Board1","version":1,"config_options":[],"package":{"url":"https://example.com/index.json"}}"#;

/// Published output for a listing holding only `a:b:c` with [`BOARD1_DETAIL`]
pub const BOARD1_PUBLISHED: &str = r#"{
    "a:b:c": {
        "name": "Board1",
        "version": "1",
        "config_options": [],
        "package_url": "https://example.com/index.json"
    }
}
"#;
