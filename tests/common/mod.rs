//! Shared testing utilities for resolver CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness with a private copy of the resolver binary.
///
/// The resolver looks for `conf.ini` and writes its log next to its own
/// executable, so every context installs the binary into a fresh directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    install_dir: PathBuf,
    pages_dir: PathBuf,
    binary: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated installation without a `conf.ini`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let install_dir = root.path().join("install");
        let pages_dir = root.path().join("pages");
        fs::create_dir_all(&install_dir).expect("Failed to create install directory");
        fs::create_dir_all(&pages_dir).expect("Failed to create pages directory");

        let source = PathBuf::from(env!("CARGO_BIN_EXE_resolver"));
        let binary = install_dir.join(source.file_name().expect("binary has a file name"));
        // A hard link avoids exec races on a freshly written copy; fall back across filesystems.
        fs::hard_link(&source, &binary)
            .or_else(|_| fs::copy(&source, &binary).map(|_| ()))
            .expect("Failed to install resolver binary");

        Self { root, install_dir, pages_dir, binary }
    }

    /// Create an installation with the given `conf.ini` content.
    pub fn with_config(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write_config(content);
        ctx
    }

    /// Directory holding the binary, `conf.ini` and the log.
    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    /// Path of the installed binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Write `conf.ini` next to the binary.
    pub fn write_config(&self, content: &str) {
        fs::write(self.install_dir.join("conf.ini"), content).expect("Failed to write conf.ini");
    }

    /// Write a page (or any file) into the pages directory.
    pub fn write_page(&self, name: &str, content: &str) -> PathBuf {
        let path = self.pages_dir.join(name);
        fs::write(&path, content).expect("Failed to write page");
        path
    }

    /// Directory the pages are written to.
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Write raw bytes as `conf.ini` next to the binary.
    pub fn write_config_bytes(&self, content: &[u8]) {
        fs::write(self.install_dir.join("conf.ini"), content).expect("Failed to write conf.ini");
    }

    /// Install `target` under `install_dir/<dir>/<name>` as a symlink and return its path.
    #[cfg(unix)]
    pub fn link_editor(&self, dir: &str, name: &str, target: &Path) -> PathBuf {
        let editor_dir = self.install_dir.join(dir);
        fs::create_dir_all(&editor_dir).expect("Failed to create editor directory");
        let editor = editor_dir.join(name);
        std::os::unix::fs::symlink(target, &editor).expect("Failed to link editor");
        editor
    }

    /// Path inside the pages directory that is never created.
    pub fn missing_page(&self, name: &str) -> PathBuf {
        self.pages_dir.join(name)
    }

    /// Build a command invoking the installed binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Path of a log file next to the binary.
    pub fn log_path(&self, name: &str) -> PathBuf {
        self.install_dir.join(name)
    }

    /// Read a log file written next to the binary.
    pub fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.log_path(name)).expect("Failed to read log file")
    }
}
