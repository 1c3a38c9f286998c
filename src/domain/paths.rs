use std::path::{Path, PathBuf};

use super::config::CONFIG_FILE_NAME;

/// Directory part of `path`: everything before the last `\` or `/`.
///
/// Returns an empty string when there is no separator.
pub fn dirname_of(path: &str) -> &str {
    path.rfind(['\\', '/']).map(|pos| &path[..pos]).unwrap_or("")
}

/// Where the running executable lives and which files sit next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub executable_path: PathBuf,
    pub executable_dir: PathBuf,
}

impl InstallPaths {
    /// Derive install paths from the executable path as reported by the OS.
    pub fn from_executable(executable_path: impl Into<PathBuf>) -> Self {
        let executable_path = executable_path.into();
        let text = executable_path.to_string_lossy().into_owned();
        let executable_dir = PathBuf::from(dirname_of(&text));
        Self { executable_path, executable_dir }
    }

    /// `conf.ini` next to the executable.
    pub fn config_file(&self) -> PathBuf {
        self.sibling(CONFIG_FILE_NAME)
    }

    /// Log file named by the `log_file` setting, next to the executable.
    pub fn log_file(&self, log_file_setting: &str) -> PathBuf {
        self.sibling(log_file_setting)
    }

    /// `<executable_dir>/<name>` as plain text; an empty directory yields `/<name>`.
    fn sibling(&self, name: &str) -> PathBuf {
        let mut path = self.executable_dir.clone().into_os_string();
        path.push("/");
        path.push(name);
        PathBuf::from(path)
    }
}

/// Everything a run needs to know about its surroundings. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub executable_path: PathBuf,
    pub executable_dir: PathBuf,
    pub config_file_path: PathBuf,
    pub log_file_path: PathBuf,
    pub input_file_path: PathBuf,
}

impl RunContext {
    pub fn new(install: &InstallPaths, log_file_path: PathBuf, input_file_path: PathBuf) -> Self {
        Self {
            executable_path: install.executable_path.clone(),
            executable_dir: install.executable_dir.clone(),
            config_file_path: install.config_file(),
            log_file_path,
            input_file_path,
        }
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file_path
    }
}
