//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use super::AppContext;
use super::resolve;
use crate::adapters::{DetachedProcessLauncher, platform_notifier};
use crate::domain::InstallPaths;

#[derive(Debug, Parser)]
#[command(name = "resolver")]
#[command(version)]
#[command(
    about = "Open the local file behind a page's view-source request in your editor",
    long_about = None
)]
pub(crate) struct Cli {
    /// Page source handed over by the browser
    #[arg(allow_hyphen_values = true)]
    pub(crate) file: PathBuf,
}

/// Locate the running executable; an unknown location degrades to an empty path.
pub fn install_paths() -> InstallPaths {
    let executable = std::env::current_exe().unwrap_or_default();
    InstallPaths::from_executable(executable)
}

/// Entry point for the CLI. Returns the process exit code.
pub fn run() -> i32 {
    let install = install_paths();
    let args: Vec<_> = std::env::args_os().collect();
    let mut ctx = AppContext::new(platform_notifier(), DetachedProcessLauncher::new());
    resolve::execute(&mut ctx, &install, &args)
}
