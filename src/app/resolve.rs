//! The resolve run: read `conf.ini`, open the transcript, scan the page, start the editor.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use clap::error::ErrorKind;

use super::AppContext;
use super::cli::Cli;
use super::transcript;
use crate::adapters::FileLogSink;
use crate::domain::tag_scanner;
use crate::domain::{
    AppError, Config, EDITOR, EditorCommand, InstallPaths, LOG_FILE, META_NAME, RunContext,
    ScanResult, SettingKey,
};
use crate::ports::{LogSink, Notifier, NullLogSink, ProcessLauncher, SpawnOutcome};

/// What a run did once it got past argument handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// `--help` or `--version` was printed instead of resolving anything.
    Informational,
    /// The editor was started (or an attempt was made).
    Launched { scan: ScanResult, command: EditorCommand, spawn: SpawnOutcome },
}

enum Arguments {
    Input(PathBuf),
    Informational(clap::Error),
}

/// Run the resolver and turn its result into a process exit code.
///
/// Fatal errors are shown to the user before returning.
pub fn execute<N: Notifier, P: ProcessLauncher>(
    ctx: &mut AppContext<N, P>,
    install: &InstallPaths,
    args: &[OsString],
) -> i32 {
    match resolve(ctx, install, args) {
        Ok(_) => 0,
        Err(err) => {
            ctx.notifier().notify(&err.to_string());
            err.exit_code()
        }
    }
}

/// Resolve the page in `args` to a local file and open it in the editor.
pub fn resolve<N: Notifier, P: ProcessLauncher>(
    ctx: &mut AppContext<N, P>,
    install: &InstallPaths,
    args: &[OsString],
) -> Result<RunOutcome, AppError> {
    let config = load_config(&install.config_file())?;

    let log_setting = config.setting(LOG_FILE);
    let log_path = install.log_file(&log_setting.value);
    let mut log_sink = open_log(&log_path);
    let log: &mut dyn LogSink = &mut *log_sink;

    transcript::write_header(log, install, &Local::now());
    log.write_line(&log_setting.log_line());
    transcript::write_arguments(log, args);

    let input = match parse_arguments(args)? {
        Arguments::Input(path) => path,
        Arguments::Informational(info) => {
            let _ = info.print();
            return Ok(RunOutcome::Informational);
        }
    };
    if !input.exists() {
        return Err(AppError::InputFileMissing(input));
    }
    let run = RunContext::new(install, log_path, input);

    let marker = read_setting(&config, log, META_NAME);
    let scan = scan_input(run.input_file(), &marker, log)?;

    let target = match &scan {
        ScanResult::Found(local_file) => {
            if !Path::new(local_file).exists() {
                let missing = AppError::ExtractedFileMissing {
                    local_file: local_file.clone(),
                    marker: marker.clone(),
                };
                ctx.notifier().notify(&missing.to_string());
            }
            local_file.clone()
        }
        ScanResult::NotFound => {
            ctx.notifier().notify(&tag_not_found_advisory(&marker, run.input_file()));
            run.input_file().to_string_lossy().into_owned()
        }
    };

    let editor = read_setting(&config, log, EDITOR);
    let command = EditorCommand::new(editor, target);
    let spawn = launch(ctx.launcher(), log, &command);
    if let SpawnOutcome::Failed { code, .. } = &spawn {
        let failure =
            AppError::ProcessSpawnFailure { code: *code, log_file: run.log_file_path.clone() };
        ctx.notifier().notify(&failure.to_string());
    }

    Ok(RunOutcome::Launched { scan, command, spawn })
}

/// Scan the input file for the marker tag, logging every meta-like line.
pub fn scan_input(
    path: &Path,
    marker: &str,
    log: &mut dyn LogSink,
) -> Result<ScanResult, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let result = tag_scanner::scan(reader, marker, |line| {
        log.write_line(&format!("Found meta line: {line}"));
    })?;

    if let ScanResult::Found(local_file) = &result {
        log.write_line(&format!("Found {marker}='{local_file}'"));
    }
    Ok(result)
}

/// Log and start `command` without waiting for it.
pub fn launch(
    launcher: &mut impl ProcessLauncher,
    log: &mut dyn LogSink,
    command: &EditorCommand,
) -> SpawnOutcome {
    log.write_line(&format!("Starting process: '{}'", command.command_line()));
    let outcome = launcher.launch_detached(command);
    if let SpawnOutcome::Failed { code, message } = &outcome {
        log.write_line(&format!("Process start failed with code {code}: {message}"));
    }
    outcome
}

/// Message shown when the page carries no marker tag.
pub fn tag_not_found_advisory(marker: &str, input: &Path) -> String {
    format!(
        "Could not find meta tag '{}' in given input file '{}'. Therefore, I directly open the given input file. This is probably not what you want.",
        marker,
        input.display()
    )
}

fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigFileMissing(path.to_path_buf()));
    }
    let bytes = fs::read(path)
        .map_err(|source| AppError::ConfigUnreadable { path: path.to_path_buf(), source })?;
    // ANSI-encoded files from Windows editors are common; decode them lossily.
    Ok(Config::from_ini(&String::from_utf8_lossy(&bytes)))
}

fn open_log(path: &Path) -> Box<dyn LogSink> {
    match FileLogSink::create(path) {
        Ok(sink) => Box::new(sink),
        Err(_) => Box::new(NullLogSink),
    }
}

fn read_setting(config: &Config, log: &mut dyn LogSink, key: SettingKey) -> String {
    let setting = config.setting(key);
    log.write_line(&setting.log_line());
    setting.value
}

fn parse_arguments(args: &[OsString]) -> Result<Arguments, AppError> {
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Arguments::Input(cli.file)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Arguments::Informational(err))
        }
        Err(_) => Err(AppError::BadArgumentCount { program: program_name(args) }),
    }
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resolver".to_string())
}
