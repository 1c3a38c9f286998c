use crate::domain::EditorCommand;
use crate::ports::{ProcessLauncher, SpawnOutcome};

/// Starts the editor as an independent child and forgets about it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedProcessLauncher;

impl DetachedProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "windows")]
impl ProcessLauncher for DetachedProcessLauncher {
    /// Hands the whole command line to `CreateProcessW`, which resolves an
    /// unquoted program path containing spaces the same way the shell does.
    fn launch_detached(&mut self, command: &EditorCommand) -> SpawnOutcome {
        use windows::Win32::Foundation::CloseHandle;
        use windows::Win32::System::Threading::{
            CREATE_NO_WINDOW, CreateProcessW, PROCESS_INFORMATION, STARTUPINFOW,
        };
        use windows::core::{PCWSTR, PWSTR};

        // CreateProcessW may write into the command line buffer.
        let mut command_line: Vec<u16> =
            command.command_line().encode_utf16().chain(std::iter::once(0)).collect();
        let startup = STARTUPINFOW {
            cb: std::mem::size_of::<STARTUPINFOW>() as u32,
            ..Default::default()
        };
        let mut info = PROCESS_INFORMATION::default();

        // SAFETY: `command_line` is a NUL-terminated, mutable UTF-16 buffer and
        // `startup`/`info` are valid for the duration of the call.
        let created = unsafe {
            CreateProcessW(
                PCWSTR::null(),
                Some(PWSTR(command_line.as_mut_ptr())),
                None,
                None,
                false,
                CREATE_NO_WINDOW,
                None,
                PCWSTR::null(),
                &startup,
                &mut info,
            )
        };

        match created {
            Ok(()) => {
                // SAFETY: both handles were just returned by a successful CreateProcessW
                // and are closed exactly once; the child keeps running.
                unsafe {
                    let _ = CloseHandle(info.hThread);
                    let _ = CloseHandle(info.hProcess);
                }
                SpawnOutcome::Spawned { pid: info.dwProcessId }
            }
            Err(err) => SpawnOutcome::Failed {
                code: win32_code(err.code().0),
                message: err.message().to_string(),
            },
        }
    }
}

/// Win32 error code carried by an `HRESULT_FROM_WIN32` value, else the raw `HRESULT`.
#[cfg(target_os = "windows")]
fn win32_code(hresult: i32) -> i32 {
    if (hresult as u32) & 0xFFFF_0000 == 0x8007_0000 { hresult & 0xFFFF } else { hresult }
}

#[cfg(not(target_os = "windows"))]
impl ProcessLauncher for DetachedProcessLauncher {
    fn launch_detached(&mut self, command: &EditorCommand) -> SpawnOutcome {
        use std::process::Stdio;

        let mut process = build_command(command);
        process.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());

        match process.spawn() {
            // Dropping the handle does not wait for or kill the child.
            Ok(child) => SpawnOutcome::Spawned { pid: child.id() },
            Err(err) => SpawnOutcome::Failed {
                code: err.raw_os_error().unwrap_or(-1),
                message: err.to_string(),
            },
        }
    }
}

/// An editor setting naming an existing file is the program as a whole, spaces
/// included; anything else is split into program and leading arguments.
#[cfg(not(target_os = "windows"))]
fn build_command(command: &EditorCommand) -> std::process::Command {
    use std::path::Path;
    use std::process::Command;

    let editor = command.editor().trim();
    let mut process = if Path::new(editor).is_file() {
        Command::new(editor)
    } else {
        let (program, args) = command.program_and_args();
        let mut process = Command::new(program);
        process.args(args);
        process
    };
    process.arg(command.target());
    process
}
