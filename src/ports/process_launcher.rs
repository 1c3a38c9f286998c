use crate::domain::EditorCommand;

/// Result of starting a detached child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned { pid: u32 },
    /// `code` is the OS error code, or -1 when the OS reported none.
    Failed { code: i32, message: String },
}

impl SpawnOutcome {
    pub fn is_spawned(&self) -> bool {
        matches!(self, SpawnOutcome::Spawned { .. })
    }
}

/// Port for starting the editor.
pub trait ProcessLauncher {
    /// Start `command` without waiting for it to finish.
    fn launch_detached(&mut self, command: &EditorCommand) -> SpawnOutcome;
}
