use crate::domain::EditorCommand;
use crate::ports::{ProcessLauncher, SpawnOutcome};

/// Launcher that records commands and answers with a canned outcome.
#[derive(Debug)]
pub struct FakeLauncher {
    launched: Vec<EditorCommand>,
    outcome: SpawnOutcome,
}

impl Default for FakeLauncher {
    fn default() -> Self {
        Self { launched: Vec::new(), outcome: SpawnOutcome::Spawned { pid: 4242 } }
    }
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launcher whose every spawn fails with `code`.
    pub fn failing(code: i32) -> Self {
        Self {
            launched: Vec::new(),
            outcome: SpawnOutcome::Failed { code, message: format!("os error {code}") },
        }
    }

    pub fn launched(&self) -> &[EditorCommand] {
        &self.launched
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch_detached(&mut self, command: &EditorCommand) -> SpawnOutcome {
        self.launched.push(command.clone());
        self.outcome.clone()
    }
}
