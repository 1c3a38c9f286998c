use crate::ports::{Notifier, ProcessLauncher};

/// Application context holding the OS seams a run talks to.
pub struct AppContext<N: Notifier, P: ProcessLauncher> {
    notifier: N,
    launcher: P,
}

impl<N: Notifier, P: ProcessLauncher> AppContext<N, P> {
    /// Create a new application context.
    pub fn new(notifier: N, launcher: P) -> Self {
        Self { notifier, launcher }
    }

    /// Get a mutable reference to the notifier.
    pub fn notifier(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Get a mutable reference to the process launcher.
    pub fn launcher(&mut self) -> &mut P {
        &mut self.launcher
    }
}
