use std::io::{IsTerminal, Write};

use dialoguer::Input;

use crate::ports::{NOTIFICATION_TITLE, Notifier};

/// Notifier for platforms without a native message box.
///
/// Prints the message to stderr and, when a user is at the terminal, waits for
/// Enter so the message behaves like a modal dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn is_interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        let mut stderr = std::io::stderr();
        let _ = writeln!(stderr, "{}", format_notification(message));

        if !Self::is_interactive() {
            return;
        }
        // Ctrl-C or a closed terminal counts as acknowledgement.
        let _ = Input::<String>::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text();
    }
}

/// Console rendering of a notification.
pub fn format_notification(message: &str) -> String {
    format!("{NOTIFICATION_TITLE}: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_carries_title() {
        assert_eq!(
            format_notification("Passed filename 'x' does not exist"),
            "Resolver code: Passed filename 'x' does not exist"
        );
    }
}
