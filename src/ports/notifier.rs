/// Title of every message shown to the user.
pub const NOTIFICATION_TITLE: &str = "Resolver code";

/// Port for telling the user about a failure.
pub trait Notifier {
    /// Show `message` and block until the user has acknowledged it.
    fn notify(&mut self, message: &str);
}
