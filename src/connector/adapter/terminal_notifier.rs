use crate::application::Notifier;
use crate::domain::Notification;

/// Prints notifications to the terminal: regular ones on stdout, destructive
/// ones on stderr.
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn format(notification: &Notification) -> String {
        let marker = if notification.is_destructive() { "!" } else { "*" };
        format!(
            "{marker} {} - {}",
            notification.title(),
            notification.description()
        )
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let line = Self::format(&notification);
        if notification.is_destructive() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_destructive_notifications() {
        assert_eq!(
            TerminalNotifier::format(&Notification::copy_failed()),
            "! Failed to copy - Please try again"
        );
        assert!(TerminalNotifier::format(&Notification::copied()).starts_with("* Copied"));
    }
}
