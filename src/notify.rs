use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Blocking, user-facing notification for rejected requests.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Native modal message box.
pub struct DialogNotifier {
    title: String,
}

impl DialogNotifier {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Notifier for DialogNotifier {
    fn alert(&mut self, message: &str) {
        log::warn!("{}", message);
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(&self.title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Logs alerts only; the console still shows the error line.
#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Keeps every alert; used to observe notifications without a display.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}
