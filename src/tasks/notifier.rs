use tracing::debug;

use crate::events::{Notice, NoticeLevel};

/// Surface for blocking user notifications.
pub trait Notifier {
    /// Shows `notice` and returns once the user has acknowledged it.
    fn notify(&mut self, notice: &Notice);
}

/// Native modal message box.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&mut self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => rfd::MessageLevel::Info,
            NoticeLevel::Error => rfd::MessageLevel::Error,
        };
        let result = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.body.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        debug!(title = %notice.title, ?result, "notice acknowledged");
    }
}
