use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Modal prompts the preferences page needs from the windowing system.
pub trait Dialogs {
    /// Ask the user for a file. `start` seeds the prompt's location; `None`
    /// means the user cancelled.
    fn pick_file(&mut self, title: &str, start: Option<&Path>) -> Option<PathBuf>;
    /// Show a blocking error message.
    fn show_error(&mut self, title: &str, message: &str);
}

/// Native dialogs via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_file(&mut self, title: &str, start: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().set_title(title);
        if let Some(start) = start {
            if let Some(dir) = start.parent() {
                dialog = dialog.set_directory(dir);
            }
            if let Some(name) = start.file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }
        }
        dialog.pick_file()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
