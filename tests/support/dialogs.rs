use std::path::{Path, PathBuf};

use vmware_prefs::egui_app::controller::Dialogs;

/// Dialogs that never block: picks come from `pick`, everything shown is recorded.
#[derive(Default)]
pub struct HeadlessDialogs {
    pub pick: Option<PathBuf>,
    pub pick_starts: Vec<Option<PathBuf>>,
    pub errors: Vec<String>,
}

impl Dialogs for HeadlessDialogs {
    fn pick_file(&mut self, _title: &str, start: Option<&Path>) -> Option<PathBuf> {
        self.pick_starts.push(start.map(Path::to_path_buf));
        self.pick.clone()
    }

    fn show_error(&mut self, _title: &str, message: &str) {
        self.errors.push(message.to_string());
    }
}
