use std::{cell::RefCell, path::PathBuf, rc::Rc};

use code_exporter::core::{AppConfig, SelectionModel};

#[derive(Default)]
pub struct AppState {
    pub config: AppConfig,
    /// Where session settings are persisted; `None` when the platform has no
    /// config directory.
    pub settings_path: Option<PathBuf>,
    pub scan_root: Option<PathBuf>,
    pub selection: SelectionModel,
    /// Full extraction result, kept even when saving fails so the user can
    /// retry or copy instead.
    pub output_text: String,
    pub language_dialog: Option<crate::ui::LanguageDialog>,
}

pub type SharedState = Rc<RefCell<AppState>>;
