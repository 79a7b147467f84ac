use super::{AppWindow, FileRow};
use crate::ui::state::SharedState;
use chrono::Local;
use slint::{Model, ModelRc, VecModel};
use std::{fs, path::PathBuf};

use code_exporter::core::{
    DEFAULT_OUTPUT_NAME, SessionSettings, extensions_for, extract, first_directory,
    gitignore_patterns, merge_ignore_text, parse_filter_list, save_settings, scan_root,
};

/* =============================== UI Actions =============================== */

pub fn on_select_folder(app: &AppWindow, state: &SharedState) {
    if let Some(dir) = rfd::FileDialog::new().set_directory(".").pick_folder() {
        adopt_root(app, state, dir);
    }
}

/// The root-path field doubles as the drop target: a pasted or dropped path
/// goes through the same adoption as the folder dialog.
pub fn on_root_edited(app: &AppWindow, state: &SharedState) {
    let raw = app.get_root_path().to_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    // Only the first existing directory counts; anything else is ignored.
    let Some(dir) = first_directory(&[PathBuf::from(trimmed)]) else {
        return;
    };
    adopt_root(app, state, dir);
}

fn adopt_root(app: &AppWindow, state: &SharedState, dir: PathBuf) {
    // Union the root's .gitignore lines into the ignore field. Additive only.
    let extra = gitignore_patterns(&dir);
    if !extra.is_empty() {
        let merged = merge_ignore_text(&app.get_ignore_filter(), &extra);
        app.set_ignore_filter(merged.into());
    }

    app.set_root_path(dir.to_string_lossy().to_string().into());
    state.borrow_mut().scan_root = Some(dir);

    rescan(app, state);
}

pub fn on_filters_edited(app: &AppWindow, state: &SharedState) {
    rescan(app, state);
}

pub fn on_search_edited(app: &AppWindow, state: &SharedState) {
    let term = app.get_search_term().to_string();
    state.borrow_mut().selection.set_filter(&term);
    refresh_file_model(app, state);
}

pub fn on_set_all_checked(app: &AppWindow, state: &SharedState, value: bool) {
    state.borrow_mut().selection.set_all_included(value);
    refresh_file_model(app, state);
}

pub fn on_toggle_check(app: &AppWindow, state: &SharedState, index: usize, value: bool) {
    let model = app.get_file_model();
    let Some(mut row) = model.row_data(index) else {
        return;
    };
    state
        .borrow_mut()
        .selection
        .set_included(row.path.as_str(), value);
    row.checked = value;
    model.set_row_data(index, row);
}

pub fn on_extract(app: &AppWindow, state: &SharedState) {
    let root = { state.borrow().scan_root.clone() };
    let Some(root) = root else {
        warn_dialog("No folder has been loaded.");
        return;
    };

    let output = {
        let s = state.borrow();
        extract(&root, s.selection.entries())
    };

    state.borrow_mut().output_text = output.clone();
    app.set_output_text(output.into());
    update_status(app);
}

pub fn on_save_output(state: &SharedState) {
    let text = { state.borrow().output_text.clone() };
    if text.trim().is_empty() {
        warn_dialog("Nothing to save.");
        return;
    }

    let Some(dest) = rfd::FileDialog::new()
        .set_file_name(DEFAULT_OUTPUT_NAME)
        .add_filter("Text files", &["txt"])
        .save_file()
    else {
        return;
    };

    match fs::write(&dest, &text) {
        Ok(()) => info_dialog("File saved successfully."),
        // The extraction result stays in memory so the user can retry.
        Err(err) => error_dialog(&format!("Saving failed: {err}")),
    }
}

pub fn on_copy_output(state: &SharedState) {
    let text = { state.borrow().output_text.clone() };
    if text.trim().is_empty() {
        warn_dialog("Nothing to copy.");
        return;
    }

    let line_count = text.matches('\n').count() + 1;

    let mut ok = false;
    if let Ok(mut cb) = arboard::Clipboard::new() {
        ok = cb.set_text(text).is_ok();
    }

    if ok {
        info_dialog(&format!("Copied {line_count} line(s) to the clipboard."));
    } else {
        error_dialog("Clipboard copy failed.");
    }
}

/// Applies the language dialog: the extension field is replaced wholesale by
/// the union of the selected languages' extensions.
pub fn apply_language_selection(app: &AppWindow, state: &SharedState, selected: &[String]) {
    let exts = {
        let s = state.borrow();
        extensions_for(&s.config.language_mapping, selected)
    };
    app.set_ext_filter(exts.into());
    on_filters_edited(app, state);
}

/* ============================== Scan plumbing ============================== */

fn rescan(app: &AppWindow, state: &SharedState) {
    persist_settings(app, state);

    let root = { state.borrow().scan_root.clone() };
    let Some(root) = root else {
        return;
    };

    let exts = parse_filter_list(&app.get_ext_filter());
    let ignores = parse_filter_list(&app.get_ignore_filter());

    let paths = scan_root(&root, &exts, &ignores);
    let count = paths.len();
    state.borrow_mut().selection.rebuild(paths);

    app.set_file_count_label(format!("Files to extract ({count} file(s))").into());
    refresh_file_model(app, state);
    update_status(app);
}

fn persist_settings(app: &AppWindow, state: &SharedState) {
    let path = { state.borrow().settings_path.clone() };
    let Some(path) = path else {
        return;
    };
    let settings = SessionSettings {
        included_extensions: Some(app.get_ext_filter().to_string()),
        ignored_patterns: Some(app.get_ignore_filter().to_string()),
    };
    if let Err(err) = save_settings(&path, &settings) {
        log::warn!("failed to persist session settings: {err}");
    }
}

fn refresh_file_model(app: &AppWindow, state: &SharedState) {
    let rows: Vec<FileRow> = {
        let s = state.borrow();
        s.selection
            .entries()
            .iter()
            .filter(|e| e.visible)
            .map(|e| FileRow {
                path: e.rel_path.clone().into(),
                checked: e.included,
            })
            .collect()
    };
    app.set_file_model(ModelRc::new(VecModel::from(rows)));
}

fn update_status(app: &AppWindow) {
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    app.set_status_line(format!("Last refresh: {now_str}").into());
}

/* ================================= Dialogs ================================= */

fn warn_dialog(msg: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Code Exporter")
        .set_description(msg)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn info_dialog(msg: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Code Exporter")
        .set_description(msg)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn error_dialog(msg: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Code Exporter")
        .set_description(msg)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
