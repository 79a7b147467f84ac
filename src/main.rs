#[cfg(feature = "ui")]
mod ui;

#[cfg(feature = "ui")]
use std::{cell::RefCell, path::Path, rc::Rc};

#[cfg(feature = "ui")]
use slint::{ComponentHandle, Model, ModelRc, VecModel};

#[cfg(feature = "ui")]
use ui::{
    AppState, AppWindow, FileRow, LanguageDialog, LanguageRow, apply_language_selection,
    on_copy_output, on_extract, on_filters_edited, on_root_edited, on_save_output,
    on_search_edited, on_select_folder, on_set_all_checked, on_toggle_check,
};

#[cfg(feature = "ui")]
use code_exporter::core::{
    AppConfig, CONFIG_FILE, language_choices, load_settings, parse_filter_list, settings_file,
};

#[cfg(feature = "ui")]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Config parse failure is fatal at startup; a missing file is seeded
    // with defaults instead.
    let config = AppConfig::load_or_create(Path::new(CONFIG_FILE))?;

    let settings_path = settings_file();
    let saved = settings_path
        .as_ref()
        .and_then(load_settings)
        .unwrap_or_default();
    let ext_text = saved
        .included_extensions
        .unwrap_or_else(|| config.included_extensions.join(","));
    let ignore_text = saved
        .ignored_patterns
        .unwrap_or_else(|| config.ignored_patterns.join(","));

    let app = AppWindow::new()?;

    app.set_app_version(env!("CARGO_PKG_VERSION").into());
    app.set_ext_filter(ext_text.into());
    app.set_ignore_filter(ignore_text.into());
    app.set_root_path("".into());
    app.set_search_term("".into());
    app.set_file_model(ModelRc::new(VecModel::<FileRow>::default()));
    app.set_file_count_label("No folder loaded".into());
    app.set_output_text("".into());
    app.set_status_line("Last refresh: N/A".into());

    let state = Rc::new(RefCell::new(AppState {
        config,
        settings_path,
        ..Default::default()
    }));

    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_select_folder(move || {
            if let Some(app) = app_weak.upgrade() {
                on_select_folder(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_root_edited(move || {
            if let Some(app) = app_weak.upgrade() {
                on_root_edited(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_filters_edited(move || {
            if let Some(app) = app_weak.upgrade() {
                on_filters_edited(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_search_edited(move || {
            if let Some(app) = app_weak.upgrade() {
                on_search_edited(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_set_all_checked(move |value| {
            if let Some(app) = app_weak.upgrade() {
                on_set_all_checked(&app, &state, value);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_toggle_checked(move |idx, value| {
            if let Some(app) = app_weak.upgrade() {
                on_toggle_check(&app, &state, idx as usize, value);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_extract(move || {
            if let Some(app) = app_weak.upgrade() {
                on_extract(&app, &state);
            }
        });
    }
    {
        let state = Rc::clone(&state);
        app.on_save_output(move || {
            on_save_output(&state);
        });
    }
    {
        let state = Rc::clone(&state);
        app.on_copy_output(move || {
            on_copy_output(&state);
        });
    }

    // Language dialog wiring kept here to avoid another extra file.
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);

        app.on_open_languages(move || {
            let Some(app) = app_weak.upgrade() else {
                return;
            };

            // Rebuild the rows from the current extension field on every open.
            let rows: Vec<LanguageRow> = {
                let s = state.borrow();
                let current = parse_filter_list(&app.get_ext_filter());
                language_choices(&s.config.language_mapping, &current)
                    .into_iter()
                    .map(|c| LanguageRow {
                        name: c.name.into(),
                        extensions: c.extensions.join(", ").into(),
                        checked: c.selected,
                    })
                    .collect()
            };

            if let Some(dlg) = state.borrow().language_dialog.as_ref() {
                dlg.set_languages(ModelRc::new(VecModel::from(rows)));
                let _ = dlg.show();
                return;
            }

            let dlg = LanguageDialog::new().expect("create LanguageDialog");
            dlg.set_languages(ModelRc::new(VecModel::from(rows)));

            {
                let dlg_weak = dlg.as_weak();
                dlg.on_toggle_language(move |idx, value| {
                    if let Some(d) = dlg_weak.upgrade() {
                        let model = d.get_languages();
                        if let Some(mut row) = model.row_data(idx as usize) {
                            row.checked = value;
                            model.set_row_data(idx as usize, row);
                        }
                    }
                });
            }

            {
                let dlg_weak = dlg.as_weak();
                let app_weak_apply = app.as_weak();
                let state_apply = Rc::clone(&state);
                dlg.on_apply(move || {
                    if let (Some(d), Some(app)) = (dlg_weak.upgrade(), app_weak_apply.upgrade()) {
                        let model = d.get_languages();
                        let selected: Vec<String> = (0..model.row_count())
                            .filter_map(|i| model.row_data(i))
                            .filter(|r| r.checked)
                            .map(|r| r.name.to_string())
                            .collect();
                        apply_language_selection(&app, &state_apply, &selected);
                        let _ = d.hide();
                    }
                });
            }

            {
                let dlg_weak = dlg.as_weak();
                dlg.on_cancel(move || {
                    if let Some(d) = dlg_weak.upgrade() {
                        let _ = d.hide();
                    }
                });
            }

            state.borrow_mut().language_dialog = Some(dlg);
            let _ = state.borrow().language_dialog.as_ref().unwrap().show();
        });
    }

    app.run()?;
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn main() -> anyhow::Result<()> {
    eprintln!(
        "Built without the `ui` feature; nothing to run. \
Enable it with `--features ui`, or just run tests with `--no-default-features`."
    );
    Ok(())
}
