// This module is only used when the `ui` feature is enabled.
slint::include_modules!();

pub mod handlers;
pub mod state;

pub use handlers::{
    apply_language_selection, on_copy_output, on_extract, on_filters_edited, on_root_edited,
    on_save_output, on_search_edited, on_select_folder, on_set_all_checked, on_toggle_check,
};
pub use state::AppState;
