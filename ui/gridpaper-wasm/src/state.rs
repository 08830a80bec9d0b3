//! Page-lifetime state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The filename configuration is the only thing kept in `localStorage`;
//! form values themselves are never persisted.

use gloo_storage::{LocalStorage, Storage};
use gp_form_core::{FilenameConfig, FilenameSynthesizer};
use std::cell::RefCell;

const CONFIG_KEY: &str = "gp_filename_config";

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub filename_config: FilenameConfig,
    pub last_filename: Option<String>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn synthesizer() -> FilenameSynthesizer {
    with(|s| FilenameSynthesizer::new(s.filename_config))
}

pub fn set_last_filename(name: &str) {
    with_mut(|s| s.last_filename = Some(name.to_owned()));
}

pub fn last_filename() -> Option<String> {
    with(|s| s.last_filename.clone())
}

/// Load the saved configuration, falling back to defaults when absent or unreadable.
pub fn load_config() -> FilenameConfig {
    let config: FilenameConfig = LocalStorage::get(CONFIG_KEY).unwrap_or_default();
    with_mut(|s| s.filename_config = config);
    config
}

pub fn set_config(config: FilenameConfig) {
    with_mut(|s| s.filename_config = config);
    if let Err(err) = LocalStorage::set(CONFIG_KEY, config) {
        gloo_console::warn!(format!("could not persist filename config: {err}"));
    }
}
