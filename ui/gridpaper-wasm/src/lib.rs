//! Gridpaper form WASM frontend.
//!
//! Thin adapter between the grid generator's HTML form and the pure logic
//! in `gp-form-core`: it reads a `FormState` out of the page, hands it to
//! the core, and writes the answer back. Each concern lives in its own module.

pub mod color_sync;
pub mod dom;
pub mod events;
pub mod form;
pub mod paper_select;
pub mod sections;
pub mod state;

use gp_form_core::{FilenameConfig, FormState, paper, submit};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    state::load_config();
    paper_select::populate(&els)?;

    // Initial section visibility follows whatever mode the page rendered
    sections::apply_mode(&els, &dom::get_select_value(&els.paper_size_option));

    events::bind_events(&els)?;
    gloo_console::log!("gridpaper form ready");
    Ok(())
}

/// Filename for a form snapshot, using the active configuration.
#[wasm_bindgen(js_name = generateFilename)]
pub fn generate_filename(form_state: JsValue) -> Result<String, JsValue> {
    let form: FormState = serde_wasm_bindgen::from_value(form_state)?;
    Ok(state::synthesizer().generate(&form).into_string())
}

/// Validate a form snapshot. Resolves to the generation request or throws
/// an array of user-facing messages.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_state: JsValue, output_filename: &str) -> Result<JsValue, JsValue> {
    let form: FormState = serde_wasm_bindgen::from_value(form_state)?;
    match submit::validate(&form, output_filename) {
        Ok(request) => Ok(serde_wasm_bindgen::to_value(&request)?),
        Err(errors) => Err(errors
            .iter()
            .map(|e| JsValue::from_str(&e.to_string()))
            .collect::<js_sys::Array>()
            .into()),
    }
}

#[wasm_bindgen(js_name = paperSizeNames)]
pub fn paper_size_names() -> js_sys::Array {
    paper::sorted_names().into_iter().map(JsValue::from_str).collect()
}

/// Replace and persist the filename configuration. Missing keys take defaults.
#[wasm_bindgen(js_name = setFilenameConfig)]
pub fn set_filename_config(config: JsValue) -> Result<(), JsValue> {
    let config: FilenameConfig = if config.is_undefined() || config.is_null() {
        FilenameConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    state::set_config(config);
    Ok(())
}
