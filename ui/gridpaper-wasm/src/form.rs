//! Reading the form into a [`FormState`] and writing results back.

use crate::dom::{self, Elements};
use crate::state;
use gp_form_core::{FormError, FormState, NumericField, PaperSizeMode, submit};
use wasm_bindgen::prelude::*;

/// Snapshot the current form values.
pub fn read_state(els: &Elements) -> FormState {
    FormState {
        paper_size_mode: PaperSizeMode::from_field(&dom::get_select_value(&els.paper_size_option)),
        predefined_size: dom::get_select_value(&els.predefined_size),
        custom_width_cm: NumericField::new(dom::get_input_value(&els.custom_width_cm)),
        custom_height_cm: NumericField::new(dom::get_input_value(&els.custom_height_cm)),
        grid_size_mm: NumericField::new(dom::get_input_value(&els.grid_size_mm)),
        grid_color: dom::get_input_value(&els.grid_color.text),
        background_color: dom::get_input_value(&els.background_color.text),
        line_thickness_pt: NumericField::new(dom::get_input_value(&els.line_thickness)),
    }
}

/// Click handler for the "generate filename" button.
pub fn on_generate_filename(els: &Elements, _: &web_sys::Event) {
    let name = state::synthesizer().generate(&read_state(els));
    dom::set_input_value(&els.output_filename, name.as_str());

    if state::last_filename().as_deref() != Some(name.as_str()) {
        gloo_console::log!(format!("output filename: {name}"));
        state::set_last_filename(name.as_str());
    }
}

/// Submit handler: blocks submission and lists the problems when the form is invalid.
pub fn on_submit(els: &Elements, event: &web_sys::Event) {
    let form = read_state(els);
    match submit::validate(&form, &dom::get_input_value(&els.output_filename)) {
        Ok(request) => {
            dom::set_input_value(&els.output_filename, &request.output_filename);
            clear_errors(els);
        }
        Err(errors) => {
            event.prevent_default();
            gloo_console::warn!(format!("form rejected with {} error(s)", errors.len()));
            if let Err(err) = show_errors(els, &errors) {
                gloo_console::error!(err);
            }
        }
    }
}

fn show_errors(els: &Elements, errors: &[FormError]) -> Result<(), JsValue> {
    dom::clear_children(&els.form_errors);
    for error in errors {
        let item = dom::create_element("li")?;
        item.set_text_content(Some(&error.to_string()));
        els.form_errors.append_child(&item)?;
    }
    dom::remove_class(&els.form_errors, dom::HIDDEN_CLASS);
    Ok(())
}

fn clear_errors(els: &Elements) {
    dom::clear_children(&els.form_errors);
    dom::add_class(&els.form_errors, dom::HIDDEN_CLASS);
}
