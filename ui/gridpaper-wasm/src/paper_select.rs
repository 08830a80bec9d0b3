//! Predefined paper size selector.

use crate::dom::{self, Elements};
use gp_form_core::paper;
use wasm_bindgen::prelude::*;

const DEFAULT_SIZE: &str = "A4";

/// Fill the selector from the catalogue unless the page already rendered options.
pub fn populate(els: &Elements) -> Result<(), JsValue> {
    let sel = &els.predefined_size;
    if sel.options().length() > 0 {
        return Ok(());
    }

    for name in paper::sorted_names() {
        let opt = dom::create_option(name, name, name == DEFAULT_SIZE)?;
        sel.append_child(&opt)?;
    }
    if dom::has_option(sel, DEFAULT_SIZE) {
        dom::set_select_value(sel, DEFAULT_SIZE);
    }
    Ok(())
}
