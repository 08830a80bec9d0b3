//! Colour picker / hex text synchronisation.
//!
//! The DOM is read into a [`ColorPair`], the pair handles the event, and
//! only the fields that changed are written back so the caret in the text
//! field is left where the user put it.

use crate::dom::{self, ColorFields, Elements};
use gp_form_core::{ColorPair, TextSync};

fn read(fields: &ColorFields) -> ColorPair {
    ColorPair::new(&fields.picker.value(), &fields.text.value())
}

fn write(fields: &ColorFields, pair: &ColorPair) {
    if fields.picker.value() != pair.picker {
        dom::set_input_value(&fields.picker, &pair.picker);
    }
    if fields.text.value() != pair.text {
        dom::set_input_value(&fields.text, &pair.text);
    }
    dom::toggle_class(&fields.text, dom::INVALID_CLASS, pair.invalid);
}

pub fn on_picker_input(fields: &ColorFields) {
    let mut pair = read(fields);
    pair.on_picker_change(&fields.picker.value());
    write(fields, &pair);
}

pub fn on_text_input(fields: &ColorFields) {
    let mut pair = read(fields);
    if let TextSync::Rejected = pair.on_text_change(&fields.text.value()) {
        gloo_console::debug!(format!("{} is not a hex colour", fields.text.value()));
    }
    write(fields, &pair);
}

pub fn on_grid_picker_input(els: &Elements, _: &web_sys::Event) {
    on_picker_input(&els.grid_color);
}

pub fn on_grid_text_input(els: &Elements, _: &web_sys::Event) {
    on_text_input(&els.grid_color);
}

pub fn on_background_picker_input(els: &Elements, _: &web_sys::Event) {
    on_picker_input(&els.background_color);
}

pub fn on_background_text_input(els: &Elements, _: &web_sys::Event) {
    on_text_input(&els.background_color);
}
