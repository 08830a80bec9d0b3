//! Predefined/custom size section toggle.

use crate::dom::{self, Elements};
use gp_form_core::SectionVisibility;
use gp_form_types::Section;

/// Show the section for `raw_mode` and hide the other.
pub fn apply_mode(els: &Elements, raw_mode: &str) {
    let shown = SectionVisibility::for_mode(raw_mode).visible();
    for section in [Section::Predefined, Section::Custom] {
        dom::toggle_class(els.section(section), dom::HIDDEN_CLASS, section != shown);
    }
}

pub fn on_mode_change(els: &Elements, _: &web_sys::Event) {
    apply_mode(els, &dom::get_select_value(&els.paper_size_option));
}
