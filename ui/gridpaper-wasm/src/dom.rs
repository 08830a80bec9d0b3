//! DOM element bindings.
//!
//! All fields are resolved once at startup from the ids in [`FieldId`].
//! To add a new form control, add a `FieldId` variant, a field here, and
//! bind it in `Elements::bind()`.

use gp_form_types::{FieldId, Section};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

/// Bootstrap class used to hide a section.
pub const HIDDEN_CLASS: &str = "d-none";
/// Bootstrap class marking a field as invalid.
pub const INVALID_CLASS: &str = "is-invalid";

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn has_option(sel: &HtmlSelectElement, value: &str) -> bool {
    let opts = sel.options();
    (0..opts.length())
        .filter_map(|i| opts.item(i))
        .filter_map(|opt| opt.dyn_into::<HtmlOptionElement>().ok())
        .any(|o| o.value() == value)
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    doc().create_element(tag)
}

pub fn create_option(value: &str, text: &str, selected: bool) -> Result<HtmlOptionElement, JsValue> {
    let opt: HtmlOptionElement = create_element("option")?.dyn_into()?;
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    Ok(opt)
}

pub fn clear_children(el: &Element) {
    el.set_inner_html("");
}

// ── Elements struct ──

/// A colour picker and the hex text field it is paired with.
#[derive(Clone)]
pub struct ColorFields {
    pub picker: HtmlInputElement,
    pub text: HtmlInputElement,
}

/// All DOM element references used by the grid form.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Paper size
    pub paper_size_option: HtmlSelectElement,
    pub predefined_size: HtmlSelectElement,
    pub predefined_size_div: Element,
    pub custom_size_div: Element,
    pub custom_width_cm: HtmlInputElement,
    pub custom_height_cm: HtmlInputElement,

    // Grid
    pub grid_size_mm: HtmlInputElement,
    pub grid_color: ColorFields,
    pub background_color: ColorFields,
    pub line_thickness: HtmlInputElement,

    // Output
    pub output_filename: HtmlInputElement,
    pub generate_filename: HtmlElement,
    pub grid_form: Element,
    pub form_errors: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($field:expr) => {
        by_id_typed::<HtmlInputElement>($field.dom_id())
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $field)))?
    };
}

macro_rules! get_select {
    ($field:expr) => {
        by_id_typed::<HtmlSelectElement>($field.dom_id())
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $field)))?
    };
}

macro_rules! get_html {
    ($field:expr) => {
        by_id_typed::<HtmlElement>($field.dom_id())
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $field)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            paper_size_option: get_select!(FieldId::PaperSizeOption),
            predefined_size: get_select!(FieldId::PredefinedSize),
            predefined_size_div: get_el!(Section::Predefined.dom_id()),
            custom_size_div: get_el!(Section::Custom.dom_id()),
            custom_width_cm: get_input!(FieldId::CustomWidthCm),
            custom_height_cm: get_input!(FieldId::CustomHeightCm),

            grid_size_mm: get_input!(FieldId::GridSizeMm),
            grid_color: ColorFields {
                picker: get_input!(FieldId::GridColorPicker),
                text: get_input!(FieldId::GridColorText),
            },
            background_color: ColorFields {
                picker: get_input!(FieldId::BackgroundColorPicker),
                text: get_input!(FieldId::BackgroundColorText),
            },
            line_thickness: get_input!(FieldId::LineThickness),

            output_filename: get_input!(FieldId::OutputFilename),
            generate_filename: get_html!(FieldId::GenerateFilename),
            grid_form: get_el!(FieldId::GridForm.dom_id()),
            form_errors: get_el!(FieldId::FormErrors.dom_id()),
        })
    }

    pub fn section(&self, section: Section) -> &Element {
        match section {
            Section::Predefined => &self.predefined_size_div,
            Section::Custom => &self.custom_size_div,
        }
    }

    /// The element a registered handler listens on.
    pub fn target(&self, field: FieldId) -> &EventTarget {
        match field {
            FieldId::PaperSizeOption => self.paper_size_option.as_ref(),
            FieldId::PredefinedSize => self.predefined_size.as_ref(),
            FieldId::CustomWidthCm => self.custom_width_cm.as_ref(),
            FieldId::CustomHeightCm => self.custom_height_cm.as_ref(),
            FieldId::GridSizeMm => self.grid_size_mm.as_ref(),
            FieldId::GridColorPicker => self.grid_color.picker.as_ref(),
            FieldId::GridColorText => self.grid_color.text.as_ref(),
            FieldId::BackgroundColorPicker => self.background_color.picker.as_ref(),
            FieldId::BackgroundColorText => self.background_color.text.as_ref(),
            FieldId::LineThickness => self.line_thickness.as_ref(),
            FieldId::OutputFilename => self.output_filename.as_ref(),
            FieldId::GenerateFilename => self.generate_filename.as_ref(),
            FieldId::GridForm => self.grid_form.as_ref(),
            FieldId::FormErrors => self.form_errors.as_ref(),
        }
    }
}
