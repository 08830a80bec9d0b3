//! Event binding.
//!
//! Every listener the page needs is one row in [`BINDINGS`]. `bind_events`
//! attaches them once at startup and keeps the closures in a registry so
//! `unbind_events` can detach them again when the page is hidden.

use crate::color_sync;
use crate::dom::Elements;
use crate::form;
use crate::sections;
use gp_form_types::FieldId;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Change,
    Input,
    Click,
    Submit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Input => "input",
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

pub type Handler = fn(&Elements, &web_sys::Event);

#[derive(Clone, Copy)]
pub struct Binding {
    pub field: FieldId,
    pub kind: EventKind,
    pub handler: Handler,
}

pub const BINDINGS: &[Binding] = &[
    Binding {
        field: FieldId::PaperSizeOption,
        kind: EventKind::Change,
        handler: sections::on_mode_change,
    },
    Binding {
        field: FieldId::GridColorPicker,
        kind: EventKind::Input,
        handler: color_sync::on_grid_picker_input,
    },
    Binding {
        field: FieldId::GridColorText,
        kind: EventKind::Input,
        handler: color_sync::on_grid_text_input,
    },
    Binding {
        field: FieldId::BackgroundColorPicker,
        kind: EventKind::Input,
        handler: color_sync::on_background_picker_input,
    },
    Binding {
        field: FieldId::BackgroundColorText,
        kind: EventKind::Input,
        handler: color_sync::on_background_text_input,
    },
    Binding {
        field: FieldId::GenerateFilename,
        kind: EventKind::Click,
        handler: form::on_generate_filename,
    },
    Binding {
        field: FieldId::GridForm,
        kind: EventKind::Submit,
        handler: form::on_submit,
    },
];

struct Listener {
    target: EventTarget,
    kind: EventKind,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

thread_local! {
    static REGISTRY: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// Attach every row of [`BINDINGS`]. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    unbind_events();

    for binding in BINDINGS {
        let target = els.target(binding.field).clone();
        let els2 = els.clone();
        let handler = binding.handler;
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handler(&els2, &event);
        }) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback(binding.kind.as_str(), callback.as_ref().unchecked_ref())?;

        REGISTRY.with(|r| {
            r.borrow_mut().push(Listener {
                target,
                kind: binding.kind,
                callback,
            })
        });
    }

    bind_teardown()
}

/// Detach and drop every registered listener.
pub fn unbind_events() {
    let listeners = REGISTRY.with(|r| std::mem::take(&mut *r.borrow_mut()));
    for listener in listeners {
        let _ = listener.target.remove_event_listener_with_callback(
            listener.kind.as_str(),
            listener.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Tear the table down when the page is navigated away from.
fn bind_teardown() -> Result<(), JsValue> {
    let cb = Closure::once(move |_: web_sys::Event| unbind_events());
    gloo_utils::window().add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
