use std::{cell::RefCell, rc::Rc};

use ui_core::{
    config::PulseConfig,
    form::{label_change, FIELD_SELECTOR, FOCUSED_CLASS},
    FieldInput, InputPulse, LabelChange, PendingRevert,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::dom::{as_html, listen, query_all, set_class, set_style};

fn value_is_empty(field: &Element) -> bool {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value().is_empty()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value().is_empty()
    } else {
        true
    }
}

fn apply_label(field: &Element, input: FieldInput) {
    let (Some(change), Some(parent)) = (label_change(input), field.parent_element()) else {
        return;
    };
    set_class(&parent, FOCUSED_CLASS, change == LabelChange::AddFocused);
}

fn schedule_revert(
    window: &Window,
    field: HtmlElement,
    pulse: Rc<RefCell<InputPulse>>,
    pending: PendingRevert,
) {
    let revert = Closure::once_into_js(move || {
        if let Some(transform) = pulse.borrow_mut().on_revert(pending) {
            set_style(&field, "transform", transform);
        }
    });
    if let Err(error) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        revert.unchecked_ref(),
        i32::try_from(pending.after_ms).unwrap_or(i32::MAX),
    ) {
        tracing::debug!(?error, "pulse revert could not be scheduled");
    }
}

/// Floating-label and typing-pulse behaviour for every input and textarea.
/// Returns the number of fields enhanced.
pub fn init(window: &Window, document: &Document, config: &PulseConfig) -> usize {
    let fields = query_all(document, FIELD_SELECTOR);
    for field in &fields {
        {
            let target = field.clone();
            listen(field, "focus", move |_: Event| {
                apply_label(&target, FieldInput::Focused);
            });
        }
        {
            let target = field.clone();
            listen(field, "blur", move |_: Event| {
                let value_is_empty = value_is_empty(&target);
                apply_label(&target, FieldInput::Blurred { value_is_empty });
            });
        }

        let Some(html) = as_html(field) else {
            continue;
        };
        let pulse = Rc::new(RefCell::new(InputPulse::new(config.clone())));
        let window = window.clone();
        listen(field, "input", move |_: Event| {
            let (transform, pending) = pulse.borrow_mut().on_input();
            set_style(&html, "transform", &transform);
            schedule_revert(&window, html.clone(), pulse.clone(), pending);
        });
    }
    fields.len()
}
