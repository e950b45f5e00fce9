//! Page-wide touches: the loaded marker, hover hints and staggered entry
//! animations.

use ui_core::{
    form::{HOVER_SELECTOR, LOADED_CLASS},
    reveal::{stagger_delay, STAGGER_CLASS},
    HoverHint,
};
use web_sys::{Document, Event, Window};

use crate::{
    dom::{as_html, listen, query_all, set_class, set_style},
    selectors,
};

pub fn mark_loaded_on_load(window: &Window, document: &Document) {
    let body = document.body();
    listen(window, "load", move |_: Event| {
        if let Some(body) = &body {
            set_class(body, LOADED_CLASS, true);
        }
    });
}

pub fn hover_hints(document: &Document) -> usize {
    let targets: Vec<_> = query_all(document, HOVER_SELECTOR)
        .iter()
        .filter_map(as_html)
        .collect();
    for target in &targets {
        for (event, hint) in [("mouseenter", HoverHint::Enter), ("mouseleave", HoverHint::Leave)] {
            let element = target.clone();
            listen(target, event, move |_: Event| {
                set_style(&element, "will-change", hint.will_change());
            });
        }
    }
    targets.len()
}

pub fn stagger(document: &Document) -> usize {
    let items = query_all(document, selectors::STAGGER_ITEMS);
    for (index, item) in items.iter().enumerate() {
        if let Some(html) = as_html(item) {
            set_style(&html, "animation-delay", &stagger_delay(index));
        }
        set_class(item, STAGGER_CLASS, true);
    }
    items.len()
}
