//! Header, hero parallax and reveal-on-scroll bindings.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Array, Function};
use ui_core::{
    config::{RevealConfig, ScrollConfig},
    reveal::{self, ANIMATE_CLASS},
    Intersection, RevealTracker, ScrollController,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::{
    dom::{as_html, listen_passive, query, query_all, set_class},
    render, selectors,
};

struct ScrollBinding {
    controller: RefCell<ScrollController>,
    window: Window,
    header: Option<HtmlElement>,
    hero: Option<HtmlElement>,
}

impl ScrollBinding {
    fn run_frame(&self) {
        let y = scroll_y(&self.window);
        let frame = self.controller.borrow_mut().on_frame(y);
        render::scroll(&frame, self.header.as_ref(), self.hero.as_ref());
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_else(|error| {
        tracing::debug!(?error, "scroll offset unavailable");
        0.0
    })
}

/// Wires header and parallax effects. Returns false when neither the header
/// nor the hero section is present.
pub fn init(window: &Window, document: &Document, config: ScrollConfig) -> bool {
    let header = query(document, selectors::HEADER).as_ref().and_then(as_html);
    let hero = query(document, selectors::HERO).as_ref().and_then(as_html);
    if header.is_none() && hero.is_none() {
        tracing::debug!("no header or hero section; scroll effects disabled");
        return false;
    }

    let binding = Rc::new(ScrollBinding {
        controller: RefCell::new(ScrollController::new(config, scroll_y(window))),
        window: window.clone(),
        header,
        hero,
    });

    let frame_callback: Function = {
        let binding = binding.clone();
        Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| binding.run_frame())
            .into_js_value()
            .unchecked_into()
    };

    listen_passive(window, "scroll", move |_: Event| {
        if !binding.controller.borrow_mut().on_scroll() {
            return;
        }
        if let Err(error) = binding.window.request_animation_frame(&frame_callback) {
            tracing::debug!(?error, "requestAnimationFrame failed; applying frame now");
            binding.run_frame();
        }
    });

    true
}

fn observer_options(config: &RevealConfig) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    options
}

fn intersection(entry: &IntersectionObserverEntry) -> Option<Intersection> {
    let raw = entry.target().get_attribute(reveal::INDEX_ATTR);
    reveal::intersection_from_attr(raw.as_deref(), entry.is_intersecting())
}

/// Marks every reveal target and adds the in-view class as each one first
/// intersects the viewport. Returns the number of observed elements.
pub fn init_reveal(document: &Document, config: &RevealConfig) -> usize {
    let elements = query_all(document, &config.selector);
    if elements.is_empty() {
        return 0;
    }

    let mut tracker = RevealTracker::new();
    for element in &elements {
        set_class(element, ANIMATE_CLASS, true);
        let index = tracker.observe();
        let value = reveal::index_attr_value(index);
        if let Err(error) = element.set_attribute(reveal::INDEX_ATTR, &value) {
            tracing::debug!(index, ?error, "reveal index rejected");
        }
    }
    let count = elements.len();
    let elements: Rc<Vec<Element>> = Rc::new(elements);
    let tracker = Rc::new(RefCell::new(tracker));

    let callback = {
        let elements = elements.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch: Vec<Intersection> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| intersection(&entry))
                    .collect();
                for index in tracker.borrow_mut().on_intersections(batch) {
                    if let Some(element) = elements.get(index) {
                        render::reveal(element);
                        observer.unobserve(element);
                    }
                }
            },
        )
    };

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &observer_options(config),
    ) {
        Ok(observer) => observer,
        Err(error) => {
            tracing::warn!(?error, "IntersectionObserver unavailable; revealing everything");
            elements.iter().for_each(render::reveal);
            return count;
        }
    };
    callback.forget();

    for element in elements.iter() {
        observer.observe(element);
    }
    count
}
