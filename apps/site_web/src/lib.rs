//! Browser entry point. Reads the page config, then attaches each controller
//! to whatever markup the current page carries.

mod console;
mod dom;
mod form;
mod gallery;
mod nav;
mod page;
mod render;
mod scroll;
mod selectors;

use ui_core::{ConfigError, UiConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

fn read_config(document: &Document) -> Result<UiConfig, ConfigError> {
    match document
        .get_element_by_id(selectors::CONFIG_SCRIPT)
        .and_then(|script| script.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => UiConfig::from_json(&raw),
        _ => Ok(UiConfig::default()),
    }
}

fn attach(window: &Window, document: &Document, config: &UiConfig) {
    let nav = nav::init(document);
    let gallery = gallery::init(document);
    let scroll = scroll::init(window, document, config.scroll.clone());
    let revealed = scroll::init_reveal(document, &config.reveal);
    let fields = form::init(window, document, &config.pulse);
    let hovers = page::hover_hints(document);
    let staggered = page::stagger(document);
    page::mark_loaded_on_load(window, document);
    tracing::info!(
        nav,
        gallery,
        scroll,
        revealed,
        fields,
        hovers,
        staggered,
        "page controllers attached"
    );
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = read_config(&document);
    let filter = config
        .as_ref()
        .map(|config| config.log_filter.as_str())
        .unwrap_or("info");
    console::init(filter);
    let config = config.unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring site config; using defaults");
        UiConfig::default()
    });

    if document.ready_state() == "loading" {
        let target = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: Event| {
            attach(&window, &target, &config);
        });
    } else {
        attach(&window, &document, &config);
    }
    Ok(())
}
