use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast};
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement};

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        tracing::debug!(selector, "selector rejected");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(error) = element.style().set_property(property, value) {
        tracing::debug!(property, ?error, "style update rejected");
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(error) = result {
        tracing::debug!(class, ?error, "class update rejected");
    }
}

pub fn set_body_overflow(body: Option<&HtmlElement>, overflow: &str) {
    if let Some(body) = body {
        set_style(body, "overflow", overflow);
    }
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Err(error) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(event, ?error, "failed to attach listener");
    }
    closure.forget();
}

pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(error) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        tracing::warn!(event, ?error, "failed to attach passive listener");
    }
    closure.forget();
}
