use std::{cell::RefCell, rc::Rc};

use shared::domain::ImageRef;
use ui_core::{GalleryController, Key, LightboxInput, LightboxOutcome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent,
};

use crate::{
    dom::{by_id, listen, query_all},
    render::{self, LightboxParts},
    selectors,
};

struct GalleryBinding {
    controller: RefCell<GalleryController>,
    parts: LightboxParts,
    backdrop: JsValue,
}

impl GalleryBinding {
    fn dispatch(&self, input: LightboxInput) -> LightboxOutcome {
        let outcome = self.controller.borrow_mut().update(input);
        if let Some(view) = &outcome.view {
            render::lightbox(view, &self.parts);
        }
        outcome
    }
}

fn thumbnail_image(item: &Element) -> Option<ImageRef> {
    let image = item
        .query_selector(selectors::GALLERY_IMAGE)
        .ok()
        .flatten()?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    Some(ImageRef::new(image.src()))
}

/// Wires the lightbox. Returns false when the lightbox markup is missing or
/// there are no thumbnails.
pub fn init(document: &Document) -> bool {
    let Some(root) = by_id::<HtmlElement>(document, selectors::LIGHTBOX) else {
        tracing::debug!("lightbox markup not found; gallery disabled");
        return false;
    };
    let (Some(image), Some(counter)) = (
        by_id::<HtmlImageElement>(document, selectors::LIGHTBOX_IMAGE),
        document.get_element_by_id(selectors::LIGHTBOX_COUNTER),
    ) else {
        tracing::debug!("lightbox image or counter missing; gallery disabled");
        return false;
    };
    let items = query_all(document, selectors::GALLERY_ITEM);
    let Some(controller) = GalleryController::from_thumbnails(items.iter().map(thumbnail_image))
    else {
        tracing::debug!(thumbnails = items.len(), "gallery disabled");
        return false;
    };

    let binding = Rc::new(GalleryBinding {
        controller: RefCell::new(controller),
        backdrop: root.clone().into(),
        parts: LightboxParts {
            root: root.clone(),
            image: image.clone(),
            counter,
            body: document.body(),
        },
    });

    for (index, item) in items.iter().enumerate() {
        let binding = binding.clone();
        listen(item, "click", move |_: MouseEvent| {
            binding.dispatch(LightboxInput::ThumbnailClicked(index));
        });
    }

    for (id, input) in [
        (selectors::LIGHTBOX_CLOSE, LightboxInput::CloseClicked),
        (selectors::LIGHTBOX_NEXT, LightboxInput::NextClicked),
        (selectors::LIGHTBOX_PREV, LightboxInput::PreviousClicked),
    ] {
        let Some(control) = document.get_element_by_id(id) else {
            tracing::debug!(id, "lightbox control missing");
            continue;
        };
        let binding = binding.clone();
        listen(&control, "click", move |_: MouseEvent| {
            binding.dispatch(input);
        });
    }

    {
        let binding = binding.clone();
        listen(&root, "click", move |event: MouseEvent| {
            let target: Option<JsValue> = event.target().map(Into::into);
            let target_is_backdrop = target.as_ref() == Some(&binding.backdrop);
            binding.dispatch(LightboxInput::BackdropClicked { target_is_backdrop });
        });
    }

    {
        let binding = binding.clone();
        listen(document, "keydown", move |event: KeyboardEvent| {
            let key = Key::from_key_name(&event.key());
            binding.dispatch(LightboxInput::KeyPressed(key));
        });
    }

    listen(&image, "dragstart", move |event: Event| {
        if binding.dispatch(LightboxInput::DragStarted).prevent_default {
            event.prevent_default();
        }
    });

    true
}
