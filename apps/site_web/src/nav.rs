use std::{cell::RefCell, rc::Rc};

use ui_core::{NavController, NavInput};
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Node};

use crate::{
    dom::{listen, query, query_all},
    render::{self, NavParts},
    selectors,
};

struct NavBinding {
    controller: RefCell<NavController>,
    parts: NavParts,
}

impl NavBinding {
    fn dispatch(&self, input: NavInput) {
        let view = self.controller.borrow_mut().update(input);
        if let Some(view) = view {
            render::nav(&view, &self.parts);
        }
    }

    fn document_click(&self, target: Option<&Node>) -> NavInput {
        NavInput::document_click(
            self.parts.menu.contains(target),
            self.parts.toggle.contains(target),
        )
    }
}

/// Wires the mobile menu. Returns false, leaving the menu inert, when the
/// toggle or the menu is missing.
pub fn init(document: &Document) -> bool {
    let (Some(toggle), Some(menu)) = (
        query(document, selectors::NAV_TOGGLE),
        query(document, selectors::NAV_MENU),
    ) else {
        tracing::debug!("navigation markup not found; menu toggle disabled");
        return false;
    };

    let binding = Rc::new(NavBinding {
        controller: RefCell::new(NavController::new()),
        parts: NavParts {
            toggle: toggle.clone(),
            menu,
            body: document.body(),
        },
    });
    if let Err(error) = toggle.set_attribute(
        "aria-expanded",
        binding.controller.borrow().view().aria_expanded(),
    ) {
        tracing::debug!(?error, "aria-expanded update rejected");
    }

    {
        let binding = binding.clone();
        listen(&toggle, "click", move |_: MouseEvent| {
            binding.dispatch(NavInput::ToggleClicked);
        });
    }

    for link in query_all(document, selectors::NAV_LINK) {
        let binding = binding.clone();
        listen(&link, "click", move |_: MouseEvent| {
            binding.dispatch(NavInput::LinkActivated);
        });
    }

    listen(document, "click", move |event: MouseEvent| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let input = binding.document_click(target.as_ref());
        binding.dispatch(input);
    });

    true
}
