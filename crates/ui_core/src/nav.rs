//! Mobile navigation menu.

use tracing::debug;

use crate::events::PageScroll;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    ToggleClicked,
    LinkActivated,
    DocumentClicked { inside_menu_or_toggle: bool },
}

impl NavInput {
    /// A document click, from where its target sits relative to the menu and
    /// the toggle.
    pub fn document_click(inside_menu: bool, inside_toggle: bool) -> Self {
        NavInput::DocumentClicked {
            inside_menu_or_toggle: inside_menu || inside_toggle,
        }
    }
}

/// What the binding writes back: both `active` classes, `aria-expanded` and
/// the body overflow all come from the one `open` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
    pub page_scroll: PageScroll,
}

impl NavView {
    fn from_open(open: bool) -> Self {
        Self {
            open,
            page_scroll: if open {
                PageScroll::Locked
            } else {
                PageScroll::Restored
            },
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

#[derive(Debug, Default)]
pub struct NavController {
    is_open: bool,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn view(&self) -> NavView {
        NavView::from_open(self.is_open)
    }

    /// Strict flip; two calls return to the starting state.
    pub fn toggle(&mut self) -> NavView {
        self.is_open = !self.is_open;
        debug!(open = self.is_open, "nav toggled");
        self.view()
    }

    pub fn close_on_link_activation(&mut self) -> NavView {
        self.is_open = false;
        self.view()
    }

    /// Closes for clicks outside both the menu and the toggle. A menu that is
    /// already closed is left alone so the body overflow owned by other
    /// surfaces is not cleared.
    pub fn close_on_outside_interaction(
        &mut self,
        target_is_inside_menu_or_toggle: bool,
    ) -> Option<NavView> {
        if target_is_inside_menu_or_toggle || !self.is_open {
            return None;
        }
        self.is_open = false;
        debug!("nav closed by outside click");
        Some(self.view())
    }

    pub fn update(&mut self, input: NavInput) -> Option<NavView> {
        match input {
            NavInput::ToggleClicked => Some(self.toggle()),
            NavInput::LinkActivated => Some(self.close_on_link_activation()),
            NavInput::DocumentClicked {
                inside_menu_or_toggle,
            } => self.close_on_outside_interaction(inside_menu_or_toggle),
        }
    }
}
