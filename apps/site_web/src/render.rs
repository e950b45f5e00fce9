//! Applies controller views to the page.

use ui_core::{nav, reveal, LightboxView, NavView, ScrollFrame};
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::dom::{set_body_overflow, set_class, set_style};

pub struct NavParts {
    pub toggle: Element,
    pub menu: Element,
    pub body: Option<HtmlElement>,
}

pub fn nav(view: &NavView, parts: &NavParts) {
    set_class(&parts.toggle, nav::ACTIVE_CLASS, view.open);
    set_class(&parts.menu, nav::ACTIVE_CLASS, view.open);
    if let Err(error) = parts
        .toggle
        .set_attribute("aria-expanded", view.aria_expanded())
    {
        tracing::debug!(?error, "aria-expanded update rejected");
    }
    set_body_overflow(parts.body.as_ref(), view.page_scroll.overflow());
}

pub struct LightboxParts {
    pub root: HtmlElement,
    pub image: HtmlImageElement,
    pub counter: Element,
    pub body: Option<HtmlElement>,
}

pub fn lightbox(view: &LightboxView, parts: &LightboxParts) {
    if let Some(slide) = &view.slide {
        parts.image.set_src(slide.image.as_str());
        parts.counter.set_text_content(Some(&slide.counter));
    }
    set_class(&parts.root, ui_core::gallery::ACTIVE_CLASS, view.active);
    set_body_overflow(parts.body.as_ref(), view.page_scroll.overflow());
}

pub fn scroll(frame: &ScrollFrame, header: Option<&HtmlElement>, hero: Option<&HtmlElement>) {
    if let Some(header) = header {
        set_style(header, "background", frame.header_style.background());
        set_style(
            header,
            "backdrop-filter",
            frame.header_style.backdrop_filter(),
        );
        set_style(header, "transform", frame.header_position.transform());
    }
    if let Some(hero) = hero {
        set_style(hero, "transform", &frame.hero_transform());
    }
}

pub fn reveal(element: &Element) {
    set_class(element, reveal::IN_VIEW_CLASS, true);
}
