//! Markup hooks the controllers attach to.

pub const NAV_TOGGLE: &str = ".hamburger";
pub const NAV_MENU: &str = ".nav-menu";
pub const NAV_LINK: &str = ".nav-link";

pub const GALLERY_ITEM: &str = ".gallery-item";
pub const GALLERY_IMAGE: &str = ".gallery-image";
pub const LIGHTBOX: &str = "lightbox";
pub const LIGHTBOX_IMAGE: &str = "lightboxImage";
pub const LIGHTBOX_COUNTER: &str = "lightboxCounter";
pub const LIGHTBOX_CLOSE: &str = "lightboxClose";
pub const LIGHTBOX_PREV: &str = "lightboxPrev";
pub const LIGHTBOX_NEXT: &str = "lightboxNext";

pub const HEADER: &str = ".main-header";
pub const HERO: &str = ".hero-section";

pub const STAGGER_ITEMS: &str = ".service-options span";

pub const CONFIG_SCRIPT: &str = "site-config";
