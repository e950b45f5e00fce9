//! Page controllers for the site: navigation menu, gallery lightbox, scroll
//! effects and form field enhancements.
//!
//! Every controller is a plain state machine. Browser events are turned into
//! input enums, fed through `update`, and the returned view structs are what a
//! binding layer writes back to the DOM. Nothing here touches the browser.

pub mod config;
pub mod events;
pub mod form;
pub mod frame;
pub mod gallery;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use config::{ConfigError, PulseConfig, RevealConfig, ScrollConfig, UiConfig};
pub use events::{Key, PageScroll};
pub use form::{FieldInput, HoverHint, InputPulse, LabelChange, PendingRevert};
pub use frame::FrameCoalescer;
pub use gallery::{GalleryController, GalleryError, LightboxInput, LightboxOutcome, LightboxView};
pub use nav::{NavController, NavInput, NavView};
pub use reveal::{Intersection, RevealTracker};
pub use scroll::{HeaderPosition, HeaderStyle, ScrollController, ScrollEffects, ScrollFrame};
