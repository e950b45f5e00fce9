//! Image gallery lightbox.
//!
//! The lightbox is either closed or showing one image from a fixed, ordered
//! list. Navigation wraps in both directions, so an open lightbox always
//! points at a valid image.

use shared::domain::ImageRef;
use thiserror::Error;
use tracing::{debug, warn};

use crate::events::{Key, PageScroll};

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("image index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxInput {
    ThumbnailClicked(usize),
    NextClicked,
    PreviousClicked,
    CloseClicked,
    BackdropClicked { target_is_backdrop: bool },
    KeyPressed(Key),
    DragStarted,
}

/// Image and counter for one index. They are built together so the two
/// outputs can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: ImageRef,
    pub counter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub active: bool,
    /// `None` when closing; the last image stays in place behind the overlay.
    pub slide: Option<Slide>,
    pub page_scroll: PageScroll,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxOutcome {
    pub view: Option<LightboxView>,
    pub prevent_default: bool,
}

impl LightboxOutcome {
    fn render(view: LightboxView) -> Self {
        Self {
            view: Some(view),
            prevent_default: false,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

pub fn counter_text(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

#[derive(Debug)]
pub struct GalleryController {
    images: Vec<ImageRef>,
    state: LightboxState,
}

impl GalleryController {
    /// Returns `None` for an empty gallery; the feature is then inert.
    pub fn new(images: Vec<ImageRef>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            images,
            state: LightboxState::Closed,
        })
    }

    /// Builds from the image found in each thumbnail. A thumbnail without an
    /// image, or no thumbnails at all, leaves the gallery inert.
    pub fn from_thumbnails<I>(thumbnails: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<ImageRef>>,
    {
        let Some(images) = thumbnails.into_iter().collect::<Option<Vec<_>>>() else {
            debug!("a gallery thumbnail has no image");
            return None;
        };
        Self::new(images)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn view(&self) -> LightboxView {
        match self.state {
            LightboxState::Open { index } => LightboxView {
                active: true,
                slide: Some(self.slide(index)),
                page_scroll: PageScroll::Locked,
            },
            LightboxState::Closed => LightboxView {
                active: false,
                slide: None,
                page_scroll: PageScroll::Restored,
            },
        }
    }

    fn slide(&self, index: usize) -> Slide {
        Slide {
            image: self.images[index].clone(),
            counter: counter_text(index, self.images.len()),
        }
    }

    pub fn open(&mut self, index: usize) -> Result<LightboxView, GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.state = LightboxState::Open { index };
        debug!(index, total = self.images.len(), "lightbox opened");
        Ok(self.view())
    }

    pub fn next(&mut self) -> Option<LightboxView> {
        let index = self.current_index()?;
        self.state = LightboxState::Open {
            index: (index + 1) % self.images.len(),
        };
        Some(self.view())
    }

    pub fn previous(&mut self) -> Option<LightboxView> {
        let index = self.current_index()?;
        let len = self.images.len();
        self.state = LightboxState::Open {
            index: (index + len - 1) % len,
        };
        Some(self.view())
    }

    /// Always reports restored scroll, even if the lightbox was already closed.
    pub fn close(&mut self) -> LightboxView {
        if self.is_open() {
            debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
        self.view()
    }

    pub fn update(&mut self, input: LightboxInput) -> LightboxOutcome {
        match input {
            LightboxInput::ThumbnailClicked(index) => match self.open(index) {
                Ok(view) => LightboxOutcome::render(view),
                Err(error) => {
                    warn!(%error, "ignoring thumbnail click");
                    LightboxOutcome::ignored()
                }
            },
            LightboxInput::NextClicked => self
                .next()
                .map_or_else(LightboxOutcome::ignored, LightboxOutcome::render),
            LightboxInput::PreviousClicked => self
                .previous()
                .map_or_else(LightboxOutcome::ignored, LightboxOutcome::render),
            LightboxInput::CloseClicked => LightboxOutcome::render(self.close()),
            LightboxInput::BackdropClicked { target_is_backdrop } => {
                if target_is_backdrop {
                    LightboxOutcome::render(self.close())
                } else {
                    LightboxOutcome::ignored()
                }
            }
            LightboxInput::KeyPressed(key) => self.handle_key(key),
            LightboxInput::DragStarted => LightboxOutcome {
                view: None,
                prevent_default: true,
            },
        }
    }

    fn handle_key(&mut self, key: Key) -> LightboxOutcome {
        if !self.is_open() {
            return LightboxOutcome::ignored();
        }
        match key {
            Key::Escape => LightboxOutcome::render(self.close()),
            Key::ArrowRight => self
                .next()
                .map_or_else(LightboxOutcome::ignored, LightboxOutcome::render),
            Key::ArrowLeft => self
                .previous()
                .map_or_else(LightboxOutcome::ignored, LightboxOutcome::render),
            Key::Other => LightboxOutcome::ignored(),
        }
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
