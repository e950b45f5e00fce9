//! Input vocabulary shared by the controllers.

/// Keys the lightbox reacts to. Everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowRight,
    ArrowLeft,
    Other,
}

impl Key {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            _ => Key::Other,
        }
    }
}

/// Whether the page body may scroll while a modal surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScroll {
    Locked,
    Restored,
}

impl PageScroll {
    /// Value for the body's inline `overflow` style. Empty clears it.
    pub fn overflow(self) -> &'static str {
        match self {
            PageScroll::Locked => "hidden",
            PageScroll::Restored => "",
        }
    }

    pub fn is_locked(self) -> bool {
        self == PageScroll::Locked
    }
}
