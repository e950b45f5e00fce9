//! Scroll-driven header and hero effects.
//!
//! All presentation values are recomputed from the scroll offset on each
//! frame. The only carried state is the previous offset, used to tell
//! scroll direction.

use tracing::trace;

use crate::{config::ScrollConfig, frame::FrameCoalescer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Base,
    Elevated,
}

impl HeaderStyle {
    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Base => "rgba(255, 251, 240, 0.95)",
            HeaderStyle::Elevated => "rgba(255, 251, 240, 0.98)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        match self {
            HeaderStyle::Base => "blur(20px)",
            HeaderStyle::Elevated => "blur(25px)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPosition {
    Shown,
    Hidden,
}

impl HeaderPosition {
    pub fn transform(self) -> &'static str {
        match self {
            HeaderPosition::Shown => "translateY(0)",
            HeaderPosition::Hidden => "translateY(-100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub header_style: HeaderStyle,
    pub header_position: HeaderPosition,
    pub hero_offset_px: f64,
}

impl ScrollFrame {
    pub fn hero_transform(&self) -> String {
        format!("translateY({}px)", self.hero_offset_px)
    }
}

pub fn header_style(y: f64, config: &ScrollConfig) -> HeaderStyle {
    if y > config.elevate_after_px {
        HeaderStyle::Elevated
    } else {
        HeaderStyle::Base
    }
}

pub fn header_position(y: f64, previous_y: f64, config: &ScrollConfig) -> HeaderPosition {
    if y > previous_y && y > config.hide_after_px {
        HeaderPosition::Hidden
    } else {
        HeaderPosition::Shown
    }
}

pub fn parallax_offset(y: f64, rate: f64) -> f64 {
    let offset = y * rate;
    // -0.0 would render as "translateY(-0px)"
    if offset == 0.0 {
        0.0
    } else {
        offset
    }
}

#[derive(Debug)]
pub struct ScrollEffects {
    config: ScrollConfig,
    last_scroll_y: f64,
}

impl ScrollEffects {
    pub fn new(config: ScrollConfig, initial_scroll_y: f64) -> Self {
        Self {
            config,
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    pub fn apply(&mut self, y: f64) -> ScrollFrame {
        let frame = ScrollFrame {
            header_style: header_style(y, &self.config),
            header_position: header_position(y, self.last_scroll_y, &self.config),
            hero_offset_px: parallax_offset(y, self.config.parallax_rate),
        };
        trace!(y, previous = self.last_scroll_y, ?frame, "scroll frame");
        self.last_scroll_y = y;
        frame
    }
}

/// Scroll effects behind a frame coalescer: notifications only decide
/// whether to request a frame, and the offset is read when the frame runs.
#[derive(Debug)]
pub struct ScrollController {
    effects: ScrollEffects,
    frames: FrameCoalescer,
}

impl ScrollController {
    pub fn new(config: ScrollConfig, initial_scroll_y: f64) -> Self {
        Self {
            effects: ScrollEffects::new(config, initial_scroll_y),
            frames: FrameCoalescer::new(),
        }
    }

    /// True when the caller should request an animation frame.
    pub fn on_scroll(&mut self) -> bool {
        self.frames.notify()
    }

    pub fn on_frame(&mut self, y: f64) -> ScrollFrame {
        let folded = self.frames.on_frame();
        if folded > 0 {
            trace!(folded, "coalesced scroll notifications");
        }
        self.effects.apply(y)
    }

    pub fn effects(&self) -> &ScrollEffects {
        &self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects() -> ScrollEffects {
        ScrollEffects::new(ScrollConfig::default(), 0.0)
    }

    #[test]
    fn top_of_page_is_base_with_no_parallax() {
        let frame = effects().apply(0.0);
        assert_eq!(frame.header_style, HeaderStyle::Base);
        assert_eq!(frame.header_position, HeaderPosition::Shown);
        assert_eq!(frame.hero_transform(), "translateY(0px)");
    }

    #[test]
    fn first_sample_at_150_elevates_and_offsets() {
        let frame = effects().apply(150.0);
        assert_eq!(frame.header_style, HeaderStyle::Elevated);
        assert_eq!(frame.header_position, HeaderPosition::Shown);
        assert_eq!(frame.hero_offset_px, -75.0);
        assert_eq!(frame.hero_transform(), "translateY(-75px)");
    }

    #[test]
    fn elevation_threshold_is_strict() {
        assert_eq!(effects().apply(100.0).header_style, HeaderStyle::Base);
        assert_eq!(effects().apply(100.5).header_style, HeaderStyle::Elevated);
    }

    #[test]
    fn scrolling_down_past_200_hides_header() {
        let mut fx = effects();
        fx.apply(150.0);
        let frame = fx.apply(250.0);
        assert_eq!(frame.header_position, HeaderPosition::Hidden);
        assert_eq!(frame.header_style, HeaderStyle::Elevated);
        assert_eq!(frame.hero_transform(), "translateY(-125px)");
    }

    #[test]
    fn scrolling_down_below_200_keeps_header() {
        let mut fx = effects();
        fx.apply(100.0);
        assert_eq!(fx.apply(199.0).header_position, HeaderPosition::Shown);
    }

    #[test]
    fn scrolling_up_from_deep_position_restores_header() {
        let mut fx = effects();
        fx.apply(250.0);
        let frame = fx.apply(50.0);
        assert_eq!(frame.header_style, HeaderStyle::Base);
        assert_eq!(frame.header_position, HeaderPosition::Shown);
        assert_eq!(frame.header_position.transform(), "translateY(0)");
        assert_eq!(frame.hero_transform(), "translateY(-25px)");
    }

    #[test]
    fn scrolling_up_while_deep_still_shows_header() {
        let mut fx = effects();
        fx.apply(500.0);
        let frame = fx.apply(300.0);
        assert_eq!(frame.header_position, HeaderPosition::Shown);
        assert_eq!(frame.header_style, HeaderStyle::Elevated);
    }

    #[test]
    fn last_scroll_y_follows_each_frame() {
        let mut fx = effects();
        fx.apply(120.0);
        assert_eq!(fx.last_scroll_y(), 120.0);
        fx.apply(30.0);
        assert_eq!(fx.last_scroll_y(), 30.0);
    }

    #[test]
    fn fractional_offsets_render_like_the_browser() {
        let frame = effects().apply(75.0);
        assert_eq!(frame.hero_transform(), "translateY(-37.5px)");
    }

    #[test]
    fn controller_recomputes_once_per_frame() {
        let mut scroll = ScrollController::new(ScrollConfig::default(), 0.0);
        let requests = [10.0, 20.0, 30.0, 40.0]
            .iter()
            .filter(|_| scroll.on_scroll())
            .count();
        assert_eq!(requests, 1);

        let frame = scroll.on_frame(40.0);
        assert_eq!(frame.hero_offset_px, -20.0);
        assert_eq!(scroll.effects().last_scroll_y(), 40.0);
        assert!(scroll.on_scroll());
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let config = ScrollConfig {
            elevate_after_px: 10.0,
            hide_after_px: 20.0,
            parallax_rate: -1.0,
        };
        let mut fx = ScrollEffects::new(config, 0.0);
        let frame = fx.apply(30.0);
        assert_eq!(frame.header_style, HeaderStyle::Elevated);
        assert_eq!(frame.header_position, HeaderPosition::Hidden);
        assert_eq!(frame.hero_offset_px, -30.0);
    }
}
