//! Contact form field enhancements: floating labels, the typing pulse and
//! hover hints.

use crate::config::PulseConfig;

pub const FOCUSED_CLASS: &str = "focused";
pub const LOADED_CLASS: &str = "loaded";
pub const HOVER_SELECTOR: &str = ".btn, .nav-link, .scholarship-card, .testimonial-card";
pub const FIELD_SELECTOR: &str = "input, textarea";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Focused,
    Blurred { value_is_empty: bool },
}

/// Class change on the field's parent wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelChange {
    AddFocused,
    RemoveFocused,
}

/// A filled field keeps its label floated after blur.
pub fn label_change(input: FieldInput) -> Option<LabelChange> {
    match input {
        FieldInput::Focused => Some(LabelChange::AddFocused),
        FieldInput::Blurred {
            value_is_empty: true,
        } => Some(LabelChange::RemoveFocused),
        FieldInput::Blurred {
            value_is_empty: false,
        } => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevert {
    generation: u64,
    pub after_ms: u32,
}

/// Per-field typing pulse. Each input scales the field up and schedules a
/// revert; only the revert from the latest input takes effect.
#[derive(Debug)]
pub struct InputPulse {
    config: PulseConfig,
    generation: u64,
    pulsing: bool,
}

pub const RESTING_TRANSFORM: &str = "scale(1)";

impl InputPulse {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            generation: 0,
            pulsing: false,
        }
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulsing
    }

    /// Returns the transform to apply now and the revert to schedule.
    pub fn on_input(&mut self) -> (String, PendingRevert) {
        self.generation = self.generation.wrapping_add(1);
        self.pulsing = true;
        (
            format!("scale({})", self.config.scale),
            PendingRevert {
                generation: self.generation,
                after_ms: self.config.revert_after_ms,
            },
        )
    }

    /// Returns the resting transform if `pending` is still the latest pulse.
    pub fn on_revert(&mut self, pending: PendingRevert) -> Option<&'static str> {
        if pending.generation != self.generation || !self.pulsing {
            return None;
        }
        self.pulsing = false;
        Some(RESTING_TRANSFORM)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverHint {
    Enter,
    Leave,
}

impl HoverHint {
    pub fn will_change(self) -> &'static str {
        match self {
            HoverHint::Enter => "transform",
            HoverHint::Leave => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_floats_label() {
        assert_eq!(
            label_change(FieldInput::Focused),
            Some(LabelChange::AddFocused)
        );
    }

    #[test]
    fn blur_on_empty_field_drops_label() {
        assert_eq!(
            label_change(FieldInput::Blurred {
                value_is_empty: true
            }),
            Some(LabelChange::RemoveFocused)
        );
    }

    #[test]
    fn blur_on_filled_field_keeps_label() {
        assert_eq!(
            label_change(FieldInput::Blurred {
                value_is_empty: false
            }),
            None
        );
    }

    #[test]
    fn pulse_scales_then_reverts() {
        let mut pulse = InputPulse::new(PulseConfig::default());
        let (transform, pending) = pulse.on_input();
        assert_eq!(transform, "scale(1.02)");
        assert_eq!(pending.after_ms, 150);
        assert!(pulse.is_pulsing());
        assert_eq!(pulse.on_revert(pending), Some("scale(1)"));
        assert!(!pulse.is_pulsing());
    }

    #[test]
    fn newer_input_supersedes_pending_revert() {
        let mut pulse = InputPulse::new(PulseConfig::default());
        let (_, first) = pulse.on_input();
        let (_, second) = pulse.on_input();
        assert_eq!(pulse.on_revert(first), None);
        assert!(pulse.is_pulsing());
        assert_eq!(pulse.on_revert(second), Some("scale(1)"));
    }

    #[test]
    fn revert_is_idempotent() {
        let mut pulse = InputPulse::new(PulseConfig::default());
        let (_, pending) = pulse.on_input();
        assert!(pulse.on_revert(pending).is_some());
        assert!(pulse.on_revert(pending).is_none());
    }

    #[test]
    fn hover_hint_values() {
        assert_eq!(HoverHint::Enter.will_change(), "transform");
        assert_eq!(HoverHint::Leave.will_change(), "auto");
    }
}
