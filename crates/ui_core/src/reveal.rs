//! Reveal-on-scroll bookkeeping.

use tracing::debug;

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll, .section-header, .about-grid, .scholarship-card, .testimonial-card, .application-form, .contact-grid";
pub const ANIMATE_CLASS: &str = "animate-on-scroll";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const STAGGER_CLASS: &str = "stagger-fade-in";
/// Attribute that ties an observed element back to its tracker index.
pub const INDEX_ATTR: &str = "data-reveal-index";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub target: usize,
    pub is_intersecting: bool,
}

/// Tracks which observed elements have been revealed. A flag, once set,
/// stays set.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one more element and returns its index.
    pub fn observe(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.get(target).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }

    /// Returns the targets that became revealed in this batch, in entry order.
    pub fn on_intersections<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = Intersection>,
    {
        let mut newly = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(flag) = self.revealed.get_mut(entry.target) else {
                debug!(target = entry.target, "intersection for unknown element");
                continue;
            };
            if !*flag {
                *flag = true;
                newly.push(entry.target);
            }
        }
        newly
    }
}

pub fn index_attr_value(index: usize) -> String {
    index.to_string()
}

/// Reads an intersection entry back into tracker terms. Elements without a
/// usable index attribute were not registered here and yield `None`.
pub fn intersection_from_attr(raw: Option<&str>, is_intersecting: bool) -> Option<Intersection> {
    let target = raw?.trim().parse().ok()?;
    Some(Intersection {
        target,
        is_intersecting,
    })
}

/// `animation-delay` for the i-th staggered item.
pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}
