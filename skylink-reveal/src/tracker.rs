use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;
use skylink_shared::Rect;

/// The environment's `prefers-reduced-motion` signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Fraction of `element` inside `viewport`.
///
/// Zero-area elements count as fully visible when they sit inside the
/// viewport, matching how browsers report them.
pub fn intersection_ratio(element: &Rect, viewport: &Rect) -> f64 {
    match element.intersection(viewport) {
        None => 0.0,
        Some(_) if element.area() == 0.0 => 1.0,
        Some(overlap) => (overlap.area() / element.area()).clamp(0.0, 1.0),
    }
}

/// One-shot visibility trigger.
///
/// Elements start `Pending` and flip to `Revealed` the first time at least
/// `threshold` of their box is on screen. Revealed elements are dropped
/// from observation and never flip back.
#[derive(Debug, Clone)]
pub struct RevealTracker<K: Ord> {
    threshold: f64,
    root_margin_bottom: f64,
    states: BTreeMap<K, RevealState>,
    observing: bool,
}

impl<K: Ord + Copy + Debug> RevealTracker<K> {
    /// Track `elements`. With reduced motion everything is revealed here and
    /// no observation ever happens.
    pub fn setup(
        elements: impl IntoIterator<Item = K>,
        threshold: f64,
        root_margin_bottom: f64,
        motion: MotionPreference,
    ) -> Self {
        let reduce = motion == MotionPreference::Reduce;
        let initial = if reduce { RevealState::Revealed } else { RevealState::Pending };
        let states: BTreeMap<K, RevealState> = elements.into_iter().map(|k| (k, initial)).collect();

        if reduce {
            tracing::debug!(count = states.len(), "reduced motion, revealing everything");
        }

        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin_bottom,
            observing: !reduce && !states.is_empty(),
            states,
        }
    }

    pub fn state(&self, element: K) -> Option<RevealState> {
        self.states.get(&element).copied()
    }

    pub fn is_revealed(&self, element: K) -> bool {
        self.state(element) == Some(RevealState::Revealed)
    }

    pub fn pending_count(&self) -> usize {
        self.states.values().filter(|s| **s == RevealState::Pending).count()
    }

    /// False once nothing is left to reveal (or after reduced-motion setup).
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Report an intersection ratio for one element. Returns true when this
    /// call revealed it.
    pub fn observe(&mut self, element: K, ratio: f64) -> bool {
        if !self.observing {
            return false;
        }

        let revealed = match self.states.get_mut(&element) {
            Some(state)
                if *state == RevealState::Pending && ratio > 0.0 && ratio >= self.threshold =>
            {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        };

        if revealed {
            tracing::trace!(element = ?element, ratio, "revealed");
            if self.pending_count() == 0 {
                self.observing = false;
            }
        }
        revealed
    }

    /// Check every pending element against the viewport box (bottom edge
    /// trimmed by the root margin). Returns the elements revealed by this frame.
    pub fn observe_layout(&mut self, viewport: &Rect, elements: &[(K, Rect)]) -> Vec<K> {
        let root = viewport.trim_bottom(self.root_margin_bottom);
        elements
            .iter()
            .filter(|(k, rect)| self.observe(*k, intersection_ratio(rect, &root)))
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn snapshot(&self) -> Vec<(K, RevealState)> {
        self.states.iter().map(|(k, s)| (*k, *s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_ratio() {
        let half = Rect::new(0.0, 700.0, 100.0, 200.0);
        assert_eq!(intersection_ratio(&half, &viewport()), 0.5);
        let below = Rect::new(0.0, 900.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&below, &viewport()), 0.0);
        let dot = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&dot, &viewport()), 1.0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut t = RevealTracker::setup([1, 2], 0.12, 0.0, MotionPreference::NoPreference);
        assert!(!t.observe(1, 0.05));
        assert_eq!(t.state(1), Some(RevealState::Pending));
        assert!(t.observe(1, 0.5));
        assert!(!t.observe(1, 0.9));
        assert!(!t.observe(1, 0.0));
        assert!(t.is_revealed(1));
        assert!(t.is_observing());

        assert!(t.observe(2, 1.0));
        assert!(!t.is_observing());
    }

    #[test]
    fn test_reduced_motion_reveals_at_setup() {
        let t = RevealTracker::setup([1, 2, 3], 0.12, 0.06, MotionPreference::Reduce);
        assert!(t.snapshot().iter().all(|(_, s)| *s == RevealState::Revealed));
        assert!(!t.is_observing());
        assert_eq!(t.pending_count(), 0);
    }

    #[test]
    fn test_untracked_element_ignored() {
        let mut t = RevealTracker::setup([1], 0.12, 0.0, MotionPreference::NoPreference);
        assert!(!t.observe(9, 1.0));
        assert_eq!(t.state(9), None);
    }

    #[test]
    fn test_observe_layout_respects_root_margin() {
        let mut t = RevealTracker::setup(["a", "b"], 0.12, 0.06, MotionPreference::NoPreference);
        // Effective root ends at 752; "b" pokes 40px into the trimmed band only.
        let elements = [
            ("a", Rect::new(0.0, 100.0, 100.0, 100.0)),
            ("b", Rect::new(0.0, 760.0, 100.0, 100.0)),
        ];
        let revealed = t.observe_layout(&viewport(), &elements);
        assert_eq!(revealed, vec!["a"]);
        assert_eq!(t.state("b"), Some(RevealState::Pending));
    }

    #[test]
    fn test_empty_tracker_not_observing() {
        let t: RevealTracker<u8> =
            RevealTracker::setup([], 0.12, 0.0, MotionPreference::NoPreference);
        assert!(!t.is_observing());
    }
}
