use serde::Serialize;
use skylink_core::Breakpoint;

/// Viewport-width → visible-card step function.
///
/// Points are kept sorted by `min_width` and the visible counts are forced
/// non-decreasing, so a wider viewport never shows fewer cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    points: Vec<Breakpoint>,
}

impl Breakpoints {
    pub fn new(points: Vec<Breakpoint>) -> Self {
        let mut points = points;
        points.sort_by_key(|p| p.min_width);

        let mut floor = 1;
        for point in &mut points {
            if point.visible < floor {
                tracing::warn!(
                    min_width = point.min_width,
                    visible = point.visible,
                    raised_to = floor,
                    "breakpoint shows fewer cards than a narrower one"
                );
            }
            point.visible = point.visible.max(floor);
            floor = point.visible;
        }

        Self { points }
    }

    pub fn visible_for(&self, viewport_width: u32) -> usize {
        self.points
            .iter()
            .rev()
            .find(|p| p.min_width <= viewport_width)
            .map(|p| p.visible)
            .unwrap_or(1)
    }

    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(vec![
            Breakpoint::new(0, 1),
            Breakpoint::new(768, 2),
            Breakpoint::new(1024, 3),
            Breakpoint::new(1280, 4),
        ])
    }
}

/// Derived card geometry for one viewport size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMetrics {
    pub visible_count: usize,
    pub item_width: u32,
    pub gap: u32,
}

impl LayoutMetrics {
    pub fn compute(
        breakpoints: &Breakpoints,
        gap: u32,
        max_container: u32,
        viewport_width: u32,
        container_width: u32,
    ) -> Self {
        let visible_count = breakpoints.visible_for(viewport_width);
        let usable = container_width.min(max_container);
        let cards = u32::try_from(visible_count).unwrap_or(u32::MAX).max(1);
        let gaps = gap.saturating_mul(cards - 1);
        let item_width = (usable.saturating_sub(gaps) / cards).max(1);

        Self { visible_count, item_width, gap }
    }

    /// Distance between the left edges of neighbouring cards
    pub fn stride(&self) -> u32 {
        self.item_width.saturating_add(self.gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(bp.visible_for(320), 1);
        assert_eq!(bp.visible_for(767), 1);
        assert_eq!(bp.visible_for(768), 2);
        assert_eq!(bp.visible_for(1023), 2);
        assert_eq!(bp.visible_for(1024), 3);
        assert_eq!(bp.visible_for(1279), 3);
        assert_eq!(bp.visible_for(1280), 4);
        assert_eq!(bp.visible_for(4000), 4);
    }

    #[test]
    fn test_unsorted_and_decreasing_points_normalised() {
        let bp = Breakpoints::new(vec![
            Breakpoint::new(1024, 1),
            Breakpoint::new(0, 2),
            Breakpoint::new(600, 0),
        ]);
        assert_eq!(bp.visible_for(0), 2);
        assert_eq!(bp.visible_for(700), 2);
        assert_eq!(bp.visible_for(2000), 2);
    }

    #[test]
    fn test_empty_breakpoints_show_one() {
        let bp = Breakpoints::new(vec![]);
        assert_eq!(bp.visible_for(1920), 1);
    }

    #[test]
    fn test_item_width() {
        // 1440 wide viewport, container capped at 1120, 4 cards, 3 gaps of 32
        let m = LayoutMetrics::compute(&Breakpoints::default(), 32, 1120, 1440, 1392);
        assert_eq!(m.visible_count, 4);
        assert_eq!(m.item_width, (1120 - 96) / 4);
        assert_eq!(m.stride(), 256 + 32);
    }

    #[test]
    fn test_zero_width_container_is_degenerate_not_zero() {
        let m = LayoutMetrics::compute(&Breakpoints::default(), 32, 1120, 1440, 0);
        assert_eq!(m.item_width, 1);
        assert_eq!(m.visible_count, 4);
    }

    #[test]
    fn test_huge_counts_and_gaps_saturate() {
        let bp = Breakpoints::new(vec![Breakpoint::new(0, usize::MAX)]);
        let m = LayoutMetrics::compute(&bp, u32::MAX, 1120, 1440, 1200);
        assert_eq!(m.visible_count, usize::MAX);
        assert_eq!(m.item_width, 1);
        assert_eq!(m.stride(), u32::MAX);
    }
}
