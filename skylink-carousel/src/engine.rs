use std::time::Duration;

use serde::Serialize;
use skylink_core::config::{CarouselSettings, TrackSettings};
use skylink_shared::Key;

use crate::layout::{Breakpoints, LayoutMetrics};

/// Horizontal offset the view should smooth-scroll its track to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollTo {
    pub left: u32,
}

#[derive(Debug, Clone)]
pub struct CarouselOptions {
    pub breakpoints: Breakpoints,
    pub gap: u32,
    pub max_container: u32,
    pub autoplay: Option<Duration>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gap: 32,
            max_container: 1120,
            autoplay: None,
        }
    }
}

impl CarouselOptions {
    /// Track overrides layered on the carousel-wide settings
    pub fn from_settings(settings: &CarouselSettings, track: &TrackSettings) -> Self {
        let points = track
            .breakpoints
            .clone()
            .unwrap_or_else(|| settings.breakpoints.clone());

        Self {
            breakpoints: Breakpoints::new(points),
            gap: track.gap_px.unwrap_or(settings.gap_px),
            max_container: settings.max_container_px,
            autoplay: track.autoplay(),
        }
    }
}

/// Responsive card carousel.
///
/// Owns its cards read-only and keeps `current_index` (the left-most fully
/// visible card) inside `0..=max_index()` through every operation.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    options: CarouselOptions,
    metrics: LayoutMetrics,
    current_index: usize,
    hovered: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, options: CarouselOptions) -> Self {
        // Until the first resize arrives, lay out for the widest container.
        let metrics = LayoutMetrics::compute(
            &options.breakpoints,
            options.gap,
            options.max_container,
            0,
            options.max_container,
        );

        Self {
            items,
            options,
            metrics,
            current_index: 0,
            hovered: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn visible_count(&self) -> usize {
        self.metrics.visible_count
    }

    pub fn item_width(&self) -> u32 {
        self.metrics.item_width
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.metrics.visible_count)
    }

    /// Number of pagination dots
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.options.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.hovered
    }

    pub fn scroll_offset(&self) -> ScrollTo {
        ScrollTo {
            left: u32::try_from(self.current_index)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.metrics.stride()),
        }
    }

    /// Cards currently in view, left to right.
    pub fn visible_items(&self) -> &[T] {
        let start = self.current_index.min(self.items.len());
        let end = (start + self.metrics.visible_count).min(self.items.len());
        &self.items[start..end]
    }

    /// Re-derive layout after a viewport resize.
    pub fn configure(&mut self, viewport_width: u32, container_width: u32) {
        let metrics = LayoutMetrics::compute(
            &self.options.breakpoints,
            self.options.gap,
            self.options.max_container,
            viewport_width,
            container_width,
        );

        if metrics != self.metrics {
            tracing::debug!(
                visible = metrics.visible_count,
                item_width = metrics.item_width,
                "carousel layout changed"
            );
        }

        self.metrics = metrics;
        self.current_index = self.current_index.min(self.max_index());
    }

    pub fn next(&mut self) -> Option<ScrollTo> {
        self.goto(self.current_index.saturating_add(1))
    }

    pub fn prev(&mut self) -> Option<ScrollTo> {
        self.goto(self.current_index.saturating_sub(1))
    }

    /// Absolute navigation, clamped. `None` when there is nothing to scroll.
    pub fn goto(&mut self, index: usize) -> Option<ScrollTo> {
        if self.items.is_empty() {
            return None;
        }

        self.current_index = index.min(self.max_index());
        Some(self.scroll_offset())
    }

    /// Follow a user drag/wheel without issuing a scroll of our own.
    pub fn on_manual_scroll(&mut self, offset: f64) -> usize {
        let stride = self.metrics.stride() as f64;
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let index = (offset / stride).round() as usize;

        self.current_index = index.min(self.max_index());
        self.current_index
    }

    /// One autoplay step: advance, wrapping to the first page after the last.
    pub fn autoplay_tick(&mut self) -> Option<ScrollTo> {
        if self.hovered || self.items.is_empty() {
            return None;
        }

        let next = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        tracing::trace!(from = self.current_index, to = next, "autoplay tick");
        self.goto(next)
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn on_key(&mut self, key: Key) -> Option<ScrollTo> {
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            _ => None,
        }
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            visible_count: self.metrics.visible_count,
            item_width: self.metrics.item_width,
            gap: self.metrics.gap,
            current_index: self.current_index,
            page_count: self.page_count(),
            scroll_left: self.scroll_offset().left,
            paused: self.hovered,
        }
    }
}

/// Navigation surface shared by carousels of any card type.
pub trait CarouselControl {
    fn configure(&mut self, viewport_width: u32, container_width: u32);
    fn next(&mut self) -> Option<ScrollTo>;
    fn prev(&mut self) -> Option<ScrollTo>;
    fn goto(&mut self, index: usize) -> Option<ScrollTo>;
    fn on_manual_scroll(&mut self, offset: f64) -> usize;
    fn autoplay_tick(&mut self) -> Option<ScrollTo>;
    fn autoplay_interval(&self) -> Option<Duration>;
    fn pointer_enter(&mut self);
    fn pointer_leave(&mut self);
    fn on_key(&mut self, key: Key) -> Option<ScrollTo>;
    fn view(&self) -> CarouselView;
}

impl<T> CarouselControl for Carousel<T> {
    fn configure(&mut self, viewport_width: u32, container_width: u32) {
        Carousel::configure(self, viewport_width, container_width)
    }

    fn next(&mut self) -> Option<ScrollTo> {
        Carousel::next(self)
    }

    fn prev(&mut self) -> Option<ScrollTo> {
        Carousel::prev(self)
    }

    fn goto(&mut self, index: usize) -> Option<ScrollTo> {
        Carousel::goto(self, index)
    }

    fn on_manual_scroll(&mut self, offset: f64) -> usize {
        Carousel::on_manual_scroll(self, offset)
    }

    fn autoplay_tick(&mut self) -> Option<ScrollTo> {
        Carousel::autoplay_tick(self)
    }

    fn autoplay_interval(&self) -> Option<Duration> {
        Carousel::autoplay_interval(self)
    }

    fn pointer_enter(&mut self) {
        Carousel::pointer_enter(self)
    }

    fn pointer_leave(&mut self) {
        Carousel::pointer_leave(self)
    }

    fn on_key(&mut self, key: Key) -> Option<ScrollTo> {
        Carousel::on_key(self, key)
    }

    fn view(&self) -> CarouselView {
        Carousel::view(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub visible_count: usize,
    pub item_width: u32,
    pub gap: u32,
    pub current_index: usize,
    pub page_count: usize,
    pub scroll_left: u32,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylink_core::SiteConfig;

    fn places_carousel(count: usize) -> Carousel<usize> {
        let config = SiteConfig::default();
        let options = CarouselOptions::from_settings(&config.carousel, &config.carousel.places);
        Carousel::new((0..count).collect(), options)
    }

    #[test]
    fn test_configure_places_desktop() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        assert_eq!(c.visible_count(), 3);
        // (1120 - 2 * 20) / 3
        assert_eq!(c.item_width(), 360);
        assert_eq!(c.max_index(), 2);
        assert_eq!(c.page_count(), 3);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);

        assert_eq!(c.next(), Some(ScrollTo { left: 380 }));
        assert_eq!(c.next(), Some(ScrollTo { left: 760 }));
        assert_eq!(c.next(), Some(ScrollTo { left: 760 }));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        assert_eq!(c.prev(), Some(ScrollTo { left: 0 }));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_goto_clamped() {
        let mut c = places_carousel(5);
        c.configure(500, 480);
        assert_eq!(c.visible_count(), 1);
        c.goto(99);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.visible_items(), &[4]);
    }

    #[test]
    fn test_resize_reclamps_index() {
        let mut c = places_carousel(5);
        c.configure(500, 480);
        c.goto(4);
        c.configure(1440, 1200);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_manual_scroll_rounds_to_nearest_card() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        assert_eq!(c.on_manual_scroll(0.0), 0);
        assert_eq!(c.on_manual_scroll(189.0), 0);
        assert_eq!(c.on_manual_scroll(191.0), 1);
        assert_eq!(c.on_manual_scroll(10_000.0), 2);
        assert_eq!(c.on_manual_scroll(-50.0), 0);
        assert_eq!(c.on_manual_scroll(f64::NAN), 0);
    }

    #[test]
    fn test_autoplay_wraps_after_last_page() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        c.autoplay_tick();
        c.autoplay_tick();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.autoplay_tick(), Some(ScrollTo { left: 0 }));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_autoplay_paused_while_hovered() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        c.pointer_enter();
        assert_eq!(c.autoplay_tick(), None);
        assert_eq!(c.current_index(), 0);
        c.pointer_leave();
        c.autoplay_tick();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_empty_carousel_navigation_is_noop() {
        let mut c = places_carousel(0);
        c.configure(1440, 1200);
        assert_eq!(c.visible_count(), 3);
        assert!(c.item_width() >= 1);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert_eq!(c.goto(3), None);
        assert_eq!(c.autoplay_tick(), None);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.page_count(), 1);
        assert!(c.visible_items().is_empty());
    }

    #[test]
    fn test_single_item_stays_at_zero() {
        let mut c = places_carousel(1);
        c.configure(1440, 1200);
        c.next();
        c.autoplay_tick();
        c.on_manual_scroll(700.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        c.on_key(Key::ArrowRight);
        assert_eq!(c.current_index(), 1);
        c.on_key(Key::ArrowLeft);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.on_key(Key::Escape), None);
    }

    #[test]
    fn test_control_through_trait_object() {
        let mut c = places_carousel(5);
        let control: &mut dyn CarouselControl = &mut c;
        control.configure(1440, 1200);
        control.goto(7);
        assert_eq!(control.view().current_index, 2);
        assert_eq!(control.autoplay_interval(), Some(Duration::from_millis(4000)));
    }

    #[test]
    fn test_view_serializes() {
        let mut c = places_carousel(5);
        c.configure(1440, 1200);
        c.next();
        let json = serde_json::to_value(c.view()).unwrap();
        assert_eq!(json["current_index"], 1);
        assert_eq!(json["scroll_left"], 380);
        assert_eq!(json["page_count"], 3);
    }
}
