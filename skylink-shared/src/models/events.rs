use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Keys the page reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Horizontally scrolling card tracks on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Track {
    Packages,
    Places,
}

/// Page sections that fade in on first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Hero,
    Bundles,
    Packages,
    Banner,
    Places,
    AppPromo,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Bundles,
        Section::Packages,
        Section::Banner,
        Section::Places,
        Section::AppPromo,
        Section::Footer,
    ];
}

/// Events published by the host environment (window, document, tracks).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewportEvent {
    Resized {
        viewport_width: u32,
        container_width: u32,
    },
    TrackScrolled {
        track: Track,
        offset: f64,
    },
    /// Current viewport box and the bounding boxes of sections still on screen.
    Layout {
        viewport: Rect,
        sections: Vec<(Section, Rect)>,
    },
    Loaded,
}
