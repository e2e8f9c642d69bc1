pub mod geometry;
pub mod models;

pub use geometry::Rect;
pub use models::events::{Key, Section, Track, ViewportEvent};
