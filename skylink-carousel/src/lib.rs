pub mod engine;
pub mod layout;
pub mod rotator;

pub use engine::{Carousel, CarouselControl, CarouselOptions, CarouselView, ScrollTo};
pub use layout::{Breakpoints, LayoutMetrics};
pub use rotator::{Direction, HeadlineRotator, RotatorView};
