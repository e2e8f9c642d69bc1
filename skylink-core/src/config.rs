use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::CoreResult;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselSettings,
    pub booking: BookingSettings,
    pub newsletter: NewsletterSettings,
    pub hero: HeroSettings,
    pub loader: LoaderSettings,
    pub reveal: RevealSettings,
    pub navbar: NavbarSettings,
}

/// Viewports at least `min_width` wide show `visible` cards.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub visible: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, visible: usize) -> Self {
        Self { min_width, visible }
    }
}

/// Carousel-wide layout plus the resolved settings of each track.
///
/// Deserialized through [`CarouselOverrides`], so a file that sets a single
/// key of a track keeps the rest of that track's defaults.
#[derive(Debug, Deserialize, Clone)]
#[serde(from = "CarouselOverrides")]
pub struct CarouselSettings {
    pub gap_px: u32,
    pub max_container_px: u32,
    pub breakpoints: Vec<Breakpoint>,
    pub packages: TrackSettings,
    pub places: TrackSettings,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            gap_px: 32,
            max_container_px: 1120,
            breakpoints: vec![
                Breakpoint::new(0, 1),
                Breakpoint::new(768, 2),
                Breakpoint::new(1024, 3),
                Breakpoint::new(1280, 4),
            ],
            packages: TrackSettings {
                breakpoints: Some(vec![
                    Breakpoint::new(0, 1),
                    Breakpoint::new(768, 2),
                    Breakpoint::new(1024, 4),
                ]),
                gap_px: Some(32),
                autoplay_ms: 0,
            },
            places: TrackSettings {
                breakpoints: Some(vec![
                    Breakpoint::new(0, 1),
                    Breakpoint::new(768, 2),
                    Breakpoint::new(1024, 3),
                ]),
                gap_px: Some(20),
                autoplay_ms: 4000,
            },
        }
    }
}

/// Per-track settings; `None` falls back to the carousel-wide values.
#[derive(Debug, Clone, Default)]
pub struct TrackSettings {
    pub breakpoints: Option<Vec<Breakpoint>>,
    pub gap_px: Option<u32>,
    /// Zero disables autoplay.
    pub autoplay_ms: u64,
}

impl TrackSettings {
    pub fn autoplay(&self) -> Option<Duration> {
        (self.autoplay_ms > 0).then(|| Duration::from_millis(self.autoplay_ms))
    }
}

/// The `[carousel]` table as written; every key is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CarouselOverrides {
    gap_px: Option<u32>,
    max_container_px: Option<u32>,
    breakpoints: Option<Vec<Breakpoint>>,
    packages: TrackOverrides,
    places: TrackOverrides,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct TrackOverrides {
    breakpoints: Option<Vec<Breakpoint>>,
    gap_px: Option<u32>,
    autoplay_ms: Option<u64>,
}

impl TrackOverrides {
    fn apply(self, base: TrackSettings) -> TrackSettings {
        TrackSettings {
            breakpoints: self.breakpoints.or(base.breakpoints),
            gap_px: self.gap_px.or(base.gap_px),
            autoplay_ms: self.autoplay_ms.unwrap_or(base.autoplay_ms),
        }
    }
}

impl From<CarouselOverrides> for CarouselSettings {
    fn from(raw: CarouselOverrides) -> Self {
        let base = CarouselSettings::default();
        Self {
            gap_px: raw.gap_px.unwrap_or(base.gap_px),
            max_container_px: raw.max_container_px.unwrap_or(base.max_container_px),
            breakpoints: raw.breakpoints.unwrap_or(base.breakpoints),
            packages: raw.packages.apply(base.packages),
            places: raw.places.apply(base.places),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingSettings {
    pub search_delay_ms: u64,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self { search_delay_ms: 900 }
    }
}

impl BookingSettings {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NewsletterSettings {
    pub confirmation_ms: u64,
}

impl Default for NewsletterSettings {
    fn default() -> Self {
        Self { confirmation_ms: 3500 }
    }
}

impl NewsletterSettings {
    pub fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HeroSettings {
    pub rotate_interval_ms: u64,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self { rotate_interval_ms: 3000 }
    }
}

impl HeroSettings {
    pub fn rotate_interval(&self) -> Duration {
        Duration::from_millis(self.rotate_interval_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoaderSettings {
    pub fallback_ms: u64,
    pub exit_delay_ms: u64,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self { fallback_ms: 1500, exit_delay_ms: 250 }
    }
}

impl LoaderSettings {
    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin_bottom: f64,
    /// Stand-in for the host's reduced-motion media query
    pub prefers_reduced_motion: bool,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self { threshold: 0.12, root_margin_bottom: 0.06, prefers_reduced_motion: false }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NavbarSettings {
    pub desktop_min_width: u32,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self { desktop_min_width: 768 }
    }
}

impl SiteConfig {
    pub fn load() -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Developer overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // SKYLINK__BOOKING__SEARCH_DELAY_MS=500 sets booking.search_delay_ms
            .add_source(config::Environment::with_prefix("SKYLINK").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let s = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
