use chrono::NaiveDate;
use serde::Serialize;
use skylink_booking::{BookingPanel, BookingView};
use skylink_carousel::{
    Carousel, CarouselControl, CarouselOptions, CarouselView, HeadlineRotator, RotatorView,
};
use skylink_catalog::{BundleCard, Place, TravelPackage};
use skylink_core::SiteConfig;
use skylink_reveal::{MotionPreference, RevealState, RevealTracker};
use skylink_shared::{Key, Section, Track};

use crate::footer::{Footer, FooterView};
use crate::loader::{Dialog, Loader, LoaderPhase};
use crate::navbar::{Navbar, NavbarView};

/// All view state of the home page, owned in one place and handed to
/// components as plain borrows.
#[derive(Debug)]
pub struct HomePage {
    pub navbar: Navbar,
    pub booking: BookingPanel,
    pub hero: HeadlineRotator,
    pub hero_dialog: Dialog,
    pub bundles: Vec<BundleCard>,
    pub packages: Carousel<TravelPackage>,
    pub places: Carousel<Place>,
    pub app_dialog: Dialog,
    pub footer: Footer,
    pub loader: Loader,
    pub reveal: RevealTracker<Section>,
}

impl HomePage {
    pub fn new(config: &SiteConfig, today: NaiveDate, motion: MotionPreference) -> Self {
        let carousel = &config.carousel;

        Self {
            navbar: Navbar::new(config.navbar.desktop_min_width),
            booking: BookingPanel::new(today),
            hero: HeadlineRotator::new(skylink_catalog::hero_headlines()),
            hero_dialog: Dialog::default(),
            bundles: skylink_catalog::travel_bundles(),
            packages: Carousel::new(
                skylink_catalog::featured_packages(),
                CarouselOptions::from_settings(carousel, &carousel.packages),
            ),
            places: Carousel::new(
                skylink_catalog::popular_places(),
                CarouselOptions::from_settings(carousel, &carousel.places),
            ),
            app_dialog: Dialog::default(),
            footer: Footer::new(skylink_catalog::footer_links()),
            loader: Loader::new(),
            reveal: RevealTracker::setup(
                Section::ALL,
                config.reveal.threshold,
                config.reveal.root_margin_bottom,
                motion,
            ),
        }
    }

    pub fn track_mut(&mut self, track: Track) -> &mut dyn CarouselControl {
        match track {
            Track::Packages => &mut self.packages,
            Track::Places => &mut self.places,
        }
    }

    pub fn track(&self, track: Track) -> &dyn CarouselControl {
        match track {
            Track::Packages => &self.packages,
            Track::Places => &self.places,
        }
    }

    pub fn resize(&mut self, viewport_width: u32, container_width: u32) {
        self.packages.configure(viewport_width, container_width);
        self.places.configure(viewport_width, container_width);
        self.navbar.on_resize(viewport_width);
    }

    /// Window-level key handling. Both tracks listen for arrows.
    pub fn on_key(&mut self, key: Key) {
        self.navbar.on_key(key);
        if key == Key::Escape {
            self.close_hero_dialog();
        }
        self.packages.on_key(key);
        self.places.on_key(key);
    }

    pub fn open_hero_dialog(&mut self) {
        self.hero_dialog.open();
        self.hero.set_dialog_open(true);
    }

    pub fn close_hero_dialog(&mut self) {
        self.hero_dialog.close();
        self.hero.set_dialog_open(false);
    }

    /// Page scrolling is blocked behind the loader and the hero dialog.
    pub fn scroll_locked(&self) -> bool {
        self.loader.is_visible() || self.hero_dialog.is_open()
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            navbar: self.navbar.view(),
            booking: self.booking.view(),
            hero: self.hero.view(),
            hero_dialog_open: self.hero_dialog.is_open(),
            bundles: self.bundles.clone(),
            packages: TrackView {
                carousel: self.packages.view(),
                cards: self
                    .packages
                    .items()
                    .iter()
                    .map(|p| PackageCard { total_label: p.total_label(), package: p.clone() })
                    .collect(),
            },
            places: TrackView {
                carousel: self.places.view(),
                cards: self
                    .places
                    .items()
                    .iter()
                    .map(|p| PlaceCard { price_label: p.price_label(), place: p.clone() })
                    .collect(),
            },
            app_dialog_open: self.app_dialog.is_open(),
            footer: self.footer.view(),
            loader: self.loader.phase(),
            scroll_locked: self.scroll_locked(),
            sections: self.reveal.snapshot(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageCard {
    #[serde(flatten)]
    pub package: TravelPackage,
    pub total_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceCard {
    #[serde(flatten)]
    pub place: Place,
    pub price_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackView<C> {
    pub carousel: CarouselView,
    pub cards: Vec<C>,
}

/// Everything the host needs to render the page
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub navbar: NavbarView,
    pub booking: BookingView,
    pub hero: RotatorView,
    pub hero_dialog_open: bool,
    pub bundles: Vec<BundleCard>,
    pub packages: TrackView<PackageCard>,
    pub places: TrackView<PlaceCard>,
    pub app_dialog_open: bool,
    pub footer: FooterView,
    pub loader: LoaderPhase,
    pub scroll_locked: bool,
    pub sections: Vec<(Section, RevealState)>,
}
