pub mod pricing;
pub mod product;

pub use pricing::format_usd;
pub use product::{
    featured_packages, footer_links, hero_headlines, popular_places, travel_bundles, BundleCard,
    FooterLinks, Place, TravelPackage,
};
