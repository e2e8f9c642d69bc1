use serde::{Deserialize, Serialize};

use crate::pricing::format_usd;

/// Flight + hotel deal shown in the packages track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelPackage {
    pub id: u32,
    pub city: String,
    pub title: String,
    pub nights: u32,
    pub flight_price: u32,
    pub hotel_price: u32,
    pub image: String,
}

impl TravelPackage {
    fn new(
        id: u32,
        city: &str,
        title: &str,
        nights: u32,
        flight_price: u32,
        hotel_price: u32,
        image: &str,
    ) -> Self {
        Self {
            id,
            city: city.to_string(),
            title: title.to_string(),
            nights,
            flight_price,
            hotel_price,
            image: image.to_string(),
        }
    }

    /// Total including taxes
    pub fn total(&self) -> u32 {
        self.flight_price + self.hotel_price
    }

    pub fn total_label(&self) -> String {
        format_usd(self.total())
    }
}

/// Stay shown in the popular places track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub from_price: u32,
}

impl Place {
    pub fn price_label(&self) -> String {
        format!("From {}", format_usd(self.from_price))
    }
}

/// Promotional card in the bundles grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleCard {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub image: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterLinks {
    pub company: Vec<String>,
    pub explore: Vec<String>,
    pub help: Vec<String>,
}

pub fn featured_packages() -> Vec<TravelPackage> {
    vec![
        TravelPackage::new(
            1,
            "Las Vegas",
            "Virgin Hotels Las Vegas - Curio Collection",
            14,
            2300,
            3000,
            "assets/see1.jpg",
        ),
        TravelPackage::new(2, "Los Angeles", "Downtown Luxe Hotel", 7, 800, 900, "assets/see2.jpg"),
        TravelPackage::new(3, "New York", "Midtown Boutique Stay", 5, 450, 600, "assets/see1.jpg"),
        TravelPackage::new(4, "Miami", "Oceanfront Resort", 10, 700, 1200, "assets/see.jpg"),
        TravelPackage::new(5, "Miami", "Oceanfront Resort", 10, 700, 1200, "assets/see.jpg"),
        TravelPackage::new(6, "Miami", "Oceanfront Resort", 10, 700, 1200, "assets/see.jpg"),
        TravelPackage::new(7, "Miami", "Oceanfront Resort", 10, 700, 1200, "assets/see.jpg"),
    ]
}

pub fn popular_places() -> Vec<Place> {
    [
        (1, "Rooftop Pool", "City view · Heated", "assets/see.jpg"),
        (2, "Infinity Pool", "Oceanfront · Bar", "assets/see2.jpg"),
        (3, "Private Villa Pool", "Secluded · Private dining", "assets/see1.jpg"),
        (4, "Lagoon Pool", "Family friendly · Shallow end", "assets/see.jpg"),
        (5, "Sunset Pool", "Romantic · Sunset views", "assets/see2.jpg"),
    ]
    .into_iter()
    .map(|(id, title, subtitle, image)| Place {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        image: image.to_string(),
        from_price: 129,
    })
    .collect()
}

pub fn travel_bundles() -> Vec<BundleCard> {
    [
        (
            1,
            "Bundle & Save",
            "Save up to $974 with package deals",
            "Explore bundles",
            "assets/travels.jpeg",
            "From flights + hotels",
        ),
        (
            2,
            "Price Drop Protection",
            "Get our best deals - we watch prices for you",
            "See how it works",
            "assets/travels4.jpeg",
            "Flexible cancellations",
        ),
        (
            3,
            "Member Perks",
            "Members save 10%+ on 100k+ hotels worldwide",
            "Join & save",
            "assets/travels3.jpeg",
            "Exclusive prices",
        ),
    ]
    .into_iter()
    .map(|(id, title, subtitle, cta, image, accent)| BundleCard {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        cta: cta.to_string(),
        image: image.to_string(),
        accent: accent.to_string(),
    })
    .collect()
}

pub fn hero_headlines() -> Vec<String> {
    vec![
        "Experience comfort like never before.".to_string(),
        "Fly better - premium service, flexible fares.".to_string(),
        "Travel in style and arrive refreshed.".to_string(),
    ]
}

fn owned(links: &[&str]) -> Vec<String> {
    links.iter().map(|l| l.to_string()).collect()
}

pub fn footer_links() -> FooterLinks {
    FooterLinks {
        company: owned(&["About", "Properties", "Partnerships", "Careers"]),
        explore: owned(&[
            "United States travel guide",
            "Domestic flights",
            "Hotels in United States",
            "Car rentals in United States",
        ]),
        help: owned(&["Support", "Your rights as a traveler", "FAQ"]),
    }
}
