use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{BookingError, BookingResult};

/// Booking tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Flights,
    Hotels,
    Cars,
    Packages,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Flights,
        Category::Hotels,
        Category::Cars,
        Category::Packages,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Flights => "Flights",
            Category::Hotels => "Hotels",
            Category::Cars => "Car Rentals",
            Category::Packages => "Packages",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Tab to the right, wrapping
    pub fn next(&self) -> Category {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping
    pub fn previous(&self) -> Category {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerMix {
    #[default]
    OneAdult,
    TwoAdults,
    TwoAdultsOneChild,
    TwoAdultsTwoChildren,
}

impl PassengerMix {
    pub const ALL: [PassengerMix; 4] = [
        PassengerMix::OneAdult,
        PassengerMix::TwoAdults,
        PassengerMix::TwoAdultsOneChild,
        PassengerMix::TwoAdultsTwoChildren,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PassengerMix::OneAdult => "1 Adult",
            PassengerMix::TwoAdults => "2 Adults",
            PassengerMix::TwoAdultsOneChild => "2 Adults, 1 Child",
            PassengerMix::TwoAdultsTwoChildren => "2 Adults, 2 Children",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    pub const ALL: [TravelClass; 4] = [
        TravelClass::Economy,
        TravelClass::PremiumEconomy,
        TravelClass::Business,
        TravelClass::First,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TravelClass::Economy => "Economy",
            TravelClass::PremiumEconomy => "Premium Economy",
            TravelClass::Business => "Business",
            TravelClass::First => "First Class",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// "More options" shared by every tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TravelOptions {
    pub passengers: PassengerMix,
    pub travel_class: TravelClass,
}

/// Completeness check a tab must pass before search is enabled.
pub trait SearchCriteria {
    fn is_complete(&self) -> bool;
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCriteria {
    pub origin: String,
    pub destination: String,
    pub depart_date: Option<NaiveDate>,
    /// Always `None` on one-way trips
    pub return_date: Option<NaiveDate>,
    pub round_trip: bool,
}

impl SearchCriteria for FlightCriteria {
    fn is_complete(&self) -> bool {
        filled(&self.origin) && filled(&self.destination) && self.depart_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelCriteria {
    pub destination: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl SearchCriteria for HotelCriteria {
    fn is_complete(&self) -> bool {
        filled(&self.destination) && self.check_in.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarCriteria {
    pub pickup_location: String,
    pub pickup_date: Option<NaiveDate>,
    pub dropoff_date: Option<NaiveDate>,
}

impl SearchCriteria for CarCriteria {
    fn is_complete(&self) -> bool {
        filled(&self.pickup_location) && self.pickup_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCriteria {
    pub destination: String,
    pub travel_date: Option<NaiveDate>,
    pub travelers: u32,
}

impl PackageCriteria {
    pub const MAX_TRAVELERS: u32 = 4;

    pub fn travelers_label(&self) -> String {
        match self.travelers {
            1 => "1 Traveler".to_string(),
            n if n >= Self::MAX_TRAVELERS => format!("{}+ Travelers", Self::MAX_TRAVELERS),
            n => format!("{} Travelers", n),
        }
    }
}

impl SearchCriteria for PackageCriteria {
    fn is_complete(&self) -> bool {
        filled(&self.destination) && self.travelers > 0
    }
}

/// The active tab's fields, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criteria {
    Flights(FlightCriteria),
    Hotels(HotelCriteria),
    Cars(CarCriteria),
    Packages(PackageCriteria),
}

impl Criteria {
    pub fn category(&self) -> Category {
        match self {
            Criteria::Flights(_) => Category::Flights,
            Criteria::Hotels(_) => Category::Hotels,
            Criteria::Cars(_) => Category::Cars,
            Criteria::Packages(_) => Category::Packages,
        }
    }
}

impl SearchCriteria for Criteria {
    fn is_complete(&self) -> bool {
        match self {
            Criteria::Flights(c) => c.is_complete(),
            Criteria::Hotels(c) => c.is_complete(),
            Criteria::Cars(c) => c.is_complete(),
            Criteria::Packages(c) => c.is_complete(),
        }
    }
}

/// A single field edit from the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Origin(String),
    Destination(String),
    /// Flight departure, or the package travel date on the packages tab
    DepartDate(Option<NaiveDate>),
    ReturnDate(Option<NaiveDate>),
    RoundTrip(bool),
    CheckIn(Option<NaiveDate>),
    CheckOut(Option<NaiveDate>),
    PickupLocation(String),
    PickupDate(Option<NaiveDate>),
    DropoffDate(Option<NaiveDate>),
    Travelers(u32),
    Passengers(PassengerMix),
    TravelClass(TravelClass),
}

impl FieldUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            FieldUpdate::Origin(_) => "origin",
            FieldUpdate::Destination(_) => "destination",
            FieldUpdate::DepartDate(_) => "depart_date",
            FieldUpdate::ReturnDate(_) => "return_date",
            FieldUpdate::RoundTrip(_) => "round_trip",
            FieldUpdate::CheckIn(_) => "check_in",
            FieldUpdate::CheckOut(_) => "check_out",
            FieldUpdate::PickupLocation(_) => "pickup_location",
            FieldUpdate::PickupDate(_) => "pickup_date",
            FieldUpdate::DropoffDate(_) => "dropoff_date",
            FieldUpdate::Travelers(_) => "travelers",
            FieldUpdate::Passengers(_) => "passengers",
            FieldUpdate::TravelClass(_) => "travel_class",
        }
    }

    /// Build an update from a raw form input (`name` as the input's name,
    /// dates as `YYYY-MM-DD`, empty string clears a date).
    pub fn from_input(name: &str, value: &str) -> BookingResult<Self> {
        let invalid = || BookingError::InvalidValue {
            field: name.to_string(),
            value: value.to_string(),
        };
        let date = || -> BookingResult<Option<NaiveDate>> {
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| invalid())
        };

        let update = match name {
            "origin" | "from" => FieldUpdate::Origin(value.to_string()),
            "destination" | "to" => FieldUpdate::Destination(value.to_string()),
            "depart_date" | "depart" => FieldUpdate::DepartDate(date()?),
            "return_date" | "ret" => FieldUpdate::ReturnDate(date()?),
            "round_trip" | "roundTrip" => {
                FieldUpdate::RoundTrip(value.parse::<bool>().map_err(|_| invalid())?)
            }
            "check_in" | "checkin" => FieldUpdate::CheckIn(date()?),
            "check_out" | "checkout" => FieldUpdate::CheckOut(date()?),
            "pickup_location" | "pickup" => FieldUpdate::PickupLocation(value.to_string()),
            "pickup_date" | "pickupDate" => FieldUpdate::PickupDate(date()?),
            "dropoff_date" | "returnDate" => FieldUpdate::DropoffDate(date()?),
            "travelers" => FieldUpdate::Travelers(value.parse::<u32>().map_err(|_| invalid())?),
            "passengers" => {
                FieldUpdate::Passengers(PassengerMix::from_label(value).ok_or_else(invalid)?)
            }
            "travel_class" | "travelClass" => {
                FieldUpdate::TravelClass(TravelClass::from_label(value).ok_or_else(invalid)?)
            }
            other => return Err(BookingError::UnknownField(other.to_string())),
        };

        Ok(update)
    }
}
