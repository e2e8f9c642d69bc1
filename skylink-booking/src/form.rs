use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::{
    CarCriteria, Category, Criteria, FieldUpdate, FlightCriteria, HotelCriteria, PackageCriteria,
    SearchCriteria, TravelOptions,
};
use crate::{BookingError, BookingResult};

/// Booking form state for one page session.
///
/// Every tab keeps its own fields; switching tabs only changes which set is
/// active. Date pairs are held in order: no start date before `today`, no
/// end date before its start date (or `today` while the start is unset).
#[derive(Debug, Clone, Serialize)]
pub struct BookingForm {
    today: NaiveDate,
    category: Category,
    flights: FlightCriteria,
    hotels: HotelCriteria,
    cars: CarCriteria,
    packages: PackageCriteria,
    options: TravelOptions,
}

impl BookingForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            category: Category::Flights,
            flights: FlightCriteria {
                origin: String::new(),
                destination: String::new(),
                depart_date: Some(today),
                return_date: None,
                round_trip: true,
            },
            hotels: HotelCriteria {
                destination: String::new(),
                check_in: Some(today),
                check_out: None,
            },
            cars: CarCriteria {
                pickup_location: String::new(),
                pickup_date: Some(today),
                dropoff_date: None,
            },
            packages: PackageCriteria {
                destination: String::new(),
                travel_date: Some(today),
                travelers: 1,
            },
            options: TravelOptions::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn flights(&self) -> &FlightCriteria {
        &self.flights
    }

    pub fn hotels(&self) -> &HotelCriteria {
        &self.hotels
    }

    pub fn cars(&self) -> &CarCriteria {
        &self.cars
    }

    pub fn packages(&self) -> &PackageCriteria {
        &self.packages
    }

    pub fn options(&self) -> TravelOptions {
        self.options
    }

    /// Switch tabs. Fields of the other tabs are left untouched.
    pub fn select_category(&mut self, category: Category) {
        if self.category != category {
            tracing::debug!(from = ?self.category, to = ?category, "booking tab changed");
        }
        self.category = category;
    }

    /// Snapshot of the active tab's fields
    pub fn criteria(&self) -> Criteria {
        match self.category {
            Category::Flights => Criteria::Flights(self.flights.clone()),
            Category::Hotels => Criteria::Hotels(self.hotels.clone()),
            Category::Cars => Criteria::Cars(self.cars.clone()),
            Category::Packages => Criteria::Packages(self.packages.clone()),
        }
    }

    pub fn is_submit_enabled(&self) -> bool {
        match self.category {
            Category::Flights => self.flights.is_complete(),
            Category::Hotels => self.hotels.is_complete(),
            Category::Cars => self.cars.is_complete(),
            Category::Packages => self.packages.is_complete(),
        }
    }

    pub fn min_return_date(&self) -> NaiveDate {
        self.flights.depart_date.unwrap_or(self.today)
    }

    pub fn min_check_out(&self) -> NaiveDate {
        self.hotels.check_in.unwrap_or(self.today)
    }

    pub fn min_dropoff_date(&self) -> NaiveDate {
        self.cars.pickup_date.unwrap_or(self.today)
    }

    /// Apply one edit to the active tab (options apply to every tab).
    pub fn set_field(&mut self, update: FieldUpdate) -> BookingResult<()> {
        let field = update.name();
        let today = self.today;
        let not_here = |category| BookingError::FieldNotInCategory { field, category };

        match (self.category, update) {
            (_, FieldUpdate::Passengers(mix)) => self.options.passengers = mix,
            (_, FieldUpdate::TravelClass(class)) => self.options.travel_class = class,

            (Category::Flights, FieldUpdate::Origin(v)) => self.flights.origin = v,
            (Category::Flights, FieldUpdate::Destination(v)) => self.flights.destination = v,
            (Category::Flights, FieldUpdate::DepartDate(d)) => {
                self.flights.depart_date = d.map(|d| d.max(today));
                let min = self.min_return_date();
                self.flights.return_date = self.flights.return_date.map(|r| r.max(min));
            }
            (Category::Flights, FieldUpdate::ReturnDate(d)) => {
                if !self.flights.round_trip && d.is_some() {
                    return Err(BookingError::ReturnDateOnOneWay);
                }
                let min = self.min_return_date();
                self.flights.return_date = d.map(|r| r.max(min));
            }
            (Category::Flights, FieldUpdate::RoundTrip(round_trip)) => {
                self.flights.round_trip = round_trip;
                if !round_trip {
                    self.flights.return_date = None;
                }
            }

            (Category::Hotels, FieldUpdate::Destination(v)) => self.hotels.destination = v,
            (Category::Hotels, FieldUpdate::CheckIn(d)) => {
                self.hotels.check_in = d.map(|d| d.max(today));
                let min = self.min_check_out();
                self.hotels.check_out = self.hotels.check_out.map(|c| c.max(min));
            }
            (Category::Hotels, FieldUpdate::CheckOut(d)) => {
                let min = self.min_check_out();
                self.hotels.check_out = d.map(|c| c.max(min));
            }

            (Category::Cars, FieldUpdate::PickupLocation(v)) => self.cars.pickup_location = v,
            (Category::Cars, FieldUpdate::PickupDate(d)) => {
                self.cars.pickup_date = d.map(|d| d.max(today));
                let min = self.min_dropoff_date();
                self.cars.dropoff_date = self.cars.dropoff_date.map(|r| r.max(min));
            }
            (Category::Cars, FieldUpdate::DropoffDate(d)) => {
                let min = self.min_dropoff_date();
                self.cars.dropoff_date = d.map(|r| r.max(min));
            }

            (Category::Packages, FieldUpdate::Destination(v)) => self.packages.destination = v,
            (Category::Packages, FieldUpdate::DepartDate(d)) => {
                self.packages.travel_date = d.map(|d| d.max(today));
            }
            (Category::Packages, FieldUpdate::Travelers(n)) => self.packages.travelers = n,

            (category, _) => return Err(not_here(category)),
        }

        Ok(())
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}
