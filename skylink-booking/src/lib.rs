pub mod form;
pub mod models;
pub mod search;

pub use form::BookingForm;
pub use models::{
    CarCriteria, Category, Criteria, FieldUpdate, FlightCriteria, HotelCriteria, PackageCriteria,
    PassengerMix, SearchCriteria, TravelClass, TravelOptions,
};
pub use search::{BookingPanel, BookingView, SearchRequest, SearchStatus};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Search is disabled until the {0:?} form is complete")]
    SubmitDisabled(models::Category),
    #[error("A search is already running")]
    AlreadySearching,
    #[error("No search is running")]
    NotSearching,
    #[error("Field {field} does not belong to the {category:?} form")]
    FieldNotInCategory {
        field: &'static str,
        category: models::Category,
    },
    #[error("One-way trips have no return date")]
    ReturnDateOnOneWay,
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

pub type BookingResult<T> = Result<T, BookingError>;
