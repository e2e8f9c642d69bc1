pub mod footer;
pub mod home;
pub mod loader;
pub mod navbar;
pub mod runtime;

pub use footer::{Newsletter, NewsletterError};
pub use home::{HomePage, HomeView};
pub use runtime::{PageCommand, PageEvent, PageHandle, PageRuntime, TimerFired};

use skylink_booking::BookingError;
use skylink_core::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Newsletter(#[from] NewsletterError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Unknown shop option: {0}")]
    UnknownOption(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
